use crate::support::artist_builder::ArtistBuilder;
use crate::support::venue_builder::VenueBuilder;
use chrono::{Duration, NaiveDateTime, Utc};
use diesel::PgConnection;
use encore_db::models::Show;
use uuid::Uuid;

pub struct ShowBuilder<'a> {
    artist_id: Option<Uuid>,
    venue_id: Option<Uuid>,
    start_time: NaiveDateTime,
    connection: &'a mut PgConnection,
}

#[allow(dead_code)]
impl<'a> ShowBuilder<'a> {
    pub fn new(connection: &'a mut PgConnection) -> Self {
        ShowBuilder {
            artist_id: None,
            venue_id: None,
            start_time: Utc::now().naive_utc() + Duration::days(7),
            connection,
        }
    }

    pub fn with_artist_id(mut self, artist_id: Uuid) -> Self {
        self.artist_id = Some(artist_id);
        self
    }

    pub fn with_venue_id(mut self, venue_id: Uuid) -> Self {
        self.venue_id = Some(venue_id);
        self
    }

    pub fn with_start_time(mut self, start_time: NaiveDateTime) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn finish(self) -> Show {
        let artist_id = match self.artist_id {
            Some(id) => id,
            None => ArtistBuilder::new(&mut *self.connection).finish().id,
        };
        let venue_id = match self.venue_id {
            Some(id) => id,
            None => VenueBuilder::new(&mut *self.connection).finish().id,
        };
        Show::create(artist_id, venue_id, self.start_time)
            .commit(self.connection)
            .unwrap()
    }
}
