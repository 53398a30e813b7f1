use crate::models::SHOW_TIME_FORMAT;
use chrono::NaiveDateTime;
use encore_db::models::{Artist, PastOrUpcoming, Show, Venue};
use uuid::Uuid;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct ShowListEntry {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
    pub is_upcoming: bool,
}

impl ShowListEntry {
    pub fn from_listing(
        listing: Vec<(Show, Artist, Venue)>,
        now: NaiveDateTime,
    ) -> Vec<ShowListEntry> {
        listing
            .into_iter()
            .map(|(show, artist, venue)| ShowListEntry {
                venue_id: venue.id,
                venue_name: venue.name,
                artist_id: artist.id,
                artist_name: artist.name,
                artist_image_link: artist.image_link,
                start_time: show.start_time.format(SHOW_TIME_FORMAT).to_string(),
                is_upcoming: show.status(now) == PastOrUpcoming::Upcoming,
            })
            .collect()
    }
}
