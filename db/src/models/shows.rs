use crate::models::*;
use crate::schema::{artists, shows, venues};
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use uuid::Uuid;

/// A booking joining one artist and one venue at a start time. Shows are
/// created through the listing form and removed only when their artist or
/// venue is destroyed; there is no update path.
#[derive(Associations, Clone, Identifiable, Queryable, Serialize, Deserialize, PartialEq, Debug)]
#[diesel(belongs_to(Artist))]
#[diesel(belongs_to(Venue))]
#[diesel(table_name = shows)]
pub struct Show {
    pub id: Uuid,
    pub artist_id: Uuid,
    pub venue_id: Uuid,
    pub start_time: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Deserialize, Insertable, Serialize)]
#[diesel(table_name = shows)]
pub struct NewShow {
    pub artist_id: Uuid,
    pub venue_id: Uuid,
    pub start_time: NaiveDateTime,
}

impl NewShow {
    /// Fails with `ErrorCode::ForeignKeyError` when the artist or venue does
    /// not exist; the caller's transaction rolls back and no row is kept.
    pub fn commit(&self, conn: &mut PgConnection) -> Result<Show, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::InsertError,
            "Could not create new show",
            diesel::insert_into(shows::table)
                .values(self)
                .get_result(conn),
        )
    }
}

impl Show {
    pub fn create(artist_id: Uuid, venue_id: Uuid, start_time: NaiveDateTime) -> NewShow {
        NewShow {
            artist_id,
            venue_id,
            start_time,
        }
    }

    pub fn all_for_listing(
        conn: &mut PgConnection,
    ) -> Result<Vec<(Show, Artist, Venue)>, DatabaseError> {
        shows::table
            .inner_join(artists::table)
            .inner_join(venues::table)
            .select((
                shows::all_columns,
                artists::all_columns,
                venues::all_columns,
            ))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load shows")
    }

    pub fn find_for_venue(
        venue_id: Uuid,
        conn: &mut PgConnection,
    ) -> Result<Vec<(Show, Artist)>, DatabaseError> {
        shows::table
            .inner_join(artists::table)
            .filter(shows::venue_id.eq(venue_id))
            .select((shows::all_columns, artists::all_columns))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load shows for venue")
    }

    pub fn find_for_artist(
        artist_id: Uuid,
        conn: &mut PgConnection,
    ) -> Result<Vec<(Show, Venue)>, DatabaseError> {
        shows::table
            .inner_join(venues::table)
            .filter(shows::artist_id.eq(artist_id))
            .select((shows::all_columns, venues::all_columns))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load shows for artist")
    }

    /// Classification happens at read time against the caller's clock; a show
    /// starting exactly now counts as past.
    pub fn status(&self, now: NaiveDateTime) -> PastOrUpcoming {
        if self.start_time > now {
            PastOrUpcoming::Upcoming
        } else {
            PastOrUpcoming::Past
        }
    }
}
