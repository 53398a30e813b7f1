use crate::models::*;
use crate::schema::{artists, shows};
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use chrono::NaiveDateTime;
use diesel::dsl;
use diesel::prelude::*;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Identifiable, Queryable, Serialize, Deserialize, PartialEq, Debug)]
#[diesel(table_name = artists)]
pub struct Artist {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Default, Deserialize, Insertable, PartialEq, Debug, Serialize, Validate)]
#[diesel(table_name = artists)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: String,
    #[validate(url(message = "Image link is invalid"))]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub image_link: Option<String>,
    #[validate(url(message = "Facebook link is invalid"))]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub facebook_link: Option<String>,
    #[validate(url(message = "Website link is invalid"))]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub website_link: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub seeking_description: Option<String>,
}

#[derive(AsChangeset, Default, Deserialize, Validate)]
#[diesel(table_name = artists)]
pub struct ArtistEditableAttributes {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "double_option_deserialize_unless_blank")]
    pub phone: Option<Option<String>>,
    pub genres: Option<String>,
    #[validate(url(message = "Image link is invalid"))]
    #[serde(default, deserialize_with = "double_option_deserialize_unless_blank")]
    pub image_link: Option<Option<String>>,
    #[validate(url(message = "Facebook link is invalid"))]
    #[serde(default, deserialize_with = "double_option_deserialize_unless_blank")]
    pub facebook_link: Option<Option<String>>,
    #[validate(url(message = "Website link is invalid"))]
    #[serde(default, deserialize_with = "double_option_deserialize_unless_blank")]
    pub website_link: Option<Option<String>>,
    pub seeking_venue: Option<bool>,
    #[serde(default, deserialize_with = "double_option_deserialize_unless_blank")]
    pub seeking_description: Option<Option<String>>,
}

impl NewArtist {
    pub fn commit(&self, conn: &mut PgConnection) -> Result<Artist, DatabaseError> {
        self.validate()?;
        DatabaseError::wrap(
            ErrorCode::InsertError,
            "Could not create new artist",
            diesel::insert_into(artists::table)
                .values(self)
                .get_result(conn),
        )
    }
}

impl Artist {
    pub fn create(name: &str, city: &str, state: &str) -> NewArtist {
        NewArtist {
            name: String::from(name),
            city: String::from(city),
            state: String::from(state),
            ..Default::default()
        }
    }

    pub fn find(id: Uuid, conn: &mut PgConnection) -> Result<Artist, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::QueryError,
            "Error loading artist",
            artists::table.find(id).first::<Artist>(conn),
        )
    }

    pub fn all(conn: &mut PgConnection) -> Result<Vec<Artist>, DatabaseError> {
        artists::table
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load all artists")
    }

    pub fn find_recently_created(
        limit: i64,
        conn: &mut PgConnection,
    ) -> Result<Vec<Artist>, DatabaseError> {
        artists::table
            .order_by(artists::created_at.desc())
            .limit(limit)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load recent artists")
    }

    // Unlike venues, artist searches do not match on the city column
    pub fn search(
        query_filter: Option<String>,
        conn: &mut PgConnection,
    ) -> Result<Vec<Artist>, DatabaseError> {
        let query_like = match query_filter {
            Some(n) => format!("%{}%", n),
            None => "%".to_string(),
        };
        artists::table
            .filter(
                artists::name
                    .ilike(query_like.clone())
                    .or(artists::genres.ilike(query_like)),
            )
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to search artists")
    }

    pub fn update(
        &self,
        attributes: ArtistEditableAttributes,
        conn: &mut PgConnection,
    ) -> Result<Artist, DatabaseError> {
        attributes.validate()?;
        DatabaseError::wrap(
            ErrorCode::UpdateError,
            "Error updating artist",
            diesel::update(self)
                .set((attributes, artists::updated_at.eq(dsl::now)))
                .get_result(conn),
        )
    }

    pub fn destroy(&self, conn: &mut PgConnection) -> Result<usize, DatabaseError> {
        diesel::delete(shows::table.filter(shows::artist_id.eq(self.id)))
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete shows for artist")?;
        diesel::delete(self)
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Failed to destroy artist record")
    }

    pub fn genre_list(&self) -> Vec<String> {
        split_genres(&self.genres)
    }
}
