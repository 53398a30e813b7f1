use crate::models::*;
use crate::schema::{shows, venues};
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use chrono::NaiveDateTime;
use diesel::dsl;
use diesel::prelude::*;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Identifiable, Queryable, Serialize, Deserialize, PartialEq, Debug)]
#[diesel(table_name = venues)]
pub struct Venue {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Default, Deserialize, Insertable, PartialEq, Debug, Serialize, Validate)]
#[diesel(table_name = venues)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
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
    pub seeking_talent: bool,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub seeking_description: Option<String>,
}

#[derive(AsChangeset, Default, Deserialize, Validate)]
#[diesel(table_name = venues)]
pub struct VenueEditableAttributes {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub address: Option<String>,
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
    pub seeking_talent: Option<bool>,
    #[serde(default, deserialize_with = "double_option_deserialize_unless_blank")]
    pub seeking_description: Option<Option<String>>,
}

impl NewVenue {
    pub fn commit(&self, conn: &mut PgConnection) -> Result<Venue, DatabaseError> {
        self.validate()?;
        DatabaseError::wrap(
            ErrorCode::InsertError,
            "Could not create new venue",
            diesel::insert_into(venues::table)
                .values(self)
                .get_result(conn),
        )
    }
}

impl Venue {
    pub fn create(name: &str, city: &str, state: &str, address: &str) -> NewVenue {
        NewVenue {
            name: String::from(name),
            city: String::from(city),
            state: String::from(state),
            address: String::from(address),
            ..Default::default()
        }
    }

    pub fn find(id: Uuid, conn: &mut PgConnection) -> Result<Venue, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::QueryError,
            "Error loading venue",
            venues::table.find(id).first::<Venue>(conn),
        )
    }

    // Returned in the underlying query's order; the area grouping preserves it
    pub fn all(conn: &mut PgConnection) -> Result<Vec<Venue>, DatabaseError> {
        venues::table
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load all venues")
    }

    pub fn find_recently_created(
        limit: i64,
        conn: &mut PgConnection,
    ) -> Result<Vec<Venue>, DatabaseError> {
        venues::table
            .order_by(venues::created_at.desc())
            .limit(limit)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load recent venues")
    }

    pub fn search(
        query_filter: Option<String>,
        conn: &mut PgConnection,
    ) -> Result<Vec<Venue>, DatabaseError> {
        let query_like = match query_filter {
            Some(n) => format!("%{}%", n),
            None => "%".to_string(),
        };
        venues::table
            .filter(
                venues::name
                    .ilike(query_like.clone())
                    .or(venues::city.ilike(query_like.clone()))
                    .or(venues::genres.ilike(query_like)),
            )
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to search venues")
    }

    pub fn update(
        &self,
        mut attributes: VenueEditableAttributes,
        conn: &mut PgConnection,
    ) -> Result<Venue, DatabaseError> {
        attributes.validate()?;
        if let Some(city) = attributes.city {
            attributes.city = Some(capitalize_city(&city));
        }
        DatabaseError::wrap(
            ErrorCode::UpdateError,
            "Could not update venue",
            diesel::update(self)
                .set((attributes, venues::updated_at.eq(dsl::now)))
                .get_result(conn),
        )
    }

    // Shows have no lifecycle of their own, so they go down with the venue
    pub fn destroy(&self, conn: &mut PgConnection) -> Result<usize, DatabaseError> {
        diesel::delete(shows::table.filter(shows::venue_id.eq(self.id)))
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete shows for venue")?;
        diesel::delete(self)
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Failed to destroy venue record")
    }

    pub fn genre_list(&self) -> Vec<String> {
        split_genres(&self.genres)
    }
}

/// Venue edits store the city with a leading capital so that differently
/// cased submissions of the same city collapse into one area over time.
fn capitalize_city(city: &str) -> String {
    let trimmed = city.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
