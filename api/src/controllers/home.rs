use crate::db::Connection;
use crate::errors::ApiError;
use actix_web::HttpResponse;
use encore_db::models::*;

const RECENT_LISTING_LIMIT: i64 = 10;

pub async fn index(connection: Connection) -> Result<HttpResponse, ApiError> {
    let mut connection = connection.get();
    let venues = Venue::find_recently_created(RECENT_LISTING_LIMIT, &mut connection)?;
    let artists = Artist::find_recently_created(RECENT_LISTING_LIMIT, &mut connection)?;

    Ok(HttpResponse::Ok().json(json!({
        "venues": venues,
        "artists": artists
    })))
}
