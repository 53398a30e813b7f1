use crate::db::Connection;
use crate::errors::ApiError;
use crate::models::*;
use actix_web::web::{Json, Query};
use actix_web::HttpResponse;
use chrono::Utc;
use diesel::Connection as _;
use encore_db::models::*;
use log::Level::Info;

pub async fn index(
    (connection, parameters): (Connection, Query<PastOrUpcomingParameters>),
) -> Result<HttpResponse, ApiError> {
    let mut connection = connection.get();
    let listing = Show::all_for_listing(&mut connection)?;

    let mut entries = ShowListEntry::from_listing(listing, Utc::now().naive_utc());
    if let Some(past_or_upcoming) = parameters.past_or_upcoming {
        let keep_upcoming = past_or_upcoming == PastOrUpcoming::Upcoming;
        entries.retain(|entry| entry.is_upcoming == keep_upcoming);
    }
    Ok(HttpResponse::Ok().json(&entries))
}

pub async fn create(
    (connection, new_show): (Connection, Json<NewShow>),
) -> Result<HttpResponse, ApiError> {
    let mut connection = connection.get();
    let new_show = new_show.into_inner();
    let show = connection.transaction(|conn| new_show.commit(conn))?;

    jlog!(Info, "encore_api::shows", "Show listed", {
        "show_id": show.id,
        "artist_id": show.artist_id,
        "venue_id": show.venue_id
    });
    Ok(HttpResponse::Created().json(&show))
}
