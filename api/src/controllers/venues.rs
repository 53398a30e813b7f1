use crate::db::Connection;
use crate::errors::ApiError;
use crate::models::*;
use actix_web::web::{Json, Path, Query};
use actix_web::HttpResponse;
use chrono::Utc;
use diesel::Connection as _;
use encore_db::models::*;
use log::Level::Info;

pub async fn index(connection: Connection) -> Result<HttpResponse, ApiError> {
    let mut connection = connection.get();
    let venues = Venue::all(&mut connection)?;

    Ok(HttpResponse::Ok().json(&VenueAreaEntry::group_by_area(venues)))
}

pub async fn search(
    (connection, parameters): (Connection, Query<SearchParameters>),
) -> Result<HttpResponse, ApiError> {
    let mut connection = connection.get();
    let venues = Venue::search(parameters.into_inner().q, &mut connection)?;

    Ok(HttpResponse::Ok().json(&SearchResults::from(venues)))
}

pub async fn show(
    (connection, parameters): (Connection, Path<PathParameters>),
) -> Result<HttpResponse, ApiError> {
    let mut connection = connection.get();
    let venue = Venue::find(parameters.id, &mut connection)?;
    let shows = Show::find_for_venue(venue.id, &mut connection)?;

    let profile = VenueProfile::build(venue, shows, Utc::now().naive_utc());
    Ok(HttpResponse::Ok().json(&profile))
}

pub async fn create(
    (connection, new_venue): (Connection, Json<NewVenue>),
) -> Result<HttpResponse, ApiError> {
    let mut connection = connection.get();
    let new_venue = new_venue.into_inner();
    let venue = connection.transaction(|conn| new_venue.commit(conn))?;

    jlog!(Info, "encore_api::venues", "Venue listed", {
        "venue_id": venue.id,
        "name": venue.name
    });
    Ok(HttpResponse::Created().json(&venue))
}

pub async fn update(
    (connection, parameters, venue_parameters): (
        Connection,
        Path<PathParameters>,
        Json<VenueEditableAttributes>,
    ),
) -> Result<HttpResponse, ApiError> {
    let mut connection = connection.get();
    let venue = Venue::find(parameters.id, &mut connection)?;

    let updated_venue =
        connection.transaction(|conn| venue.update(venue_parameters.into_inner(), conn))?;
    Ok(HttpResponse::Ok().json(&updated_venue))
}

pub async fn destroy(
    (connection, parameters): (Connection, Path<PathParameters>),
) -> Result<HttpResponse, ApiError> {
    let mut connection = connection.get();
    let venue = Venue::find(parameters.id, &mut connection)?;

    connection.transaction(|conn| venue.destroy(conn))?;
    jlog!(Info, "encore_api::venues", "Venue unlisted", {
        "venue_id": venue.id,
        "name": venue.name
    });
    Ok(HttpResponse::Ok().finish())
}
