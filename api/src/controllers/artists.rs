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
    let artists = Artist::all(&mut connection)?;

    let items: Vec<ArtistListItem> = artists
        .into_iter()
        .map(|artist| ArtistListItem {
            id: artist.id,
            name: artist.name,
        })
        .collect();
    Ok(HttpResponse::Ok().json(&items))
}

pub async fn search(
    (connection, parameters): (Connection, Query<SearchParameters>),
) -> Result<HttpResponse, ApiError> {
    let mut connection = connection.get();
    let artists = Artist::search(parameters.into_inner().q, &mut connection)?;

    Ok(HttpResponse::Ok().json(&SearchResults::from(artists)))
}

pub async fn show(
    (connection, parameters): (Connection, Path<PathParameters>),
) -> Result<HttpResponse, ApiError> {
    let mut connection = connection.get();
    let artist = Artist::find(parameters.id, &mut connection)?;
    let shows = Show::find_for_artist(artist.id, &mut connection)?;

    let profile = ArtistProfile::build(artist, shows, Utc::now().naive_utc());
    Ok(HttpResponse::Ok().json(&profile))
}

pub async fn create(
    (connection, new_artist): (Connection, Json<NewArtist>),
) -> Result<HttpResponse, ApiError> {
    let mut connection = connection.get();
    let new_artist = new_artist.into_inner();
    let artist = connection.transaction(|conn| new_artist.commit(conn))?;

    jlog!(Info, "encore_api::artists", "Artist listed", {
        "artist_id": artist.id,
        "name": artist.name
    });
    Ok(HttpResponse::Created().json(&artist))
}

pub async fn update(
    (connection, parameters, artist_parameters): (
        Connection,
        Path<PathParameters>,
        Json<ArtistEditableAttributes>,
    ),
) -> Result<HttpResponse, ApiError> {
    let mut connection = connection.get();
    let artist = Artist::find(parameters.id, &mut connection)?;

    let updated_artist =
        connection.transaction(|conn| artist.update(artist_parameters.into_inner(), conn))?;
    Ok(HttpResponse::Ok().json(&updated_artist))
}

pub async fn destroy(
    (connection, parameters): (Connection, Path<PathParameters>),
) -> Result<HttpResponse, ApiError> {
    let mut connection = connection.get();
    let artist = Artist::find(parameters.id, &mut connection)?;

    connection.transaction(|conn| artist.destroy(conn))?;
    jlog!(Info, "encore_api::artists", "Artist unlisted", {
        "artist_id": artist.id,
        "name": artist.name
    });
    Ok(HttpResponse::Ok().finish())
}
