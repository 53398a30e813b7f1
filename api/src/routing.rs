use crate::controllers::*;
use actix_web::{http::header, web, HttpResponse};

pub fn routes(app: &mut web::ServiceConfig) {
    app.service(
        web::resource("/status").route(web::get().to(|| async { HttpResponse::Ok().finish() })),
    )
    .service(web::resource("/venues/search").route(web::get().to(venues::search)))
    .service(
        web::resource("/venues/{id}")
            .route(web::get().to(venues::show))
            .route(web::put().to(venues::update))
            .route(web::delete().to(venues::destroy)),
    )
    .service(
        web::resource("/venues")
            .route(web::get().to(venues::index))
            .route(web::post().to(venues::create)),
    )
    .service(web::resource("/artists/search").route(web::get().to(artists::search)))
    .service(
        web::resource("/artists/{id}")
            .route(web::get().to(artists::show))
            .route(web::put().to(artists::update))
            .route(web::delete().to(artists::destroy)),
    )
    .service(
        web::resource("/artists")
            .route(web::get().to(artists::index))
            .route(web::post().to(artists::create)),
    )
    .service(
        web::resource("/shows")
            .route(web::get().to(shows::index))
            .route(web::post().to(shows::create)),
    )
    .service(web::resource("/").route(web::get().to(home::index)))
    .default_service(web::route().to(|| async {
        HttpResponse::NotFound()
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .body(json!({"error": "Not found"}).to_string())
    }));
}
