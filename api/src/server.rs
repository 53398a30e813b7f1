use crate::config::Config;
use crate::db::Database;
use crate::routing;
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{error, http, web, web::Data, App, HttpRequest, HttpResponse, HttpServer};
use encore_db::utils::migration;
use log::Level::Warn;

// Must be valid JSON
const LOGGER_FORMAT: &'static str = r#"{"level": "INFO", "target": "encore::request", "remote_ip": "%a", "user_agent": "%{User-Agent}i", "request": "%r", "status_code": %s, "response_time": %D}"#;

pub struct AppState {
    pub config: Config,
    pub database: Database,
}

impl AppState {
    pub fn new(config: Config, database: Database) -> AppState {
        AppState { config, database }
    }
}

pub struct Server {
    pub config: Config,
}

impl Server {
    pub async fn start(config: Config) -> std::io::Result<()> {
        let bind_addr = format!("{}:{}", config.api_host, config.api_port);
        let database = Database::from_config(&config);

        check_migrations(&database);

        info!("Listening on {}", bind_addr);
        let conf = config.clone();

        HttpServer::new({
            move || {
                App::new()
                    .app_data(Data::new(AppState::new(conf.clone(), database.clone())))
                    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                    .wrap(build_cors(&conf))
                    .wrap(Logger::new(LOGGER_FORMAT))
                    .configure(routing::routes)
            }
        })
        .bind(bind_addr)?
        .run()
        .await
    }
}

fn check_migrations(database: &Database) {
    match database.get_connection() {
        Ok(connection) => {
            let mut connection = connection.get();
            match migration::has_pending_migrations(&mut connection) {
                Ok(true) => jlog!(
                    Warn,
                    "encore_api::server",
                    "Database has pending migrations",
                    {}
                ),
                Ok(false) => {}
                Err(e) => jlog!(
                    Warn,
                    "encore_api::server",
                    "Could not check for pending migrations",
                    { "error": e.to_string() }
                ),
            }
        }
        Err(e) => jlog!(Warn, "encore_api::server", "Could not reach the database", {
            "error": e.to_string()
        }),
    }
}

fn build_cors(config: &Config) -> Cors {
    let cors = match config.allowed_origins.as_ref() {
        "*" => Cors::default().allow_any_origin(),
        origin => Cors::default().allowed_origin(origin),
    };
    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
        .max_age(3600)
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let response = match &err {
        error::JsonPayloadError::Deserialize(json_error) => {
            HttpResponse::BadRequest().json(json!({ "error": json_error.to_string() }))
        }
        _ => HttpResponse::BadRequest().finish(),
    };
    error::InternalError::from_response(err, response).into()
}
