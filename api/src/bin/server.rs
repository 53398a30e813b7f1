#[macro_use]
extern crate log;
#[macro_use]
extern crate logging;
#[macro_use]
extern crate serde_json;

use dotenv::dotenv;
use encore_api::config::Config;
use encore_api::server::Server;
use log::Level::Info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    logging::setup_logger();
    info!("Loading environment");
    dotenv().ok();

    let environment =
        Config::parse_environment().unwrap_or_else(|e| panic!("Environment is invalid: {}", e));
    let config = Config::new(environment);
    jlog!(Info, "encore_api::server", "Starting server", {
        "app_name": config.app_name
    });

    Server::start(config).await
}
