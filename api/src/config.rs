use dotenv::dotenv;
use std::env;

#[derive(Clone, Debug, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

#[derive(Clone)]
pub struct Config {
    pub allowed_origins: String,
    pub app_name: String,
    pub api_host: String,
    pub api_port: String,
    pub database_url: String,
    pub database_pool_size: u32,
    pub environment: Environment,
}

const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
const APP_NAME: &str = "APP_NAME";
const API_HOST: &str = "API_HOST";
const API_PORT: &str = "API_PORT";
const DATABASE_URL: &str = "DATABASE_URL";
const TEST_DATABASE_URL: &str = "TEST_DATABASE_URL";
const DATABASE_POOL_SIZE: &str = "DATABASE_POOL_SIZE";
const ENVIRONMENT: &str = "ENVIRONMENT";

impl Config {
    pub fn new(environment: Environment) -> Self {
        dotenv().ok();

        let app_name = env::var(&APP_NAME).unwrap_or_else(|_| "Encore".to_string());

        let database_url = match environment {
            Environment::Test => env::var(&TEST_DATABASE_URL)
                .unwrap_or_else(|_| panic!("{} must be defined.", TEST_DATABASE_URL)),
            _ => env::var(&DATABASE_URL)
                .unwrap_or_else(|_| panic!("{} must be defined.", DATABASE_URL)),
        };

        let database_pool_size = env::var(&DATABASE_POOL_SIZE)
            .map(|s| {
                s.parse()
                    .expect("Not a valid integer for database pool size")
            })
            .unwrap_or(20);

        let allowed_origins = env::var(&ALLOWED_ORIGINS).unwrap_or_else(|_| "*".to_string());
        let api_host = env::var(&API_HOST).unwrap_or_else(|_| "127.0.0.1".to_string());
        let api_port = env::var(&API_PORT).unwrap_or_else(|_| "8088".to_string());

        Config {
            allowed_origins,
            app_name,
            api_host,
            api_port,
            database_url,
            database_pool_size,
            environment,
        }
    }

    pub fn parse_environment() -> Result<Environment, String> {
        let environment = env::var(&ENVIRONMENT).unwrap_or_else(|_| "development".to_string());
        match environment.to_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" => Ok(Environment::Production),
            value => Err(format!("Environment '{}' is not recognized", value)),
        }
    }
}
