use crate::config::Config;
use crate::db::Connection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use r2d2::Error as R2D2Error;

type R2D2Pool = Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct Database {
    connection_pool: R2D2Pool,
}

impl Database {
    pub fn from_config(config: &Config) -> Database {
        Database {
            connection_pool: create_connection_pool(config),
        }
    }

    pub fn get_connection(&self) -> Result<Connection, R2D2Error> {
        let connection = self.connection_pool.get()?;
        Ok(connection.into())
    }
}

fn create_connection_pool(config: &Config) -> R2D2Pool {
    let connection_manager = ConnectionManager::new(config.database_url.clone());

    Pool::builder()
        .max_size(config.database_pool_size)
        .build(connection_manager)
        .expect("Failed to create connection pool.")
}
