use crate::support::artist_builder::ArtistBuilder;
use crate::support::show_builder::ShowBuilder;
use crate::support::venue_builder::VenueBuilder;
use diesel::{Connection, PgConnection};
use dotenv::dotenv;
use encore_db::utils::migration;
use std::env;
use std::sync::Once;

static MIGRATIONS: Once = Once::new();

/// Opens a connection to the test database and keeps every test inside its
/// own never-committed transaction, so tests stay isolated from each other.
pub struct TestProject {
    connection: PgConnection,
}

#[allow(dead_code)]
impl TestProject {
    pub fn new() -> Self {
        dotenv().ok();
        let conn_str = env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be defined.");

        MIGRATIONS.call_once(|| {
            let mut connection = PgConnection::establish(&conn_str)
                .expect("Could not connect to test database");
            migration::run_pending_migrations(&mut connection)
                .expect("Could not run migrations on test database");
        });

        let mut connection =
            PgConnection::establish(&conn_str).expect("Could not connect to test database");
        connection
            .begin_test_transaction()
            .expect("Could not start testing transaction");
        TestProject { connection }
    }

    pub fn get_connection(&mut self) -> &mut PgConnection {
        &mut self.connection
    }

    pub fn create_venue(&mut self) -> VenueBuilder {
        VenueBuilder::new(&mut self.connection)
    }

    pub fn create_artist(&mut self) -> ArtistBuilder {
        ArtistBuilder::new(&mut self.connection)
    }

    pub fn create_show(&mut self) -> ShowBuilder {
        ShowBuilder::new(&mut self.connection)
    }
}
