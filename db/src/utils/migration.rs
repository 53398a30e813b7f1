use crate::utils::errors::{DatabaseError, ErrorCode};
use diesel::PgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Applies any migrations the database has not seen yet.
pub fn run_pending_migrations(conn: &mut PgConnection) -> Result<(), DatabaseError> {
    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|e| {
            DatabaseError::new(
                ErrorCode::InternalError,
                Some(format!("Could not run migrations, {}", e)),
            )
        })
}

pub fn has_pending_migrations(conn: &mut PgConnection) -> Result<bool, DatabaseError> {
    conn.has_pending_migration(MIGRATIONS).map_err(|e| {
        DatabaseError::new(
            ErrorCode::InternalError,
            Some(format!("Could not check migration state, {}", e)),
        )
    })
}
