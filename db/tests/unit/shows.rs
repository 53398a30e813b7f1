use crate::support::project::TestProject;
use chrono::{Duration, NaiveDate, Utc};
use diesel::Connection;
use encore_db::models::Show;
use encore_db::utils::errors::{DatabaseError, ErrorCode};
use uuid::Uuid;

#[test]
fn create() {
    let mut project = TestProject::new();
    let venue = project.create_venue().finish();
    let artist = project.create_artist().finish();
    // Whole seconds, so the value round-trips through the timestamp column
    let start_time = NaiveDate::from_ymd_opt(2030, 6, 1)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap();

    let show = Show::create(artist.id, venue.id, start_time)
        .commit(project.get_connection())
        .unwrap();

    assert_eq!(show.artist_id, artist.id);
    assert_eq!(show.venue_id, venue.id);
    assert_eq!(show.start_time, start_time);
}

#[test]
fn create_with_missing_artist_rolls_back() {
    let mut project = TestProject::new();
    let venue = project.create_venue().finish();
    let start_time = Utc::now().naive_utc() + Duration::days(3);

    let result = project
        .get_connection()
        .transaction::<Show, DatabaseError, _>(|conn| {
            Show::create(Uuid::new_v4(), venue.id, start_time).commit(conn)
        });

    let error = result.unwrap_err();
    assert_eq!(error.error_code, ErrorCode::ForeignKeyError);
    // Nothing was persisted
    assert!(Show::find_for_venue(venue.id, project.get_connection())
        .unwrap()
        .is_empty());
}

#[test]
fn create_with_missing_venue_rolls_back() {
    let mut project = TestProject::new();
    let artist = project.create_artist().finish();
    let start_time = Utc::now().naive_utc() + Duration::days(3);

    let result = project
        .get_connection()
        .transaction::<Show, DatabaseError, _>(|conn| {
            Show::create(artist.id, Uuid::new_v4(), start_time).commit(conn)
        });

    let error = result.unwrap_err();
    assert_eq!(error.error_code, ErrorCode::ForeignKeyError);
    assert!(Show::find_for_artist(artist.id, project.get_connection())
        .unwrap()
        .is_empty());
}

#[test]
fn all_for_listing_joins_artist_and_venue() {
    let mut project = TestProject::new();
    let venue = project.create_venue().finish();
    let artist = project.create_artist().finish();
    let show = project
        .create_show()
        .with_venue_id(venue.id)
        .with_artist_id(artist.id)
        .finish();

    let listing = Show::all_for_listing(project.get_connection()).unwrap();
    assert_eq!(listing.len(), 1);
    let (listed_show, listed_artist, listed_venue) = &listing[0];
    assert_eq!(listed_show.id, show.id);
    assert_eq!(listed_artist.id, artist.id);
    assert_eq!(listed_venue.id, venue.id);
}

#[test]
fn find_for_venue() {
    let mut project = TestProject::new();
    let venue = project.create_venue().finish();
    let other_venue = project.create_venue().finish();
    let show = project.create_show().with_venue_id(venue.id).finish();
    project.create_show().with_venue_id(other_venue.id).finish();

    let found = Show::find_for_venue(venue.id, project.get_connection()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0.id, show.id);
    assert_eq!(found[0].1.id, show.artist_id);
}

#[test]
fn find_for_artist() {
    let mut project = TestProject::new();
    let artist = project.create_artist().finish();
    let show = project.create_show().with_artist_id(artist.id).finish();
    project.create_show().finish();

    let found = Show::find_for_artist(artist.id, project.get_connection()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0.id, show.id);
    assert_eq!(found[0].1.id, show.venue_id);
}
