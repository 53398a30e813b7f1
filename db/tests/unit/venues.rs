use crate::support::project::TestProject;
use chrono::NaiveDate;
use diesel::prelude::*;
use encore_db::models::{Venue, VenueEditableAttributes};
use encore_db::schema::venues;
use encore_db::utils::errors::ErrorCode;
use uuid::Uuid;

#[test]
fn create() {
    let mut project = TestProject::new();
    let venue = Venue::create("The Musical Hop", "San Francisco", "CA", "1015 Folsom Street")
        .commit(project.get_connection())
        .unwrap();

    assert_eq!(venue.name, "The Musical Hop");
    assert_eq!(venue.city, "San Francisco");
    assert_eq!(venue.state, "CA");
    assert_eq!(venue.address, "1015 Folsom Street");
    assert!(!venue.seeking_talent);
    assert_eq!(venue.id.to_string().is_empty(), false);
}

#[test]
fn create_validates_links() {
    let mut project = TestProject::new();
    let mut new_venue = Venue::create("Bad Links", "San Francisco", "CA", "1 Main Street");
    new_venue.website_link = Some("not-a-url".to_string());

    let error = new_venue.commit(project.get_connection()).unwrap_err();
    match error.error_code {
        ErrorCode::ValidationError { errors } => {
            assert!(errors.contains_key("website_link"));
        }
        _ => panic!("Expected validation error"),
    }
}

#[test]
fn find() {
    let mut project = TestProject::new();
    let venue = project.create_venue().finish();

    let found_venue = Venue::find(venue.id, project.get_connection()).unwrap();
    assert_eq!(venue, found_venue);
}

#[test]
fn find_missing_venue_is_no_results() {
    let mut project = TestProject::new();
    let error = Venue::find(Uuid::new_v4(), project.get_connection()).unwrap_err();
    assert_eq!(error.error_code, ErrorCode::NoResults);
}

#[test]
fn all() {
    let mut project = TestProject::new();
    let venue = project.create_venue().finish();
    let venue2 = project.create_venue().finish();

    let found_venues = Venue::all(project.get_connection()).unwrap();
    assert_eq!(found_venues, vec![venue, venue2]);
}

#[test]
fn find_recently_created() {
    let mut project = TestProject::new();
    let old_venue = project.create_venue().finish();
    let venue = project.create_venue().finish();
    let venue2 = project.create_venue().finish();

    // Rows created inside one transaction share a created_at; backdate one so
    // the ordering is observable
    let backdated = NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    diesel::update(venues::table.find(old_venue.id))
        .set(venues::created_at.eq(backdated))
        .execute(project.get_connection())
        .unwrap();

    let found_venues = Venue::find_recently_created(2, project.get_connection()).unwrap();
    assert_eq!(found_venues.len(), 2);
    assert!(found_venues.iter().all(|v| v.id != old_venue.id));
    assert!(found_venues.iter().any(|v| v.id == venue.id));
    assert!(found_venues.iter().any(|v| v.id == venue2.id));
}

#[test]
fn update() {
    let mut project = TestProject::new();
    let venue = project.create_venue().finish();

    let attributes = VenueEditableAttributes {
        name: Some("The Dueling Pianos Bar".to_string()),
        phone: Some(Some("415-000-1234".to_string())),
        seeking_talent: Some(true),
        ..Default::default()
    };
    let updated_venue = venue.update(attributes, project.get_connection()).unwrap();

    assert_eq!(updated_venue.name, "The Dueling Pianos Bar");
    assert_eq!(updated_venue.phone, Some("415-000-1234".to_string()));
    assert!(updated_venue.seeking_talent);
    assert_eq!(updated_venue.city, venue.city);
}

#[test]
fn update_capitalizes_city() {
    let mut project = TestProject::new();
    let venue = project.create_venue().finish();

    let attributes = VenueEditableAttributes {
        city: Some("sAN fRANCISCO".to_string()),
        ..Default::default()
    };
    let updated_venue = venue.update(attributes, project.get_connection()).unwrap();
    assert_eq!(updated_venue.city, "San francisco");
}

#[test]
fn update_validates_links() {
    let mut project = TestProject::new();
    let venue = project.create_venue().finish();

    let attributes = VenueEditableAttributes {
        image_link: Some(Some("not-a-url".to_string())),
        ..Default::default()
    };
    let error = venue
        .update(attributes, project.get_connection())
        .unwrap_err();
    match error.error_code {
        ErrorCode::ValidationError { errors } => {
            assert!(errors.contains_key("image_link"));
        }
        _ => panic!("Expected validation error"),
    }
}

#[test]
fn destroy_cascades_to_shows_and_keeps_artists() {
    use encore_db::models::{Artist, Show};

    let mut project = TestProject::new();
    let venue = project.create_venue().finish();
    let artist = project.create_artist().finish();
    project
        .create_show()
        .with_venue_id(venue.id)
        .with_artist_id(artist.id)
        .finish();

    venue.destroy(project.get_connection()).unwrap();

    let error = Venue::find(venue.id, project.get_connection()).unwrap_err();
    assert_eq!(error.error_code, ErrorCode::NoResults);
    assert!(Show::find_for_venue(venue.id, project.get_connection())
        .unwrap()
        .is_empty());
    // The artist survives its venue
    assert_eq!(
        Artist::find(artist.id, project.get_connection()).unwrap().id,
        artist.id
    );
}

#[test]
fn search_matches_name_city_and_genres() {
    let mut project = TestProject::new();
    let hop = project
        .create_venue()
        .with_name("The Musical Hop")
        .with_city("San Francisco")
        .with_genres("Jazz,Reggae,Swing,Classical,Folk")
        .finish();
    let park_square = project
        .create_venue()
        .with_name("Park Square Live Music & Coffee")
        .with_city("San Francisco")
        .with_genres("Rock n Roll,Jazz,Classical,Folk")
        .finish();
    let dueling_pianos = project
        .create_venue()
        .with_name("The Dueling Pianos Bar")
        .with_city("New York")
        .with_genres("Classical,R&B,Hip-Hop")
        .finish();

    // Case-insensitive substring on name
    let found = Venue::search(Some("Hop".to_string()), project.get_connection()).unwrap();
    let found_ids: Vec<_> = found.iter().map(|v| v.id).collect();
    assert!(found_ids.contains(&hop.id));
    // "Hip-Hop" matches through the genre string
    assert!(found_ids.contains(&dueling_pianos.id));
    assert!(!found_ids.contains(&park_square.id));

    let found = Venue::search(Some("music".to_string()), project.get_connection()).unwrap();
    let found_ids: Vec<_> = found.iter().map(|v| v.id).collect();
    assert!(found_ids.contains(&hop.id));
    assert!(found_ids.contains(&park_square.id));
    assert!(!found_ids.contains(&dueling_pianos.id));

    // City matches too
    let found = Venue::search(Some("new york".to_string()), project.get_connection()).unwrap();
    let found_ids: Vec<_> = found.iter().map(|v| v.id).collect();
    assert_eq!(found_ids, vec![dueling_pianos.id]);
}

#[test]
fn search_without_term_returns_everything() {
    let mut project = TestProject::new();
    let venue = project.create_venue().finish();
    let venue2 = project.create_venue().finish();

    let found = Venue::search(None, project.get_connection()).unwrap();
    assert_eq!(found, vec![venue, venue2]);
}
