pub use self::artists::*;
pub use self::enums::*;
pub use self::shows::*;
pub use self::venues::*;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

mod artists;
pub mod enums;
mod shows;
mod venues;

pub fn deserialize_unless_blank<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;
    if value.as_str().map_or(false, |v| !v.is_empty()) {
        Ok(T::deserialize(value).ok())
    } else {
        Ok(None)
    }
}

pub fn double_option_deserialize_unless_blank<'de, T, D>(
    deserializer: D,
) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;

    if value.is_null() {
        Ok(T::deserialize(Value::Null).ok())
    } else {
        if value.as_str().map_or(false, |v| !v.is_empty()) {
            Ok(T::deserialize(value).ok())
        } else {
            Ok(T::deserialize(Value::Null).ok())
        }
    }
}

/// Genres are stored the way the form submits them, as one comma-separated
/// string; splitting is purely a display concern.
pub fn split_genres(genres: &str) -> Vec<String> {
    genres
        .split(',')
        .map(|genre| genre.trim().to_string())
        .filter(|genre| !genre.is_empty())
        .collect()
}

#[test]
fn deserialize_unless_blank_properly_deserializes() {
    let venue_data = r#"{"name": "The Musical Hop"}"#;
    let venue: VenueEditableAttributes = serde_json::from_str(&venue_data).unwrap();
    assert_eq!(venue.name, Some("The Musical Hop".to_string()));
    assert_eq!(venue.city, None);
    assert_eq!(venue.state, None);
    assert_eq!(venue.address, None);

    let venue_data = r#"{"name": "The Musical Hop", "city": "", "state": null}"#;
    let venue: VenueEditableAttributes = serde_json::from_str(&venue_data).unwrap();
    assert_eq!(venue.city, None);
    assert_eq!(venue.state, None);
}

#[test]
fn double_option_deserialize_unless_blank_properly_deserializes() {
    let venue_data = r#"{"name": "The Musical Hop"}"#;
    let venue: VenueEditableAttributes = serde_json::from_str(&venue_data).unwrap();
    assert_eq!(venue.phone, None);

    let venue_data = r#"{"name": "The Musical Hop", "phone": null}"#;
    let venue: VenueEditableAttributes = serde_json::from_str(&venue_data).unwrap();
    assert_eq!(venue.phone, Some(None));

    let venue_data = r#"{"name": "The Musical Hop", "phone": ""}"#;
    let venue: VenueEditableAttributes = serde_json::from_str(&venue_data).unwrap();
    assert_eq!(venue.phone, Some(None));

    let venue_data = r#"{"name": "The Musical Hop", "phone": "123-123-1234"}"#;
    let venue: VenueEditableAttributes = serde_json::from_str(&venue_data).unwrap();
    assert_eq!(venue.phone, Some(Some("123-123-1234".to_string())));
}

#[test]
fn split_genres_trims_and_drops_empty_entries() {
    assert_eq!(
        split_genres("Jazz,Reggae, Swing"),
        vec!["Jazz", "Reggae", "Swing"]
    );
    assert_eq!(split_genres(""), Vec::<String>::new());
    assert_eq!(split_genres("Classical,"), vec!["Classical"]);
}
