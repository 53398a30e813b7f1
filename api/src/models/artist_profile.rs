use crate::models::SHOW_TIME_FORMAT;
use chrono::NaiveDateTime;
use encore_db::models::{Artist, PastOrUpcoming, Show, Venue};
use uuid::Uuid;

/// The artist detail page, the mirror image of [crate::models::VenueProfile]:
/// shows are projected onto the venue they happen at.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct ArtistProfile {
    pub id: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<ArtistShowEntry>,
    pub upcoming_shows: Vec<ArtistShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct ArtistShowEntry {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

impl ArtistProfile {
    pub fn build(artist: Artist, shows: Vec<(Show, Venue)>, now: NaiveDateTime) -> ArtistProfile {
        let genres = artist.genre_list();
        let mut past_shows = Vec::new();
        let mut upcoming_shows = Vec::new();

        for (show, venue) in shows {
            let entry = ArtistShowEntry {
                venue_id: venue.id,
                venue_name: venue.name,
                venue_image_link: venue.image_link,
                start_time: show.start_time.format(SHOW_TIME_FORMAT).to_string(),
            };
            match show.status(now) {
                PastOrUpcoming::Upcoming => upcoming_shows.push(entry),
                PastOrUpcoming::Past => past_shows.push(entry),
            }
        }

        ArtistProfile {
            id: artist.id,
            name: artist.name,
            genres,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            image_link: artist.image_link,
            facebook_link: artist.facebook_link,
            website_link: artist.website_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
