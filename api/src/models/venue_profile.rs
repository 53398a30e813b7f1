use crate::models::SHOW_TIME_FORMAT;
use chrono::NaiveDateTime;
use encore_db::models::{Artist, PastOrUpcoming, Show, Venue};
use uuid::Uuid;

/// The venue detail page: the record itself plus its shows split into past
/// and upcoming against the clock captured at read time.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct VenueProfile {
    pub id: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<VenueShowEntry>,
    pub upcoming_shows: Vec<VenueShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct VenueShowEntry {
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl VenueProfile {
    pub fn build(venue: Venue, shows: Vec<(Show, Artist)>, now: NaiveDateTime) -> VenueProfile {
        let genres = venue.genre_list();
        let mut past_shows = Vec::new();
        let mut upcoming_shows = Vec::new();

        for (show, artist) in shows {
            let entry = VenueShowEntry {
                artist_id: artist.id,
                artist_name: artist.name,
                artist_image_link: artist.image_link,
                start_time: show.start_time.format(SHOW_TIME_FORMAT).to_string(),
            };
            match show.status(now) {
                PastOrUpcoming::Upcoming => upcoming_shows.push(entry),
                PastOrUpcoming::Past => past_shows.push(entry),
            }
        }

        VenueProfile {
            id: venue.id,
            name: venue.name,
            genres,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            image_link: venue.image_link,
            facebook_link: venue.facebook_link,
            website_link: venue.website_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
