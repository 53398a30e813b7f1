use encore_db::models::{Artist, Venue};
use uuid::Uuid;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchResultEntry>,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct SearchResultEntry {
    pub id: Uuid,
    pub name: String,
    pub num_upcoming_shows: i64,
}

impl From<Vec<Venue>> for SearchResults {
    fn from(venues: Vec<Venue>) -> Self {
        let data: Vec<SearchResultEntry> = venues
            .into_iter()
            .map(|venue| SearchResultEntry {
                id: venue.id,
                name: venue.name,
                // TODO: count the venue's upcoming shows here instead of defaulting
                num_upcoming_shows: 0,
            })
            .collect();
        SearchResults {
            count: data.len(),
            data,
        }
    }
}

impl From<Vec<Artist>> for SearchResults {
    fn from(artists: Vec<Artist>) -> Self {
        let data: Vec<SearchResultEntry> = artists
            .into_iter()
            .map(|artist| SearchResultEntry {
                id: artist.id,
                name: artist.name,
                num_upcoming_shows: 0,
            })
            .collect();
        SearchResults {
            count: data.len(),
            data,
        }
    }
}
