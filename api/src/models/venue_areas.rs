use crate::models::VenueListItem;
use encore_db::models::Venue;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct VenueAreaEntry {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueListItem>,
}

impl VenueAreaEntry {
    /// Groups venues into (city, state) areas. The city comparison ignores
    /// case, the state must match exactly, and the first venue seen for an
    /// area decides its displayed casing. Areas and their members keep the
    /// order the venues came in.
    pub fn group_by_area(venues: Vec<Venue>) -> Vec<VenueAreaEntry> {
        let mut key_order: Vec<(String, String)> = Vec::new();
        let mut groups: HashMap<(String, String), VenueAreaEntry> = HashMap::new();

        for venue in venues {
            let key = (venue.city.to_lowercase(), venue.state.clone());
            let entry = match groups.entry(key.clone()) {
                Entry::Vacant(vacant) => {
                    key_order.push(key);
                    vacant.insert(VenueAreaEntry {
                        city: venue.city.clone(),
                        state: venue.state.clone(),
                        venues: Vec::new(),
                    })
                }
                Entry::Occupied(occupied) => occupied.into_mut(),
            };
            entry.venues.push(VenueListItem {
                id: venue.id,
                name: venue.name,
            });
        }

        let mut areas = Vec::with_capacity(key_order.len());
        for key in key_order {
            if let Some(area) = groups.remove(&key) {
                areas.push(area);
            }
        }
        areas
    }
}
