use diesel::PgConnection;
use encore_db::models::Venue;
use rand::prelude::*;

pub struct VenueBuilder<'a> {
    name: String,
    city: String,
    state: String,
    address: String,
    genres: String,
    connection: &'a mut PgConnection,
}

#[allow(dead_code)]
impl<'a> VenueBuilder<'a> {
    pub fn new(connection: &'a mut PgConnection) -> Self {
        let x: u32 = random();

        VenueBuilder {
            name: format!("Venue {}", x),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: "1015 Folsom Street".into(),
            genres: "Rock n Roll".into(),
            connection,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = city.to_string();
        self
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = state.to_string();
        self
    }

    pub fn with_genres(mut self, genres: &str) -> Self {
        self.genres = genres.to_string();
        self
    }

    pub fn finish(self) -> Venue {
        let mut new_venue = Venue::create(&self.name, &self.city, &self.state, &self.address);
        new_venue.genres = self.genres;
        new_venue.commit(self.connection).unwrap()
    }
}
