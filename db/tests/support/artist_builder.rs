use diesel::PgConnection;
use encore_db::models::Artist;
use rand::prelude::*;

pub struct ArtistBuilder<'a> {
    name: String,
    city: String,
    state: String,
    genres: String,
    connection: &'a mut PgConnection,
}

#[allow(dead_code)]
impl<'a> ArtistBuilder<'a> {
    pub fn new(connection: &'a mut PgConnection) -> Self {
        let x: u32 = random();

        ArtistBuilder {
            name: format!("Artist {}", x),
            city: "San Francisco".into(),
            state: "CA".into(),
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

    pub fn with_genres(mut self, genres: &str) -> Self {
        self.genres = genres.to_string();
        self
    }

    pub fn finish(self) -> Artist {
        let mut new_artist = Artist::create(&self.name, &self.city, &self.state);
        new_artist.genres = self.genres;
        new_artist.commit(self.connection).unwrap()
    }
}
