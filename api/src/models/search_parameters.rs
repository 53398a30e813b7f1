#[derive(Deserialize)]
pub struct SearchParameters {
    pub q: Option<String>,
}
