pub use self::artist_profile::*;
pub use self::listing_items::*;
pub use self::past_or_upcoming_parameters::*;
pub use self::path_parameters::*;
pub use self::search_parameters::*;
pub use self::search_results::*;
pub use self::show_entry::*;
pub use self::venue_areas::*;
pub use self::venue_profile::*;

mod artist_profile;
mod listing_items;
mod past_or_upcoming_parameters;
mod path_parameters;
mod search_parameters;
mod search_results;
mod show_entry;
mod venue_areas;
mod venue_profile;

/// Start times render the way the listing forms collect them
pub const SHOW_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
