#![deny(unreachable_patterns)]
#![deny(unknown_lints)]
#![deny(unused_variables)]
#![deny(unused_imports)]
// Unused results is more often than not an error
#![deny(unused_must_use)]
extern crate chrono;
extern crate diesel;
extern crate diesel_migrations;
extern crate log;
#[macro_use]
extern crate logging;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;
extern crate uuid;
extern crate validator;

pub mod models;
pub mod prelude;
pub mod schema;
pub mod utils;
