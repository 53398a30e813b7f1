#![deny(unreachable_patterns)]
#![deny(unknown_lints)]
#![deny(unused_variables)]
#![deny(unused_imports)]
// Unused results is more often than not an error
#![deny(unused_must_use)]
extern crate actix_cors;
extern crate actix_web;
extern crate chrono;
extern crate diesel;
extern crate dotenv;
extern crate encore_db;
#[macro_use]
extern crate log;
#[macro_use]
extern crate logging;
extern crate r2d2;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;
extern crate uuid;

pub mod config;
pub mod controllers;
pub mod db;
pub mod errors;
pub mod models;
pub mod routing;
pub mod server;
