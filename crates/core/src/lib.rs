#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Core library for signup: a registration form with schema validation and a
//! dynamic list of technology entries.

pub mod config;
pub mod form;
pub mod ids;
pub mod inspect;
pub mod record;
pub mod schema;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
