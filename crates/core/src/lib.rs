//! Domain logic for the lifeline personal-safety backend.
//!
//! Pure types and rules only -- no HTTP, no database. The api and db crates
//! depend on this one, never the other way around.

pub mod checkin;
pub mod error;
pub mod geo;
pub mod types;
