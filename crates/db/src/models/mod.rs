//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A response struct (or serde attributes on the entity) producing the
//!   camelCase wire shape
//! - Create/update DTOs for inserts and patches

pub mod checkin;
pub mod contact;
pub mod sos_event;
pub mod user;
