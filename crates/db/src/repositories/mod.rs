//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod checkin_repo;
pub mod contact_repo;
pub mod sos_event_repo;
pub mod user_repo;

pub use checkin_repo::CheckinRepo;
pub use contact_repo::ContactRepo;
pub use sos_event_repo::SosEventRepo;
pub use user_repo::UserRepo;
