//! Seeding for the student data service.
//!
//! Records are generated in parallel with `rayon` and then posted one by
//! one, since the REST service has no bulk endpoint.

pub mod models;
pub mod students;
pub mod users;

pub use models::StudentSeedConfig;
pub use students::{clear_students, generate_students, seed_students};
pub use users::create_admin;
