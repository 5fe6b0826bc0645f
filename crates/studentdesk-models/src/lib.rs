//! # studentdesk Models
//!
//! Domain models and DTOs shared by the studentdesk crates.
//!
//! # Modules
//!
//! - [`auth`]: Login request and operator accounts
//! - [`ids`]: Client-generated identifiers
//! - [`sort`]: Sort configuration for the student list
//! - [`students`]: Student records, drafts and field names
//! - [`value_types`]: Validated domain primitives (enrollment numbers)
//!
//! # Example
//!
//! ```ignore
//! use studentdesk_models::{SortConfig, Student, StudentField};
//!
//! let sort = SortConfig::default();
//! assert_eq!(sort.field, StudentField::Name);
//! ```

pub mod auth;
pub mod ids;
pub mod sort;
pub mod students;
pub mod value_types;

pub use auth::{LoginRequest, LoginUser, UserRecord};
pub use ids::{StudentId, UserId};
pub use sort::{SortConfig, SortOrder};
pub use students::{Student, StudentDraft, StudentField};
pub use value_types::EnrollmentNumber;
