//! Student records: the list pipeline and the add/edit form.
//!
//! - [`query`]: free-text matching
//! - [`sorter`]: field ordering
//! - [`validation`]: field and record validation
//! - [`controller`]: list state (filter, sort, paginate)
//! - [`form`]: add/edit orchestration
//! - [`service`]: calls to the data and media services

pub mod controller;
pub mod form;
pub mod query;
pub mod service;
pub mod sorter;
pub mod validation;

pub use controller::{ListView, StudentListController};
pub use form::{FormMode, StudentForm, SubmitOutcome};
pub use service::StudentService;
pub use validation::{ValidationResult, validate_field, validate_student, validate_student_at};
