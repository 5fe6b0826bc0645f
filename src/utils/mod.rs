//! Shared utilities for the administration console.
//!
//! - [`errors`]: Mapping of collaborator failures onto [`AppError`](studentdesk_core::AppError)
//! - [`in_flight`]: Guard against saving the same record twice at once
//! - [`loading`]: Counted loading indicator
//! - [`notifications`]: Operator-facing notification queue

pub mod errors;
pub mod in_flight;
pub mod loading;
pub mod notifications;
