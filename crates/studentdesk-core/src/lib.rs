//! # studentdesk Core
//!
//! Core types, errors, and utilities shared by every studentdesk crate.
//!
//! - [`errors`]: Application error type carrying an [`ErrorKind`]
//! - [`pagination`]: Page arithmetic, slicing and page-button layout
//! - [`dates`]: Parsing and formatting of admission-date display strings
//! - [`password`]: Password hashing and verification
//! - [`serde`]: Custom serde helpers
//!
//! # Example
//!
//! ```ignore
//! use studentdesk_core::pagination::{page_window, total_pages, PageItem};
//!
//! let pages = total_pages(12, 5);
//! assert_eq!(pages, 3);
//!
//! let buttons = page_window(5, 10);
//! assert_eq!(buttons[1], PageItem::Ellipsis);
//! ```

pub mod dates;
pub mod errors;
pub mod pagination;
pub mod password;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind};
pub use pagination::{PageItem, PaginationState};
pub use password::{hash_password, verify_password};
