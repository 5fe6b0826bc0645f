//! # studentdesk Auth
//!
//! Login checks and the operator session.
//!
//! - [`credentials`]: Validates a [`LoginRequest`] and checks it against the
//!   stored account
//! - [`session`]: The signed-in state; a single authenticated flag plus the
//!   operator's identity
//!
//! # Example
//!
//! ```ignore
//! use studentdesk_auth::{verify_credentials, Session};
//!
//! let user = verify_credentials(&request, directory_hit.as_ref())?;
//! let mut session = Session::default();
//! session.sign_in(user);
//! assert!(session.is_authenticated());
//! ```
//!
//! [`LoginRequest`]: studentdesk_models::LoginRequest

pub mod credentials;
pub mod session;

pub use credentials::{format_validation_errors, validate_request, verify_credentials};
pub use session::Session;
