//! # studentdesk
//!
//! Terminal administration console for student records. Records live in an
//! external REST data service; avatars go to a hosted media-upload service;
//! operator accounts come from the same data service.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # clap entry point, interactive shell, rendering
//! ├── config/           # AppConfig aggregating studentdesk-config
//! ├── modules/
//! │   ├── auth/        # Login form and sign-in/out
//! │   └── students/    # List pipeline, validation, add/edit form
//! ├── utils/           # Notifications, loading tracker, error mapping
//! ├── logging.rs       # tracing subscriber setup
//! └── state.rs         # AppState passed to every command
//! ```
//!
//! ## List pipeline
//!
//! The displayed page is always `slice(sort(filter(records)))`:
//!
//! 1. [`modules::students::query`] keeps records whose name, email, phone,
//!    enrollment number or admission date contains the query
//! 2. [`modules::students::sorter`] orders them by one field
//! 3. [`studentdesk_core::pagination`] cuts out the current page and lays
//!    out the page buttons (`1 … 4 5 6 … 10`)
//!
//! [`modules::students::StudentListController`] holds the three stages and
//! reruns only what an event invalidates.
//!
//! ## Validation
//!
//! [`modules::students::validation`] checks drafts field by field and as a
//! whole record, including email and enrollment-number uniqueness against
//! the loaded collection. Results are data, never errors.
//!
//! ## Quick Start
//!
//! ```bash
//! STUDENTDESK_API_URL=http://localhost:3001 cargo run -- shell
//! cargo run -- --memory list --sort date --order desc
//! ```
//!
//! Sample data and a demo operator are available with `--memory`.

pub mod cli;
pub mod config;
pub mod logging;
pub mod modules;
pub mod state;
pub mod utils;

// Re-export workspace crates for convenience
pub use studentdesk_auth;
pub use studentdesk_client;
pub use studentdesk_config;
pub use studentdesk_core;
pub use studentdesk_models;
