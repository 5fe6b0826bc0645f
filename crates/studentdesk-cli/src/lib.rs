//! # studentdesk CLI
//!
//! Seeding and account utilities for studentdesk development.
//!
//! This library crate provides the seeding functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use studentdesk_cli::seeder::{seed_students, StudentSeedConfig};
//!
//! let config = StudentSeedConfig::new(50);
//! seed_students(&store, &config).await?;
//! ```

pub mod seeder;
