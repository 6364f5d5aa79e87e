//! Doctor Registry - Doctor registration API
//!
//! Registers doctors (name, email, password, specialty, CRM, phone and
//! address) through `POST /doctors`, enforcing unique email and CRM and
//! never returning or storing the plain-text password.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Doctor entity, address value and password hashing
//! - **services**: Doctor registration workflow
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Address, Doctor, DoctorResponse, Password};
pub use errors::{AppError, AppResult};
