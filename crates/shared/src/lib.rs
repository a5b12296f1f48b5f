//! Shared types, errors, and configuration for Tilebook.
//!
//! This crate provides common types used across all other crates:
//! - Money rounding and display helpers with decimal precision
//! - Prefixed document identifiers (`ADV-0412`, `CT48211`, ...)
//! - Application-wide error types
//! - Configuration management (reference tables, ledger cache, logging)

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
