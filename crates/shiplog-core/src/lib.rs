//! Shiplog Core - configuration and shared error types
//!
//! Foundation crate for the shiplog changelog pipeline.

pub mod config;
pub mod error;

pub use config::{Config, TaxonomyConfig};
pub use error::{ConfigError, Result, ShiplogError};
