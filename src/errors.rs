//! Error types for the coltypes crate
//!
//! This module contains all error types that can be returned while building
//! a type map. Lookups themselves never fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypeMapError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Type registry error: {0}")]
    Registry(#[from] type_mapping::RegistryError),
}
