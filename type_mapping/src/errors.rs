//! Error types for registry construction
//!
//! Lookups never fail; these errors only arise while building an
//! extended registry or parsing category names.

use crate::types::TypeCategory;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid type name: {0:?}")]
    InvalidName(String),

    #[error("Type code {code} ({name}) is already registered as {existing}, cannot register it as {requested}")]
    CategoryConflict {
        code: i32,
        name: String,
        existing: TypeCategory,
        requested: TypeCategory,
    },

    #[error("Unknown type category: {0}")]
    UnknownCategory(String),
}
