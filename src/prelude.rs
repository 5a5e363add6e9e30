//! Convenience re-exports for common coltypes usage
//!
//! # Example
//!
//! ```rust
//! use coltypes::prelude::*;
//!
//! let types = TypeMap::builtin();
//! assert_eq!(types.code_for_name(names::VARCHAR), Some(codes::VARCHAR));
//! ```

// Core components
pub use crate::core::TypeMap;
pub use crate::errors::TypeMapError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, ExtensionType, RegistryConfig};

// Registry types and lookups
pub use type_mapping::{
    code_for_name, codes, describe_codes, is_binary, is_date_time, is_numeric, is_special,
    is_text, name_for_code, names, RegistryError, RegistrySnapshot, TypeCategory, TypeEntry,
    TypeRegistry,
};
