//! # coltypes
//!
//! Portable column type registry for schema comparison and DDL tooling.
//! Translates type names such as `VARCHAR` to JDBC type codes and back,
//! and classifies codes into numeric, textual, binary, date/time and
//! special categories.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coltypes::prelude::*;
//!
//! fn main() -> Result<(), TypeMapError> {
//!     // Built-in table plus any extension types from coltypes.toml
//!     let types = TypeMap::load()?;
//!
//!     let code = types.code_for_name("timestamptz").unwrap_or(codes::OTHER);
//!     if types.is_date_time(code) {
//!         println!("{} is a date/time type", types.name_for_code(code));
//!     }
//!
//!     println!("{}", types.describe_codes(&[codes::VARCHAR, codes::BLOB, -155]));
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::TypeMap;
pub use errors::TypeMapError;

// Re-export centralized config
pub use config::{AppConfig, ExtensionType, RegistryConfig};

// Re-export member crates
pub use config;
pub use type_mapping;
pub use type_mapping::{
    code_for_name, codes, describe_codes, is_binary, is_date_time, is_numeric, is_special,
    is_text, name_for_code, names, TypeCategory, TypeEntry, TypeRegistry,
};
