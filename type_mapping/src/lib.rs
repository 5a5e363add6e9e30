//! Column type registry shared by schema tooling
//!
//! Maps portable type names such as `VARCHAR` to JDBC type codes and back,
//! and classifies codes as numeric, textual, binary, date/time or special.
//!
//! ```rust
//! use type_mapping::{code_for_name, codes, describe_codes, is_text, name_for_code};
//!
//! assert_eq!(code_for_name("varchar"), Some(codes::VARCHAR));
//! assert_eq!(name_for_code(codes::TIMESTAMP), "TIMESTAMP");
//! assert_eq!(name_for_code(99999), "99999");
//! assert!(is_text(codes::NVARCHAR));
//! assert_eq!(describe_codes(&[codes::VARCHAR, codes::TIMESTAMP]), "VARCHAR, TIMESTAMP");
//! ```

#[cfg(feature = "debug-logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_log;

pub mod codes;
pub mod errors;
pub mod names;
pub mod registry;
pub mod serialize;
pub mod types;
pub mod validate;

pub use errors::RegistryError;
pub use registry::{
    code_for_name, describe_codes, is_binary, is_date_time, is_numeric, is_special, is_text,
    name_for_code, registry, TypeRegistry,
};
pub use serialize::RegistrySnapshot;
pub use types::{TypeCategory, TypeEntry};
pub use validate::is_valid_type_name;
