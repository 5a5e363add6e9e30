//! Validation utilities for type mapping
//!
//! This module provides validation functions
//! for names contributed outside the built-in table.

/// Check if a string is usable as a registered type name
///
/// Accepts an ASCII letter followed by ASCII letters, digits or `_`.
pub fn is_valid_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
