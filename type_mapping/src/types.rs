//! Type mapping definitions
//!
//! This module provides the category enumeration and the entry record
//! shared by the registry and its serialized snapshots.

use crate::errors::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse semantic grouping of column type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeCategory {
    Numeric,
    Textual,
    Binary,
    #[serde(rename = "DATETIME", alias = "DATE_TIME")]
    DateTime,
    Special,
}

impl TypeCategory {
    /// Every category, in declaration order
    pub const ALL: [TypeCategory; 5] = [
        TypeCategory::Numeric,
        TypeCategory::Textual,
        TypeCategory::Binary,
        TypeCategory::DateTime,
        TypeCategory::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCategory::Numeric => "NUMERIC",
            TypeCategory::Textual => "TEXTUAL",
            TypeCategory::Binary => "BINARY",
            TypeCategory::DateTime => "DATETIME",
            TypeCategory::Special => "SPECIAL",
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeCategory {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NUMERIC" => Ok(TypeCategory::Numeric),
            "TEXTUAL" => Ok(TypeCategory::Textual),
            "BINARY" => Ok(TypeCategory::Binary),
            "DATETIME" | "DATE_TIME" => Ok(TypeCategory::DateTime),
            "SPECIAL" => Ok(TypeCategory::Special),
            _ => Err(RegistryError::UnknownCategory(s.to_string())),
        }
    }
}

/// A single registered column type: code, canonical name and category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    pub code: i32,
    pub name: String,
    pub category: TypeCategory,
}

impl TypeEntry {
    pub fn new(code: i32, name: impl Into<String>, category: TypeCategory) -> Self {
        Self {
            code,
            name: name.into(),
            category,
        }
    }
}
