//! Bidirectional type registry
//!
//! Maps type names to JDBC type codes and back, and classifies each code
//! into a [`TypeCategory`]. The process-wide registry is built once from
//! the built-in table on first access and never changes afterwards.

use crate::codes;
use crate::debug_log;
use crate::errors::RegistryError;
use crate::names;
use crate::types::{TypeCategory, TypeEntry};
use crate::validate::is_valid_type_name;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// Built-in registrations, applied in order
const BUILTIN_TYPES: &[(i32, &str, TypeCategory)] = &[
    (codes::ARRAY, names::ARRAY, TypeCategory::Special),
    (codes::BIGINT, names::BIGINT, TypeCategory::Numeric),
    (codes::BINARY, names::BINARY, TypeCategory::Binary),
    (codes::BIT, names::BIT, TypeCategory::Numeric),
    (codes::BLOB, names::BLOB, TypeCategory::Binary),
    (codes::CHAR, names::CHAR, TypeCategory::Textual),
    (codes::CLOB, names::CLOB, TypeCategory::Textual),
    (codes::DATE, names::DATE, TypeCategory::DateTime),
    (codes::DECIMAL, names::DECIMAL, TypeCategory::Numeric),
    (codes::DISTINCT, names::DISTINCT, TypeCategory::Special),
    (codes::DOUBLE, names::DOUBLE, TypeCategory::Numeric),
    (codes::FLOAT, names::FLOAT, TypeCategory::Numeric),
    (codes::INTEGER, names::INTEGER, TypeCategory::Numeric),
    (codes::JAVA_OBJECT, names::JAVA_OBJECT, TypeCategory::Special),
    (codes::LONGVARBINARY, names::LONGVARBINARY, TypeCategory::Binary),
    (codes::LONGVARCHAR, names::LONGVARCHAR, TypeCategory::Textual),
    (codes::NULL, names::NULL, TypeCategory::Special),
    (codes::NUMERIC, names::NUMERIC, TypeCategory::Numeric),
    (codes::OTHER, names::OTHER, TypeCategory::Special),
    (codes::REAL, names::REAL, TypeCategory::Numeric),
    (codes::REF, names::REF, TypeCategory::Special),
    (codes::SMALLINT, names::SMALLINT, TypeCategory::Numeric),
    (codes::STRUCT, names::STRUCT, TypeCategory::Special),
    (codes::TIME, names::TIME, TypeCategory::DateTime),
    (codes::TIMESTAMP, names::TIMESTAMP, TypeCategory::DateTime),
    (codes::TINYINT, names::TINYINT, TypeCategory::Numeric),
    (codes::VARBINARY, names::VARBINARY, TypeCategory::Binary),
    (codes::VARCHAR, names::VARCHAR, TypeCategory::Textual),
    (codes::ORACLE_TIMESTAMPTZ, names::TIMESTAMPTZ, TypeCategory::DateTime),
    (codes::ORACLE_TIMESTAMPLTZ, names::TIMESTAMPLTZ, TypeCategory::DateTime),
    (codes::BOOLEAN, names::BOOLEAN, TypeCategory::Numeric),
    (codes::DATALINK, names::DATALINK, TypeCategory::Special),
];

/// Torque/Turbine extensions, only meaningful when reading schema files
const BUILTIN_ALIASES: &[(&str, i32)] = &[
    (names::BOOLEANINT, codes::TINYINT),
    (names::BOOLEANCHAR, codes::CHAR),
];

const NATIONAL_TYPES: &[(i32, &str, TypeCategory)] = &[
    (codes::SQLXML, names::SQLXML, TypeCategory::Textual),
    (codes::NCHAR, names::NCHAR, TypeCategory::Textual),
    (codes::NCLOB, names::NCLOB, TypeCategory::Textual),
    (codes::NVARCHAR, names::NVARCHAR, TypeCategory::Textual),
    (codes::LONGNVARCHAR, names::LONGNVARCHAR, TypeCategory::Textual),
];

/// Get the process-wide registry, populating it on first access
pub fn registry() -> &'static TypeRegistry {
    REGISTRY.get_or_init(TypeRegistry::builtin)
}

/// Look up the type code for a name, ignoring case
pub fn code_for_name(name: &str) -> Option<i32> {
    registry().code_for_name(name)
}

/// Get the canonical name for a type code, or the code itself as text
pub fn name_for_code(code: i32) -> String {
    registry().name_for_code(code)
}

/// Join the names of the given codes with `", "`
pub fn describe_codes(codes: &[i32]) -> String {
    registry().describe_codes(codes)
}

pub fn is_numeric(code: i32) -> bool {
    registry().is_numeric(code)
}

pub fn is_date_time(code: i32) -> bool {
    registry().is_date_time(code)
}

pub fn is_text(code: i32) -> bool {
    registry().is_text(code)
}

pub fn is_binary(code: i32) -> bool {
    registry().is_binary(code)
}

pub fn is_special(code: i32) -> bool {
    registry().is_special(code)
}

/// Name/code/category indexes over one set of registered types
///
/// Instances are only produced fully populated; there is no public way to
/// add entries to an existing registry.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    name_to_code: HashMap<String, i32>,
    code_to_name: HashMap<i32, String>,
    category_to_codes: HashMap<TypeCategory, HashSet<i32>>,
}

impl TypeRegistry {
    /// Build a registry holding the built-in table
    pub fn builtin() -> Self {
        let mut registry = Self::default();

        for &(code, name, category) in BUILTIN_TYPES {
            registry.register(code, name, category);
        }
        for &(name, code) in BUILTIN_ALIASES {
            registry.register_alias(name, code);
        }
        for &(code, name, category) in NATIONAL_TYPES {
            registry.register(code, name, category);
        }

        debug_log!(
            "Populated type registry with {} codes and {} names",
            registry.code_to_name.len(),
            registry.name_to_code.len()
        );
        registry
    }

    /// Build a registry holding the built-in table plus platform entries
    ///
    /// Every entry is checked before the result is returned, so a rejected
    /// entry never leaves a partially extended registry behind. An entry may
    /// rename a known code within its own category (the later name wins for
    /// reverse lookups) but may not move a code to another category.
    pub fn with_extensions<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = TypeEntry>,
    {
        let mut registry = Self::builtin();

        for entry in entries {
            if !is_valid_type_name(&entry.name) {
                return Err(RegistryError::InvalidName(entry.name));
            }
            if let Some(existing) = registry.category_of(entry.code) {
                if existing != entry.category {
                    return Err(RegistryError::CategoryConflict {
                        code: entry.code,
                        name: entry.name,
                        existing,
                        requested: entry.category,
                    });
                }
            }

            debug_log!(
                "Registering extension type {} = {} ({})",
                entry.name,
                entry.code,
                entry.category
            );
            registry.register(entry.code, &entry.name, entry.category);
        }

        Ok(registry)
    }

    fn register(&mut self, code: i32, name: &str, category: TypeCategory) {
        let name = name.to_uppercase();

        self.name_to_code.insert(name.clone(), code);
        self.code_to_name.insert(code, name);
        self.category_to_codes.entry(category).or_default().insert(code);
    }

    // Forward mapping only: the code keeps its canonical name and category.
    fn register_alias(&mut self, name: &str, code: i32) {
        self.name_to_code.insert(name.to_uppercase(), code);
    }

    /// Look up the type code for a name, ignoring case
    ///
    /// Returns `None` for unknown names; there is no fuzzy matching.
    pub fn code_for_name(&self, name: &str) -> Option<i32> {
        self.name_to_code.get(&name.to_uppercase()).copied()
    }

    /// Get the canonical name for a type code
    ///
    /// Unregistered codes (driver-specific ones, for instance) come back as
    /// their decimal representation, so this never fails.
    pub fn name_for_code(&self, code: i32) -> String {
        match self.code_to_name.get(&code) {
            Some(name) if !name.is_empty() => name.clone(),
            _ => code.to_string(),
        }
    }

    /// Join the names of the given codes with `", "`, keeping input order
    pub fn describe_codes(&self, codes: &[i32]) -> String {
        codes
            .iter()
            .map(|&code| self.name_for_code(code))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Check whether a code belongs to the given category
    pub fn is_in_category(&self, code: i32, category: TypeCategory) -> bool {
        self.category_to_codes
            .get(&category)
            .is_some_and(|codes| codes.contains(&code))
    }

    pub fn is_numeric(&self, code: i32) -> bool {
        self.is_in_category(code, TypeCategory::Numeric)
    }

    pub fn is_date_time(&self, code: i32) -> bool {
        self.is_in_category(code, TypeCategory::DateTime)
    }

    pub fn is_text(&self, code: i32) -> bool {
        self.is_in_category(code, TypeCategory::Textual)
    }

    pub fn is_binary(&self, code: i32) -> bool {
        self.is_in_category(code, TypeCategory::Binary)
    }

    pub fn is_special(&self, code: i32) -> bool {
        self.is_in_category(code, TypeCategory::Special)
    }

    /// Get the category a code was registered under, if any
    pub fn category_of(&self, code: i32) -> Option<TypeCategory> {
        TypeCategory::ALL
            .into_iter()
            .find(|&category| self.is_in_category(code, category))
    }

    /// All canonical entries, sorted by code
    pub fn entries(&self) -> Vec<TypeEntry> {
        let mut entries: Vec<TypeEntry> = self
            .code_to_name
            .iter()
            .filter_map(|(&code, name)| {
                self.category_of(code)
                    .map(|category| TypeEntry::new(code, name.clone(), category))
            })
            .collect();
        entries.sort_by_key(|entry| entry.code);
        entries
    }

    /// Names that resolve to a code owned by a different canonical name
    pub fn aliases(&self) -> Vec<(String, i32)> {
        let mut aliases: Vec<(String, i32)> = self
            .name_to_code
            .iter()
            .filter(|&(name, code)| self.code_to_name.get(code) != Some(name))
            .map(|(name, &code)| (name.clone(), code))
            .collect();
        aliases.sort();
        aliases
    }

    /// Number of registered codes
    pub fn len(&self) -> usize {
        self.code_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_to_name.is_empty()
    }
}
