//! Serialization utilities
//!
//! This module renders registry contents for tooling that lists the
//! known column types.

use crate::registry::TypeRegistry;
use crate::types::TypeEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serializable view of a registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub types: Vec<TypeEntry>,
    pub aliases: BTreeMap<String, i32>,
}

impl TypeRegistry {
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            types: self.entries(),
            aliases: self.aliases().into_iter().collect(),
        }
    }

    /// Render the registry snapshot as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::registry;
    use crate::{codes, RegistrySnapshot, TypeCategory};

    #[test]
    fn test_snapshot_lists_types_in_code_order() {
        let snapshot = registry().snapshot();

        let order: Vec<i32> = snapshot.types.iter().map(|entry| entry.code).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);

        assert_eq!(snapshot.types.first().map(|e| e.code), Some(codes::ORACLE_TIMESTAMPLTZ));
        assert_eq!(snapshot.aliases.get("BOOLEANINT"), Some(&codes::TINYINT));
    }

    #[test]
    fn test_json_form() {
        let json = registry().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let varchar = value["types"]
            .as_array()
            .unwrap()
            .iter()
            .find(|entry| entry["name"] == "VARCHAR")
            .unwrap();
        assert_eq!(varchar["code"], 12);
        assert_eq!(varchar["category"], "TEXTUAL");
        assert_eq!(value["aliases"]["BOOLEANCHAR"], 1);

        let parsed: RegistrySnapshot = serde_json::from_str(&json).unwrap();
        assert!(parsed
            .types
            .iter()
            .any(|entry| entry.name == "TIMESTAMPTZ" && entry.category == TypeCategory::DateTime));
    }
}
