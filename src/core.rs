//! Shared type map handle
//!
//! [`TypeMap`] is what schema tooling holds on to: either the process-wide
//! built-in registry or a registry extended with platform types from the
//! configuration, built once at startup and shared read-only afterwards.

use crate::errors::TypeMapError;
use crate::{debug_log, trace_log};
use config::{AppConfig, ExtensionType};
use std::sync::Arc;
use type_mapping::{TypeCategory, TypeEntry, TypeRegistry};

#[derive(Debug, Clone)]
enum Source {
    Builtin(&'static TypeRegistry),
    Extended(Arc<TypeRegistry>),
}

/// Cheap-to-clone, read-only handle over a populated type registry
#[derive(Debug, Clone)]
pub struct TypeMap {
    source: Source,
}

impl Default for TypeMap {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TypeMap {
    /// Handle over the process-wide built-in registry
    pub fn builtin() -> Self {
        Self {
            source: Source::Builtin(type_mapping::registry()),
        }
    }

    /// Build a type map from loaded configuration
    ///
    /// Without extensions this shares the process-wide registry instead of
    /// building a copy.
    pub fn from_config(config: &AppConfig) -> Result<Self, TypeMapError> {
        let extensions = &config.registry.extensions;
        if extensions.is_empty() {
            debug_log!("No extension types configured, using built-in registry");
            return Ok(Self::builtin());
        }

        let entries = extensions
            .iter()
            .map(extension_entry)
            .collect::<Result<Vec<_>, _>>()?;
        let registry = TypeRegistry::with_extensions(entries)?;

        debug_log!(
            "Built type registry with {} extension types ({} codes total)",
            extensions.len(),
            registry.len()
        );
        Ok(Self {
            source: Source::Extended(Arc::new(registry)),
        })
    }

    /// Load configuration (see [`AppConfig::load`]) and build a type map from it
    pub fn load() -> Result<Self, TypeMapError> {
        let config = AppConfig::load()?;
        Self::from_config(&config)
    }

    pub fn registry(&self) -> &TypeRegistry {
        match &self.source {
            Source::Builtin(registry) => *registry,
            Source::Extended(registry) => registry.as_ref(),
        }
    }

    /// Whether this handle carries configured extension types
    pub fn is_extended(&self) -> bool {
        matches!(self.source, Source::Extended(_))
    }

    pub fn code_for_name(&self, name: &str) -> Option<i32> {
        let code = self.registry().code_for_name(name);
        if code.is_none() {
            trace_log!("Unknown type name {:?}", name);
        }
        code
    }

    pub fn name_for_code(&self, code: i32) -> String {
        self.registry().name_for_code(code)
    }

    pub fn describe_codes(&self, codes: &[i32]) -> String {
        self.registry().describe_codes(codes)
    }

    pub fn category_of(&self, code: i32) -> Option<TypeCategory> {
        self.registry().category_of(code)
    }

    pub fn is_numeric(&self, code: i32) -> bool {
        self.registry().is_numeric(code)
    }

    pub fn is_date_time(&self, code: i32) -> bool {
        self.registry().is_date_time(code)
    }

    pub fn is_text(&self, code: i32) -> bool {
        self.registry().is_text(code)
    }

    pub fn is_binary(&self, code: i32) -> bool {
        self.registry().is_binary(code)
    }

    pub fn is_special(&self, code: i32) -> bool {
        self.registry().is_special(code)
    }
}

fn extension_entry(extension: &ExtensionType) -> Result<TypeEntry, TypeMapError> {
    let category = extension.category.parse::<TypeCategory>()?;
    Ok(TypeEntry::new(extension.code, extension.name.trim(), category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use type_mapping::codes;

    fn config_with(extensions: Vec<ExtensionType>) -> AppConfig {
        let mut config = AppConfig::default();
        config.registry.extensions = extensions;
        config
    }

    #[test]
    fn test_empty_config_shares_builtin_registry() {
        let map = TypeMap::from_config(&AppConfig::default()).unwrap();
        assert!(!map.is_extended());
        assert!(std::ptr::eq(map.registry(), type_mapping::registry()));
    }

    #[test]
    fn test_clones_share_extended_registry() {
        let map = TypeMap::from_config(&config_with(vec![ExtensionType::new(
            -155,
            " DateTimeOffset ".to_string(),
            "datetime".to_string(),
        )]))
        .unwrap();
        let clone = map.clone();

        assert!(map.is_extended());
        assert!(std::ptr::eq(map.registry(), clone.registry()));
        assert_eq!(clone.code_for_name("datetimeoffset"), Some(-155));
        assert_eq!(clone.category_of(-155), Some(TypeCategory::DateTime));
    }

    #[test]
    fn test_conflicting_extension_is_a_registry_error() {
        let err = TypeMap::from_config(&config_with(vec![ExtensionType::new(
            codes::VARCHAR,
            "STRING".to_string(),
            "BINARY".to_string(),
        )]))
        .unwrap_err();
        assert!(matches!(err, TypeMapError::Registry(_)));
    }

    #[test]
    fn test_unknown_category_is_a_registry_error() {
        let err = TypeMap::from_config(&config_with(vec![ExtensionType::new(
            -200,
            "GEOMETRY".to_string(),
            "SPATIAL".to_string(),
        )]))
        .unwrap_err();
        assert!(matches!(
            err,
            TypeMapError::Registry(type_mapping::RegistryError::UnknownCategory(_))
        ));
    }
}
