//! Manifest entry and resolved plugin types.
//!
//! The `Plugins` section of a configuration tree mixes two entry shapes in
//! the same array: bare identifier strings, and objects carrying a name plus
//! declared dependencies. `PluginEntry` models that union explicitly so both
//! resolver operations share a single parse instead of inspecting JSON types
//! ad hoc.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One raw entry of the `Plugins` configuration section.
///
/// Wire keys are PascalCase (`Name`, `DependsOn`), fixed by the input
/// contract:
///
/// ```json
/// {
///   "Plugins": [
///     "TestProject.JsonPlugin",
///     { "Name": "TestProject.OldJsonPlugin" },
///     { "Name": "TestProject.JsonPlugin", "DependsOn": ["TestProject.OldJsonPlugin"] }
///   ]
/// }
/// ```
///
/// `DependsOn` is optional and defaults to empty at parse time, so no
/// absent/null distinction survives past deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PluginEntry {
    /// A bare identifier string: a relative or absolute path fragment,
    /// extension optional.
    Name(String),

    /// An object entry with an identifier and declared dependencies.
    #[serde(rename_all = "PascalCase")]
    Detailed {
        /// The plugin identifier, resolved to an artifact path later.
        name: String,

        /// Names of plugins this one depends on, in declaration order.
        #[serde(default)]
        depends_on: Vec<String>,
    },
}

impl PluginEntry {
    /// The raw plugin identifier, before path resolution.
    pub fn identifier(&self) -> &str {
        match self {
            PluginEntry::Name(name) => name,
            PluginEntry::Detailed { name, .. } => name,
        }
    }

    /// The declared dependency tokens. Empty for bare string entries.
    pub fn depends_on(&self) -> &[String] {
        match self {
            PluginEntry::Name(_) => &[],
            PluginEntry::Detailed { depends_on, .. } => depends_on,
        }
    }
}

/// A resolved plugin record: absolute artifact path plus declared
/// dependencies.
///
/// `name` always ends in the platform dynamic-library extension.
/// `depends_on` holds the raw declared tokens, not resolved further; the
/// host matches them against other plugins' short names when ordering
/// activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PluginConfig {
    /// Absolute path to the plugin dynamic library.
    pub name: PathBuf,

    /// Declared dependency tokens, in declaration order.
    pub depends_on: Vec<String>,
}

impl PluginConfig {
    /// The plugin's short name: the artifact file stem.
    ///
    /// This is the token other plugins use to reference this plugin in
    /// their `DependsOn` lists.
    pub fn short_name(&self) -> &str {
        self.name
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_parses_bare_string() {
        let entry: PluginEntry = serde_json::from_value(json!("TestProject.JsonPlugin")).unwrap();
        assert_eq!(entry, PluginEntry::Name("TestProject.JsonPlugin".to_string()));
        assert_eq!(entry.identifier(), "TestProject.JsonPlugin");
        assert!(entry.depends_on().is_empty());
    }

    #[test]
    fn test_entry_parses_object_with_dependencies() {
        let entry: PluginEntry = serde_json::from_value(json!({
            "Name": "TestProject.JsonPlugin",
            "DependsOn": ["TestProject.OldJsonPlugin"]
        }))
        .unwrap();

        assert_eq!(entry.identifier(), "TestProject.JsonPlugin");
        assert_eq!(entry.depends_on(), ["TestProject.OldJsonPlugin"]);
    }

    #[test]
    fn test_entry_object_defaults_depends_on_to_empty() {
        let entry: PluginEntry =
            serde_json::from_value(json!({ "Name": "TestProject.OldJsonPlugin" })).unwrap();

        assert_eq!(entry.identifier(), "TestProject.OldJsonPlugin");
        assert!(entry.depends_on().is_empty());
    }

    #[test]
    fn test_entry_object_without_name_is_rejected() {
        let result: Result<PluginEntry, _> =
            serde_json::from_value(json!({ "DependsOn": ["TestProject.OldJsonPlugin"] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_wire_keys_are_pascal_case() {
        // Lowercase keys do not match the wire contract.
        let result: Result<PluginEntry, _> =
            serde_json::from_value(json!({ "name": "TestProject.JsonPlugin" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_non_string_non_object_is_rejected() {
        let result: Result<PluginEntry, _> = serde_json::from_value(json!(42));
        assert!(result.is_err());

        let result: Result<PluginEntry, _> = serde_json::from_value(json!(["nested"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_plugin_config_short_name() {
        let config = PluginConfig {
            name: PathBuf::from("/opt/host/plugins/TestProject.JsonPlugin/TestProject.JsonPlugin.so"),
            depends_on: vec![],
        };
        assert_eq!(config.short_name(), "TestProject.JsonPlugin");
    }

    #[test]
    fn test_plugin_config_serializes_pascal_case() {
        let config = PluginConfig {
            name: PathBuf::from("/opt/host/plugins/A/A.so"),
            depends_on: vec!["B".to_string()],
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["Name"], "/opt/host/plugins/A/A.so");
        assert_eq!(value["DependsOn"][0], "B");
    }
}
