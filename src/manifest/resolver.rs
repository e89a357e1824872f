//! Manifest resolution: configuration tree in, loadable plugin set out.
//!
//! `ManifestResolver` reads the `Plugins` section of an already-materialized
//! configuration tree and produces absolute artifact paths and structured
//! plugin records. Resolution is purely lexical: no filesystem access is
//! performed, and whether a resolved path actually points at a loadable
//! library is the host's problem.

use std::env::consts::DLL_EXTENSION;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use crate::error::{PlugError, Result};

use super::types::{PluginConfig, PluginEntry};

/// Name of the top-level configuration section listing plugins.
const PLUGINS_SECTION: &str = "Plugins";

/// Directory under the base directory where plugin artifacts live.
const PLUGINS_DIR: &str = "plugins";

/// Resolves a declarative plugin manifest against a base directory.
///
/// Each plugin is expected to live in its own subdirectory named after
/// itself: `<base_dir>/plugins/<stem>/<stem>.<ext>`, where `<ext>` is the
/// platform dynamic-library extension (`so`, `dylib`, or `dll`). An
/// identifier that already carries the platform extension is used as-is.
///
/// The resolver holds no mutable state; both operations read the same
/// immutable tree and return fresh, caller-owned results, so sharing one
/// resolver across threads is safe.
///
/// # Example
///
/// ```rust
/// use plugpath::ManifestResolver;
/// use serde_json::json;
///
/// let tree = json!({
///     "Plugins": [
///         "TestProject.OldJsonPlugin",
///         { "Name": "TestProject.JsonPlugin", "DependsOn": ["TestProject.OldJsonPlugin"] }
///     ]
/// });
///
/// let resolver = ManifestResolver::new(tree, "/opt/host").unwrap();
///
/// let configs = resolver.plugin_configs();
/// assert_eq!(configs.len(), 2);
/// assert!(configs[0].depends_on.is_empty());
/// assert_eq!(configs[1].depends_on, vec!["TestProject.OldJsonPlugin"]);
/// ```
#[derive(Debug, Clone)]
pub struct ManifestResolver {
    /// The configuration tree, owned for the resolver's lifetime.
    config: Value,

    /// Directory plugin paths are rooted at. Expected to be absolute.
    base_dir: PathBuf,
}

impl ManifestResolver {
    /// Create a resolver over an already-materialized configuration tree.
    ///
    /// `base_dir` is the directory plugin paths are rooted at, typically
    /// the directory containing the host executable. It must be absolute
    /// for the resolved paths to be absolute; the resolver performs pure
    /// concatenation and never re-resolves it.
    ///
    /// # Errors
    /// `PlugError::InvalidArgument("config")` if the tree is JSON `null`.
    /// An absent tree is the one rejected precondition.
    pub fn new(config: Value, base_dir: impl Into<PathBuf>) -> Result<Self> {
        if config.is_null() {
            return Err(PlugError::InvalidArgument("config"));
        }

        Ok(Self {
            config,
            base_dir: base_dir.into(),
        })
    }

    /// Create a resolver by parsing configuration JSON text.
    ///
    /// Convenience for callers holding raw JSON rather than a parsed tree.
    /// Performs no I/O; callers that read configuration files do the read
    /// themselves.
    ///
    /// # Errors
    /// `PlugError::Json` if the text is not valid JSON, or
    /// `PlugError::InvalidArgument` if it parses to JSON `null`.
    pub fn from_json_str(json: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let config: Value = serde_json::from_str(json)?;
        Self::new(config, base_dir)
    }

    /// The base directory plugin paths are rooted at.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve every configured plugin to an absolute artifact path.
    ///
    /// A missing `Plugins` section or an empty array is a normal "no
    /// plugins" state and yields an empty vector, not an error. Object
    /// entries contribute their `Name` and degrade to path-only resolution.
    /// Duplicates are kept and declaration order is preserved.
    pub fn plugin_paths(&self) -> Vec<PathBuf> {
        self.entries()
            .iter()
            .map(|entry| self.resolve_path(entry.identifier()))
            .collect()
    }

    /// Resolve every configured plugin to a [`PluginConfig`] record.
    ///
    /// Object entries contribute their declared `DependsOn` tokens
    /// verbatim; bare string entries resolve with an empty dependency list.
    /// Tokens are not validated against the resolved plugin set. They are
    /// opaque identifiers for the host to match against other plugins'
    /// short names.
    pub fn plugin_configs(&self) -> Vec<PluginConfig> {
        self.entries()
            .into_iter()
            .map(|entry| {
                let name = self.resolve_path(entry.identifier());
                let depends_on = match entry {
                    PluginEntry::Name(_) => Vec::new(),
                    PluginEntry::Detailed { depends_on, .. } => depends_on,
                };
                PluginConfig { name, depends_on }
            })
            .collect()
    }

    /// Parse the `Plugins` section into entries, in declaration order.
    ///
    /// Entries that match neither accepted shape, and entries with an empty
    /// identifier, are logged and skipped; their neighbors are unaffected.
    /// Both operations share this parse, so they always agree on which
    /// plugins exist.
    fn entries(&self) -> Vec<PluginEntry> {
        let section = match self.config.get(PLUGINS_SECTION) {
            Some(section) => section,
            None => return Vec::new(),
        };

        let items = match section.as_array() {
            Some(items) => items,
            None => {
                if !section.is_null() {
                    warn!(section = %section, "Plugins section is not an array, ignoring");
                }
                return Vec::new();
            }
        };

        items
            .iter()
            .filter_map(|item| match serde_json::from_value::<PluginEntry>(item.clone()) {
                Ok(entry) if entry.identifier().is_empty() => {
                    warn!(entry = %item, "Skipping plugin entry with empty identifier");
                    None
                }
                Ok(entry) => Some(entry),
                Err(error) => {
                    warn!(entry = %item, %error, "Skipping malformed plugin entry");
                    None
                }
            })
            .collect()
    }

    /// Resolve a plugin identifier to an absolute artifact path.
    ///
    /// Appends the platform dynamic-library extension when the identifier
    /// lacks it, then places the file in a subdirectory named after its
    /// stem under `<base_dir>/plugins/`. Pure concatenation: symlinks are
    /// not resolved and existence is not checked. A path to a missing file
    /// is a valid (if later unusable) result.
    fn resolve_path(&self, identifier: &str) -> PathBuf {
        let file = if has_platform_extension(identifier) {
            identifier.to_string()
        } else {
            format!("{}.{}", identifier, DLL_EXTENSION)
        };

        let stem = Path::new(&file)
            .file_stem()
            .map(ToOwned::to_owned)
            .unwrap_or_default();

        self.base_dir.join(PLUGINS_DIR).join(stem).join(file)
    }
}

/// Whether an identifier already ends in the platform dynamic-library
/// extension.
fn has_platform_extension(identifier: &str) -> bool {
    Path::new(identifier)
        .extension()
        .map(|ext| ext == DLL_EXTENSION)
        .unwrap_or(false)
}
