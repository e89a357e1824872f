//! Plugin manifest resolution.
//!
//! This module turns the declarative `Plugins` section of a configuration
//! tree into a concrete, loadable set of plugin artifacts: absolute paths to
//! dynamic libraries, plus each plugin's declared dependencies. The host
//! that consumes these results performs the actual dynamic loading and
//! dependency-ordered activation; resolution here is purely lexical.
//!
//! # Architecture
//!
//! - **types**: manifest entry shapes (`PluginEntry`) and the resolved
//!   record (`PluginConfig`)
//! - **resolver**: section lookup, identifier-to-path resolution, and the
//!   two resolution operations
//!
//! # Manifest shape
//!
//! ```json
//! {
//!   "Plugins": [
//!     "TestProject.JsonPlugin",
//!     { "Name": "TestProject.OldJsonPlugin" },
//!     { "Name": "TestProject.JsonPlugin", "DependsOn": ["TestProject.OldJsonPlugin"] }
//!   ]
//! }
//! ```
//!
//! Absence of the `Plugins` key, or an empty array, is a valid "no plugins"
//! state. Each resolved path follows the convention
//! `<base_dir>/plugins/<stem>/<stem>.<ext>`, with every plugin living in
//! its own subdirectory named after itself.
//!
//! # Usage
//!
//! ```rust
//! use plugpath::ManifestResolver;
//! use serde_json::json;
//!
//! let tree = json!({ "Plugins": ["TestProject.JsonPlugin"] });
//! let resolver = ManifestResolver::new(tree, "/opt/host").unwrap();
//!
//! for path in resolver.plugin_paths() {
//!     println!("would load {}", path.display());
//! }
//! ```

mod resolver;
pub mod types;

pub use resolver::ManifestResolver;
pub use types::{PluginConfig, PluginEntry};
