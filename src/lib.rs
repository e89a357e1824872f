//! Plugpath - declarative plugin manifest resolution for dynamic-library hosts

pub mod error;
pub mod manifest;

pub use error::{PlugError, Result};
pub use manifest::{ManifestResolver, PluginConfig, PluginEntry};
