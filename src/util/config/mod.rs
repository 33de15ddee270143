//! Hierarchy definition files
//!
//! A definition holds the nested complexity relation and, optionally, the full
//! test list of each suite. JSON and TOML are accepted, picked by extension.
//!
//! ```toml
//! [hierarchy.sharding_jscore_passthrough.replica_sets_jscore_passthrough]
//! core = {}
//!
//! [suites]
//! core = ["jstests/core/find.js"]
//! replica_sets_jscore_passthrough = ["jstests/core/find.js"]
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use suite_hierarchy::util::config::load_config;
//!
//! let config = load_config(Path::new("hierarchy.toml")).unwrap();
//! let hierarchy = config.build().unwrap();
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::hierarchy::{HierarchyError, NestedRelation, SuiteHierarchy, SuiteTests};

/// Contents of a hierarchy definition file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HierarchyConfig {
    /// Nested "more complex than" relation
    #[serde(default)]
    pub hierarchy: NestedRelation,
    /// Full test list per suite
    #[serde(default)]
    pub suites: SuiteTests,
}

impl HierarchyConfig {
    /// Normalize the relation and attach the test lists.
    pub fn build(self) -> Result<SuiteHierarchy, ConfigError> {
        Ok(SuiteHierarchy::new(&self.hierarchy, self.suites)?)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported definition format: {} (expected .json or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
}

/// Parse a JSON definition.
pub fn parse_json(source: &str) -> Result<HierarchyConfig, ConfigError> {
    Ok(serde_json::from_str(source)?)
}

/// Parse a TOML definition.
pub fn parse_toml(source: &str) -> Result<HierarchyConfig, ConfigError> {
    Ok(toml::from_str(source)?)
}

/// Load a definition file, choosing the parser by extension.
pub fn load_config(path: &Path) -> Result<HierarchyConfig, ConfigError> {
    let parse = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json,
        Some("toml") => parse_toml,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content)?;
    debug!(
        path = %path.display(),
        roots = config.hierarchy.len(),
        suites = config.suites.len(),
        "loaded hierarchy definition"
    );
    Ok(config)
}
