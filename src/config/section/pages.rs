//! `[pages]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [pages]
//! dir = "src/pages"           # Pages root (relative to the config file)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    /// Pages root directory.
    pub dir: PathBuf,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            dir: "src/pages".into(),
        }
    }
}

impl PagesConfig {
    /// Check raw paths before they are joined onto the project root.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        if self.dir.as_os_str().is_empty() {
            diag.error(FieldPath::new("pages.dir"), "must not be empty");
        }
    }

    /// Validate the normalized section.
    ///
    /// A missing directory is only a warning: it scans to an empty table.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.dir.is_dir() {
            diag.warn(
                FieldPath::new("pages.dir"),
                format!("directory '{}' not found, no routes will be found", self.dir.display()),
            );
        }
    }
}
