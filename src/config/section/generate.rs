//! `[generate]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [generate]
//! output = "src/routes.rs"    # Declaration artifact (relative to the config file)
//! format = "rust"             # rust | json
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Declaration artifact format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// Rust module with a `RouteId` enum (default).
    #[default]
    Rust,
    /// JSON manifest keyed by route path.
    Json,
}

impl ArtifactFormat {
    /// Expected file extension for this format.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Rust => "rs",
            Self::Json => "json",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Output file for the declaration artifact.
    pub output: PathBuf,

    /// Artifact format.
    pub format: ArtifactFormat,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output: "src/routes.rs".into(),
            format: ArtifactFormat::Rust,
        }
    }
}

impl GenerateConfig {
    /// Check raw paths before they are joined onto the project root.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        if self.output.as_os_str().is_empty() {
            diag.error(FieldPath::new("generate.output"), "must not be empty");
        }
    }

    /// Validate that the output extension matches the format.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let expected = self.format.extension();
        let actual = self.output.extension().and_then(|e| e.to_str());
        if actual != Some(expected) {
            diag.error_with_hint(
                FieldPath::new("generate.output"),
                format!(
                    "'{}' does not match format \"{}\"",
                    self.output.display(),
                    self.format.name()
                ),
                format!("use a `.{expected}` file or change `generate.format`"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.generate.output, PathBuf::from("src/routes.rs"));
        assert_eq!(config.generate.format, ArtifactFormat::Rust);
    }

    #[test]
    fn test_format_parsing() {
        for (input, expected) in [("rust", ArtifactFormat::Rust), ("json", ArtifactFormat::Json)] {
            let config = test_parse_config(&format!("[generate]\nformat = \"{input}\""));
            assert_eq!(config.generate.format, expected, "format failed for {input}");
        }
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result: Result<crate::config::RoutesConfig, _> =
            toml::from_str("[generate]\nformat = \"typescript\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_extension_mismatch() {
        let config = GenerateConfig {
            output: "routes.rs".into(),
            format: ArtifactFormat::Json,
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 1);

        let config = GenerateConfig {
            output: "routes.json".into(),
            format: ArtifactFormat::Json,
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
