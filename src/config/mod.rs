//! Project configuration for `typed-routes.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── generate   # [generate]
//! │   ├── i18n       # [i18n]
//! │   └── pages      # [pages]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # RoutesConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                    |
//! |--------------|--------------------------------------------|
//! | `[pages]`    | Pages root directory                       |
//! | `[generate]` | Declaration artifact path and format       |
//! | `[i18n]`     | Default locale and accepted locales        |
//!
//! A missing config file is not an error: every section has defaults and
//! the project root falls back to the current directory.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{ArtifactFormat, GenerateConfig, I18nConfig, PagesConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    debug, log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the current directory.
pub const CONFIG_FILE: &str = "typed-routes.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing typed-routes.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Pages settings
    #[serde(default)]
    pub pages: PagesConfig,

    /// Artifact generation settings
    #[serde(default)]
    pub generate: GenerateConfig,

    /// Locale settings
    #[serde(default)]
    pub i18n: I18nConfig,
}

impl RoutesConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory, or cwd when no file exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    /// Load configuration, searching upward from `start`.
    pub fn load_from(cli: &Cli, start: &Path) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli, start)?;

        let mut config = if exists {
            Self::from_path(&config_path)?
        } else {
            debug!("config"; "{} not found, using defaults", config_path.display());
            Self::default()
        };

        // Validate raw paths before normalization
        config.validate_paths()?;

        let root = config_path
            .parent()
            .map_or_else(|| start.to_path_buf(), Path::to_path_buf);
        config.config_path = config_path;
        config.finalize(cli, &root);

        config.validate()?;
        Ok(config)
    }

    /// Resolve config file path. An explicit `-C` path must exist.
    fn resolve_config_path(cli: &Cli, start: &Path) -> Result<(PathBuf, bool)> {
        let name = cli.config_name();
        match find_config_file(name, start) {
            Some(path) => Ok((path, true)),
            None if cli.config.is_some() => {
                bail!("Config file '{}' not found", name.display())
            }
            None => Ok((start.join(name), false)),
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli, root: &Path) {
        self.apply_command_options(cli);
        self.normalize_paths(root);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Absolute pages root.
    pub fn pages_dir(&self) -> &Path {
        &self.pages.dir
    }

    /// Absolute artifact path.
    pub fn output_path(&self) -> &Path {
        &self.generate.output
    }

    /// Accepted locales; empty means any.
    pub fn locales(&self) -> &[String] {
        &self.i18n.locales
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply CLI overrides. Relative override paths are taken from the root.
    fn apply_command_options(&mut self, cli: &Cli) {
        Self::update_option(&mut self.pages.dir, cli.pages.as_ref());

        if let Commands::Generate { output, format, .. } = &cli.command {
            Self::update_option(&mut self.generate.output, output.as_ref());
            Self::update_option(&mut self.generate.format, format.as_ref());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.config_path = normalize_path(&self.config_path);
        self.pages.dir = normalize_path(&root.join(&self.pages.dir));
        self.generate.output = normalize_path(&root.join(&self.generate.output));
        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate paths before normalization.
    ///
    /// Joining onto the root turns an empty path into the root itself, so
    /// emptiness has to be checked first.
    fn validate_paths(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.pages.validate_paths(&mut diag);
        self.generate.validate_paths(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.pages.validate(&mut diag);
        self.generate.validate(&mut diag);
        self.i18n.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> RoutesConfig {
    let (parsed, ignored) = RoutesConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
