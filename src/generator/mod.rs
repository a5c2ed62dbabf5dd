//! Declaration artifact generation.
//!
//! Turns a route table into a static artifact that maps each route to its
//! params, so callers can check route references without a scan:
//!
//! - **Rust**: a module with a closed `RouteId` enum (`routes.rs`)
//! - **JSON**: a manifest keyed by route path (`routes.json`)
//!
//! The artifact is fully regenerated on every run and is a pure function of
//! the table: routes are emitted sorted by route path, so rescanning an
//! unchanged tree produces byte-identical output.

pub mod json;
pub mod rust;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{ArtifactFormat, GenerateConfig, I18nConfig};
use crate::route::{RouteConflict, RouteTable, format_conflicts};

/// Marker line at the top of every Rust artifact.
pub const GENERATED_HEADER: &str = "// @generated by typed-routes. Do not edit.";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{} route path{} claimed by several pages:\n{}",
        .0.len(), crate::utils::plural_s(.0.len()), format_conflicts(.0))]
    Conflicts(Vec<RouteConflict>),

    #[error("failed to write `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("failed to serialize route manifest")]
    Json(#[from] serde_json::Error),
}

/// Render the artifact for `table` in the configured format.
///
/// Locale settings are emitted as constants next to the routes.
///
/// Refuses to render while any route path is claimed twice: the artifact
/// would silently pick one of the pages.
pub fn generate(
    table: &RouteTable,
    config: &GenerateConfig,
    i18n: &I18nConfig,
) -> Result<String, GenerateError> {
    let conflicts = table.conflicts();
    if !conflicts.is_empty() {
        return Err(GenerateError::Conflicts(conflicts));
    }

    let routes = table.sorted();
    match config.format {
        ArtifactFormat::Rust => Ok(rust::render(&routes, i18n)),
        ArtifactFormat::Json => json::render(&routes, i18n),
    }
}

/// Whether `path` already holds exactly `content`.
pub fn is_up_to_date(path: &Path, content: &str) -> bool {
    fs::read(path).is_ok_and(|existing| existing == content.as_bytes())
}

/// Write `content` to `path` unless it is already there.
///
/// Returns whether the file was written. Parent directories are created.
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool, GenerateError> {
    if is_up_to_date(path, content) {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GenerateError::Io(parent.to_path_buf(), e))?;
    }
    fs::write(path, content).map_err(|e| GenerateError::Io(path.to_path_buf(), e))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteEntry;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn entry(segments: &[&str]) -> RouteEntry {
        let source = if segments.is_empty() {
            "index.astro".to_string()
        } else {
            format!("{}.astro", segments.join("/"))
        };
        RouteEntry::from_segments(segments, PathBuf::from(source))
    }

    fn config(format: ArtifactFormat) -> GenerateConfig {
        GenerateConfig {
            output: PathBuf::from("routes"),
            format,
        }
    }

    #[test]
    fn test_generate_is_order_independent() {
        let a = RouteTable::from_entries(vec![entry(&["about"]), entry(&[]), entry(&["blog", "[slug]"])]);
        let b = RouteTable::from_entries(vec![entry(&["blog", "[slug]"]), entry(&["about"]), entry(&[])]);

        for format in [ArtifactFormat::Rust, ArtifactFormat::Json] {
            let first = generate(&a, &config(format), &I18nConfig::default()).unwrap();
            assert_eq!(first, generate(&b, &config(format), &I18nConfig::default()).unwrap());
            assert_eq!(first, generate(&a, &config(format), &I18nConfig::default()).unwrap());
        }
    }

    #[test]
    fn test_generate_refuses_conflicts() {
        let table = RouteTable::from_entries(vec![
            RouteEntry::from_segments(&["about"], PathBuf::from("about.astro")),
            RouteEntry::from_segments(&["about"], PathBuf::from("about/index.md")),
        ]);
        let err = generate(&table, &config(ArtifactFormat::Rust), &I18nConfig::default()).unwrap_err();

        let GenerateError::Conflicts(conflicts) = &err else {
            panic!("expected conflicts, got {err}");
        };
        assert_eq!(conflicts.len(), 1);
        let message = err.to_string();
        assert!(message.starts_with("1 route path claimed by several pages"));
        assert!(message.contains("about/index.md"));
    }

    #[test]
    fn test_generate_empty_table() {
        let table = RouteTable::default();
        let rust = generate(&table, &config(ArtifactFormat::Rust), &I18nConfig::default()).unwrap();
        assert!(rust.contains("pub enum RouteId {\n}"));

        let json = generate(&table, &config(ArtifactFormat::Json), &I18nConfig::default()).unwrap();
        assert_eq!(json, "{\n  \"routes\": {}\n}\n");
    }

    #[test]
    fn test_write_if_changed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/routes.rs");

        assert!(!is_up_to_date(&path, "a"));
        assert!(write_if_changed(&path, "a").unwrap());
        assert!(is_up_to_date(&path, "a"));
        assert!(!write_if_changed(&path, "a").unwrap());
        assert!(write_if_changed(&path, "b").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "b");
    }
}
