//! Route conflict detection.
//!
//! Two page files may collapse onto one route path, e.g. `about.astro`
//! and `about/index.md`. The scanner keeps both; this module finds them.

use std::path::PathBuf;

use rustc_hash::FxHashMap;

use super::entry::RouteEntry;
use crate::log;
use crate::utils::plural_s;

/// A route conflict: multiple page files claim the same route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConflict {
    /// The contested route path
    pub route_path: String,
    /// All page files claiming it, in scan order (relative to pages root)
    pub sources: Vec<PathBuf>,
}

/// Detect route paths claimed by more than one entry.
///
/// Conflicts are returned sorted by route path.
pub fn detect_conflicts(entries: &[RouteEntry]) -> Vec<RouteConflict> {
    let mut sources: FxHashMap<&str, Vec<PathBuf>> = FxHashMap::default();
    for entry in entries {
        sources
            .entry(entry.route_path.as_str())
            .or_default()
            .push(entry.source.clone());
    }

    let mut conflicts: Vec<_> = sources
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(route_path, sources)| RouteConflict {
            route_path: route_path.to_string(),
            sources,
        })
        .collect();
    conflicts.sort_by(|a, b| a.route_path.cmp(&b.route_path));
    conflicts
}

/// Print conflicts using the standard log format.
///
/// Output format:
/// ```text
/// [error] route conflicts (1 route, 2 sources)
/// [route] /about (2 sources)
///   - about.astro
///   - about/index.md
/// ```
pub fn print_conflicts(conflicts: &[RouteConflict]) {
    if conflicts.is_empty() {
        return;
    }

    let total_sources: usize = conflicts.iter().map(|c| c.sources.len()).sum();
    log!("error"; "route conflicts ({} route{}, {} source{})",
        conflicts.len(), plural_s(conflicts.len()),
        total_sources, plural_s(total_sources));

    for conflict in conflicts {
        eprintln!();
        log!("route"; "{} ({} source{})", conflict.route_path, conflict.sources.len(), plural_s(conflict.sources.len()));
        for source in &conflict.sources {
            eprintln!("  - {}", source.display());
        }
    }
}

/// Format conflicts as a string (for error messages).
pub fn format_conflicts(conflicts: &[RouteConflict]) -> String {
    conflicts
        .iter()
        .map(format_single_conflict)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single conflict for display.
fn format_single_conflict(conflict: &RouteConflict) -> String {
    let mut lines = vec![format!("{} ({})", conflict.route_path, conflict.sources.len())];
    for source in &conflict.sources {
        lines.push(format!("  - {}", source.display()));
    }
    lines.join("\n")
}
