//! Page scanning (pure, no side effects beyond reading the filesystem).
//!
//! ```text
//! src/pages/
//! ├── index.astro           -> /
//! ├── about.md              -> /about
//! ├── _draft.astro          -> (ignored)
//! ├── 404.astro             -> (ignored)
//! ├── api/
//! │   └── hello.ts          -> (ignored, endpoint)
//! └── blog/
//!     ├── index.astro       -> /blog
//!     ├── [slug].astro      -> /blog/[slug]
//!     └── logo.png          -> (ignored, not a page)
//! ```

use std::path::{Path, PathBuf};

use super::entry::RouteEntry;
use super::page::PageKind;
use super::segment::{file_to_segment, is_index};
use crate::debug;

/// Directory holding API endpoints; never scanned for pages.
pub const API_DIR: &str = "api";

/// Whether a file or directory name is excluded from routing.
///
/// Underscore-prefixed names are private, `404.*` and `500.*` are error pages.
#[inline]
pub fn is_ignored(name: &str) -> bool {
    name.starts_with('_') || name.starts_with("404.") || name.starts_with("500.")
}

/// Scan a pages directory into route entries.
///
/// Depth-first. Entries within a directory are visited in file-name order,
/// so the result is identical across platforms and repeated calls.
///
/// Unreadable directories (missing root, permissions, concurrent deletion)
/// are skipped silently; the scan never fails.
///
/// Duplicate route paths are kept; see [`super::conflict`].
pub fn scan(pages_dir: &Path) -> Vec<RouteEntry> {
    let mut results = Vec::new();
    let mut segments = Vec::new();
    scan_recursive(&mut results, pages_dir, pages_dir, &mut segments);
    results
}

/// Recursive helper for [`scan`].
///
/// `segments` holds the directory names between `root` and `dir`.
fn scan_recursive(
    results: &mut Vec<RouteEntry>,
    dir: &Path,
    root: &Path,
    segments: &mut Vec<String>,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("scan"; "skipping {}: {}", dir.display(), e);
            return;
        }
    };

    let mut entries: Vec<_> = entries.flatten().collect();
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!("scan"; "skipping non-utf8 name in {}", dir.display());
            continue;
        };

        if is_ignored(name) {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            // API routes are endpoints, not pages
            if name == API_DIR {
                continue;
            }
            segments.push(name.to_string());
            scan_recursive(results, &path, root, segments);
            segments.pop();
            continue;
        }

        if PageKind::from_file_name(name).is_none() {
            continue;
        }

        results.push(page_entry(segments, name, &path, root));
    }
}

/// Build the entry for one page file inside `segments`.
fn page_entry(segments: &[String], name: &str, path: &Path, root: &Path) -> RouteEntry {
    let segment = file_to_segment(name);
    let source = path
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| PathBuf::from(name));

    // `index` at any depth stands for its parent directory
    if is_index(segment) {
        return RouteEntry::from_segments(segments, source);
    }

    let mut route_segments = segments.to_vec();
    route_segments.push(segment.to_string());
    RouteEntry::from_segments(&route_segments, source)
}
