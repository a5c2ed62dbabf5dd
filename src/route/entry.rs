//! Route entry - one discovered page route.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::segment::{extract_params, to_pattern};

/// A page route discovered by the scanner
///
/// ```text
/// Source: src/pages/blog/[slug].astro
///
/// RouteEntry {
///     route_path: /blog/[slug]
///     params:     ["slug"]
///     source:     blog/[slug].astro
/// }
/// ```
///
/// Invariants:
/// - `route_path` always starts with `/`
/// - `route_path` never ends with `/` unless it is the root route
/// - `params` lists the placeholders of `route_path` left to right
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// Route path with bracket placeholders (e.g., `/blog/[slug]`)
    pub route_path: String,
    /// Placeholder names in order of appearance (catch-alls keep `...`)
    pub params: Vec<String>,
    /// Page file relative to the pages root (diagnostics only)
    #[serde(skip)]
    pub source: PathBuf,
}

impl RouteEntry {
    /// Build an entry from path segments, extracting its params.
    ///
    /// An empty segment list yields the root route `/`.
    pub fn from_segments<S: AsRef<str>>(segments: &[S], source: PathBuf) -> Self {
        let route_path = if segments.is_empty() {
            "/".to_string()
        } else {
            let mut path = String::new();
            for segment in segments {
                path.push('/');
                path.push_str(segment.as_ref());
            }
            path
        };

        Self {
            params: extract_params(&route_path),
            route_path,
            source,
        }
    }

    /// Whether the route takes no params.
    #[inline]
    pub fn is_static(&self) -> bool {
        self.params.is_empty()
    }

    /// Whether the route ends in a catch-all segment.
    pub fn has_catch_all(&self) -> bool {
        self.params.iter().any(|p| p.starts_with(super::segment::CATCH_ALL_PREFIX))
    }

    /// Colon-syntax pattern (e.g., `/blog/:slug`).
    pub fn pattern(&self) -> String {
        to_pattern(&self.route_path)
    }
}

impl fmt::Display for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.route_path)
    }
}
