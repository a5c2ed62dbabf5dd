//! Segment classification.
//!
//! Pure functions over a single file name or path segment. No side effects.
//!
//! ```text
//! about.astro      -> "about"        static
//! [slug].astro     -> "[slug]"       dynamic
//! [...path].md     -> "[...path]"    dynamic + catch-all
//! index.astro      -> "index"        collapses into parent
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::page::PageKind;

/// Marker that turns a dynamic segment into a catch-all.
pub const CATCH_ALL_PREFIX: &str = "...";

/// Matches every bracketed placeholder, capturing the inner name.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("placeholder regex is valid"));

/// Strip a recognized page extension from a file name.
///
/// Names without a recognized extension pass through unchanged.
///
/// # Examples
/// ```
/// use typed_routes::route::segment::file_to_segment;
/// assert_eq!(file_to_segment("about.astro"), "about");
/// assert_eq!(file_to_segment("[slug].md"), "[slug]");
/// assert_eq!(file_to_segment("styles.css"), "styles.css");
/// ```
pub fn file_to_segment(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if PageKind::from_extension(ext).is_some() => stem,
        _ => filename,
    }
}

/// Whether a segment is wrapped in brackets, e.g. `[slug]`.
#[inline]
pub fn is_dynamic(segment: &str) -> bool {
    segment.starts_with('[') && segment.ends_with(']')
}

/// Whether a segment is a catch-all, e.g. `[...slug]`.
///
/// Every catch-all segment is also dynamic.
#[inline]
pub fn is_catch_all(segment: &str) -> bool {
    is_dynamic(segment) && segment[1..].starts_with(CATCH_ALL_PREFIX)
}

/// Whether a segment (already stripped of its extension) is `index`.
#[inline]
pub fn is_index(segment: &str) -> bool {
    segment == "index"
}

/// Extract placeholder names from an assembled route path, left to right.
///
/// Catch-all names keep their `...` prefix; see [`catch_all_name`].
///
/// # Examples
/// ```
/// use typed_routes::route::segment::extract_params;
/// assert_eq!(extract_params("/blog/[category]/[slug]"), ["category", "slug"]);
/// assert_eq!(extract_params("/docs/[...path]"), ["...path"]);
/// ```
pub fn extract_params(route_path: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(route_path)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Strip the catch-all marker from a raw placeholder name.
///
/// `"...path"` -> `"path"`, `"slug"` -> `"slug"`.
#[inline]
pub fn catch_all_name(raw: &str) -> &str {
    raw.strip_prefix(CATCH_ALL_PREFIX).unwrap_or(raw)
}

/// Convert bracket placeholders to colon syntax.
///
/// `[slug]` becomes `:slug` and `[...rest]` becomes `*rest`.
///
/// # Examples
/// ```
/// use typed_routes::route::segment::to_pattern;
/// assert_eq!(to_pattern("/blog/[slug]"), "/blog/:slug");
/// assert_eq!(to_pattern("/docs/[...path]"), "/docs/*path");
/// ```
pub fn to_pattern(route_path: &str) -> String {
    PLACEHOLDER
        .replace_all(route_path, |caps: &regex::Captures<'_>| {
            let raw = &caps[1];
            match raw.strip_prefix(CATCH_ALL_PREFIX) {
                Some(name) => format!("*{name}"),
                None => format!(":{raw}"),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_to_segment() {
        assert_eq!(file_to_segment("about.astro"), "about");
        assert_eq!(file_to_segment("index.md"), "index");
        assert_eq!(file_to_segment("[slug].tsx"), "[slug]");
        assert_eq!(file_to_segment("[...path].mdx"), "[...path]");
        assert_eq!(file_to_segment("rss.xml.js"), "rss.xml");
    }

    #[test]
    fn test_file_to_segment_passthrough() {
        assert_eq!(file_to_segment("logo.png"), "logo.png");
        assert_eq!(file_to_segment("README"), "README");
        assert_eq!(file_to_segment("page.ASTRO"), "page.ASTRO");
    }

    #[test]
    fn test_is_dynamic() {
        assert!(is_dynamic("[slug]"));
        assert!(is_dynamic("[...slug]"));
        assert!(!is_dynamic("slug"));
        assert!(!is_dynamic("[slug"));
        assert!(!is_dynamic("slug]"));
        assert!(!is_dynamic("pre-[slug]"));
    }

    #[test]
    fn test_is_catch_all() {
        assert!(is_catch_all("[...slug]"));
        assert!(!is_catch_all("[slug]"));
        assert!(!is_catch_all("...slug"));
        assert!(!is_catch_all("[..slug]"));
    }

    #[test]
    fn test_catch_all_implies_dynamic() {
        for segment in ["[...a]", "[...rest]", "[a]", "about", "[...]"] {
            if is_catch_all(segment) {
                assert!(is_dynamic(segment), "{segment} is catch-all but not dynamic");
            }
        }
    }

    #[test]
    fn test_is_index() {
        assert!(is_index("index"));
        assert!(is_index(file_to_segment("index.astro")));
        assert!(!is_index("index.astro"));
        assert!(!is_index("indexes"));
        assert!(!is_index("[index]"));
    }

    #[test]
    fn test_extract_params_order() {
        assert_eq!(extract_params("/blog/[category]/[slug]"), vec!["category", "slug"]);
        assert_eq!(extract_params("/[lang]/docs/[...path]"), vec!["lang", "...path"]);
        assert!(extract_params("/about").is_empty());
        assert!(extract_params("/").is_empty());
    }

    #[test]
    fn test_catch_all_name() {
        assert_eq!(catch_all_name("...path"), "path");
        assert_eq!(catch_all_name("slug"), "slug");
    }

    #[test]
    fn test_to_pattern() {
        assert_eq!(to_pattern("/about"), "/about");
        assert_eq!(to_pattern("/blog/[slug]"), "/blog/:slug");
        assert_eq!(to_pattern("/[lang]/docs/[...path]"), "/:lang/docs/*path");
    }
}
