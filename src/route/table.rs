//! Route table - every route of one page tree.

use std::path::Path;

use rustc_hash::FxHashMap;

use super::conflict::{RouteConflict, detect_conflicts};
use super::entry::RouteEntry;
use super::scan::scan;
use crate::link::{LinkIssue, RouteHandle, RouteOptions};

/// All routes discovered by one scan, in scan order.
///
/// Rebuilt from scratch on every scan; never patched. Lookups go through
/// an index keyed by route path. When two entries share a route path the
/// index points at the later one, but [`RouteTable::conflicts`] reports
/// every such collision and generation refuses to proceed while any exist.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    index: FxHashMap<String, usize>,
}

impl RouteTable {
    /// Build a table from scanned entries.
    pub fn from_entries(entries: Vec<RouteEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.route_path.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Scan `pages_dir` and build its table.
    pub fn scan(pages_dir: &Path) -> Self {
        Self::from_entries(scan(pages_dir))
    }

    pub fn get(&self, route_path: &str) -> Option<&RouteEntry> {
        self.index.get(route_path).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, route_path: &str) -> bool {
        self.index.contains_key(route_path)
    }

    /// Entries in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    /// Distinct routes sorted by route path.
    pub fn sorted(&self) -> Vec<&RouteEntry> {
        let mut routes: Vec<_> = self.index.values().map(|&i| &self.entries[i]).collect();
        routes.sort_by(|a, b| a.route_path.cmp(&b.route_path));
        routes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Route paths claimed by more than one page file.
    pub fn conflicts(&self) -> Vec<RouteConflict> {
        detect_conflicts(&self.entries)
    }

    /// Check a route reference against this table.
    ///
    /// Reports an unknown route, each missing and unexpected param, and a
    /// locale outside `locales` (only when `locales` is non-empty).
    /// An empty result means the reference is valid.
    pub fn check(&self, options: &RouteOptions, locales: &[String]) -> Vec<LinkIssue> {
        let mut issues = Vec::new();

        if let Some(locale) = options.locale_str()
            && !locales.is_empty()
            && !locales.iter().any(|l| l == locale)
        {
            issues.push(LinkIssue::UnknownLocale(locale.to_string()));
        }

        let Some(entry) = self.get(&options.to) else {
            issues.insert(0, LinkIssue::UnknownRoute(options.to.clone()));
            return issues;
        };

        for name in &entry.params {
            if !options.params.contains_key(name) {
                issues.push(LinkIssue::MissingParam(name.clone()));
            }
        }
        for key in options.params.keys() {
            if !entry.params.iter().any(|p| p == key) {
                issues.push(LinkIssue::UnexpectedParam(key.to_string()));
            }
        }

        issues
    }

    /// Helper bound to one route, if `route_path` is in the table.
    pub fn handle(&self, route_path: &str) -> Option<RouteHandle<'_>> {
        self.get(route_path).map(|entry| RouteHandle::new(self, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_table(paths: &[&str]) -> RouteTable {
        RouteTable::from_entries(
            paths
                .iter()
                .map(|p| {
                    let segments: Vec<_> = p.split('/').filter(|s| !s.is_empty()).collect();
                    RouteEntry::from_segments(&segments, PathBuf::from(format!("{p}.astro")))
                })
                .collect(),
        )
    }

    #[test]
    fn test_lookup() {
        let table = make_table(&["/", "/about", "/blog/[slug]"]);
        assert_eq!(table.len(), 3);
        assert!(table.contains("/blog/[slug]"));
        assert!(!table.contains("/blog/hello"));
        assert_eq!(table.get("/blog/[slug]").unwrap().params, vec!["slug"]);
    }

    #[test]
    fn test_sorted_is_distinct() {
        let table = make_table(&["/z", "/about", "/about", "/"]);
        let sorted: Vec<_> = table.sorted().iter().map(|e| e.route_path.as_str()).collect();
        assert_eq!(sorted, vec!["/", "/about", "/z"]);
        assert_eq!(table.conflicts().len(), 1);
    }

    #[test]
    fn test_check_valid() {
        let table = make_table(&["/blog/[category]/[slug]"]);
        let options = RouteOptions::new("/blog/[category]/[slug]")
            .param("category", "tech")
            .param("slug", "astro");
        assert!(table.check(&options, &[]).is_empty());
    }

    #[test]
    fn test_check_unknown_route() {
        let table = make_table(&["/about"]);
        let issues = table.check(&RouteOptions::new("/abuot"), &[]);
        assert_eq!(issues, vec![LinkIssue::UnknownRoute("/abuot".into())]);
    }

    #[test]
    fn test_check_missing_and_extra_params() {
        let table = make_table(&["/blog/[slug]"]);
        let options = RouteOptions::new("/blog/[slug]").param("id", "1");
        assert_eq!(
            table.check(&options, &[]),
            vec![
                LinkIssue::MissingParam("slug".into()),
                LinkIssue::UnexpectedParam("id".into()),
            ]
        );
    }

    #[test]
    fn test_check_catch_all_uses_raw_name() {
        let table = make_table(&["/docs/[...path]"]);
        let ok = RouteOptions::new("/docs/[...path]").param("...path", "a/b");
        assert!(table.check(&ok, &[]).is_empty());

        let bare = RouteOptions::new("/docs/[...path]").param("path", "a/b");
        assert_eq!(table.check(&bare, &[]).len(), 2);
    }

    #[test]
    fn test_check_locale() {
        let table = make_table(&["/about"]);
        let locales = vec!["en".to_string(), "fr".to_string()];

        let ok = RouteOptions::new("/about").locale("fr");
        assert!(table.check(&ok, &locales).is_empty());

        let bad = RouteOptions::new("/about").locale("xx");
        assert_eq!(
            table.check(&bad, &locales),
            vec![LinkIssue::UnknownLocale("xx".into())]
        );

        // no configured locales: anything goes
        assert!(table.check(&bad, &[]).is_empty());
    }

    #[test]
    fn test_handle_membership() {
        let table = make_table(&["/about"]);
        assert!(table.handle("/about").is_some());
        assert!(table.handle("/missing").is_none());
    }
}
