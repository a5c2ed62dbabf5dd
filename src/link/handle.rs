//! Route helper bound to a single route.

use super::error::ResolveError;
use super::options::RouteOptions;
use super::resolve::try_resolve;
use crate::route::{RouteEntry, RouteTable};

/// A route from the table, with link building checked against it.
///
/// ```ignore
/// let post = table.handle("/blog/[slug]").expect("route exists");
/// let url = post.redirect(post.link().param("slug", "hello"))?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteHandle<'a> {
    table: &'a RouteTable,
    entry: &'a RouteEntry,
}

impl<'a> RouteHandle<'a> {
    pub(crate) fn new(table: &'a RouteTable, entry: &'a RouteEntry) -> Self {
        Self { table, entry }
    }

    /// The route path this handle is bound to.
    pub fn route_id(&self) -> &'a str {
        &self.entry.route_path
    }

    /// Declared param names.
    pub fn params(&self) -> &'a [String] {
        &self.entry.params
    }

    pub fn entry(&self) -> &'a RouteEntry {
        self.entry
    }

    /// A reference to this route, ready for params.
    pub fn link(&self) -> RouteOptions {
        RouteOptions::new(self.entry.route_path.clone())
    }

    /// Destination URL for a redirect to `options`.
    ///
    /// `options` may point at any route of the table, not only this one.
    pub fn redirect(&self, options: RouteOptions) -> Result<String, ResolveError> {
        self.destination(&options)
    }

    /// Destination URL for a rewrite to `options`.
    pub fn rewrite(&self, options: RouteOptions) -> Result<String, ResolveError> {
        self.destination(&options)
    }

    fn destination(&self, options: &RouteOptions) -> Result<String, ResolveError> {
        let issues = self.table.check(options, &[]);
        if !issues.is_empty() {
            return Err(ResolveError::Rejected {
                to: options.to.clone(),
                issues,
            });
        }
        try_resolve(options)
    }
}
