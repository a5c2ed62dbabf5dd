//! Rust route module.
//!
//! # Output Format
//!
//! ```text
//! // @generated by typed-routes. Do not edit.
//!
//! pub enum RouteId {
//!     /// `/blog/[slug]`
//!     BlogBySlug,
//! }
//!
//! impl RouteId {
//!     pub const ALL: &[RouteId] = &[RouteId::BlogBySlug];
//!     pub const fn as_str(self) -> &'static str { .. }
//!     pub const fn params(self) -> &'static [&'static str] { .. }
//! }
//!
//! impl FromStr for RouteId { .. }
//! pub fn required_params(path: &str) -> Option<&'static [&'static str]> { .. }
//! pub const LOCALES: &[&str] = &["en", "fr"];
//! pub const DEFAULT_LOCALE: &str = "en";
//! ```

use std::fmt::Write;

use rustc_hash::FxHashSet;

use super::GENERATED_HEADER;
use crate::config::I18nConfig;
use crate::route::RouteEntry;
use crate::route::segment::{CATCH_ALL_PREFIX, is_catch_all, is_dynamic};

/// Render the route module for `routes`, which must be sorted and distinct.
pub fn render(routes: &[&RouteEntry], i18n: &I18nConfig) -> String {
    let names = variant_names(routes);
    let mut out = String::with_capacity(1024 + routes.len() * 160);

    out.push_str(GENERATED_HEADER);
    out.push_str("\n\n");

    // enum
    out.push_str("/// Routes discovered under the pages directory.\n");
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]\n");
    out.push_str("pub enum RouteId {\n");
    for (route, name) in routes.iter().zip(&names) {
        let _ = writeln!(out, "    /// `{}`", route.route_path);
        let _ = writeln!(out, "    {name},");
    }
    out.push_str("}\n\n");

    // inherent impl
    out.push_str("impl RouteId {\n");
    out.push_str("    /// Every route, sorted by route path.\n");
    out.push_str("    pub const ALL: &[RouteId] = &[");
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "RouteId::{name}");
    }
    out.push_str("];\n\n");

    out.push_str("    /// Route path with bracket placeholders.\n");
    out.push_str("    pub const fn as_str(self) -> &'static str {\n");
    out.push_str("        match self {\n");
    for (route, name) in routes.iter().zip(&names) {
        let _ = writeln!(out, "            RouteId::{name} => {:?},", route.route_path);
    }
    out.push_str("        }\n    }\n\n");

    out.push_str("    /// Param names the route requires, in path order.\n");
    out.push_str("    pub const fn params(self) -> &'static [&'static str] {\n");
    out.push_str("        match self {\n");
    for (route, name) in routes.iter().zip(&names) {
        let _ = writeln!(out, "            RouteId::{name} => &[{}],", string_list(&route.params));
    }
    out.push_str("        }\n    }\n}\n\n");

    // FromStr / Display
    out.push_str("impl ::core::str::FromStr for RouteId {\n");
    out.push_str("    type Err = UnknownRoute;\n\n");
    out.push_str("    fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {\n");
    out.push_str("        match s {\n");
    for (route, name) in routes.iter().zip(&names) {
        let _ = writeln!(out, "            {:?} => Ok(RouteId::{name}),", route.route_path);
    }
    out.push_str("            _ => Err(UnknownRoute),\n");
    out.push_str("        }\n    }\n}\n\n");

    out.push_str("impl ::core::fmt::Display for RouteId {\n");
    out.push_str("    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {\n");
    out.push_str("        f.write_str(self.as_str())\n");
    out.push_str("    }\n}\n\n");

    out.push_str("/// Error for a route path that is not in [`RouteId`].\n");
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq)]\n");
    out.push_str("pub struct UnknownRoute;\n\n");

    out.push_str("/// Params required by `path`, or `None` for an unknown route.\n");
    out.push_str("pub fn required_params(path: &str) -> Option<&'static [&'static str]> {\n");
    out.push_str("    path.parse::<RouteId>().ok().map(RouteId::params)\n");
    out.push_str("}\n");

    if i18n.is_enabled() {
        out.push_str("\n/// Accepted locale prefixes.\n");
        let _ = writeln!(out, "pub const LOCALES: &[&str] = &[{}];", string_list(&i18n.locales));
    }
    if let Some(default) = &i18n.default_locale {
        out.push_str("\n/// Locale of links that carry none.\n");
        let _ = writeln!(out, "pub const DEFAULT_LOCALE: &str = {default:?};");
    }

    out
}

fn string_list(items: &[String]) -> String {
    items
        .iter()
        .map(|s| format!("{s:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Variant names for `routes`, unique within the list.
///
/// Later routes that collide with an earlier name get a numeric suffix.
fn variant_names(routes: &[&RouteEntry]) -> Vec<String> {
    let mut used = FxHashSet::default();
    routes
        .iter()
        .map(|route| {
            let base = variant_name(&route.route_path);
            let mut name = base.clone();
            let mut n = 2;
            while !used.insert(name.clone()) {
                name = format!("{base}{n}");
                n += 1;
            }
            name
        })
        .collect()
}

/// PascalCase identifier for a route path.
///
/// ```text
/// /                    -> Index
/// /blog/[slug]         -> BlogBySlug
/// /docs/[...path]      -> DocsAllPath
/// /blog/my-first-post  -> BlogMyFirstPost
/// ```
fn variant_name(route_path: &str) -> String {
    let mut name = String::new();
    for segment in route_path.split('/').filter(|s| !s.is_empty()) {
        let words = if is_catch_all(segment) {
            name.push_str("All");
            &segment[1 + CATCH_ALL_PREFIX.len()..segment.len() - 1]
        } else if is_dynamic(segment) {
            name.push_str("By");
            &segment[1..segment.len() - 1]
        } else {
            segment
        };
        push_pascal(&mut name, words);
    }

    if name.is_empty() {
        return "Index".to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) || name == "Self" {
        name.insert_str(0, "Route");
    }
    name
}

/// Append `words` in PascalCase, dropping every non-ASCII-alphanumeric char.
fn push_pascal(out: &mut String, words: &str) {
    for word in words.split(|c: char| !c.is_ascii_alphanumeric()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }
}
