//! typed-routes - typed route discovery and URL building for file-based
//! page trees.
//!
//! The pages directory is the source of truth: [`scan`] walks it into
//! route entries, [`RouteTable`] indexes them for checking references, and
//! [`resolve`] turns a route reference into a URL string.
//!
//! ```text
//! src/pages/blog/[slug].astro  --scan-->     /blog/[slug]  (params: slug)
//! RouteOptions { to, params, locale, search, hash }  --resolve-->  /en/blog/hello?ref=nav#top
//! ```
//!
//! The [`generator`] module renders a table into a declaration artifact
//! (a Rust `RouteId` enum or a JSON manifest) so route references can be
//! checked ahead of time.

pub mod logger;

pub mod cli;
pub mod config;
pub mod generator;
pub mod link;
pub mod route;
pub mod utils;

pub use link::{ParamMap, ResolveError, RouteOptions, resolve, try_resolve};
pub use route::{RouteEntry, RouteTable, scan};
