//! JSON route manifest.
//!
//! ```json
//! {
//!   "routes": {
//!     "/blog/[slug]": { "pattern": "/blog/:slug", "params": ["slug"] }
//!   },
//!   "locales": ["en", "fr"],
//!   "default_locale": "en"
//! }
//! ```
//!
//! `locales` and `default_locale` are omitted when not configured.

use std::collections::BTreeMap;

use serde::Serialize;

use super::GenerateError;
use crate::config::I18nConfig;
use crate::route::RouteEntry;

#[derive(Serialize)]
struct Manifest<'a> {
    routes: BTreeMap<&'a str, RouteShape<'a>>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    locales: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    default_locale: Option<&'a str>,
}

#[derive(Serialize)]
struct RouteShape<'a> {
    pattern: String,
    params: &'a [String],
}

/// Render the manifest for `routes`; keys come out sorted.
pub fn render(routes: &[&RouteEntry], i18n: &I18nConfig) -> Result<String, GenerateError> {
    let manifest = Manifest {
        routes: routes
            .iter()
            .map(|route| {
                let shape = RouteShape {
                    pattern: route.pattern(),
                    params: &route.params,
                };
                (route.route_path.as_str(), shape)
            })
            .collect(),
        locales: &i18n.locales,
        default_locale: i18n.default_locale.as_deref(),
    };

    let mut out = serde_json::to_string_pretty(&manifest)?;
    out.push('\n');
    Ok(out)
}
