//! URL building.
//!
//! Four stages, always in this order, each working on the previous output:
//!
//! ```text
//! /blog/[slug]  --params-->  /blog/post-1
//!               --locale-->  /en/blog/post-1
//!               --search-->  /en/blog/post-1?sort=asc
//!               --hash---->  /en/blog/post-1?sort=asc#comments
//! ```

use url::form_urlencoded;

use super::error::ResolveError;
use super::options::{ParamMap, RouteOptions};
use crate::route::segment::extract_params;

/// Build the URL for a route reference.
///
/// Total: placeholders without a value stay in the output as written,
/// params without a placeholder are ignored. Use [`try_resolve`] to
/// reject such references instead.
pub fn resolve(options: &RouteOptions) -> String {
    finish(substitute_params(&options.to, &options.params), options)
}

/// Build the URL for a route reference, rejecting malformed ones.
///
/// Fails when `to` is empty, does not start with `/`, or when any of its
/// placeholders is still present after substitution. That covers missing
/// params, repeated placeholders and values that spell another placeholder.
pub fn try_resolve(options: &RouteOptions) -> Result<String, ResolveError> {
    if options.to.is_empty() {
        return Err(ResolveError::EmptyTarget);
    }
    if !options.to.starts_with('/') {
        return Err(ResolveError::RelativeTarget(options.to.clone()));
    }

    let path = substitute_params(&options.to, &options.params);

    let mut missing: Vec<String> = Vec::new();
    for name in extract_params(&options.to) {
        if path.contains(&format!("[{name}]")) && !missing.contains(&name) {
            missing.push(name);
        }
    }
    if !missing.is_empty() {
        return Err(ResolveError::UnresolvedParams {
            to: options.to.clone(),
            missing,
        });
    }

    Ok(finish(path, options))
}

/// Apply the locale, search and hash stages to a substituted path.
fn finish(mut path: String, options: &RouteOptions) -> String {
    if let Some(locale) = options.locale_str() {
        path.insert(0, '/');
        path.insert_str(1, locale);
    }

    if !options.search.is_empty() {
        path.push('?');
        path.push_str(&encode_search(&options.search));
    }

    if let Some(hash) = options.hash_str() {
        path.push('#');
        path.push_str(hash);
    }

    path
}

/// Replace the first `[key]` in `to` for each param, in insertion order.
fn substitute_params(to: &str, params: &ParamMap) -> String {
    let mut path = to.to_string();
    for (key, value) in params.iter() {
        let placeholder = format!("[{key}]");
        if let Some(start) = path.find(&placeholder) {
            path.replace_range(start..start + placeholder.len(), value);
        }
    }
    path
}

/// Serialize query params as `application/x-www-form-urlencoded`.
fn encode_search(search: &ParamMap) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(search.iter())
        .finish()
}
