//! Link resolution error types.

use std::fmt;

use thiserror::Error;

/// A single problem with a route reference, found by checking it
/// against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkIssue {
    /// `to` is not a scanned route path
    UnknownRoute(String),
    /// The route declares this param but no value was given
    MissingParam(String),
    /// A value was given for a param the route does not declare
    UnexpectedParam(String),
    /// The locale is not one of the configured locales
    UnknownLocale(String),
}

impl fmt::Display for LinkIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRoute(to) => write!(f, "unknown route `{to}`"),
            Self::MissingParam(name) => write!(f, "missing param `{name}`"),
            Self::UnexpectedParam(name) => write!(f, "unexpected param `{name}`"),
            Self::UnknownLocale(locale) => write!(f, "unknown locale `{locale}`"),
        }
    }
}

/// Errors from strict URL resolution.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("route reference has an empty `to`")]
    EmptyTarget,

    #[error("route `{0}` must start with `/`")]
    RelativeTarget(String),

    #[error("route `{to}` has unresolved params: {}", .missing.join(", "))]
    UnresolvedParams { to: String, missing: Vec<String> },

    #[error("invalid link to `{to}`: {}", join_issues(.issues))]
    Rejected { to: String, issues: Vec<LinkIssue> },
}

fn join_issues(issues: &[LinkIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_error_display() {
        let err = ResolveError::UnresolvedParams {
            to: "/blog/[category]/[slug]".into(),
            missing: vec!["category".into(), "slug".into()],
        };
        assert_eq!(
            err.to_string(),
            "route `/blog/[category]/[slug]` has unresolved params: category, slug"
        );

        let err = ResolveError::Rejected {
            to: "/blog/[slug]".into(),
            issues: vec![
                LinkIssue::MissingParam("slug".into()),
                LinkIssue::UnexpectedParam("id".into()),
            ],
        };
        assert_eq!(
            err.to_string(),
            "invalid link to `/blog/[slug]`: missing param `slug`, unexpected param `id`"
        );
    }
}
