//! Config field path.

/// Dotted path of a config field, used to point diagnostics at the
/// offending line of `typed-routes.toml`.
///
/// ```ignore
/// diag.error(FieldPath::new("generate.output"), "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}
