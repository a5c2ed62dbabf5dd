//! `[i18n]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! default_locale = "en"
//! locales = ["en", "fr", "de"]
//! ```
//!
//! With no locales configured any locale is accepted. `default_locale`
//! is emitted as `DEFAULT_LOCALE` in the generated artifact.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale of links that carry no prefix.
    ///
    /// Only validated and emitted into the generated artifact; URL
    /// building never adds it.
    pub default_locale: Option<String>,

    /// Accepted locale prefixes.
    pub locales: Vec<String>,
}

impl I18nConfig {
    pub fn is_enabled(&self) -> bool {
        !self.locales.is_empty()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, locale) in self.locales.iter().enumerate() {
            if locale.is_empty() || locale.contains(['/', '?', '#']) {
                diag.error(
                    FieldPath::new("i18n.locales"),
                    format!("'{locale}' is not a valid path segment"),
                );
            }
            if self.locales[..i].contains(locale) {
                diag.error(FieldPath::new("i18n.locales"), format!("'{locale}' is listed twice"));
            }
        }

        if let Some(default) = &self.default_locale
            && self.is_enabled()
            && !self.locales.contains(default)
        {
            diag.error_with_hint(
                FieldPath::new("i18n.default_locale"),
                format!("'{default}' is not in `i18n.locales`"),
                format!("add \"{default}\" to `i18n.locales`"),
            );
        }
    }
}
