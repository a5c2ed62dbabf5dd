//! Configuration section definitions.
//!
//! Each module corresponds to a section in `typed-routes.toml`:
//!
//! | Module     | TOML Section   | Purpose                           |
//! |------------|----------------|-----------------------------------|
//! | `pages`    | `[pages]`      | Pages root directory              |
//! | `generate` | `[generate]`   | Declaration artifact output       |
//! | `i18n`     | `[i18n]`       | Accepted locale prefixes          |

mod generate;
mod i18n;
mod pages;

pub use generate::{ArtifactFormat, GenerateConfig};
pub use i18n::I18nConfig;
pub use pages::PagesConfig;
