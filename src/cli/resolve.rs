//! `resolve` command: build a URL from a route reference.

use anyhow::Result;

use super::args::ResolveArgs;
use crate::config::RoutesConfig;
use crate::link::{ResolveError, RouteOptions, resolve, try_resolve};
use crate::route::RouteTable;

impl From<&ResolveArgs> for RouteOptions {
    fn from(args: &ResolveArgs) -> Self {
        Self {
            to: args.to.clone(),
            params: args.params.iter().cloned().collect(),
            locale: args.locale.clone(),
            search: args.search.iter().cloned().collect(),
            hash: args.hash.clone(),
        }
    }
}

/// Execute resolve command, printing the URL to stdout.
pub fn run_resolve(config: &RoutesConfig, args: &ResolveArgs) -> Result<()> {
    let options = RouteOptions::from(args);
    let url = if args.strict {
        resolve_strict(config, &options)?
    } else {
        resolve(&options)
    };
    println!("{url}");
    Ok(())
}

/// Resolve after checking the reference against a fresh scan.
fn resolve_strict(config: &RoutesConfig, options: &RouteOptions) -> Result<String, ResolveError> {
    let table = RouteTable::scan(config.pages_dir());
    let issues = table.check(options, config.locales());
    if !issues.is_empty() {
        return Err(ResolveError::Rejected {
            to: options.to.clone(),
            issues,
        });
    }
    try_resolve(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::LinkIssue;
    use std::fs;
    use tempfile::TempDir;

    fn args(to: &str) -> ResolveArgs {
        ResolveArgs {
            to: to.to_string(),
            params: Vec::new(),
            locale: None,
            search: Vec::new(),
            hash: None,
            strict: true,
        }
    }

    fn config_with_pages(dir: &TempDir, locales: &[&str]) -> RoutesConfig {
        let pages = dir.path().join("pages");
        fs::create_dir_all(pages.join("blog")).unwrap();
        fs::write(pages.join("blog/[slug].astro"), "").unwrap();

        let mut config = RoutesConfig::default();
        config.pages.dir = pages;
        config.i18n.locales = locales.iter().map(|l| l.to_string()).collect();
        config
    }

    #[test]
    fn test_options_from_args() {
        let mut cli_args = args("/blog/[slug]");
        cli_args.params = vec![("slug".into(), "hi".into())];
        cli_args.search = vec![("b".into(), "2".into()), ("a".into(), "1".into())];
        cli_args.hash = Some("top".into());

        let options = RouteOptions::from(&cli_args);
        assert_eq!(resolve(&options), "/blog/hi?b=2&a=1#top");
    }

    #[test]
    fn test_strict_accepts_known_route() {
        let dir = TempDir::new().unwrap();
        let config = config_with_pages(&dir, &["en", "fr"]);
        let mut known = args("/blog/[slug]");
        known.params = vec![("slug".into(), "hi".into())];
        known.locale = Some("fr".into());

        let url = resolve_strict(&config, &RouteOptions::from(&known));
        assert_eq!(url, Ok("/fr/blog/hi".to_string()));
    }

    #[test]
    fn test_strict_rejects_unknown_locale_and_route() {
        let dir = TempDir::new().unwrap();
        let config = config_with_pages(&dir, &["en"]);

        let mut foreign = args("/blog/[slug]");
        foreign.params = vec![("slug".into(), "hi".into())];
        foreign.locale = Some("de".into());
        assert_eq!(
            resolve_strict(&config, &RouteOptions::from(&foreign)),
            Err(ResolveError::Rejected {
                to: "/blog/[slug]".into(),
                issues: vec![LinkIssue::UnknownLocale("de".into())],
            })
        );

        let err = resolve_strict(&config, &RouteOptions::from(&args("/blgo"))).unwrap_err();
        assert!(err.to_string().contains("unknown route `/blgo`"));
    }
}
