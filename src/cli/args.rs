//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{ArtifactFormat, CONFIG_FILE};

/// Typed route discovery and URL building for file-based page trees
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: typed-routes.toml, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Pages directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub pages: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan the pages directory and list its routes
    #[command(visible_alias = "s")]
    Scan {
        /// Print routes as JSON
        #[arg(short, long)]
        json: bool,

        /// Show colon-syntax patterns (e.g., /blog/:slug)
        #[arg(short = 'P', long)]
        pattern: bool,
    },

    /// Write the declaration artifact for the current routes
    #[command(visible_alias = "g")]
    Generate {
        /// Output file (relative to project root)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Artifact format
        #[arg(short, long)]
        format: Option<ArtifactFormat>,

        /// Fail instead of writing when the artifact is out of date
        #[arg(long)]
        check: bool,
    },

    /// Build a URL from a route reference
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Report route paths claimed by several pages
    #[command(visible_alias = "c")]
    Check,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Route path with bracket placeholders (e.g., /blog/[slug])
    #[arg(short, long)]
    pub to: String,

    /// Param value, repeatable (e.g., --param slug=hello)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// Locale prefix (e.g., fr -> /fr/...)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Query param, repeatable, kept in the given order
    #[arg(short, long, value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub search: Vec<(String, String)>,

    /// Fragment without the leading `#`
    #[arg(long)]
    pub hash: Option<String>,

    /// Check the reference against the scanned routes and fail on any issue
    #[arg(long)]
    pub strict: bool,
}

/// Parse a `KEY=VALUE` pair; the value may itself contain `=`.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))
}

impl Cli {
    /// Config file name to search for.
    pub fn config_name(&self) -> &Path {
        self.config.as_deref().unwrap_or(Path::new(CONFIG_FILE))
    }

    pub const fn is_generate(&self) -> bool {
        matches!(self.command, Commands::Generate { .. })
    }
}
