//! Command-line interface module.

mod args;
pub mod check;
pub mod generate;
pub mod resolve;
pub mod scan;

pub use args::{Cli, Commands, ResolveArgs};
