//! `check` command: fail when route paths collide.

use anyhow::{Result, bail};

use crate::config::RoutesConfig;
use crate::log;
use crate::route::{RouteTable, print_conflicts};
use crate::utils::plural_count;

/// Execute check command
pub fn run_check(config: &RoutesConfig) -> Result<()> {
    let table = RouteTable::scan(config.pages_dir());
    let conflicts = table.conflicts();

    if !conflicts.is_empty() {
        print_conflicts(&conflicts);
        bail!("found {}", plural_count(conflicts.len(), "route conflict"));
    }

    log!("check"; "{}, no conflicts", plural_count(table.len(), "route"));
    Ok(())
}
