//! `generate` command: write the declaration artifact.

use anyhow::{Result, bail};

use crate::config::RoutesConfig;
use crate::generator::{self, GenerateError};
use crate::route::{RouteTable, print_conflicts};
use crate::utils::plural_count;
use crate::{debug, log};

/// Execute generate command
///
/// With `check`, nothing is written and a stale artifact is an error.
pub fn run_generate(config: &RoutesConfig, check: bool) -> Result<()> {
    let table = RouteTable::scan(config.pages_dir());
    debug!("generate"; "{} from {}", plural_count(table.len(), "route"), config.pages_dir().display());

    let content = match generator::generate(&table, &config.generate, &config.i18n) {
        Ok(content) => content,
        Err(GenerateError::Conflicts(conflicts)) => {
            print_conflicts(&conflicts);
            bail!("refusing to generate with {}", plural_count(conflicts.len(), "route conflict"));
        }
        Err(e) => return Err(e.into()),
    };

    let output = config.output_path();
    let display = config.root_relative(output);

    if check {
        if !generator::is_up_to_date(output, &content) {
            bail!("{} is out of date, run `typed-routes generate`", display.display());
        }
        log!("generate"; "{} is up to date", display.display());
        return Ok(());
    }

    if generator::write_if_changed(output, &content)? {
        log!("generate"; "{} ({})", display.display(), plural_count(table.len(), "route"));
    } else {
        log!("generate"; "{} unchanged", display.display());
    }
    Ok(())
}
