//! `scan` command: list the routes of the pages directory.

use std::io::{self, Write};

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::config::RoutesConfig;
use crate::log;
use crate::route::{RouteEntry, RouteTable, print_conflicts};
use crate::utils::plural_count;

/// One row of `scan --json` output.
#[derive(Debug, Serialize)]
struct ScanRow<'a> {
    route_path: &'a str,
    pattern: String,
    params: &'a [String],
    source: String,
}

impl<'a> From<&'a RouteEntry> for ScanRow<'a> {
    fn from(entry: &'a RouteEntry) -> Self {
        Self {
            route_path: &entry.route_path,
            pattern: entry.pattern(),
            params: &entry.params,
            source: crate::utils::path::to_slash(&entry.source),
        }
    }
}

/// Execute scan command
pub fn run_scan(config: &RoutesConfig, json: bool, pattern: bool) -> Result<()> {
    let table = RouteTable::scan(config.pages_dir());
    let mut stdout = io::stdout().lock();

    if json {
        let rows: Vec<ScanRow<'_>> = table.iter().map(ScanRow::from).collect();
        serde_json::to_writer_pretty(&mut stdout, &rows)?;
        writeln!(stdout)?;
    } else {
        write_table(&mut stdout, &table, pattern)?;
    }

    log!("scan"; "{} in {}",
        plural_count(table.len(), "route"),
        config.root_relative(config.pages_dir()).display());
    print_conflicts(&table.conflicts());
    Ok(())
}

/// Aligned `route  source` listing in scan order.
fn write_table(out: &mut impl Write, table: &RouteTable, pattern: bool) -> io::Result<()> {
    let paths: Vec<String> = table
        .iter()
        .map(|entry| {
            if pattern {
                entry.pattern()
            } else {
                entry.route_path.clone()
            }
        })
        .collect();
    let width = paths.iter().map(String::len).max().unwrap_or(0);

    for (path, entry) in paths.iter().zip(table.iter()) {
        let source = crate::utils::path::to_slash(&entry.source);
        writeln!(
            out,
            "{path:<width$}  {}",
            source.if_supports_color(Stream::Stdout, |s| s.dimmed())
        )?;
    }
    Ok(())
}
