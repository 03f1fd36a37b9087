//! Enriched readings and totals, computed locally.

use std::path::Path;

use clap::Args;
use luxboard_core::Config;
use serde_json::json;

use super::{load_table, render, CommandResult, InputArgs};

#[derive(Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Print machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TableArgs, config_path: &Path) -> CommandResult {
    let config = Config::load_from(config_path)?;
    let table = load_table(&args.input.input, &config)?;
    let summary = table.summary();

    if args.json {
        let out = json!({ "summary": summary, "readings": table });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", render::table(&table));
        println!("{}", render::summary(&summary));
    }
    Ok(())
}
