use std::path::Path;

use clap::Args;
use luxboard_core::{resolve_status, Config};

use super::{load_table, render, CommandResult, InputArgs, StatusOptions};

#[derive(Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub status: StatusOptions,
    /// Print machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: StatusArgs, config_path: &Path) -> CommandResult {
    let config = Config::load_from(config_path)?;
    let table = load_table(&args.input.input, &config)?;
    let status = resolve_status(&table, args.status.now()?, args.status.brightness_override);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{}", render::status(&status));
    }
    Ok(())
}
