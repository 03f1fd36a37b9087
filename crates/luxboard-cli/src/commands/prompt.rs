use std::path::Path;

use clap::Args;
use luxboard_core::{build_prompt, Config};

use super::{load_table, CommandResult, InputArgs};

#[derive(Args)]
pub struct PromptArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: PromptArgs, config_path: &Path) -> CommandResult {
    let config = Config::load_from(config_path)?;
    let table = load_table(&args.input.input, &config)?;
    println!("{}", build_prompt(&table));
    Ok(())
}
