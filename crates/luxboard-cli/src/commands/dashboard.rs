//! Full dashboard: the CLI counterpart of the lighting web dashboard.

use std::path::{Path, PathBuf};

use clap::Args;
use luxboard_core::dashboard::WELCOME;
use luxboard_core::{
    Config, Dashboard, DashboardRequest, LineFormatter, PlainFormatter, ScheduleFormatter,
};
use serde_json::json;

use super::{render, CommandResult, StatusOptions};

#[derive(Args)]
pub struct DashboardArgs {
    /// Daylight CSV with `time` and `lux` columns
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Schedule service API key (falls back to LUXBOARD_API_KEY, then config)
    #[arg(long)]
    pub api_key: Option<String>,
    #[command(flatten)]
    pub status: StatusOptions,
    /// Print machine-readable JSON
    #[arg(long)]
    pub json: bool,
    /// Show the narrated schedule verbatim
    #[arg(long)]
    pub raw: bool,
}

pub fn run(args: DashboardArgs, config_path: &Path) -> CommandResult {
    let config = Config::load_from(config_path)?;
    let request = DashboardRequest {
        input: args.input,
        api_key: config.resolve_api_key(args.api_key.as_deref()),
        now: args.status.now()?,
        brightness_override: args.status.brightness_override,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let outcome = runtime.block_on(request.run(&config))?;

    let (report, schedule) = match outcome {
        Dashboard::Welcome => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&Dashboard::Welcome)?);
            } else {
                print!("{WELCOME}");
            }
            return Ok(());
        }
        Dashboard::Ready { report, schedule } => (report, schedule),
    };

    let formatter: Box<dyn ScheduleFormatter> = if args.raw {
        Box::new(PlainFormatter)
    } else {
        Box::new(LineFormatter)
    };
    let formatted = formatter.format(&schedule);

    if args.json {
        let out = json!({
            "state": "ready",
            "report": report,
            "schedule": formatted,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Current Lighting Status");
    println!("{}", "=".repeat(50));
    println!("{}\n", render::status(&report.status));
    println!("{}\n", render::summary(&report.summary));
    println!("Data Overview");
    println!("{}", "=".repeat(50));
    println!("{}", render::table(&report.readings));
    println!("Smart Schedule");
    println!("{}", "=".repeat(50));
    println!("{}", render::schedule(&formatted));

    Ok(())
}
