use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "luxboard", version, about = "Smart office lighting dashboard")]
struct Cli {
    /// Config file to use instead of ~/.config/luxboard/config.toml
    #[arg(long, global = true)]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full dashboard: readings, totals, current status, narrated schedule
    Dashboard(commands::dashboard::DashboardArgs),
    /// Enriched readings and totals, without calling the schedule service
    Table(commands::table::TableArgs),
    /// Current lighting status
    Status(commands::status::StatusArgs),
    /// Print the prompt the schedule service would receive
    Prompt(commands::prompt::PromptArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    // RUST_LOG overrides; stderr keeps stdout clean for --json
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> commands::CommandResult {
    let config_path = match cli.config_file {
        Some(path) => path,
        None => luxboard_core::Config::path()?,
    };
    tracing::debug!(path = %config_path.display(), "using config file");

    match cli.command {
        Commands::Dashboard(args) => commands::dashboard::run(args, &config_path),
        Commands::Table(args) => commands::table::run(args, &config_path),
        Commands::Status(args) => commands::status::run(args, &config_path),
        Commands::Prompt(args) => commands::prompt::run(args, &config_path),
        Commands::Config { action } => commands::config::run(action, &config_path),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
