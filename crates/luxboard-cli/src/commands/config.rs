use std::path::Path;

use clap::Subcommand;
use luxboard_core::Config;

use super::CommandResult;

/// Printed in place of a stored API key.
const SECRET_MASK: &str = "********";
const API_KEY_PATH: &str = "narrator.api_key";

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "energy.rate", "narrator.model")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
    /// Print the config file location
    Path,
}

pub fn run(action: ConfigAction, config_path: &Path) -> CommandResult {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_from(config_path)?;
            match config.get(&key) {
                Some(_) if key == API_KEY_PATH && config.narrator.api_key.is_some() => {
                    println!("{SECRET_MASK}");
                }
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_from(config_path)?;
            config.set(&key, &value)?;
            config.save_to(config_path)?;
            println!("ok");
        }
        ConfigAction::List => {
            let mut config = Config::load_from(config_path)?;
            if config.narrator.api_key.is_some() {
                config.narrator.api_key = Some(SECRET_MASK.into());
            }
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save_to(config_path)?;
            println!("config reset to defaults");
        }
        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
    }
    Ok(())
}
