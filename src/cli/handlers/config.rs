// src/cli/handlers/config.rs

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use colored::*;
use std::{env, fs};

use crate::{cli::args::ConfigArgs, constants::CONFIG_FILENAME, models::ProjectConfig};

/// The main handler for the `config` command.
/// Writes the default `ts-builds.config.json` into the current directory.
pub fn handle(args: Vec<String>) -> Result<i32> {
    let config_args = ConfigArgs::try_parse_from(&args)?;

    let target = env::current_dir()?.join(CONFIG_FILENAME);
    if target.exists() && !config_args.force {
        return Err(anyhow!(
            "'{}' already exists. Use {} to overwrite it.",
            CONFIG_FILENAME,
            "--force".cyan()
        ));
    }

    let default_config = ProjectConfig::new();
    let mut json = serde_json::to_string_pretty(&default_config)?;
    json.push('\n');
    fs::write(&target, json)
        .with_context(|| format!("Could not write '{}'.", target.display()))?;

    println!("{} {}", "created".green(), target.display());
    Ok(0)
}
