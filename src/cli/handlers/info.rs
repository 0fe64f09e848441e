// src/cli/handlers/info.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::env;

use crate::{
    constants::CONFIG_FILENAME,
    core::{config_resolver, registry},
    models::ResolvedConfig,
};

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Displays the resolved commands, chains and builtins for this project."
)]
struct InfoArgs {}

/// The main handler for the `info` command.
/// Shows the fully merged configuration the engine would run with.
pub fn handle(args: Vec<String>) -> Result<i32> {
    let _info_args = InfoArgs::try_parse_from(&args)?;

    let project_root = env::current_dir()?;
    let config = config_resolver::resolve(&project_root);

    print_metadata(&config);
    print_chains(&config);
    print_commands(&config);
    print_builtins(&config);

    println!("\n---------------------------------");
    Ok(0)
}

fn print_metadata(config: &ResolvedConfig) {
    println!("\n--- {} ---", "ts-builds configuration".yellow());
    println!(
        "  {:<14} {}",
        "config file".blue(),
        config.project_root.join(CONFIG_FILENAME).display()
    );
    println!("  {:<14} {}", "src dir".blue(), config.source_dir);
    println!("  {:<14} {}", "test dir".blue(), config.test_dir);
}

fn print_chains(config: &ResolvedConfig) {
    println!("\n{}", "Chains:".yellow());
    let mut names: Vec<_> = config.chains.keys().collect();
    names.sort();
    for name in names {
        let steps = &config.chains[name];
        println!("  {:<14} {}", name.cyan(), steps.join(" → ").dimmed());
    }
}

fn print_commands(config: &ResolvedConfig) {
    if config.commands.is_empty() {
        return;
    }
    println!("\n{}", "Project commands:".yellow());
    let mut names: Vec<_> = config.commands.keys().collect();
    names.sort();
    for name in names {
        let spec = &config.commands[name];
        match &spec.cwd {
            Some(cwd) => println!(
                "  {:<14} {} {}",
                name.cyan(),
                spec.run.green(),
                format!("(in {cwd})").dimmed()
            ),
            None => println!("  {:<14} {}", name.cyan(), spec.run.green()),
        }
    }
}

fn print_builtins(config: &ResolvedConfig) {
    let builtins = registry::builtins(config);
    println!("\n{}", "Builtins:".yellow());
    for name in registry::BUILTIN_NAMES {
        let shadowed = config.commands.contains_key(*name) || config.chains.contains_key(*name);
        let run = &builtins[*name].run;
        if shadowed {
            println!("  {:<14} {} {}", name.cyan(), run.dimmed(), "(overridden)".dimmed());
        } else {
            println!("  {:<14} {}", name.cyan(), run.green());
        }
    }
}
