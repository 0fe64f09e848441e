// src/bin/ts_builds.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use ts_builds::cli::{Cli, handlers};

// --- Command Definition and Registry ---

/// Defines a system command, its aliases, and its handler function.
/// Handlers return the process exit code so the engine's fail-fast result
/// can pass through `main` unchanged.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: fn(Vec<String>) -> Result<i32>,
}

/// The single source of truth for all system commands. Anything not listed
/// here is dispatched dynamically as a chain or command name.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "cleanup",
        aliases: &[],
        handler: handlers::cleanup::handle,
    },
    CommandDefinition {
        name: "config",
        aliases: &["cfg"],
        handler: handlers::config::handle,
    },
    CommandDefinition {
        name: "info",
        aliases: &[],
        handler: handlers::info::handle,
    },
    CommandDefinition {
        name: "init",
        aliases: &[],
        handler: handlers::init::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// The main entry point of the `ts-builds` application.
/// Sets up logging, parses arguments, dispatches to the correct handler,
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    let code = match run_cli(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            // The exit code is the only machine-readable contract; detail
            // goes to stderr as human-readable text.
            eprintln!("\n{}: {:#}", "Error".red().bold(), e);
            1
        }
    };
    std::process::exit(code);
}

/// The main application dispatcher.
///
/// The first argument selects either a system command from the registry or,
/// failing that, a chain/command name resolved through the engine — so a
/// project-defined chain like `validate:core` runs exactly like a builtin.
fn run_cli(cli: Cli) -> Result<i32> {
    log::debug!("CLI args parsed: {:?}", cli);

    let mut args = cli.args;
    if args.is_empty() {
        println!("{}", "Usage: ts-builds <command> [args...]".yellow());
        println!("Run `ts-builds info` to see the available commands and chains.");
        return Ok(0);
    }

    let name = args.remove(0);
    if let Some(command) = find_command(&name) {
        (command.handler)(args)
    } else {
        // Not a system command: treat it as a task name.
        let mut run_args = vec![name];
        run_args.extend(args);
        handlers::run::handle(run_args)
    }
}
