// src/cli/args.rs
use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)] // The dispatcher strips the command name before parsing
pub struct ConfigArgs {
    /// Overwrite an existing ts-builds.config.json.
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)]
pub struct CleanupArgs {
    /// Do not ask for confirmation before editing package.json.
    #[arg(long, short = 'y')]
    pub yes: bool,
}
