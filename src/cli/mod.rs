use clap::Parser;

pub mod args;
pub mod handlers;

const AFTER_HELP: &str = "\
System commands:
  init             Seed the standard tool config files into the project
  config           Write the default ts-builds.config.json (--force to overwrite)
  info             Show the resolved commands, chains and builtins
  cleanup          Remove tool-managed dependencies from package.json (--yes)

Tasks:
  Any other name is resolved as a chain or command: validate, format[:check],
  lint[:check], typecheck, test[:watch|:coverage|:ui], build[:watch], dev,
  compile, or any name declared in ts-builds.config.json.";

/// ts-builds: standardized build, lint, test and format chains.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    after_help = AFTER_HELP,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// The command or task name, followed by its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
