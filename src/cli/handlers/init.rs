// src/cli/handlers/init.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use include_dir::{Dir, include_dir};
use std::{env, fs};

/// The template files seeded into a project, bundled into the binary.
static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Seeds the standard tool configuration files into the current project."
)]
struct InitArgs {}

/// The main handler for the `init` command.
///
/// Copies each bundled template into the current directory unless a file
/// with that name already exists. Re-running is always safe: existing files
/// are reported and left untouched.
pub fn handle(args: Vec<String>) -> Result<i32> {
    let _init_args = InitArgs::try_parse_from(&args)?;

    let target_dir = env::current_dir()?;
    println!("Initializing tool configuration in: {}", target_dir.display());

    let mut created = 0usize;
    for file in TEMPLATES.files() {
        let file_name = file.path();
        let destination = target_dir.join(file_name);

        if destination.exists() {
            println!(
                "  {} {} (already exists)",
                "skipped".dimmed(),
                file_name.display()
            );
            continue;
        }

        fs::write(&destination, file.contents())
            .with_context(|| format!("Could not write '{}'.", destination.display()))?;
        println!("  {} {}", "created".green(), file_name.display());
        created += 1;
    }

    if created == 0 {
        println!("\n{}", "Everything was already in place.".yellow());
    } else {
        println!("\n{} {} file(s) created.", "Done.".green().bold(), created);
    }
    Ok(0)
}
