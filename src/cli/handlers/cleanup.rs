// src/cli/handlers/cleanup.rs

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use colored::*;
use dialoguer::{Confirm, theme::ColorfulTheme};
use std::{env, fs};

use crate::cli::args::CleanupArgs;

const PACKAGE_MANIFEST: &str = "package.json";

/// Packages whose configuration and invocation `ts-builds` now fronts.
/// Projects that adopt the tool no longer need to pin these themselves.
const MANAGED_PACKAGES: &[&str] = &[
    "eslint",
    "eslint-config-prettier",
    "prettier",
    "tsup",
    "typescript",
    "typescript-eslint",
    "vitest",
    "@vitest/coverage-v8",
    "@vitest/ui",
];

/// The main handler for the `cleanup` command.
///
/// Removes tool-managed entries from `dependencies` and `devDependencies`
/// of the project's `package.json`, after confirmation (skipped by
/// `--yes`/`-y`). Every other key in the manifest is preserved as-is.
pub fn handle(args: Vec<String>) -> Result<i32> {
    let cleanup_args = CleanupArgs::try_parse_from(&args)?;

    let manifest_path = env::current_dir()?.join(PACKAGE_MANIFEST);
    let text = fs::read_to_string(&manifest_path)
        .with_context(|| format!("No '{}' found in the current directory.", PACKAGE_MANIFEST))?;
    let mut manifest: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("'{}' is not valid JSON.", PACKAGE_MANIFEST))?;

    let removable = collect_removable(&manifest);
    if removable.is_empty() {
        println!("{}", "Nothing to clean up.".yellow());
        return Ok(0);
    }

    println!("The following entries are managed by ts-builds:");
    for (section, package) in &removable {
        println!("  {} {}", "-".red(), format!("{section} / {package}").cyan());
    }

    if !cleanup_args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Remove them from {}?", PACKAGE_MANIFEST))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Aborted. Nothing was changed.".yellow());
            return Ok(0);
        }
    }

    remove_entries(&mut manifest, &removable)?;

    let mut output = serde_json::to_string_pretty(&manifest)?;
    output.push('\n');
    fs::write(&manifest_path, output)
        .with_context(|| format!("Could not write '{}'.", manifest_path.display()))?;

    println!(
        "{} {} entr{} removed.",
        "Done.".green().bold(),
        removable.len(),
        if removable.len() == 1 { "y" } else { "ies" }
    );
    Ok(0)
}

/// Lists `(section, package)` pairs present in the manifest that the tool
/// manages. Read-only pass so the prompt can show what would change.
fn collect_removable(manifest: &serde_json::Value) -> Vec<(&'static str, &'static str)> {
    let mut found = Vec::new();
    for section in ["dependencies", "devDependencies"] {
        let Some(deps) = manifest.get(section).and_then(|v| v.as_object()) else {
            continue;
        };
        for package in MANAGED_PACKAGES {
            if deps.contains_key(*package) {
                found.push((section, *package));
            }
        }
    }
    found
}

fn remove_entries(
    manifest: &mut serde_json::Value,
    entries: &[(&'static str, &'static str)],
) -> Result<()> {
    for (section, package) in entries {
        let deps = manifest
            .get_mut(*section)
            .and_then(|v| v.as_object_mut())
            .ok_or_else(|| anyhow!("'{}' section disappeared while editing.", section))?;
        deps.remove(*package);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collect_finds_managed_entries_in_both_sections() {
        let manifest = json!({
            "name": "demo",
            "dependencies": { "react": "^19.0.0", "typescript": "^5.6.0" },
            "devDependencies": { "vitest": "^2.0.0", "left-pad": "1.0.0" }
        });

        let removable = collect_removable(&manifest);

        assert_eq!(
            removable,
            vec![("dependencies", "typescript"), ("devDependencies", "vitest")]
        );
    }

    #[test]
    fn test_remove_preserves_unmanaged_entries() {
        let mut manifest = json!({
            "devDependencies": { "vitest": "^2.0.0", "left-pad": "1.0.0" }
        });
        let removable = collect_removable(&manifest);

        remove_entries(&mut manifest, &removable).unwrap();

        let deps = manifest["devDependencies"].as_object().unwrap();
        assert!(!deps.contains_key("vitest"));
        assert!(deps.contains_key("left-pad"));
    }

    #[test]
    fn test_manifest_without_dependency_sections_is_untouched() {
        let manifest = json!({ "name": "demo", "version": "1.0.0" });
        assert!(collect_removable(&manifest).is_empty());
    }
}
