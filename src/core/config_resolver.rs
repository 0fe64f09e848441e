// src/core/config_resolver.rs

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::constants::{
    CONFIG_FILENAME, DEFAULT_SRC_DIR, DEFAULT_TEST_DIR, DEFAULT_VALIDATE_CHAIN,
    VALIDATE_CHAIN_NAME,
};
use crate::models::{ProjectConfig, ResolvedConfig};

/// Builds the authoritative configuration for one invocation.
///
/// This never fails: a missing config file silently yields the compiled-in
/// defaults, and an unreadable or malformed file yields the defaults with a
/// warning. Merge order, lowest to highest precedence:
///
/// 1. built-in chain defaults (`validate`),
/// 2. the legacy `validateChain` field, installed as the `validate` chain,
/// 3. the `chains` mapping, shallow-merged by name,
/// 4. user `commands`, normalized (`"cmd"` becomes `{ "run": "cmd" }`).
pub fn resolve(project_root: &Path) -> ResolvedConfig {
    let raw = load_project_config(project_root);
    merge(raw, project_root)
}

/// Reads and parses `ts-builds.config.json` from the project root, falling
/// back to an empty [`ProjectConfig`] on any problem.
fn load_project_config(project_root: &Path) -> ProjectConfig {
    let path = project_root.join(CONFIG_FILENAME);

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No '{}' found; using defaults.", CONFIG_FILENAME);
            return ProjectConfig::default();
        }
        Err(e) => {
            log::warn!(
                "Could not read '{}' ({}); falling back to defaults.",
                path.display(),
                e
            );
            return ProjectConfig::default();
        }
    };

    match serde_json::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!(
                "'{}' is not valid JSON ({}); falling back to defaults.",
                path.display(),
                e
            );
            ProjectConfig::default()
        }
    }
}

fn merge(raw: ProjectConfig, project_root: &Path) -> ResolvedConfig {
    let mut chains: HashMap<String, Vec<String>> = HashMap::new();
    chains.insert(
        VALIDATE_CHAIN_NAME.to_string(),
        DEFAULT_VALIDATE_CHAIN
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );

    // The legacy field lands first, so an explicit `chains.validate` entry
    // keeps the final word when both are present.
    if let Some(legacy) = raw.validate_chain {
        log::debug!("Using legacy 'validateChain' field as the validate chain.");
        chains.insert(VALIDATE_CHAIN_NAME.to_string(), legacy);
    }

    for (name, steps) in raw.chains {
        chains.insert(name, steps);
    }

    let commands = raw
        .commands
        .into_iter()
        .map(|(name, command)| (name, command.into_spec()))
        .collect::<HashMap<_, _>>();

    // A name in both maps always resolves as a chain during expansion,
    // silently shadowing the command. Surface that to the user.
    for name in commands.keys() {
        if chains.contains_key(name) {
            log::warn!(
                "'{}' is declared both as a chain and as a command; the chain wins.",
                name
            );
        }
    }

    ResolvedConfig {
        project_root: project_root.to_path_buf(),
        source_dir: raw.src_dir.unwrap_or_else(|| DEFAULT_SRC_DIR.to_string()),
        test_dir: raw.test_dir.unwrap_or_else(|| DEFAULT_TEST_DIR.to_string()),
        commands,
        chains,
    }
}
