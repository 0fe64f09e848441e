// src/models.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_SRC_DIR, DEFAULT_TEST_DIR, DEFAULT_VALIDATE_CHAIN, VALIDATE_CHAIN_NAME,
};

// --- PUBLIC COMMAND MODELS (FOR `ts-builds.config.json`) ---
// These are what the user sees and writes in the configuration file.

/// One concrete, directly executable shell command. Immutable once built.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// The command line, run through the platform shell.
    pub run: String,
    /// Working directory for this step, relative to the project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
}

impl CommandSpec {
    pub fn new(run: impl Into<String>) -> Self {
        Self {
            run: run.into(),
            cwd: None,
        }
    }
}

/// Represents a command entry in the config file. Uses `untagged` so users
/// can write either a bare string or a `{ "run": ..., "cwd": ... }` object.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum RawCommand {
    Simple(String),
    Extended(CommandSpec),
}

impl RawCommand {
    /// Normalizes the flexible file syntax into a [`CommandSpec`].
    pub fn into_spec(self) -> CommandSpec {
        match self {
            Self::Simple(run) => CommandSpec::new(run),
            Self::Extended(spec) => spec,
        }
    }
}

// --- `ts-builds.config.json` MODEL (what is read from disk) ---

/// The deserialized structure of a `ts-builds.config.json` file.
/// Every field is optional; absence of the whole file means full defaults.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfig {
    pub src_dir: Option<String>,
    pub test_dir: Option<String>,
    /// Legacy single-chain field. If present it is installed as the
    /// `validate` chain before `chains` is merged, so `chains.validate`
    /// still wins when both are given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_chain: Option<Vec<String>>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub commands: HashMap<String, RawCommand>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub chains: HashMap<String, Vec<String>>,
}

impl ProjectConfig {
    /// Creates the default configuration written by `ts-builds config`.
    /// Resolving this file yields exactly the compiled-in defaults.
    pub fn new() -> Self {
        let mut chains = HashMap::new();
        chains.insert(
            VALIDATE_CHAIN_NAME.to_string(),
            DEFAULT_VALIDATE_CHAIN
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );

        Self {
            src_dir: Some(DEFAULT_SRC_DIR.to_string()),
            test_dir: Some(DEFAULT_TEST_DIR.to_string()),
            validate_chain: None,
            commands: HashMap::new(),
            chains,
        }
    }
}

// --- IN-MEMORY MODEL (our internal working representation) ---

/// The final, merged view of the configuration for one invocation.
/// Never serialized; constructed fresh each run and read-only thereafter.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Root directory of the invocation; default working directory for steps.
    pub project_root: PathBuf,
    pub source_dir: String,
    pub test_dir: String,
    /// User-declared commands. Override builtins by name.
    pub commands: HashMap<String, CommandSpec>,
    /// Named chains, merged over the built-in `validate` default.
    pub chains: HashMap<String, Vec<String>>,
}
