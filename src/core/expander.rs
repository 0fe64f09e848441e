// src/core/expander.rs

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::{CommandSpec, ResolvedConfig};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpansionError {
    #[error("Step '{0}' is neither a chain, a configured command, nor a builtin.")]
    UnknownStep(String),
    #[error("Chain '{0}' references itself, directly or through another chain.")]
    CircularChain(String),
}

/// What a step name means in the current configuration.
#[derive(Debug)]
pub enum StepResolution<'a> {
    /// The name is a chain; its steps must be expanded in place.
    Chain(&'a [String]),
    /// The name is directly runnable.
    Command(&'a CommandSpec),
}

/// One fully resolved, directly runnable step of a flattened chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStep {
    pub name: String,
    pub spec: CommandSpec,
}

/// Resolves a single step name through the three precedence-ordered sources:
/// chains first, then user commands, then builtins. A name in both `chains`
/// and `commands` is always a chain.
pub fn resolve_step<'a>(
    name: &str,
    config: &'a ResolvedConfig,
    builtins: &'a HashMap<String, CommandSpec>,
) -> Result<StepResolution<'a>, ExpansionError> {
    if let Some(steps) = config.chains.get(name) {
        return Ok(StepResolution::Chain(steps));
    }
    if let Some(spec) = config.commands.get(name) {
        return Ok(StepResolution::Command(spec));
    }
    if let Some(spec) = builtins.get(name) {
        return Ok(StepResolution::Command(spec));
    }
    Err(ExpansionError::UnknownStep(name.to_string()))
}

/// Expands an entry-point name into the ordered, fully flattened list of
/// runnable steps. Nested chains are inlined in place, preserving relative
/// order; duplicates are kept.
///
/// Cycle detection carries the set of chain names currently on the call
/// path, cloned into each nested expansion. A chain referenced twice from
/// non-overlapping branches is legal; re-entering a chain that is still on
/// the path fails with [`ExpansionError::CircularChain`].
pub fn expand(
    name: &str,
    config: &ResolvedConfig,
    builtins: &HashMap<String, CommandSpec>,
) -> Result<Vec<ResolvedStep>, ExpansionError> {
    let mut steps = Vec::new();
    expand_step(name, config, builtins, &HashSet::new(), &mut steps)?;
    Ok(steps)
}

fn expand_step(
    name: &str,
    config: &ResolvedConfig,
    builtins: &HashMap<String, CommandSpec>,
    on_path: &HashSet<String>,
    out: &mut Vec<ResolvedStep>,
) -> Result<(), ExpansionError> {
    match resolve_step(name, config, builtins)? {
        StepResolution::Chain(chain_steps) => {
            if on_path.contains(name) {
                return Err(ExpansionError::CircularChain(name.to_string()));
            }
            let mut on_path = on_path.clone();
            on_path.insert(name.to_string());
            for step in chain_steps {
                expand_step(step, config, builtins, &on_path, out)?;
            }
            Ok(())
        }
        StepResolution::Command(spec) => {
            out.push(ResolvedStep {
                name: name.to_string(),
                spec: spec.clone(),
            });
            Ok(())
        }
    }
}
