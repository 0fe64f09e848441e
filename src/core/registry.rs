// src/core/registry.rs

use std::collections::HashMap;

use crate::models::{CommandSpec, ResolvedConfig};

/// The closed set of step names that always have a compiled-in command.
/// Kept in one place so `info` and the resolver agree on the list.
pub const BUILTIN_NAMES: &[&str] = &[
    "format",
    "format:check",
    "lint",
    "lint:check",
    "typecheck",
    "test",
    "test:watch",
    "test:coverage",
    "test:ui",
    "build",
    "build:watch",
    "dev",
    "compile",
];

/// Produces the builtin command table for one invocation.
///
/// Pure function of the resolved `source_dir`; every call yields a fresh,
/// deterministic mapping. These are the lowest-precedence source when a step
/// name is resolved: user `commands` shadow them, `chains` shadow both.
pub fn builtins(config: &ResolvedConfig) -> HashMap<String, CommandSpec> {
    let src = &config.source_dir;

    let entries = [
        ("format", "prettier --write .".to_string()),
        ("format:check", "prettier --check .".to_string()),
        ("lint", format!("eslint {src} --fix")),
        ("lint:check", format!("eslint {src}")),
        ("typecheck", "tsc --noEmit".to_string()),
        ("test", "vitest run".to_string()),
        ("test:watch", "vitest".to_string()),
        ("test:coverage", "vitest run --coverage".to_string()),
        ("test:ui", "vitest --ui".to_string()),
        ("build", "tsup".to_string()),
        ("build:watch", "tsup --watch".to_string()),
        ("dev", "tsup --watch".to_string()),
        ("compile", "tsc".to_string()),
    ];

    entries
        .into_iter()
        .map(|(name, run)| (name.to_string(), CommandSpec::new(run)))
        .collect()
}
