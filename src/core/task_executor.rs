// src/core/task_executor.rs

use std::path::PathBuf;

use colored::*;

use crate::{
    core::{expander, registry},
    models::ResolvedConfig,
    system::executor,
};

/// Runs a named task (chain or single command) to completion.
///
/// The name is first flattened into an ordered step list; expansion failures
/// (unknown step, circular chain) are reported and return `1` with zero
/// commands executed. Steps then run strictly sequentially, one child
/// process at a time. The first non-zero exit code stops the run and becomes
/// the overall result; if every step exits 0, the result is 0.
pub fn run_task(name: &str, config: &ResolvedConfig) -> i32 {
    let builtins = registry::builtins(config);

    let steps = match expander::expand(name, config, &builtins) {
        Ok(steps) => steps,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            return 1;
        }
    };

    if steps.is_empty() {
        println!("{}", "Chain is empty. Nothing to execute.".yellow());
        return 0;
    }

    log::debug!("Task '{}' flattened into {} step(s).", name, steps.len());

    for step in &steps {
        println!(
            "{} {} {}",
            "→".blue(),
            format!("[{}]", step.name).cyan(),
            step.spec.run.green()
        );

        let cwd = step_cwd(step, config);
        let code = executor::run_shell(&step.spec.run, &cwd);

        if code != 0 {
            eprintln!(
                "{} Step '{}' failed with exit code {}.",
                "✗".red().bold(),
                step.name.cyan(),
                code
            );
            return code;
        }
        log::debug!("Step '{}' finished successfully.", step.name);
    }

    0
}

/// A step's `cwd` override is resolved against the project root, never
/// against whatever directory a previous step ran in.
fn step_cwd(step: &expander::ResolvedStep, config: &ResolvedConfig) -> PathBuf {
    match &step.spec.cwd {
        Some(dir) => config.project_root.join(dir),
        None => config.project_root.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CommandSpec;
    use std::collections::HashMap;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn config_in(root: &Path) -> ResolvedConfig {
        ResolvedConfig {
            project_root: root.to_path_buf(),
            source_dir: "./src".to_string(),
            test_dir: "./test".to_string(),
            commands: HashMap::new(),
            chains: HashMap::new(),
        }
    }

    fn command(run: &str) -> CommandSpec {
        CommandSpec::new(run)
    }

    /// Reads the marker file the test commands append to.
    fn executed_markers(root: &Path) -> Vec<String> {
        match fs::read_to_string(root.join("run.log")) {
            Ok(text) => text
                .lines()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    #[test]
    fn test_all_steps_succeed_returns_zero() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config
            .commands
            .insert("one".to_string(), command("echo one>> run.log"));
        config
            .commands
            .insert("two".to_string(), command("echo two>> run.log"));
        config
            .chains
            .insert("all".to_string(), vec!["one".to_string(), "two".to_string()]);

        let code = run_task("all", &config);

        assert_eq!(code, 0);
        assert_eq!(executed_markers(dir.path()), vec!["one", "two"]);
    }

    #[test]
    fn test_fail_fast_skips_remaining_steps_and_propagates_code() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config
            .commands
            .insert("ok".to_string(), command("echo ok>> run.log"));
        config.commands.insert("boom".to_string(), command("exit 3"));
        config
            .commands
            .insert("never".to_string(), command("echo never>> run.log"));
        config.chains.insert(
            "pipeline".to_string(),
            vec!["ok".to_string(), "boom".to_string(), "never".to_string()],
        );

        let code = run_task("pipeline", &config);

        // Exactly two children ran; the third step was never attempted.
        assert_eq!(code, 3);
        assert_eq!(executed_markers(dir.path()), vec!["ok"]);
    }

    #[test]
    fn test_cycle_executes_zero_commands() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config
            .commands
            .insert("touchstone".to_string(), command("echo ran>> run.log"));
        config
            .chains
            .insert("A".to_string(), vec!["touchstone".to_string(), "B".to_string()]);
        config.chains.insert("B".to_string(), vec!["A".to_string()]);

        let code = run_task("A", &config);

        // Expansion fails before anything runs, even though the first step
        // of `A` would have succeeded.
        assert_eq!(code, 1);
        assert!(executed_markers(dir.path()).is_empty());
    }

    #[test]
    fn test_unknown_step_returns_one_without_running() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config
            .commands
            .insert("real".to_string(), command("echo ran>> run.log"));
        config.chains.insert(
            "broken".to_string(),
            vec!["real".to_string(), "ghost".to_string()],
        );

        let code = run_task("broken", &config);

        assert_eq!(code, 1);
        assert!(executed_markers(dir.path()).is_empty());
    }

    #[test]
    fn test_single_command_name_runs_directly() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config
            .commands
            .insert("solo".to_string(), command("echo solo>> run.log"));

        let code = run_task("solo", &config);

        assert_eq!(code, 0);
        assert_eq!(executed_markers(dir.path()), vec!["solo"]);
    }

    #[test]
    fn test_step_cwd_override_is_relative_to_project_root() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let mut config = config_in(dir.path());
        config.commands.insert(
            "here".to_string(),
            CommandSpec {
                run: "echo sub>> run.log".to_string(),
                cwd: Some("./sub".to_string()),
            },
        );

        let code = run_task("here", &config);

        assert_eq!(code, 0);
        // The marker landed in the subdirectory, not the project root.
        assert!(executed_markers(dir.path()).is_empty());
        assert_eq!(executed_markers(&dir.path().join("sub")), vec!["sub"]);
    }

    #[test]
    fn test_empty_chain_succeeds() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.chains.insert("noop".to_string(), Vec::new());

        assert_eq!(run_task("noop", &config), 0);
    }

    #[test]
    fn test_validate_chain_with_user_docs_command() {
        // End-to-end shape: user config splices a custom `docs` command into
        // the validate chain between overridden format and build.
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config
            .commands
            .insert("format".to_string(), command("echo format>> run.log"));
        config
            .commands
            .insert("docs".to_string(), command("echo docs>> run.log"));
        config
            .commands
            .insert("build".to_string(), command("echo build>> run.log"));
        config.chains.insert(
            "validate".to_string(),
            vec!["format".to_string(), "docs".to_string(), "build".to_string()],
        );

        let code = run_task("validate", &config);

        assert_eq!(code, 0);
        assert_eq!(executed_markers(dir.path()), vec!["format", "docs", "build"]);
    }

    #[test]
    fn test_end_to_end_from_config_file_on_disk() {
        // Full path: on-disk JSON config through the resolver into the
        // engine, with a user command spliced into the validate chain.
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(crate::constants::CONFIG_FILENAME),
            r#"{
                "commands": {
                    "format": "echo format>> run.log",
                    "docs": "echo docs>> run.log",
                    "build": "echo build>> run.log"
                },
                "chains": { "validate": ["format", "docs", "build"] }
            }"#,
        )
        .unwrap();

        let config = crate::core::config_resolver::resolve(dir.path());
        let code = run_task("validate", &config);

        assert_eq!(code, 0);
        assert_eq!(executed_markers(dir.path()), vec!["format", "docs", "build"]);
    }
}
