// src/system/executor.rs

use std::path::Path;
use std::process::{Command as StdCommand, ExitStatus, Stdio};

/// Runs one command line through the platform shell and waits for it.
///
/// The whole line is handed to `sh -c` (or `cmd /C` on Windows) so shell
/// features like `&&`, pipes and `KEY=value` prefixes work exactly as they
/// would in a package.json script. Stdout/stderr are inherited, so the
/// invoked tool streams directly to the user's terminal.
///
/// Returns the child's exit code. A child that could not be spawned at all
/// (e.g. no shell on PATH) is reported and mapped to `1`; it is never
/// surfaced as an error, because the caller treats every non-zero code the
/// same way.
pub fn run_shell(command_line: &str, cwd: &Path) -> i32 {
    let trimmed = command_line.trim();
    if trimmed.is_empty() {
        // An empty command is a success, not an error.
        return 0;
    }

    let clean_cwd = dunce::simplified(cwd);
    log::debug!("Spawning `{}` in '{}'", trimmed, clean_cwd.display());

    let mut command = if cfg!(target_os = "windows") {
        let mut cmd = StdCommand::new("cmd");
        cmd.arg("/C").arg(trimmed);
        cmd
    } else {
        let mut cmd = StdCommand::new("sh");
        cmd.arg("-c").arg(trimmed);
        cmd
    };

    command
        .current_dir(clean_cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    // Blocking wait. The engine never has more than one child outstanding.
    match command.status() {
        Ok(status) => exit_code_of(status, trimmed),
        Err(e) => {
            log::error!("Command '{}' could not be started: {}", trimmed, e);
            1
        }
    }
}

/// Maps an [`ExitStatus`] to the integer the chain engine propagates.
/// A signal-terminated child has no code; it is reported as `1`.
fn exit_code_of(status: ExitStatus, command_line: &str) -> i32 {
    match status.code() {
        Some(code) => code,
        None => {
            log::warn!(
                "Command '{}' was terminated by a signal; treating as exit code 1.",
                command_line
            );
            1
        }
    }
}
