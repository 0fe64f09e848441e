use anyhow::{Result, anyhow};
use std::env;

use crate::core::{config_resolver, task_executor};

///
/// Main entry point for dynamic task dispatch. Any CLI argument that is not
/// a system command lands here with the task name as the first argument.
///
pub fn handle(mut args: Vec<String>) -> Result<i32> {
    if args.is_empty() {
        return Err(anyhow!(
            "Internal error: 'run' handler called without a task name."
        ));
    }
    let task_name = args.remove(0);

    // Chains make argument forwarding ambiguous (which step would receive
    // them?), so extra arguments are dropped rather than passed through.
    if !args.is_empty() {
        log::warn!(
            "Ignoring extra arguments {:?}: they are not forwarded to chain steps.",
            args
        );
    }

    let project_root = env::current_dir()?;
    let config = config_resolver::resolve(&project_root);

    Ok(task_executor::run_task(&task_name, &config))
}
