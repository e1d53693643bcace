//! Subprocess execution

use crate::{CommandSpec, Result, RunnerError};
use std::path::Path;
use std::process::Command;

/// Run `spec` in `cwd`, inheriting the standard streams.
///
/// A non-zero exit is an error carrying the command, its arguments and the
/// exit code.
pub fn run_command(spec: &CommandSpec, cwd: &Path) -> Result<()> {
    tracing::info!(command = %spec, cwd = %cwd.display(), "running");

    let status = Command::new(&spec.program)
        .args(&spec.args)
        .current_dir(cwd)
        .status()
        .map_err(|source| RunnerError::Spawn {
            command: spec.program.clone(),
            source,
        })?;

    if !status.success() {
        return Err(RunnerError::CommandFailed {
            command: spec.program.clone(),
            args: spec.args.clone(),
            code: status.code(),
        });
    }

    Ok(())
}
