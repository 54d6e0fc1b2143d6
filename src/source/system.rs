use super::{Result, SourceError, SourceReader};
use crate::config::HelperCommand;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Reads from the real filesystem and spawns real helper processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemReader;

impl SystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceReader for SystemReader {
    fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| SourceError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })
    }

    fn run(&self, command: &HelperCommand) -> Result<String> {
        // No timeout: a hung helper stalls the whole cycle.
        let output = Command::new(command.program)
            .args(command.args)
            .output()
            .map_err(|e| SourceError::CommandFailed {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SourceError::CommandFailed {
                command: command.to_string(),
                reason: format!("{} ({})", output.status, stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Helper programs that cannot be found on `PATH`.
pub fn missing_helpers<'a>(commands: impl IntoIterator<Item = &'a HelperCommand>) -> Vec<&'a str> {
    commands
        .into_iter()
        .filter(|c| which::which(c.program).is_err())
        .map(|c| c.program)
        .collect()
}
