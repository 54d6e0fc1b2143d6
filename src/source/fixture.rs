use super::{Result, SourceError, SourceReader};
use crate::config::HelperCommand;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory reader for tests. Unknown files are missing, unknown helpers fail.
#[derive(Debug, Default)]
pub struct FixtureReader {
    files: HashMap<PathBuf, String>,
    outputs: HashMap<&'static str, String>,
}

impl FixtureReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    /// Output for a helper, keyed by program name.
    pub fn output(mut self, program: &'static str, stdout: &str) -> Self {
        self.outputs.insert(program, stdout.to_string());
        self
    }
}

impl SourceReader for FixtureReader {
    fn read_file(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::ResourceUnavailable {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            })
    }

    fn run(&self, command: &HelperCommand) -> Result<String> {
        self.outputs
            .get(command.program)
            .cloned()
            .ok_or_else(|| SourceError::CommandFailed {
                command: command.to_string(),
                reason: "not found".to_string(),
            })
    }
}
