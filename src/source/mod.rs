//! Raw status values from sysfs files and helper processes.

pub mod error;
pub mod system;

#[cfg(test)]
pub(crate) mod fixture;

pub use error::{Result, SourceError};
pub use system::SystemReader;

use crate::config::HelperCommand;
use std::path::Path;
use std::str::FromStr;

/// Reads one raw status value per call. All access is blocking.
pub trait SourceReader {
    /// Full contents of a file.
    fn read_file(&self, path: &Path) -> Result<String>;

    /// Standard output of a helper that exited successfully.
    fn run(&self, command: &HelperCommand) -> Result<String>;
}

/// Reads a file holding a single number, such as `energy_now`.
pub fn read_number<T>(reader: &dyn SourceReader, path: &Path) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = reader.read_file(path)?;
    raw.trim().parse::<T>().map_err(|e| {
        SourceError::parse(
            "number",
            format!("{}: {:?} ({})", path.display(), raw.trim(), e),
        )
    })
}
