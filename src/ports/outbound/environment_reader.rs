use crate::shared::Result;
use std::path::Path;

/// EnvironmentReader port for reading a conda environment file
///
/// This port abstracts the file system operations needed to read
/// `environment.yml` before it is parsed by the domain layer.
pub trait EnvironmentReader {
    /// Reads the raw content of the environment file
    ///
    /// # Errors
    /// Returns `ReqsError::EnvironmentFileNotFound` when the file does not
    /// exist, and `ReqsError::FileReadError` for any other read failure.
    fn read_environment(&self, path: &Path) -> Result<String>;
}
