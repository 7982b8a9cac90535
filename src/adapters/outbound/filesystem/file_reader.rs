use crate::ports::outbound::EnvironmentReader;
use crate::shared::error::ReqsError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::io;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements the EnvironmentReader port.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        validate_regular_file(path, file_type)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentReader for FileSystemReader {
    fn read_environment(&self, path: &Path) -> Result<String> {
        // symlink_metadata so a dangling link is not reported as "not found"
        match fs::symlink_metadata(path) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ReqsError::EnvironmentFileNotFound {
                    path: path.to_path_buf(),
                    suggestion: format!(
                        "File {} not found. Run from the project root or pass the correct path with --env-file.",
                        path.display()
                    ),
                }
                .into());
            }
            Err(e) => {
                return Err(ReqsError::FileReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into());
            }
        }

        self.safe_read_file(path, "environment file").map_err(|e| {
            ReqsError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_environment_success() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = temp_dir.path().join("environment.yml");
        fs::write(&env_path, "dependencies: [numpy]").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_environment(&env_path).unwrap();

        assert_eq!(content, "dependencies: [numpy]");
    }

    #[test]
    fn test_read_environment_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let err = reader
            .read_environment(&temp_dir.path().join("environment.yml"))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReqsError>(),
            Some(ReqsError::EnvironmentFileNotFound { .. })
        ));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_read_environment_directory_is_read_error() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let err = reader.read_environment(temp_dir.path()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReqsError>(),
            Some(ReqsError::FileReadError { .. })
        ));
        assert!(err.to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_environment_file_as_path_component_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let plain = temp_dir.path().join("plain.txt");
        fs::write(&plain, "not a directory").unwrap();

        let reader = FileSystemReader::new();
        let err = reader
            .read_environment(&plain.join("environment.yml"))
            .unwrap_err();

        let reqs_error = err.downcast_ref::<ReqsError>().unwrap();
        assert!(matches!(reqs_error, ReqsError::FileReadError { .. }));
        assert!(!reqs_error.is_recoverable_extraction_error());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_environment_overlong_name_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let long_name = format!("{}.yml", "e".repeat(300));

        let reader = FileSystemReader::new();
        let err = reader
            .read_environment(&temp_dir.path().join(long_name))
            .unwrap_err();

        let reqs_error = err.downcast_ref::<ReqsError>().unwrap();
        assert!(matches!(reqs_error, ReqsError::FileReadError { .. }));
        assert!(!reqs_error.is_recoverable_extraction_error());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_environment_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.yml");
        let link = temp_dir.path().join("environment.yml");
        fs::write(&target, "dependencies: []").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let reader = FileSystemReader::new();
        let err = reader.read_environment(&link).unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }
}
