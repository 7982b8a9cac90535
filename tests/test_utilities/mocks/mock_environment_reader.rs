use env2reqs::prelude::*;
use std::path::{Path, PathBuf};

/// Mock EnvironmentReader for testing
pub struct MockEnvironmentReader {
    pub content: Option<String>,
}

impl MockEnvironmentReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }

    /// Behaves like a missing environment file
    pub fn missing() -> Self {
        Self { content: None }
    }
}

impl EnvironmentReader for MockEnvironmentReader {
    fn read_environment(&self, path: &Path) -> Result<String> {
        match &self.content {
            Some(content) => Ok(content.clone()),
            None => Err(ReqsError::EnvironmentFileNotFound {
                path: PathBuf::from(path),
                suggestion: format!("File {} not found.", path.display()),
            }
            .into()),
        }
    }
}
