use async_trait::async_trait;
use env2reqs::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Mock ImportScanner for testing
///
/// Writes the lines registered for a directory's file name, or nothing.
pub struct MockImportScanner {
    pub outputs: HashMap<String, Vec<String>>,
    pub should_fail: bool,
}

impl MockImportScanner {
    pub fn new() -> Self {
        Self {
            outputs: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_output(mut self, directory_name: &str, lines: &[&str]) -> Self {
        self.outputs.insert(
            directory_name.to_string(),
            lines.iter().map(|l| l.to_string()).collect(),
        );
        self
    }

    pub fn with_failure() -> Self {
        Self {
            outputs: HashMap::new(),
            should_fail: true,
        }
    }
}

impl Default for MockImportScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImportScanner for MockImportScanner {
    async fn scan_directory(&self, directory: &Path, output_file: &Path) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock import scanner failure");
        }

        let key = directory
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content: String = self
            .outputs
            .get(&key)
            .map(|lines| lines.iter().map(|l| format!("{}\n", l)).collect())
            .unwrap_or_default();
        std::fs::write(output_file, content)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
