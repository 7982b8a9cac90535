use crate::ports::outbound::ImportScanner;
use crate::shared::error::ReqsError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// PipreqsScanner adapter that delegates to the external `pipreqs` tool
///
/// Runs `pipreqs --savepath <output_file> --force <directory>`. pipreqs
/// writes `name==version` lines, resolving versions from the active Python
/// environment or PyPI.
pub struct PipreqsScanner {
    program: PathBuf,
}

impl PipreqsScanner {
    pub fn new() -> Self {
        Self::with_program("pipreqs")
    }

    /// Uses a specific pipreqs executable instead of the one on `PATH`
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for PipreqsScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImportScanner for PipreqsScanner {
    async fn scan_directory(&self, directory: &Path, output_file: &Path) -> Result<()> {
        let scan_error = |details: String| -> anyhow::Error {
            ReqsError::ScannerError {
                directory: directory.to_path_buf(),
                details,
            }
            .into()
        };

        let output = Command::new(&self.program)
            .arg("--savepath")
            .arg(output_file)
            .arg("--force")
            .arg(directory)
            .output()
            .await
            .map_err(|e| {
                scan_error(format!(
                    "Failed to run {}: {}\n\n💡 Hint: Install it with `pip install pipreqs` or use --scanner native",
                    self.program.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            return Err(scan_error(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        // pipreqs skips writing when it finds nothing in some versions
        if !output_file.exists() {
            std::fs::write(output_file, "").map_err(|e| scan_error(e.to_string()))?;
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "pipreqs"
    }
}
