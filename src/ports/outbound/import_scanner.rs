use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// ImportScanner port for discovering the packages a source tree imports
///
/// Implementations write their findings to `output_file`, one
/// `name==version` (or bare `name`) per line, replacing any prior content.
#[async_trait]
pub trait ImportScanner: Send + Sync {
    /// Scans `directory` recursively and writes the used package names
    ///
    /// # Errors
    /// Returns an error if the directory cannot be scanned or the output
    /// file cannot be written
    async fn scan_directory(&self, directory: &Path, output_file: &Path) -> Result<()>;

    /// Human readable scanner name used in progress messages
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<S: ImportScanner + ?Sized> ImportScanner for Box<S> {
    async fn scan_directory(&self, directory: &Path, output_file: &Path) -> Result<()> {
        (**self).scan_directory(directory, output_file).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
