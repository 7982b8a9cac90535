use crate::shared::Result;
use async_trait::async_trait;

/// PackageIndex port for checking whether a project can be installed
///
/// This port abstracts the package registry (e.g., the PyPI JSON API).
/// Only existence is checked; no version resolution takes place.
#[async_trait]
pub trait PackageIndex: Send + Sync {
    /// Reports whether at least one installable release of the project exists
    ///
    /// # Arguments
    /// * `package_name` - Bare project name (already validated)
    ///
    /// # Returns
    /// `Ok(true)` if the project resolves, `Ok(false)` if the index does not know it
    ///
    /// # Errors
    /// Returns an error if the index cannot be queried (network failure,
    /// unexpected status code, undecodable response)
    async fn is_available(&self, package_name: &str) -> Result<bool>;
}
