use async_trait::async_trait;
use env2reqs::prelude::*;
use std::collections::HashSet;

/// Mock PackageIndex for testing
pub struct MockPackageIndex {
    pub known: HashSet<String>,
    pub should_fail: bool,
}

impl MockPackageIndex {
    pub fn new() -> Self {
        Self {
            known: HashSet::new(),
            should_fail: false,
        }
    }

    pub fn with_package(mut self, name: &str) -> Self {
        self.known.insert(name.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            known: HashSet::new(),
            should_fail: true,
        }
    }
}

impl Default for MockPackageIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageIndex for MockPackageIndex {
    async fn is_available(&self, package_name: &str) -> Result<bool> {
        if self.should_fail {
            return Err(ReqsError::IndexQueryError {
                package_name: package_name.to_string(),
                details: "Mock package index failure".to_string(),
            }
            .into());
        }

        Ok(self.known.contains(package_name))
    }
}
