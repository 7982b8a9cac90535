use crate::requirements_generation::policies::NameMatching;
use crate::shared::error::ReqsError;
use crate::shared::Result;
use std::path::PathBuf;

/// RequirementsRequest - Internal request DTO for the generation use case
#[derive(Debug, Clone)]
pub struct RequirementsRequest {
    /// Path to the conda environment file
    pub environment_file: PathBuf,
    /// Source directories scanned for imports, in scan order
    pub source_dirs: Vec<PathBuf>,
    /// How available and used names are compared
    pub name_matching: NameMatching,
}

impl RequirementsRequest {
    pub fn builder() -> RequirementsRequestBuilder {
        RequirementsRequestBuilder::default()
    }
}

/// Builder for [`RequirementsRequest`]
#[derive(Debug, Default)]
pub struct RequirementsRequestBuilder {
    environment_file: Option<PathBuf>,
    source_dirs: Vec<PathBuf>,
    name_matching: NameMatching,
}

impl RequirementsRequestBuilder {
    pub fn environment_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.environment_file = Some(path.into());
        self
    }

    pub fn source_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_dirs.push(path.into());
        self
    }

    pub fn source_dirs<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.source_dirs.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn name_matching(mut self, name_matching: NameMatching) -> Self {
        self.name_matching = name_matching;
        self
    }

    /// Builds the request
    ///
    /// # Errors
    /// Returns `ReqsError::Validation` if no environment file or no source
    /// directory was given.
    pub fn build(self) -> Result<RequirementsRequest> {
        let environment_file = self.environment_file.ok_or_else(|| ReqsError::Validation {
            message: "An environment file is required".to_string(),
        })?;

        if self.source_dirs.is_empty() {
            return Err(ReqsError::Validation {
                message: "At least one source directory is required".to_string(),
            }
            .into());
        }

        Ok(RequirementsRequest {
            environment_file,
            source_dirs: self.source_dirs,
            name_matching: self.name_matching,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_success() {
        let request = RequirementsRequest::builder()
            .environment_file("environment.yml")
            .source_dirs(["src", "notebooks"])
            .build()
            .unwrap();

        assert_eq!(request.environment_file, PathBuf::from("environment.yml"));
        assert_eq!(
            request.source_dirs,
            vec![PathBuf::from("src"), PathBuf::from("notebooks")]
        );
        assert_eq!(request.name_matching, NameMatching::Exact);
    }

    #[test]
    fn test_builder_source_dir_appends() {
        let request = RequirementsRequest::builder()
            .environment_file("env.yml")
            .source_dir("src")
            .source_dir("scripts")
            .name_matching(NameMatching::Normalized)
            .build()
            .unwrap();

        assert_eq!(request.source_dirs.len(), 2);
        assert_eq!(request.name_matching, NameMatching::Normalized);
    }

    #[test]
    fn test_builder_requires_environment_file() {
        let err = RequirementsRequest::builder()
            .source_dir("src")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("environment file is required"));
    }

    #[test]
    fn test_builder_requires_source_dir() {
        let err = RequirementsRequest::builder()
            .environment_file("environment.yml")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("At least one source directory"));
    }
}
