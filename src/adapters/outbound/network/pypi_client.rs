use crate::ports::outbound::PackageIndex;
use crate::shared::error::ReqsError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Default base URL of the PyPI JSON API
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org/pypi";

#[derive(Debug, Deserialize)]
struct PyPiProject {
    #[serde(default)]
    releases: HashMap<String, Vec<PyPiReleaseFile>>,
}

#[derive(Debug, Deserialize)]
struct PyPiReleaseFile {
    #[serde(default)]
    yanked: bool,
}

/// Why a single index query failed
#[derive(Debug)]
enum QueryFailure {
    /// Worth another attempt: connection problems, timeouts, 5xx
    Transient(String),
    /// Retrying cannot help: 4xx other than 404, malformed JSON
    Permanent(String),
}

impl QueryFailure {
    fn into_details(self) -> String {
        match self {
            QueryFailure::Transient(details) | QueryFailure::Permanent(details) => details,
        }
    }
}

impl PyPiProject {
    /// At least one release has at least one file that is not yanked
    fn has_installable_release(&self) -> bool {
        self.releases
            .values()
            .any(|files| files.iter().any(|file| !file.yanked))
    }
}

/// PyPiIndexClient adapter for checking project availability on PyPI
///
/// This adapter implements the PackageIndex port against the PyPI JSON API
/// (`GET {index_url}/{name}/json`). A 404 means "not found". Transport
/// errors and 5xx responses are retried; other 4xx responses and unreadable
/// bodies fail at once. Either way the failure is a fatal `IndexQueryError`.
pub struct PyPiIndexClient {
    client: reqwest::Client,
    index_url: String,
    max_retries: u32,
}

impl PyPiIndexClient {
    /// Creates a client for the public PyPI index
    pub fn new() -> Result<Self> {
        Self::with_index_url(DEFAULT_INDEX_URL)
    }

    /// Creates a client for a PyPI-compatible JSON API at `index_url`
    pub fn with_index_url(index_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("env2reqs/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            index_url: index_url.trim_end_matches('/').to_string(),
            max_retries: 3,
        })
    }

    /// Validates a package name for URL safety
    fn validate_url_component(component: &str) -> Result<()> {
        // Security: Prevent URL injection attacks
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!("Security: Package name contains path separators which are not allowed");
        }

        if component.contains("..") {
            anyhow::bail!("Security: Package name contains '..' which is not allowed");
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!("Security: Package name contains URL-unsafe characters");
        }

        Ok(())
    }

    fn project_url(&self, package_name: &str) -> String {
        format!(
            "{}/{}/json",
            self.index_url,
            urlencoding::encode(package_name)
        )
    }

    /// Queries the index with retry logic
    async fn query_with_retry(&self, package_name: &str) -> Result<bool> {
        let mut last_failure = None;

        for attempt in 1..=self.max_retries {
            match self.query_index(package_name).await {
                Ok(result) => return Ok(result),
                Err(failure @ QueryFailure::Permanent(_)) => {
                    last_failure = Some(failure);
                    break;
                }
                Err(failure) => {
                    last_failure = Some(failure);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        let details = last_failure
            .map(QueryFailure::into_details)
            .unwrap_or_else(|| "no attempts were made".to_string());
        Err(ReqsError::IndexQueryError {
            package_name: package_name.to_string(),
            details,
        }
        .into())
    }

    async fn query_index(&self, package_name: &str) -> std::result::Result<bool, QueryFailure> {
        let response = self
            .client
            .get(self.project_url(package_name))
            .send()
            .await
            .map_err(|e| QueryFailure::Transient(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => {
                let project: PyPiProject = response.json().await.map_err(|e| {
                    QueryFailure::Permanent(format!("Invalid PyPI API response: {}", e))
                })?;
                Ok(project.has_installable_release())
            }
            status if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS => Err(
                QueryFailure::Transient(format!("PyPI API returned status code {}", status)),
            ),
            status => Err(QueryFailure::Permanent(format!(
                "PyPI API returned status code {}",
                status
            ))),
        }
    }
}

#[async_trait]
impl PackageIndex for PyPiIndexClient {
    async fn is_available(&self, package_name: &str) -> Result<bool> {
        Self::validate_url_component(package_name)?;
        self.query_with_retry(package_name).await
    }
}
