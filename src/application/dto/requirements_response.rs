/// RequirementsResponse - Result of one generation run
///
/// Carries every intermediate list so callers and tests can inspect what
/// each step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementsResponse {
    /// Candidate names extracted from the environment file
    pub extracted_packages: Vec<String>,
    /// Candidates confirmed on the package index
    pub available_packages: Vec<String>,
    /// Names reported by the import scanner
    pub used_packages: Vec<String>,
    /// Sorted intersection written to the output
    pub final_packages: Vec<String>,
}
