use crate::application::dto::{RequirementsRequest, RequirementsResponse};
use crate::ports::outbound::{
    EnvironmentReader, ImportScanner, OutputPresenter, PackageIndex, ProgressReporter,
};
use crate::requirements_generation::domain::{EnvironmentSpec, Requirement};
use crate::requirements_generation::services::{
    parse_scan_output, DependencyExtractor, RequirementsGenerator,
};
use crate::shared::error::ReqsError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// GenerateRequirementsUseCase - Core use case for requirements generation
///
/// Runs the four steps strictly in sequence: extract candidates from the
/// environment file, keep the ones the package index knows, scan sources for
/// used packages, and write the intersection.
///
/// # Type Parameters
/// * `ER` - EnvironmentReader implementation
/// * `PI` - PackageIndex implementation
/// * `IS` - ImportScanner implementation
/// * `OP` - OutputPresenter implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateRequirementsUseCase<ER, PI, IS, OP, PR> {
    environment_reader: ER,
    package_index: PI,
    import_scanner: IS,
    output_presenter: OP,
    progress_reporter: PR,
}

impl<ER, PI, IS, OP, PR> GenerateRequirementsUseCase<ER, PI, IS, OP, PR>
where
    ER: EnvironmentReader,
    PI: PackageIndex,
    IS: ImportScanner,
    OP: OutputPresenter,
    PR: ProgressReporter,
{
    /// Creates a new GenerateRequirementsUseCase with injected dependencies
    pub fn new(
        environment_reader: ER,
        package_index: PI,
        import_scanner: IS,
        output_presenter: OP,
        progress_reporter: PR,
    ) -> Self {
        Self {
            environment_reader,
            package_index,
            import_scanner,
            output_presenter,
            progress_reporter,
        }
    }

    /// Executes the requirements generation use case
    ///
    /// # Errors
    /// Missing or malformed environment files are reported and treated as
    /// "no packages". Malformed requirements, index failures, scanner
    /// failures and output write failures abort the run before anything is
    /// written.
    pub async fn execute(&self, request: RequirementsRequest) -> Result<RequirementsResponse> {
        // Step 1: Extract candidate names from the environment file
        let extracted_packages = self.extract_packages(&request.environment_file)?;
        self.progress_reporter
            .report(&format!("Extracted packages: {:?}", extracted_packages));

        // Step 2: Keep the candidates the package index can resolve
        let available_packages = self.check_availability(&extracted_packages).await?;
        self.progress_reporter
            .report(&format!("Available packages: {:?}", available_packages));

        // Step 3: Scan sources for the packages actually imported
        let used_packages = self.find_used_packages(&request.source_dirs).await?;
        self.progress_reporter
            .report(&format!("Used packages: {:?}", used_packages));

        // Step 4: Intersect and write
        let final_packages = RequirementsGenerator::intersect(
            &available_packages,
            &used_packages,
            request.name_matching,
        )?;
        self.write_requirements(&final_packages)?;

        Ok(RequirementsResponse {
            extracted_packages,
            available_packages,
            used_packages,
            final_packages,
        })
    }

    /// Reads and parses the environment file
    ///
    /// Only a missing file or a document that fails to parse is recovered
    /// from; both are reported and yield an empty list.
    fn extract_packages(&self, environment_file: &Path) -> Result<Vec<String>> {
        self.progress_reporter.report(&format!(
            "📖 Loading environment file: {}",
            environment_file.display()
        ));

        let content = match self.environment_reader.read_environment(environment_file) {
            Ok(content) => content,
            Err(e) => {
                let recoverable = e
                    .downcast_ref::<ReqsError>()
                    .is_some_and(ReqsError::is_recoverable_extraction_error);
                if !recoverable {
                    return Err(e);
                }
                self.progress_reporter.report_error(&format!("⚠️  {}", e));
                return Ok(Vec::new());
            }
        };

        match EnvironmentSpec::from_yaml(&content) {
            Ok(spec) => {
                if let Some(name) = spec.name.as_deref() {
                    self.progress_reporter
                        .report(&format!("🐍 Environment: {}", name));
                }
                Ok(DependencyExtractor::extract(&spec))
            }
            Err(e) => {
                let error = ReqsError::EnvironmentParseError {
                    path: environment_file.to_path_buf(),
                    details: e.to_string(),
                };
                self.progress_reporter.report_error(&format!("⚠️  {}", error));
                Ok(Vec::new())
            }
        }
    }

    /// Queries the package index for each candidate, one at a time
    async fn check_availability(&self, packages: &[String]) -> Result<Vec<String>> {
        if packages.is_empty() {
            return Ok(Vec::new());
        }

        self.progress_reporter.report(&format!(
            "🔍 Checking {} package(s) on the package index...",
            packages.len()
        ));

        let total = packages.len();
        let mut available = Vec::new();

        for (index, package) in packages.iter().enumerate() {
            let requirement = Requirement::parse(package)?;

            if self
                .package_index
                .is_available(requirement.name().as_str())
                .await?
            {
                available.push(package.clone());
            } else {
                self.progress_reporter
                    .report_error(&format!("Package {} not found on PyPI.", package));
            }

            self.progress_reporter
                .report_progress(index + 1, total, Some(package));
        }

        Ok(available)
    }

    /// Scans each source directory into its own staging file, then merges
    /// the files in directory order
    ///
    /// The staging directory is removed when this function returns, whether
    /// or not the scan succeeded.
    async fn find_used_packages(&self, source_dirs: &[PathBuf]) -> Result<Vec<String>> {
        self.progress_reporter.report(&format!(
            "🔎 Scanning {} source director{} ({} scanner)...",
            source_dirs.len(),
            if source_dirs.len() == 1 { "y" } else { "ies" },
            self.import_scanner.name()
        ));

        let staging_dir = TempDir::new()?;
        let mut scan_outputs = Vec::new();

        for (index, directory) in source_dirs.iter().enumerate() {
            if !directory.is_dir() {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Source directory '{}' does not exist, skipping.",
                    directory.display()
                ));
                continue;
            }

            let output_file = staging_dir.path().join(format!("used-{}.txt", index));
            self.import_scanner
                .scan_directory(directory, &output_file)
                .await?;
            scan_outputs.push((directory, output_file));
        }

        let mut used_packages = Vec::new();
        for (directory, output_file) in scan_outputs {
            let content = fs::read_to_string(&output_file).map_err(|e| ReqsError::ScannerError {
                directory: directory.clone(),
                details: format!("Failed to read scanner output: {}", e),
            })?;
            used_packages.extend(parse_scan_output(&content));
        }

        Ok(used_packages)
    }

    /// Renders the final package set and hands it to the presenter
    fn write_requirements(&self, final_packages: &[String]) -> Result<()> {
        let content = RequirementsGenerator::render(final_packages);
        self.output_presenter.present(&content)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Requirements generated: {} ({} package(s))",
            self.output_presenter.destination(),
            final_packages.len()
        ));

        Ok(())
    }
}
