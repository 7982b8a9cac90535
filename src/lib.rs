//! env2reqs - requirements.txt generation from conda environment files
//!
//! This library reads a conda `environment.yml`, keeps the dependencies that
//! the PyPI package index can resolve, scans the project's sources for the
//! packages they import, and writes the intersection as a pip requirements
//! file. It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`requirements_generation`): Pure logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use env2reqs::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let environment_reader = FileSystemReader::new();
//! let package_index = PyPiIndexClient::new()?;
//! let import_scanner = NativeImportScanner::new();
//! let output_presenter = FileSystemWriter::new("requirements.txt".into());
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateRequirementsUseCase::new(
//!     environment_reader,
//!     package_index,
//!     import_scanner,
//!     output_presenter,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = RequirementsRequest::builder()
//!     .environment_file("environment.yml")
//!     .source_dirs(["src", "notebooks"])
//!     .build()?;
//! let response = use_case.execute(request).await?;
//! println!("{:?}", response.final_packages);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod requirements_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::PyPiIndexClient;
    pub use crate::adapters::outbound::scanner::{NativeImportScanner, PipreqsScanner};
    pub use crate::application::dto::{RequirementsRequest, RequirementsResponse, ScannerKind};
    pub use crate::application::use_cases::GenerateRequirementsUseCase;
    pub use crate::ports::outbound::{
        EnvironmentReader, ImportScanner, OutputPresenter, PackageIndex, ProgressReporter,
    };
    pub use crate::requirements_generation::domain::{EnvironmentSpec, PackageName, Requirement};
    pub use crate::requirements_generation::policies::NameMatching;
    pub use crate::requirements_generation::services::{
        DependencyExtractor, RequirementsGenerator,
    };
    pub use crate::shared::error::ReqsError;
    pub use crate::shared::Result;
}
