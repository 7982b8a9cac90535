/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod environment_reader;
pub mod import_scanner;
pub mod output_presenter;
pub mod package_index;
pub mod progress_reporter;

pub use environment_reader::EnvironmentReader;
pub use import_scanner::ImportScanner;
pub use output_presenter::OutputPresenter;
pub use package_index::PackageIndex;
pub use progress_reporter::ProgressReporter;
