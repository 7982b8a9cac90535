/// Mock implementations for testing
mod mock_environment_reader;
mod mock_import_scanner;
mod mock_output_presenter;
mod mock_package_index;
mod mock_progress_reporter;

pub use mock_environment_reader::MockEnvironmentReader;
pub use mock_import_scanner::MockImportScanner;
pub use mock_output_presenter::MockOutputPresenter;
pub use mock_package_index::MockPackageIndex;
pub use mock_progress_reporter::MockProgressReporter;
