use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Output path that selects stdout instead of a file
pub const STDOUT_MARKER: &str = "-";

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// `-` selects stdout, anything else is a file path
    pub fn from_output(output: &str) -> Self {
        if output == STDOUT_MARKER {
            PresenterType::Stdout
        } else {
            PresenterType::File(PathBuf::from(output))
        }
    }
}

/// Factory for creating output presenters
///
/// This factory encapsulates the creation logic for different presenter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use env2reqs::application::factories::{PresenterFactory, PresenterType};
    /// use env2reqs::ports::outbound::OutputPresenter;
    ///
    /// let presenter = PresenterFactory::create(PresenterType::from_output("requirements.txt"));
    /// assert_eq!(presenter.destination(), "requirements.txt");
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
