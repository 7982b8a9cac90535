use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - requirements file generated
    Success = 0,
    /// Application error (index error, scanner error, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for requirements generation.
///
/// Only `EnvironmentFileNotFound` and `EnvironmentParseError` are recovered
/// from by the use case; every other variant aborts the run.
#[derive(Debug, Error)]
pub enum ReqsError {
    #[error("Environment file not found: {path}\n\n💡 Hint: {suggestion}")]
    EnvironmentFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse environment file: {path}\nDetails: {details}\n\n💡 Hint: The file must be valid YAML with a top-level 'dependencies' list")]
    EnvironmentParseError { path: PathBuf, details: String },

    #[error("Malformed requirement: '{requirement}'\nReason: {reason}\n\n💡 Hint: Check the spelling of this entry in the environment file")]
    MalformedRequirement { requirement: String, reason: String },

    #[error("Package index query failed for '{package_name}'\nDetails: {details}\n\n💡 Hint: Please check your internet connection and the configured index URL")]
    IndexQueryError {
        package_name: String,
        details: String,
    },

    #[error("Import scan failed for directory: {directory}\nDetails: {details}")]
    ScannerError { directory: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid source directory: {path}\nReason: {reason}")]
    InvalidSourceDirectory { path: PathBuf, reason: String },

    /// Validation error for builder patterns and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ReqsError {
    /// Whether the orchestrator treats this error as "no packages" instead of aborting
    pub fn is_recoverable_extraction_error(&self) -> bool {
        matches!(
            self,
            ReqsError::EnvironmentFileNotFound { .. } | ReqsError::EnvironmentParseError { .. }
        )
    }
}
