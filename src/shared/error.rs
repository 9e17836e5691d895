use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The report was rendered and presented
    Success = 0,
    /// Reading, parsing, rendering or writing failed
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

/// Errors that abort report generation.
///
/// Malformed-but-parseable scan data is never an error: it degrades to
/// empty groups and fallback texts instead.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read scan results from {source_name}\nDetails: {details}\n\n💡 Hint: Check the --input path, or pipe the results on stdin")]
    SourceReadError {
        source_name: String,
        details: String,
    },

    #[error("Failed to parse scan results from {source_name}\nDetails: {details}\n\n💡 Hint: The input must be the JSON output of a scan (one project object or a list of them)")]
    InputParseError {
        source_name: String,
        details: String,
    },

    #[error("Failed to read template: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the template file exists and you have read permissions")]
    TemplateReadError { path: PathBuf, details: String },

    #[error("Failed to render template '{template}'\nDetails: {details}")]
    TemplateRenderError { template: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
