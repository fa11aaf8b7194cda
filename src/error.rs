/*!
 * Error handling for home health directory operations
 *
 * Provides detailed error types with context and suggestions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Home health library result type
pub type Result<T> = std::result::Result<T, HomeHealthError>;

/// Error types with context and suggestions
#[derive(Error, Debug)]
pub enum HomeHealthError {
    /// File I/O errors with context
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
        context: ErrorContext,
    },

    /// CSV parsing errors with location information
    #[error("CSV parsing error at line {line:?}: {message}")]
    CsvParse {
        message: String,
        line: Option<usize>,
        context: ErrorContext,
    },

    /// File not found with suggestions
    #[error("File not found: {path}")]
    FileNotFound {
        path: PathBuf,
        suggestion: String,
    },

    /// Header row lacks a required column
    #[error("Missing required column '{column}' in header row")]
    MissingColumn {
        column: String,
        found_columns: Vec<String>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        suggestion: Option<String>,
    },

    /// Generic errors with custom message
    #[error("{message}")]
    Custom {
        message: String,
        suggestion: Option<String>,
    },
}

/// Error context providing additional information
#[derive(Debug, Default, Clone)]
pub struct ErrorContext {
    pub file_path: Option<PathBuf>,
    pub line_number: Option<usize>,
    pub column_name: Option<String>,
}

impl HomeHealthError {
    /// Create a file not found error with helpful suggestion
    pub fn file_not_found_with_suggestion(path: PathBuf) -> Self {
        let suggestion = format!(
            "Check if the file exists at '{}'. The provider data file is a CSV with \
            'name', 'first_dose', 'insurance' and 'service_area' columns. \
            Make sure the path is correct and you have read permissions.",
            path.display()
        );

        Self::FileNotFound { path, suggestion }
    }

    /// Create a missing column error listing the columns that were found
    pub fn missing_column(column: &str, found_columns: &[String]) -> Self {
        Self::MissingColumn {
            column: column.to_string(),
            found_columns: found_columns.to_vec(),
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::FileNotFound { suggestion, .. } => {
                format!("{}\n\nSuggestion: {}", self, suggestion)
            }
            Self::MissingColumn { found_columns, .. } => {
                format!("{}\n\nColumns found: {}", self, found_columns.join(", "))
            }
            Self::Configuration { suggestion: Some(sug), .. } => {
                format!("{}\n\nSuggestion: {}", self, sug)
            }
            Self::Custom { suggestion: Some(sug), .. } => {
                format!("{}\n\nSuggestion: {}", self, sug)
            }
            _ => self.to_string(),
        }
    }
}

// Convenience conversions
impl From<std::io::Error> for HomeHealthError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
            context: ErrorContext::default(),
        }
    }
}

impl From<csv::Error> for HomeHealthError {
    fn from(err: csv::Error) -> Self {
        let (line, message) = match err.position() {
            Some(pos) => (Some(pos.line() as usize), err.to_string()),
            None => (None, err.to_string()),
        };

        Self::CsvParse {
            message,
            line,
            context: ErrorContext::default(),
        }
    }
}
