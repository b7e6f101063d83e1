//! Error types for slide generation.
//!
//! Errors fall into two families: input errors raised while reading a layout
//! or review document (before the presentation service is contacted), and
//! gateway errors raised by the service itself. Gateway errors are never
//! retried; batches applied before a failure stay applied.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for slide generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Categories of errors, used to pick user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed input document (layout, template output, or review data).
    Input,
    /// Network or service failure.
    Network,
    /// Missing or rejected credentials.
    Auth,
    /// The service answered with something we could not understand.
    Format,
    /// Other/unknown errors.
    Other,
}

impl ErrorCategory {
    /// Whether this error category is typically transient.
    ///
    /// Generation itself never retries; this only informs the message shown
    /// to the user.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network)
    }

    /// Get a user-friendly description of this error category.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Input => "Invalid input document",
            Self::Network => "Presentation service request failed",
            Self::Auth => "Authentication problem",
            Self::Format => "Unexpected service response",
            Self::Other => "Unknown error",
        }
    }

    /// Get actionable advice for resolving this error category.
    #[must_use]
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Input => "Check that the file is valid JSON after variable substitution",
            Self::Network => "Check your connection; slides created so far were kept",
            Self::Auth => "Run with --auth to store a fresh access token",
            Self::Format => "The service API may have changed, try again later",
            Self::Other => "Check the error details for more information",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Errors that can occur while generating slides.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error while reading an input file.
    #[error("IO error at {path}: {source}")]
    Io {
        /// Path involved in the error.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Input document is not valid JSON, or does not match the expected shape.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        /// Where the document came from (a path, or "stdin").
        origin: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// HTTP request to the presentation service failed.
    #[error("HTTP request failed: {message}")]
    Http {
        /// Error message.
        message: String,
        /// HTTP status code if available.
        status: Option<u16>,
    },

    /// The presentation service rejected the request.
    #[error("presentation API error: {0}")]
    Api(String),

    /// Invalid response from the presentation service.
    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    /// No access token is available.
    #[error("no access token found")]
    MissingToken,
}

impl Error {
    /// Create an IO error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with the document origin.
    pub fn parse(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            origin: origin.into(),
            source,
        }
    }

    /// Create an HTTP error.
    pub fn http(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Http {
            message: message.into(),
            status,
        }
    }

    /// Get the error category.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Io { .. } => ErrorCategory::Input,
            Error::Parse { .. } => ErrorCategory::Input,
            Error::Http {
                status: Some(401 | 403),
                ..
            } => ErrorCategory::Auth,
            Error::Http { .. } => ErrorCategory::Network,
            Error::Api(_) => ErrorCategory::Network,
            Error::InvalidResponse(_) => ErrorCategory::Format,
            Error::MissingToken => ErrorCategory::Auth,
        }
    }

    /// Whether this error happened before any request was sent.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        self.category() == ErrorCategory::Input
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => Self::Http {
                message: format!("HTTP {}", code),
                status: Some(code),
            },
            ureq::Error::Json(e) => Self::InvalidResponse(e.to_string()),
            other => Self::Http {
                message: other.to_string(),
                status: None,
            },
        }
    }
}
