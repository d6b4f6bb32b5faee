/// Errors from the document service transport layer.
use std::path::PathBuf;

use thiserror::Error;

/// Typed errors from a single round trip against the document service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never produced a response (connect, DNS, broken pipe).
    #[error("Document service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    ///
    /// The service reports failures as a plain-text body; it is kept verbatim.
    #[error("Document service returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Plain-text message from the response body.
        message: String,
    },

    /// A file destined for the multipart upload could not be opened.
    #[error("Cannot attach '{}' to the request: {source}", path.display())]
    Upload {
        /// The file that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl ServiceError {
    /// Machine-readable code used in the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "service_unreachable",
            Self::Status { status: 422, .. } => "compilation_failed",
            Self::Status { .. } => "service_error",
            Self::Upload { .. } => "upload_failed",
        }
    }
}
