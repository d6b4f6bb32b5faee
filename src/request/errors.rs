/// Errors from request assembly and command execution.
use std::path::PathBuf;

use thiserror::Error;

use crate::service::ServiceError;

/// Errors that end a `doccli` invocation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No template was given with `-t`.
    #[error("template path must be provided, please use -t")]
    MissingTemplate,

    /// `-m` named neither `compile` nor `vars`.
    #[error("Unknown method '{method}', expected 'compile' or 'vars'")]
    UnknownMethod {
        /// The value passed to `-m`.
        method: String,
    },

    /// An asset path could not be stat-ed.
    #[error("Asset '{}' is not accessible: {source}", path.display())]
    AssetUnreadable {
        /// The offending asset path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An asset directory could not be listed.
    #[error("Cannot list asset directory '{}': {source}", path.display())]
    AssetListing {
        /// The directory being expanded.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The result file could not be created or written.
    #[error("Cannot write result to '{}': {source}", path.display())]
    Output {
        /// The resolved output path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The response body failed while it was being copied to disk.
    #[error("Document stream from the service broke off: {source}")]
    ResponseRead {
        /// Underlying I/O error from the response body.
        source: std::io::Error,
    },

    /// The document service call failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ClientError {
    /// Return the CLI exit code for this error.
    ///
    /// Every failure exits with 1; clap's own usage errors keep exit code 2.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Machine-readable code used in the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingTemplate => "missing_template",
            Self::UnknownMethod { .. } => "unknown_method",
            Self::AssetUnreadable { .. } => "asset_unreadable",
            Self::AssetListing { .. } => "asset_listing_failed",
            Self::Output { .. } => "output_failed",
            Self::ResponseRead { .. } => "response_read_failed",
            Self::Service(e) => e.code(),
        }
    }

    /// Whether the usage text should accompany the message.
    #[must_use]
    pub fn wants_usage(&self) -> bool {
        matches!(self, Self::MissingTemplate)
    }
}
