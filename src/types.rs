/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout or stderr in the JSON modes.
use serde::{Deserialize, Serialize};

use crate::request::ClientError;

/// Summary of a successful compile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileOutput {
    /// Path the document was written to.
    pub path: String,
    /// Format requested from the service.
    pub format: String,
    /// Number of bytes written.
    pub bytes: u64,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `ClientError`.
    #[must_use]
    pub fn from_client_error(err: &ClientError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
