/// Errors returned by `EventClient` operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Base URL could not be parsed or cannot carry a path.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request could not be built, sent, or its body read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Engine answered with a non-200 status.
    #[error("engine returned status {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body, unparsed
        body: String,
    },

    /// 200 response whose body did not have the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// True when the engine was reached and rejected the request.
    pub fn is_api(&self) -> bool {
        matches!(self, ClientError::Api { .. })
    }

    /// HTTP status of an `Api` failure
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
