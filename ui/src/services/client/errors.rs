use thiserror::Error;

/// Remote-call failures from the change order service.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The server rejected the call. `message` is the structured error-body
    /// message when one was present, otherwise the raw response body.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },
}

impl ApiError {
    /// Build the error for a non-success response. Error bodies shaped like
    /// `{"message": "..."}` surface just the message; anything else is
    /// passed through raw.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("message")?.as_str().map(str::to_string))
            .unwrap_or_else(|| body.to_string());
        ApiError::Server { status, message }
    }
}

/// Result type for change order service calls
pub type ApiResult<T> = Result<T, ApiError>;
