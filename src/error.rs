//! API Errors
//!
//! Everything that can go wrong between a click and a rendered list.

use thiserror::Error;

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered outside the 2xx range
    #[error("server returned {status} {message}")]
    Status { status: u16, message: String },

    /// A list body was not the expected JSON shape
    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("could not encode request body: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status { status: 404, message: "NOT FOUND".to_string() };
        assert_eq!(err.to_string(), "server returned 404 NOT FOUND");
    }
}
