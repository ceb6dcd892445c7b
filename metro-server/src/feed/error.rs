//! Feed client error types.

/// Errors from the live feed HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse the response body
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error envelope or status code
    #[error("API error {status}: {message}")]
    Api { status: i64, message: String },

    /// Invalid or missing API key
    #[error("unauthorized: check SEOUL_API_KEY")]
    Unauthorized,

    /// Mock data could not be loaded
    #[error("mock data error: {0}")]
    MockData(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FeedError::Api {
            status: 500,
            message: "서비스 오류".into(),
        };
        assert_eq!(err.to_string(), "API error 500: 서비스 오류");

        let err = FeedError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));

        let err = FeedError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized: check SEOUL_API_KEY");
    }
}
