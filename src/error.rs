use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoinRailzError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Coin Railz {endpoint} error ({status}): {body}")]
    Http {
        endpoint: String,
        status: StatusCode,
        body: String,
    },

    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Invalid JSON response from {endpoint}: {source}")]
    InvalidResponse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid payment proof: {0}")]
    InvalidPaymentProof(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Payment failed: {0}")]
    Payment(String),
}

impl CoinRailzError {
    /// Status code of a rejected request, `None` for every other failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CoinRailzError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of a rejected request.
    pub fn body(&self) -> Option<&str> {
        match self {
            CoinRailzError::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, CoinRailzError::Transport(_))
    }
}

pub type Result<T, E = CoinRailzError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_exposes_status_and_body() {
        let err = CoinRailzError::Http {
            endpoint: "/wallet-risk".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: r#"{"error": "rate limited"}"#.to_string(),
        };

        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.body(), Some(r#"{"error": "rate limited"}"#));
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            r#"Coin Railz /wallet-risk error (500 Internal Server Error): {"error": "rate limited"}"#
        );
    }

    #[test]
    fn non_http_errors_have_no_status() {
        let err = CoinRailzError::Config("bad url".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), None);
    }
}
