use serde::Deserialize;
use thiserror::Error;

/// PostgreSQL `unique_violation`, reported when the email is already on the list.
pub const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The store answered, but refused the insert
    #[error("{message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// The request never got an answer (DNS, CORS, connection reset, ...)
    #[error("{message}")]
    Network { message: String },
}

impl StoreError {
    pub fn network(message: impl Into<String>) -> Self {
        StoreError::Network {
            message: message.into(),
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StoreError::Rejected { code: Some(code), .. } if code == UNIQUE_VIOLATION
        )
    }

    /// Build the error for a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let (code, message) = match serde_json::from_str::<PostgrestError>(body) {
            Ok(err) => (
                err.code,
                err.message.filter(|m| !m.is_empty()).or(err.details),
            ),
            Err(_) => (None, Some(body.trim().to_string())),
        };

        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| status_text(status));

        StoreError::Rejected {
            status,
            code,
            message,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::network(err.to_string())
    }
}

fn status_text(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status))
}

/// Error body returned by PostgREST
#[derive(Debug, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}
