use serde::Deserialize;
use thiserror::Error;

/// Failure of a call to the listing API, passed to the caller as-is
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API returned {code} ({kind}): {message}")]
    Status {
        code: u16,
        kind: String,
        message: String,
    },

    #[error("failed to decode {data_type}: {source}")]
    Decode {
        data_type: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode query directive: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Error body the listing API sends with non-success responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(rename = "type", default)]
    kind: String,
}

impl ApiError {
    /// Build a status error from the response code and raw body
    pub fn from_status(code: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Self::Status {
                code,
                kind: parsed.kind,
                message: parsed.message,
            },
            Err(_) => Self::Status {
                code,
                kind: String::new(),
                message: body.trim().to_string(),
            },
        }
    }

    /// HTTP status the API answered with, if it answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Context message for configuration values read from the environment
pub fn env_context(name: &str) -> String {
    format!("Invalid value in environment variable {}", name)
}
