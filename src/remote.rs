//! Blocking client for the Capturoo REST API.

use crate::config::REQUEST_TIMEOUT;
use crate::error::ErrorKind;

mod http_client;

mod types;
pub use self::types::*;
mod account;
mod buckets;
mod leads;
mod webhooks;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bucket code already exists")]
    BucketCodeExists,

    #[error("webhook url already exists")]
    WebhookUrlExists,

    #[error("webhook code already exists")]
    WebhookCodeExists,

    #[error("webhook resources not found")]
    WebhookResourcesNotFound,

    #[error("bad request: {message}")]
    BadRequest { message: String },

    #[error("unauthorized (token rejected; run `capturoo account login` again)")]
    Unauthorized,

    #[error("{label} returned {status}: {code} {message}")]
    Status {
        label: String,
        status: reqwest::StatusCode,
        code: String,
        message: String,
    },

    #[error("{label} request failed")]
    Transport {
        label: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode {label} response")]
    Decode {
        label: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::BucketCodeExists | ApiError::WebhookUrlExists | ApiError::WebhookCodeExists => {
                ErrorKind::Conflict
            }
            ApiError::WebhookResourcesNotFound => ErrorKind::NotFound,
            ApiError::BadRequest { .. } => ErrorKind::MalformedInput,
            ApiError::Unauthorized => ErrorKind::Expired,
            ApiError::Status { status, .. } => match *status {
                reqwest::StatusCode::NOT_FOUND => ErrorKind::NotFound,
                reqwest::StatusCode::CONFLICT => ErrorKind::Conflict,
                _ => ErrorKind::ServerError,
            },
            ApiError::Transport { .. } => ErrorKind::Transport,
            ApiError::Decode { .. } => ErrorKind::ServerError,
        }
    }
}

#[derive(Clone)]
pub struct RemoteClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    /// Builds a client for `base_url`. Without a token, requests are sent
    /// unauthenticated (autoconf and developer-key sign-in need none).
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ApiError> {
        // No total timeout on the client: the lead stream may run long.
        // Other calls set one per request.
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("capturoo/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(REQUEST_TIMEOUT)
            .timeout(None)
            .build()
            .map_err(|source| ApiError::Transport {
                label: "build http client".to_string(),
                source,
            })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    /// Same endpoint and connection pool, different bearer token.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            base_url: self.base_url.clone(),
            token: Some(token),
            client: self.client.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
#[path = "tests/remote/http_client_tests.rs"]
mod tests;
