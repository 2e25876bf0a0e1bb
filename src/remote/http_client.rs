use reqwest::Method;
use reqwest::blocking::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::*;

impl RemoteClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn auth(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Request with the bearer token (if any) and a JSON accept header.
    /// Callers choose whether to apply [`REQUEST_TIMEOUT`].
    pub(super) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut rb = self
            .client
            .request(method, self.url(path))
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(auth) = self.auth() {
            rb = rb.header(reqwest::header::AUTHORIZATION, auth);
        }
        rb
    }

    pub(super) fn send(&self, rb: RequestBuilder, label: &str) -> Result<Response, ApiError> {
        let resp = rb.send().map_err(|source| ApiError::Transport {
            label: label.to_string(),
            source,
        })?;
        tracing::debug!(status = %resp.status(), url = %resp.url(), "{}", label);
        ensure_ok(resp, label)
    }

    /// Sends with the standard timeout and decodes a JSON body.
    pub(super) fn send_json<T: DeserializeOwned>(
        &self,
        rb: RequestBuilder,
        label: &str,
    ) -> Result<T, ApiError> {
        self.send(rb.timeout(REQUEST_TIMEOUT), label)?
            .json()
            .map_err(|source| ApiError::Decode {
                label: label.to_string(),
                source,
            })
    }

    /// Sends with the standard timeout and discards the body.
    pub(super) fn send_empty(&self, rb: RequestBuilder, label: &str) -> Result<(), ApiError> {
        self.send(rb.timeout(REQUEST_TIMEOUT), label)?;
        Ok(())
    }
}

pub(super) fn ensure_ok(resp: Response, label: &str) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    Err(translate_error(status, &body, label))
}

/// Maps an error envelope to a typed error. Known codes win over the status.
pub(super) fn translate_error(status: reqwest::StatusCode, body: &str, label: &str) -> ApiError {
    let envelope: ApiErrorEnvelope = match serde_json::from_str(body) {
        Ok(env) => env,
        Err(_) => {
            tracing::warn!(%status, "{} returned a non-envelope error body", label);
            ApiErrorEnvelope::default()
        }
    };

    match envelope.code.as_str() {
        "buckets/bucket-code-exists" | "bucket/bucket-code-exists" => ApiError::BucketCodeExists,
        "webhook/webhook-url-exists" => ApiError::WebhookUrlExists,
        "webhook/webhook-code/exists" | "webhook/webhook-code-exists" => {
            ApiError::WebhookCodeExists
        }
        "webhook/webhook-resources-not-found" => ApiError::WebhookResourcesNotFound,
        "bad-request" => ApiError::BadRequest {
            message: envelope.message,
        },
        _ if status == reqwest::StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        _ => ApiError::Status {
            label: label.to_string(),
            status,
            code: envelope.code,
            message: envelope.message,
        },
    }
}
