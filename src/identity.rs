//! Token exchanges against the external identity provider.
//!
//! Each call is a single blocking POST with an API-key query parameter and a
//! fixed timeout. Nothing is retried.

use serde::{Deserialize, Serialize};

use crate::config::REQUEST_TIMEOUT;
use crate::credentials::TokenPair;
use crate::error::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("{code} {message}")]
    Auth { code: i64, message: String },

    #[error("identity provider returned {status}")]
    Http { status: reqwest::StatusCode },

    #[error("identity provider request failed")]
    Transport(#[source] reqwest::Error),

    #[error("failed to decode identity provider response")]
    Decode(#[source] reqwest::Error),
}

impl IdentityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdentityError::Transport(_) => ErrorKind::Transport,
            IdentityError::Auth { .. } | IdentityError::Http { .. } | IdentityError::Decode(_) => {
                ErrorKind::ServerError
            }
        }
    }
}

/// Base URLs of the three provider services.
#[derive(Clone, Debug)]
pub struct IdentityEndpoints {
    pub identity_toolkit: String,
    pub relying_party: String,
    pub secure_token: String,
}

impl Default for IdentityEndpoints {
    fn default() -> Self {
        Self {
            identity_toolkit: "https://identitytoolkit.googleapis.com".to_string(),
            relying_party: "https://www.googleapis.com".to_string(),
            secure_token: "https://securetoken.googleapis.com".to_string(),
        }
    }
}

impl IdentityEndpoints {
    /// Routes every service to one base URL.
    pub fn single(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        Self {
            identity_toolkit: base.clone(),
            relying_party: base.clone(),
            secure_token: base,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub id_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub expires_in: String,
    #[serde(default)]
    pub local_id: String,
    #[serde(default)]
    pub registered: bool,
}

impl SignInResponse {
    pub fn token_pair(&self) -> TokenPair {
        TokenPair {
            id_token: self.id_token.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordSignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CustomTokenRequest<'a> {
    token: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomTokenResponse {
    id_token: String,
    refresh_token: String,
}

#[derive(Deserialize)]
struct RefreshTokenResponse {
    id_token: String,
    refresh_token: String,
}

#[derive(Deserialize)]
struct ProviderErrorEnvelope {
    error: ProviderError,
}

#[derive(Deserialize)]
struct ProviderError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

pub struct IdentityClient {
    endpoints: IdentityEndpoints,
    client: reqwest::blocking::Client,
}

impl IdentityClient {
    pub fn new() -> Result<Self, IdentityError> {
        Self::with_endpoints(IdentityEndpoints::default())
    }

    pub fn with_endpoints(endpoints: IdentityEndpoints) -> Result<Self, IdentityError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("capturoo")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(IdentityError::Transport)?;
        Ok(Self { endpoints, client })
    }

    pub fn sign_in_with_password(
        &self,
        api_key: &str,
        email: &str,
        password: &str,
    ) -> Result<SignInResponse, IdentityError> {
        let url = format!(
            "{}/v1/accounts:signInWithPassword",
            self.endpoints.identity_toolkit
        );
        let resp = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&PasswordSignInRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .map_err(IdentityError::Transport)?;
        check_status(resp, "sign in with password")?
            .json()
            .map_err(IdentityError::Decode)
    }

    pub fn exchange_custom_token(
        &self,
        api_key: &str,
        custom_token: &str,
    ) -> Result<TokenPair, IdentityError> {
        let url = format!(
            "{}/identitytoolkit/v3/relyingparty/verifyCustomToken",
            self.endpoints.relying_party
        );
        let resp = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&CustomTokenRequest {
                token: custom_token,
                return_secure_token: true,
            })
            .send()
            .map_err(IdentityError::Transport)?;
        let out: CustomTokenResponse = check_status(resp, "exchange custom token")?
            .json()
            .map_err(IdentityError::Decode)?;
        Ok(TokenPair {
            id_token: out.id_token,
            refresh_token: out.refresh_token,
        })
    }

    /// Exchanges a refresh token for a new pair. The provider expects a
    /// form-encoded body here, not JSON.
    pub fn refresh_token(
        &self,
        api_key: &str,
        refresh_token: &str,
    ) -> Result<TokenPair, IdentityError> {
        let url = format!("{}/v1/token", self.endpoints.secure_token);
        let resp = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .map_err(IdentityError::Transport)?;
        let out: RefreshTokenResponse = check_status(resp, "exchange refresh token")?
            .json()
            .map_err(IdentityError::Decode)?;
        Ok(TokenPair {
            id_token: out.id_token,
            refresh_token: out.refresh_token,
        })
    }
}

fn check_status(
    resp: reqwest::blocking::Response,
    label: &str,
) -> Result<reqwest::blocking::Response, IdentityError> {
    let status = resp.status();
    tracing::debug!(%status, "{}", label);
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::BAD_REQUEST
        && let Ok(env) = resp.json::<ProviderErrorEnvelope>()
    {
        return Err(IdentityError::Auth {
            code: env.error.code,
            message: env.error.message,
        });
    }
    Err(IdentityError::Http { status })
}
