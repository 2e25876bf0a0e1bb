use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};

use super::{CredentialError, TokenPair};

/// Payload of an ID token. Decoded without signature verification: the token
/// is already held locally and is only used for display and routing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "cap_aid")]
    pub account_id: String,
    #[serde(default, rename = "cap_role")]
    pub role: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default, rename = "aud")]
    pub audience: String,
    #[serde(default, rename = "iss")]
    pub issuer: String,
    #[serde(default, rename = "sub")]
    pub subject: String,
    #[serde(default, rename = "iat")]
    pub issued_at: i64,
    #[serde(default, rename = "exp")]
    pub expires_at: i64,
}

impl SessionClaims {
    pub fn is_expired_at(&self, now_unix: i64) -> bool {
        self.expires_at <= now_unix
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(time::OffsetDateTime::now_utc().unix_timestamp())
    }
}

pub fn decode_claims(id_token: &str) -> Result<SessionClaims, CredentialError> {
    let mut parts = id_token.split('.');
    let payload = match (parts.next(), parts.next()) {
        (Some(_), Some(p)) => p,
        _ => {
            return Err(CredentialError::MalformedToken(
                "expected at least two dot-separated segments".to_string(),
            ));
        }
    };

    let mut seg = payload.to_string();
    let rem = seg.len() % 4;
    if rem > 0 {
        seg.push_str(&"=".repeat(4 - rem));
    }
    let bytes = URL_SAFE
        .decode(seg.as_bytes())
        .map_err(|e| CredentialError::MalformedToken(format!("payload is not base64: {}", e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| CredentialError::MalformedToken(format!("failed to decode claims: {}", e)))
}

pub fn is_expired(pair: &TokenPair) -> Result<bool, CredentialError> {
    Ok(decode_claims(&pair.id_token)?.is_expired())
}
