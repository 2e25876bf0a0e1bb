//! Per-invocation session bootstrap.
//!
//! Loads the stored token pair, refreshes it once if the ID token has expired,
//! and hands back an authenticated [`RemoteClient`] together with the decoded
//! claims. Every command except login, logout and version starts here.

use crate::credentials::{self, CredentialError, CredentialStore, SessionClaims, TokenPair};
use crate::error::ErrorKind;
use crate::identity::{IdentityClient, IdentityError};
use crate::remote::{ApiError, RemoteClient};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No account configured. Run capturoo account login to begin.")]
    NoCredentials,

    #[error("failed to fetch identity configuration for token refresh")]
    Autoconf(#[source] ApiError),

    #[error("session expired and the token refresh failed; run capturoo account login")]
    Refresh(#[source] IdentityError),

    #[error("failed to save refreshed tokens")]
    Persist(#[source] CredentialError),

    #[error("failed to read stored credentials")]
    Credentials(#[source] CredentialError),
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::NoCredentials => ErrorKind::NotFound,
            SessionError::Autoconf(e) => e.kind(),
            SessionError::Refresh(IdentityError::Transport(_)) => ErrorKind::Transport,
            SessionError::Refresh(_) => ErrorKind::Expired,
            SessionError::Persist(e) | SessionError::Credentials(e) => e.kind(),
        }
    }
}

/// How the session's token was obtained. A missing or unrefreshable token is
/// reported as a [`SessionError`] instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// The stored token had lifetime left.
    Valid,
    /// The stored token had expired and was exchanged for a new one.
    Refreshed,
}

/// Authenticated context passed explicitly to every command handler.
pub struct Session {
    pub tokens: TokenPair,
    pub claims: SessionClaims,
    pub client: RemoteClient,
    pub state: SessionState,
}

impl Session {
    /// `client` is the unauthenticated API client for the configured endpoint;
    /// the session carries a copy holding the bearer token.
    pub fn bootstrap(
        store: &CredentialStore,
        token_filename: &str,
        client: &RemoteClient,
        identity: &IdentityClient,
    ) -> Result<Session, SessionError> {
        Self::bootstrap_at(
            store,
            token_filename,
            client,
            identity,
            time::OffsetDateTime::now_utc().unix_timestamp(),
        )
    }

    pub fn bootstrap_at(
        store: &CredentialStore,
        token_filename: &str,
        client: &RemoteClient,
        identity: &IdentityClient,
        now_unix: i64,
    ) -> Result<Session, SessionError> {
        let tokens = match store.load(token_filename) {
            Ok(t) => t,
            Err(CredentialError::NotFound { path }) => {
                tracing::debug!(path = %path.display(), "no token file");
                return Err(SessionError::NoCredentials);
            }
            Err(err) => return Err(SessionError::Credentials(err)),
        };

        let claims = credentials::decode_claims(&tokens.id_token).map_err(SessionError::Credentials)?;
        if !claims.is_expired_at(now_unix) {
            return Ok(Session {
                client: client.with_token(tokens.id_token.clone()),
                tokens,
                claims,
                state: SessionState::Valid,
            });
        }

        tracing::info!(
            expired_at = claims.expires_at,
            "id token expired; refreshing"
        );
        let autoconf = client.autoconf().map_err(SessionError::Autoconf)?;
        let refreshed = identity
            .refresh_token(autoconf.api_key(), &tokens.refresh_token)
            .map_err(SessionError::Refresh)?;
        store
            .save(token_filename, &refreshed)
            .map_err(SessionError::Persist)?;
        tracing::info!(file = token_filename, "saved refreshed tokens");

        let claims =
            credentials::decode_claims(&refreshed.id_token).map_err(SessionError::Credentials)?;
        Ok(Session {
            client: client.with_token(refreshed.id_token.clone()),
            tokens: refreshed,
            claims,
            state: SessionState::Refreshed,
        })
    }

    pub fn account_id(&self) -> &str {
        &self.claims.account_id
    }
}
