//! Failure categories shared by every command.
//!
//! Each module keeps its own `thiserror` enum; [`ErrorKind`] is the coarse
//! category the command boundary reports on.

use crate::credentials::CredentialError;
use crate::events::EventSpecError;
use crate::export::ExportError;
use crate::identity::IdentityError;
use crate::remote::ApiError;
use crate::session::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credential file or remote resource absent.
    NotFound,
    /// Token lifetime elapsed and the refresh exchange failed.
    Expired,
    /// Bad token encoding, invalid event spec or code, unsupported export value.
    MalformedInput,
    /// Resource code or URL already exists.
    Conflict,
    /// Network or timeout failure.
    Transport,
    /// Non-2xx response without a known sentinel code.
    ServerError,
    /// Local file system failure.
    Io,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::NotFound => "not-found",
            ErrorKind::Expired => "expired",
            ErrorKind::MalformedInput => "malformed-input",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Transport => "transport",
            ErrorKind::ServerError => "server-error",
            ErrorKind::Io => "io",
        };
        f.write_str(s)
    }
}

/// Returns the kind of the first typed error found in the chain.
pub fn classify(err: &anyhow::Error) -> Option<ErrorKind> {
    err.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<SessionError>() {
            return Some(e.kind());
        }
        if let Some(e) = cause.downcast_ref::<CredentialError>() {
            return Some(e.kind());
        }
        if let Some(e) = cause.downcast_ref::<IdentityError>() {
            return Some(e.kind());
        }
        if let Some(e) = cause.downcast_ref::<ApiError>() {
            return Some(e.kind());
        }
        if let Some(e) = cause.downcast_ref::<EventSpecError>() {
            return Some(e.kind());
        }
        if let Some(e) = cause.downcast_ref::<ExportError>() {
            return Some(e.kind());
        }
        None
    })
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
