//! Local token file storage.
//!
//! One file per endpoint under the configuration directory, holding exactly a
//! [`TokenPair`] as JSON. Writes replace the whole file atomically.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

mod claims;
pub use self::claims::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub id_token: String,
    pub refresh_token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("token file {} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to decode token file {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed token: {0}")]
    MalformedToken(String),
}

impl CredentialError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CredentialError::NotFound { .. } => ErrorKind::NotFound,
            CredentialError::Decode { .. } | CredentialError::MalformedToken(_) => {
                ErrorKind::MalformedInput
            }
            CredentialError::Io { .. } => ErrorKind::Io,
        }
    }

    fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        CredentialError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CredentialStore {
    root: PathBuf,
}

impl CredentialStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    pub fn load(&self, filename: &str) -> Result<TokenPair, CredentialError> {
        let path = self.path(filename);
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(CredentialError::NotFound { path });
            }
            Err(err) => return Err(CredentialError::io("read token file", &path, err)),
        };
        serde_json::from_slice(&bytes).map_err(|source| CredentialError::Decode { path, source })
    }

    pub fn save(&self, filename: &str, pair: &TokenPair) -> Result<(), CredentialError> {
        self.ensure_root()?;
        let path = self.path(filename);
        let bytes = serde_json::to_vec(pair).map_err(|source| CredentialError::Decode {
            path: path.clone(),
            source,
        })?;
        write_atomic(&path, &bytes)?;
        tracing::debug!(path = %path.display(), "wrote token file");
        Ok(())
    }

    /// Deletes the token file. Returns false if there was nothing to delete.
    pub fn remove(&self, filename: &str) -> Result<bool, CredentialError> {
        let path = self.path(filename);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(CredentialError::io("remove token file", &path, err)),
        }
    }

    fn ensure_root(&self) -> Result<(), CredentialError> {
        if self.root.is_dir() {
            return Ok(());
        }
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o700);
        }
        builder
            .create(&self.root)
            .map_err(|err| CredentialError::io("create config dir", &self.root, err))
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), CredentialError> {
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    let mut opts = fs::OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }
    let mut f = opts
        .open(&tmp)
        .map_err(|err| CredentialError::io("create temp file", &tmp, err))?;
    f.write_all(bytes)
        .and_then(|()| f.sync_all())
        .map_err(|err| CredentialError::io("write temp file", &tmp, err))?;
    drop(f);
    fs::rename(&tmp, path).map_err(|err| CredentialError::io("replace token file", path, err))
}

#[cfg(test)]
#[path = "tests/credentials_tests.rs"]
mod tests;
