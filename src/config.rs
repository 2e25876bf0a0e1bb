use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.capturoo.com";
pub const ENDPOINT_ENV: &str = "CAPTUROO_CLI_ENDPOINT";
pub const CONFIG_DIR_ENV: &str = "CAPTUROO_CONFIG_DIR";
pub const LOG_ENV: &str = "CAPTUROO_LOG";

const CONFIG_DIR: &str = ".capturoo";

/// Client-side timeout for identity calls and non-streaming API calls.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(6);

/// Settings resolved once per invocation.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub endpoint: Url,
    pub config_dir: PathBuf,
    pub token_filename: String,
}

impl CliConfig {
    pub fn new(endpoint: &str, config_dir: PathBuf) -> Result<Self> {
        let endpoint =
            Url::parse(endpoint).with_context(|| format!("failed to parse url {:?}", endpoint))?;
        let token_filename = token_filename(&endpoint)?;
        Ok(Self {
            endpoint,
            config_dir,
            token_filename,
        })
    }

    /// Endpoint without a trailing slash, ready for path concatenation.
    pub fn base_url(&self) -> String {
        self.endpoint.as_str().trim_end_matches('/').to_string()
    }
}

/// Maps an endpoint to its token file name: the host with dots replaced by
/// underscores, suffixed with `_<port>` when the URL names a port.
pub fn token_filename(endpoint: &Url) -> Result<String> {
    let host = endpoint
        .host_str()
        .with_context(|| format!("endpoint {} has no host", endpoint))?;
    let mut name = host.to_string();
    if let Some(port) = endpoint.port() {
        name.push('_');
        name.push_str(&port.to_string());
    }
    Ok(name.replace('.', "_"))
}

/// `$CAPTUROO_CONFIG_DIR` if set, otherwise `~/.capturoo`.
pub fn default_config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("failed to get home directory")?;
    Ok(home.join(CONFIG_DIR))
}

pub fn version_string() -> String {
    format!(
        "Capturoo CLI tool {} (build {})",
        env!("CARGO_PKG_VERSION"),
        option_env!("CAPTUROO_GIT_COMMIT").unwrap_or("unknown")
    )
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
