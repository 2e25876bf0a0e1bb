use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use capturoo::config::{self, CliConfig};
use capturoo::credentials::CredentialStore;
use capturoo::identity::IdentityClient;
use capturoo::remote::RemoteClient;
use capturoo::session::Session;

use crate::Commands;

#[derive(Parser)]
#[command(name = "capturoo")]
#[command(about = "Capturoo lead capture command line tool", long_about = None)]
pub(crate) struct Cli {
    /// API endpoint
    #[arg(
        long,
        global = true,
        env = config::ENDPOINT_ENV,
        default_value = config::DEFAULT_ENDPOINT
    )]
    endpoint: String,

    /// Log level when CAPTUROO_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Everything a handler needs that does not depend on being logged in.
pub(crate) struct CliContext {
    pub(crate) config: CliConfig,
    pub(crate) store: CredentialStore,
    pub(crate) client: RemoteClient,
    pub(crate) identity: IdentityClient,
}

impl CliContext {
    pub(crate) fn session(&self) -> Result<Session> {
        let session = Session::bootstrap(
            &self.store,
            &self.config.token_filename,
            &self.client,
            &self.identity,
        )?;
        tracing::debug!(state = ?session.state, account = %session.account_id(), "session ready");
        Ok(session)
    }
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = CliConfig::new(&cli.endpoint, config::default_config_dir()?)?;
    tracing::debug!(
        endpoint = %config.endpoint,
        config_dir = %config.config_dir.display(),
        "resolved configuration"
    );

    let ctx = CliContext {
        store: CredentialStore::new(config.config_dir.clone()),
        client: RemoteClient::new(&config.base_url(), None).context("create api client")?,
        identity: IdentityClient::new().context("create identity client")?,
        config,
    };
    crate::cli_exec::handle_command(&ctx, cli.command)
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_env(config::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
