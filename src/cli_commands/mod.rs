use clap::Subcommand;

pub(crate) mod account;
pub(crate) mod bucket;
pub(crate) mod lead;
pub(crate) mod webhook;

pub(crate) use self::account::AccountCommands;
pub(crate) use self::bucket::BucketCommands;
pub(crate) use self::lead::LeadCommands;
pub(crate) use self::webhook::WebhookCommands;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in, inspect or log out of your account
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },

    /// Manage buckets
    #[command(alias = "buckets")]
    Bucket {
        #[command(subcommand)]
        command: BucketCommands,
    },

    /// Export captured leads
    #[command(alias = "leads")]
    Lead {
        #[command(subcommand)]
        command: LeadCommands,
    },

    /// Manage webhooks
    #[command(alias = "webhooks")]
    Webhook {
        #[command(subcommand)]
        command: WebhookCommands,
    },

    /// Inspect the stored ID token
    #[command(alias = "tokens")]
    Token {
        #[command(subcommand)]
        command: TokenCommands,
    },

    /// Print the version
    Version,
}

#[derive(Subcommand)]
pub(crate) enum TokenCommands {
    /// Show the token claims and an `export JWT=...` line
    Show,
}
