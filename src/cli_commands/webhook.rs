use clap::{Args, Subcommand};

use capturoo::model::WebhookSortField;

#[derive(Subcommand)]
pub(crate) enum WebhookCommands {
    /// Create a new webhook
    Create {
        /// Webhook code
        code: String,
        /// Target events EVT1[:resource1|resourceN...],EVT2,...
        #[arg(short = 'e', long)]
        events: String,
        /// Secure (https) URL of the webhook handler
        #[arg(short = 'u', long)]
        url: String,
        /// Create the webhook disabled
        #[arg(long)]
        disabled: bool,
        /// Show internal ids (used for diagnostics)
        #[arg(long = "id")]
        ids: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Get webhook details
    Get {
        code: String,
        /// Show internal ids (used for diagnostics)
        #[arg(long = "id")]
        ids: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List webhooks
    List(WebhookListArgs),

    /// Update a webhook
    Update(WebhookUpdateArgs),

    /// Delete a webhook
    Delete { code: String },
}

#[derive(Args)]
pub(crate) struct WebhookListArgs {
    /// Show internal ids (used for diagnostics)
    #[arg(long = "id")]
    pub(crate) ids: bool,
    /// Include created and modified timestamps
    #[arg(short = 't', long = "time")]
    pub(crate) dates: bool,
    /// Sort by field
    #[arg(short = 's', long = "sortby", value_enum, default_value = "created")]
    pub(crate) sort_by: WebhookSortField,
    /// Reverse the sort order
    #[arg(short = 'r', long)]
    pub(crate) reverse: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
#[command(group(
    clap::ArgGroup::new("change")
        .required(true)
        .multiple(true)
        .args(["events", "url", "enable", "disable"]),
))]
pub(crate) struct WebhookUpdateArgs {
    pub(crate) code: String,
    /// Replacement event list EVT1[:resource1|resourceN...],EVT2,...
    #[arg(short = 'e', long)]
    pub(crate) events: Option<String>,
    /// Replacement secure (https) URL
    #[arg(short = 'u', long)]
    pub(crate) url: Option<String>,
    /// Enable the webhook
    #[arg(long, conflicts_with = "disable")]
    pub(crate) enable: bool,
    /// Disable the webhook
    #[arg(long)]
    pub(crate) disable: bool,
    /// Show internal ids (used for diagnostics)
    #[arg(long = "id")]
    pub(crate) ids: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
