use clap::{Args, Subcommand};

use capturoo::model::BucketSortField;

#[derive(Subcommand)]
pub(crate) enum BucketCommands {
    /// Create a new bucket
    Create {
        /// Resource name: 1-40 chars of a-z, 0-9 and single hyphens
        resource: String,
        /// Human readable bucket name
        #[arg(short = 'n', long)]
        name: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Get bucket details
    Get {
        resource: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List buckets
    List(BucketListArgs),

    /// Rename a bucket
    Update {
        resource: String,
        /// New human readable bucket name
        #[arg(short = 'n', long)]
        name: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a bucket
    Delete { resource: String },
}

#[derive(Args)]
pub(crate) struct BucketListArgs {
    /// Show account IDs alongside buckets
    #[arg(short = 'a', long = "accounts")]
    pub(crate) accounts: bool,
    /// Show internal ids (used for diagnostics)
    #[arg(short = 'x', long = "id")]
    pub(crate) ids: bool,
    /// Include created and modified timestamps
    #[arg(short = 't', long = "time")]
    pub(crate) dates: bool,
    /// Sort by field
    #[arg(short = 's', long = "sortby", value_enum, default_value = "created")]
    pub(crate) sort_by: BucketSortField,
    /// Reverse the sort order
    #[arg(short = 'r', long)]
    pub(crate) reverse: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
