use std::path::PathBuf;

use clap::Subcommand;

use capturoo::export::ExportFormat;

#[derive(Subcommand)]
pub(crate) enum LeadCommands {
    /// Export every lead captured by a bucket
    Export {
        /// Bucket resource name
        resource: String,
        #[arg(short = 'f', long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Write to a new file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}
