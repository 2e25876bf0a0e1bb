use std::fs::File;
use std::io::{self, BufWriter};

use capturoo::export::export_bucket_leads;

use super::bucket::require_bucket;
use super::*;

pub(super) fn handle_lead_command(session: &Session, command: LeadCommands) -> Result<()> {
    match command {
        LeadCommands::Export {
            resource,
            format,
            output,
        } => {
            let bucket = require_bucket(session, &resource)?;

            // The destination is opened before the lead request goes out.
            let count = match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("create {}", path.display()))?;
                    let count = export_bucket_leads(
                        &session.client,
                        &bucket.bucket_id,
                        format,
                        BufWriter::new(file),
                    )
                    .context("failed to export leads")?;
                    eprintln!("Wrote {} lead(s) to {}", count, path.display());
                    count
                }
                None => {
                    let stdout = io::stdout();
                    export_bucket_leads(
                        &session.client,
                        &bucket.bucket_id,
                        format,
                        BufWriter::new(stdout.lock()),
                    )
                    .context("failed to export leads")?
                }
            };
            tracing::info!(count, bucket = %bucket.bucket_id, "lead export complete");
            Ok(())
        }
    }
}
