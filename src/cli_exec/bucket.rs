use capturoo::events::is_valid_code;
use capturoo::model::{Bucket, sort_buckets};

use super::*;

pub(super) fn handle_bucket_command(session: &Session, command: BucketCommands) -> Result<()> {
    let client = &session.client;
    match command {
        BucketCommands::Create {
            resource,
            name,
            json,
        } => {
            let (ok, reason) = is_valid_code(&resource);
            if !ok {
                anyhow::bail!("resource name {:?} {}", resource, reason);
            }
            let bucket = match client.create_bucket(
                session.account_id(),
                &resource,
                name.as_deref().unwrap_or_default(),
            ) {
                Err(ApiError::BucketCodeExists) => {
                    anyhow::bail!("A bucket with resource name {:?} already exists.", resource)
                }
                other => other.context("failed to create bucket")?,
            };
            if json {
                return output::print_json(&bucket, "bucket");
            }
            output::print_fields(&[
                ("Resource name:", bucket.resource_name.clone()),
                ("Bucket name:", bucket.bucket_name.clone()),
                ("Public API Key:", bucket.public_api_key.clone()),
            ])
        }
        BucketCommands::Get { resource, json } => {
            let found = require_bucket(session, &resource)?;
            let bucket = client
                .get_bucket(&found.bucket_id)
                .context("failed to get bucket")?;
            if json {
                return output::print_json(&bucket, "bucket");
            }
            print_bucket(&bucket)
        }
        BucketCommands::List(args) => {
            let mut buckets = client
                .list_buckets(session.account_id())
                .context("failed to list buckets")?;
            sort_buckets(&mut buckets, args.sort_by, args.reverse);
            if args.json {
                return output::print_json(&buckets, "buckets");
            }

            let mut headers = vec!["Resource name", "Bucket name", "Public API Key"];
            if args.accounts {
                headers.insert(0, "Account ID");
            }
            if args.ids {
                headers.insert(0, "Bucket ID");
            }
            if args.dates {
                headers.extend(["Created", "Modified"]);
            }

            let rows = buckets
                .iter()
                .map(|b| {
                    let mut row = vec![
                        b.resource_name.clone(),
                        b.bucket_name.clone(),
                        b.public_api_key.clone(),
                    ];
                    if args.accounts {
                        row.insert(0, b.account_id.clone());
                    }
                    if args.ids {
                        row.insert(0, b.bucket_id.clone());
                    }
                    if args.dates {
                        row.push(output::timestamp(b.created));
                        row.push(output::timestamp(b.modified));
                    }
                    row
                })
                .collect::<Vec<_>>();
            output::print_table(&headers, rows)?;

            println!("\n{}", bucket_count_line(buckets.len()));
            Ok(())
        }
        BucketCommands::Update {
            resource,
            name,
            json,
        } => {
            if name.is_empty() {
                anyhow::bail!("use -n BUCKET_NAME to pass the bucket name");
            }
            let found = require_bucket(session, &resource)?;
            let bucket = client
                .update_bucket(&found.bucket_id, &name)
                .context("failed to update bucket")?;
            if json {
                return output::print_json(&bucket, "bucket");
            }
            print_bucket(&bucket)
        }
        BucketCommands::Delete { resource } => {
            let found = require_bucket(session, &resource)?;
            client
                .delete_bucket(&found.bucket_id)
                .context("failed to delete bucket")?;
            println!("Deleted bucket {}", resource);
            Ok(())
        }
    }
}

/// Looks a bucket up by resource name within the session's account.
pub(super) fn require_bucket(session: &Session, resource: &str) -> Result<Bucket> {
    session
        .client
        .find_bucket(session.account_id(), resource)
        .context("failed to list buckets")?
        .with_context(|| format!("Bucket with resource name {:?} not found.", resource))
}

fn print_bucket(bucket: &Bucket) -> Result<()> {
    output::print_fields(&[
        ("Bucket ID:", bucket.bucket_id.clone()),
        ("Resource name:", bucket.resource_name.clone()),
        ("Account ID:", bucket.account_id.clone()),
        ("Bucket name:", bucket.bucket_name.clone()),
        ("Public API Key:", bucket.public_api_key.clone()),
        ("Created:", output::timestamp(bucket.created)),
        ("Modified:", output::timestamp(bucket.modified)),
    ])
}

fn bucket_count_line(n: usize) -> String {
    let plural = if n == 1 { "" } else { "s" };
    format!("{} bucket{} in your account", n, plural)
}

#[cfg(test)]
#[path = "../tests/cli_exec/bucket_tests.rs"]
mod tests;
