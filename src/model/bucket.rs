use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A lead collection endpoint. Addressed on the command line by its
/// `resource_name`; the API addresses it by `bucket_id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    #[serde(default)]
    pub object: String,
    pub bucket_id: String,
    pub account_id: String,
    pub resource_name: String,
    #[serde(default)]
    pub bucket_name: String,
    #[serde(default, rename = "publicApiKey")]
    pub public_api_key: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub modified: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum BucketSortField {
    Created,
    Resource,
    Name,
}

pub fn sort_buckets(buckets: &mut [Bucket], field: BucketSortField, reverse: bool) {
    match field {
        BucketSortField::Created => buckets.sort_by(|a, b| a.created.cmp(&b.created)),
        BucketSortField::Resource => buckets.sort_by(|a, b| a.resource_name.cmp(&b.resource_name)),
        BucketSortField::Name => buckets.sort_by(|a, b| a.bucket_name.cmp(&b.bucket_name)),
    }
    if reverse {
        buckets.reverse();
    }
}
