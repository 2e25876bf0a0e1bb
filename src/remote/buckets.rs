use reqwest::Method;

use super::*;
use crate::model::Bucket;

impl RemoteClient {
    pub fn create_bucket(
        &self,
        account_id: &str,
        resource_name: &str,
        bucket_name: &str,
    ) -> Result<Bucket, ApiError> {
        let rb = self
            .request(Method::POST, "/buckets")
            .json(&CreateBucketRequest {
                account_id,
                resource_name,
                bucket_name,
            });
        self.send_json(rb, "create bucket")
    }

    pub fn get_bucket(&self, bucket_id: &str) -> Result<Bucket, ApiError> {
        self.send_json(
            self.request(Method::GET, &format!("/buckets/{}", bucket_id)),
            "get bucket",
        )
    }

    pub fn list_buckets(&self, account_id: &str) -> Result<Vec<Bucket>, ApiError> {
        let rb = self
            .request(Method::GET, "/buckets")
            .query(&[("accountId", account_id)]);
        let out: ListResponse<Bucket> = self.send_json(rb, "list buckets")?;
        Ok(out.data)
    }

    pub fn update_bucket(&self, bucket_id: &str, bucket_name: &str) -> Result<Bucket, ApiError> {
        let rb = self
            .request(Method::PATCH, &format!("/buckets/{}", bucket_id))
            .json(&UpdateBucketRequest { bucket_name });
        self.send_json(rb, "update bucket")
    }

    pub fn delete_bucket(&self, bucket_id: &str) -> Result<(), ApiError> {
        self.send_empty(
            self.request(Method::DELETE, &format!("/buckets/{}", bucket_id)),
            "delete bucket",
        )
    }

    /// Resolves a resource name to its bucket, or `None` if the account has no
    /// such bucket.
    pub fn find_bucket(
        &self,
        account_id: &str,
        resource_name: &str,
    ) -> Result<Option<Bucket>, ApiError> {
        Ok(self
            .list_buckets(account_id)?
            .into_iter()
            .find(|b| b.resource_name == resource_name))
    }
}
