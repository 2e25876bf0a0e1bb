use reqwest::Method;

use super::*;

impl RemoteClient {
    /// Opens the lead collection for a bucket. The returned response is read
    /// incrementally; no total timeout applies.
    pub fn stream_leads(&self, bucket_id: &str) -> Result<reqwest::blocking::Response, ApiError> {
        let rb = self
            .request(Method::GET, "/leads")
            .query(&[("bucketId", bucket_id)]);
        self.send(rb, "stream leads")
    }
}
