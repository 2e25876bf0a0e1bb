use reqwest::Method;

use super::*;
use crate::model::AutoConf;

impl RemoteClient {
    /// Public client configuration, including the identity provider API key.
    pub fn autoconf(&self) -> Result<AutoConf, ApiError> {
        self.send_json(self.request(Method::GET, "/autoconf"), "autoconf")
    }

    pub fn sign_in_with_developer_key(
        &self,
        developer_key: &str,
    ) -> Result<DeveloperKeySignIn, ApiError> {
        let rb = self
            .request(Method::POST, "/signin-with-devkey")
            .json(&DeveloperKeyRequest { developer_key });
        self.send_json(rb, "sign in with developer key")
    }
}
