//! Request payloads and response containers for the REST API.

use crate::model::Account;

/// `{object, data}` wrapper used by list endpoints.
#[derive(Debug, serde::Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub object: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Body of every non-2xx API response.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ApiErrorEnvelope {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperKeySignIn {
    pub custom_token: String,
    pub account: Account,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DeveloperKeyRequest<'a> {
    pub(super) developer_key: &'a str,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateBucketRequest<'a> {
    pub(super) account_id: &'a str,
    pub(super) resource_name: &'a str,
    pub(super) bucket_name: &'a str,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UpdateBucketRequest<'a> {
    pub(super) bucket_name: &'a str,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateWebhookRequest<'a> {
    pub(super) account_id: &'a str,
    pub(super) webhook_code: &'a str,
    pub(super) url: &'a str,
    pub(super) events: &'a [String],
    pub(super) enabled: bool,
}
