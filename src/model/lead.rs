use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Open-ended field map. Key order follows the source document.
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub lead_id: String,
    pub system: LeadSystem,
    #[serde(default)]
    pub data: FieldMap,
    #[serde(default)]
    pub tracking: FieldMap,
}

/// Capture-time metadata recorded by the collection endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSystem {
    #[serde(default)]
    pub client_version: String,
    #[serde(default)]
    pub host: String,
    #[serde(default, alias = "Origin")]
    pub origin: String,
    #[serde(default)]
    pub referrer: String,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub remote_addr: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
}
