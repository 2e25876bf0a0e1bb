use serde::{Deserialize, Serialize};

/// Public identity-provider settings published by `GET /autoconf`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: String,
    #[serde(default)]
    pub auth_domain: String,
    #[serde(default, rename = "databaseURL")]
    pub database_url: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging_sender_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoConfData {
    pub firebase_config: FirebaseConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AutoConf {
    #[serde(default)]
    pub object: String,
    pub data: AutoConfData,
}

impl AutoConf {
    pub fn api_key(&self) -> &str {
        &self.data.firebase_config.api_key
    }
}
