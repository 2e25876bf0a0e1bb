use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    #[serde(default)]
    pub object: String,
    pub webhook_id: String,
    pub code: String,
    #[serde(default)]
    pub events: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub modified: OffsetDateTime,
}

/// Partial update for `PATCH /webhooks/:id`; `None` fields are left untouched.
#[derive(Clone, Debug, Default, Serialize)]
pub struct WebhookUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl WebhookUpdate {
    pub fn is_empty(&self) -> bool {
        self.events.is_none() && self.url.is_none() && self.enabled.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum WebhookSortField {
    Created,
    Code,
}

pub fn sort_webhooks(webhooks: &mut [Webhook], field: WebhookSortField, reverse: bool) {
    match field {
        WebhookSortField::Created => webhooks.sort_by(|a, b| a.created.cmp(&b.created)),
        WebhookSortField::Code => webhooks.sort_by(|a, b| a.code.cmp(&b.code)),
    }
    if reverse {
        webhooks.reverse();
    }
}

/// Renders an event list as `['a', 'b']`.
pub fn display_events(events: &[String]) -> String {
    let quoted = events
        .iter()
        .map(|e| format!("'{}'", e))
        .collect::<Vec<_>>();
    format!("[{}]", quoted.join(", "))
}

pub fn enabled_disabled(enabled: bool) -> &'static str {
    if enabled { "Enabled" } else { "Disabled" }
}

#[cfg(test)]
#[path = "../tests/model/webhook_tests.rs"]
mod tests;
