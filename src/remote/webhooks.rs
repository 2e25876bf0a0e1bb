use reqwest::Method;

use super::*;
use crate::model::{Webhook, WebhookUpdate};

impl RemoteClient {
    pub fn create_webhook(
        &self,
        account_id: &str,
        code: &str,
        url: &str,
        events: &[String],
        enabled: bool,
    ) -> Result<Webhook, ApiError> {
        let rb = self
            .request(Method::POST, "/webhooks")
            .json(&CreateWebhookRequest {
                account_id,
                webhook_code: code,
                url,
                events,
                enabled,
            });
        self.send_json(rb, "create webhook")
    }

    pub fn get_webhook(&self, webhook_id: &str) -> Result<Webhook, ApiError> {
        self.send_json(
            self.request(Method::GET, &format!("/webhooks/{}", webhook_id)),
            "get webhook",
        )
    }

    pub fn list_webhooks(&self, account_id: &str) -> Result<Vec<Webhook>, ApiError> {
        let rb = self
            .request(Method::GET, "/webhooks")
            .query(&[("accountId", account_id)]);
        let out: ListResponse<Webhook> = self.send_json(rb, "list webhooks")?;
        Ok(out.data)
    }

    /// Partial update; only the fields set in `update` are sent.
    pub fn update_webhook(
        &self,
        webhook_id: &str,
        update: &WebhookUpdate,
    ) -> Result<Webhook, ApiError> {
        let rb = self
            .request(Method::PATCH, &format!("/webhooks/{}", webhook_id))
            .json(update);
        self.send_json(rb, "update webhook")
    }

    pub fn delete_webhook(&self, webhook_id: &str) -> Result<(), ApiError> {
        self.send_empty(
            self.request(Method::DELETE, &format!("/webhooks/{}", webhook_id)),
            "delete webhook",
        )
    }

    pub fn find_webhook(&self, account_id: &str, code: &str) -> Result<Option<Webhook>, ApiError> {
        Ok(self
            .list_webhooks(account_id)?
            .into_iter()
            .find(|w| w.code == code))
    }
}
