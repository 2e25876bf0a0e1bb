use capturoo::events::{EventSpecifier, is_valid_secure_webhook_url, parse_event_specs};
use capturoo::model::{Webhook, WebhookUpdate, display_events, enabled_disabled, sort_webhooks};

use crate::cli_commands::webhook::WebhookUpdateArgs;

use super::*;

pub(super) fn handle_webhook_command(session: &Session, command: WebhookCommands) -> Result<()> {
    let client = &session.client;
    match command {
        WebhookCommands::Create {
            code,
            events,
            url,
            disabled,
            ids,
            json,
        } => {
            let events = parse_events(&events)?;
            require_secure_url(&url)?;

            let created = client.create_webhook(
                session.account_id(),
                &code,
                &url,
                &events,
                !disabled,
            );
            let webhook = match created {
                Err(ApiError::WebhookResourcesNotFound) => {
                    anyhow::bail!("Resources in {} not found.", display_events(&events))
                }
                Err(ApiError::WebhookUrlExists) => anyhow::bail!(
                    "Webhook URL {} already exists. Use capturoo webhook update to modify existing webhooks.",
                    url
                ),
                Err(ApiError::WebhookCodeExists) => anyhow::bail!(
                    "Webhook code {} already exists. Use capturoo webhook update to modify existing webhooks.",
                    code
                ),
                other => other.context("failed to create webhook")?,
            };
            if json {
                return output::print_json(&webhook, "webhook");
            }
            print_webhook(&webhook, ids)
        }
        WebhookCommands::Get { code, ids, json } => {
            let found = require_webhook(session, &code)?;
            let webhook = client
                .get_webhook(&found.webhook_id)
                .context("failed to get webhook")?;
            if json {
                return output::print_json(&webhook, "webhook");
            }
            print_webhook(&webhook, ids)
        }
        WebhookCommands::List(args) => {
            let mut webhooks = client
                .list_webhooks(session.account_id())
                .context("failed to get webhooks")?;
            sort_webhooks(&mut webhooks, args.sort_by, args.reverse);
            if args.json {
                return output::print_json(&webhooks, "webhooks");
            }

            let mut headers = vec!["Webhook code", "Events", "URL", "Status"];
            if args.ids {
                headers.insert(0, "Webhook ID");
            }
            if args.dates {
                headers.extend(["Created", "Modified"]);
            }
            let rows = webhooks
                .iter()
                .map(|w| {
                    let mut row = vec![
                        w.code.clone(),
                        display_events(&w.events),
                        w.url.clone(),
                        enabled_disabled(w.enabled).to_string(),
                    ];
                    if args.ids {
                        row.insert(0, w.webhook_id.clone());
                    }
                    if args.dates {
                        row.push(output::timestamp(w.created));
                        row.push(output::timestamp(w.modified));
                    }
                    row
                })
                .collect::<Vec<_>>();
            output::print_table(&headers, rows)
        }
        WebhookCommands::Update(args) => handle_update(session, args),
        WebhookCommands::Delete { code } => {
            let found = require_webhook(session, &code)?;
            client
                .delete_webhook(&found.webhook_id)
                .context("failed to delete webhook")?;
            println!("Deleted webhook {}", code);
            Ok(())
        }
    }
}

fn handle_update(session: &Session, args: WebhookUpdateArgs) -> Result<()> {
    let update = build_update(&args)?;
    if update.is_empty() {
        anyhow::bail!("must set at least one of --events, --url, --enable or --disable");
    }

    let found = require_webhook(session, &args.code)?;
    let webhook = match session.client.update_webhook(&found.webhook_id, &update) {
        Err(ApiError::WebhookUrlExists) => anyhow::bail!(
            "Webhook URL {} already exists.",
            update.url.as_deref().unwrap_or_default()
        ),
        other => other.context("failed to update webhook")?,
    };
    if args.json {
        return output::print_json(&webhook, "webhook");
    }
    print_webhook(&webhook, args.ids)
}

fn build_update(args: &WebhookUpdateArgs) -> Result<WebhookUpdate> {
    let mut update = WebhookUpdate::default();
    if let Some(events) = &args.events {
        update.events = Some(parse_events(events)?);
    }
    if let Some(url) = &args.url {
        require_secure_url(url)?;
        update.url = Some(url.clone());
    }
    if args.enable && args.disable {
        anyhow::bail!("use either --enable or --disable but not both");
    }
    if args.enable {
        update.enabled = Some(true);
    } else if args.disable {
        update.enabled = Some(false);
    }
    Ok(update)
}

/// Validated specifiers, re-encoded as the strings the API stores.
fn parse_events(spec: &str) -> Result<Vec<String>> {
    let specs = parse_event_specs(spec).with_context(|| format!("invalid events {:?}", spec))?;
    Ok(specs.iter().map(EventSpecifier::to_string).collect())
}

fn require_secure_url(url: &str) -> Result<()> {
    if !is_valid_secure_webhook_url(url) {
        anyhow::bail!("ENDPOINT must use an https secure url (got {:?})", url);
    }
    Ok(())
}

fn require_webhook(session: &Session, code: &str) -> Result<Webhook> {
    session
        .client
        .find_webhook(session.account_id(), code)
        .context("failed to get webhooks")?
        .with_context(|| format!("Webhook with code {:?} not found.", code))
}

fn print_webhook(webhook: &Webhook, ids: bool) -> Result<()> {
    let mut fields = Vec::new();
    if ids {
        fields.push(("Webhook ID:", webhook.webhook_id.clone()));
    }
    fields.extend([
        ("Webhook code:", webhook.code.clone()),
        ("URL:", webhook.url.clone()),
        ("Events:", display_events(&webhook.events)),
        ("Enabled:", enabled_disabled(webhook.enabled).to_string()),
        ("Created:", output::timestamp(webhook.created)),
        ("Modified:", output::timestamp(webhook.modified)),
    ]);
    output::print_fields(&fields)
}
