    use super::*;

    fn webhook(code: &str, created: &str) -> Webhook {
        serde_json::from_value(serde_json::json!({
            "object": "webhook",
            "webhookId": format!("id-{}", code),
            "code": code,
            "events": ["bucket.created"],
            "url": "https://example.com/hook",
            "enabled": true,
            "created": created,
            "modified": created
        }))
        .expect("parse webhook")
    }

    #[test]
    fn display_events_quotes_each_entry() {
        let events = vec![
            "bucket.created".to_string(),
            "lead.created:one|two".to_string(),
        ];
        assert_eq!(
            display_events(&events),
            "['bucket.created', 'lead.created:one|two']"
        );
        assert_eq!(display_events(&[]), "[]");
    }

    #[test]
    fn enabled_flag_renders_as_word() {
        assert_eq!(enabled_disabled(true), "Enabled");
        assert_eq!(enabled_disabled(false), "Disabled");
    }

    #[test]
    fn update_serializes_only_set_fields() {
        let update = WebhookUpdate {
            enabled: Some(false),
            ..WebhookUpdate::default()
        };
        assert!(!update.is_empty());
        assert_eq!(
            serde_json::to_value(&update).expect("serialize"),
            serde_json::json!({ "enabled": false })
        );
        assert!(WebhookUpdate::default().is_empty());
    }

    #[test]
    fn sort_by_code_and_reverse_created() {
        let mut hooks = vec![
            webhook("zeta", "2021-01-02T00:00:00Z"),
            webhook("alpha", "2021-01-03T00:00:00Z"),
            webhook("mid", "2021-01-01T00:00:00Z"),
        ];
        sort_webhooks(&mut hooks, WebhookSortField::Code, false);
        let codes = hooks.iter().map(|w| w.code.as_str()).collect::<Vec<_>>();
        assert_eq!(codes, vec!["alpha", "mid", "zeta"]);

        sort_webhooks(&mut hooks, WebhookSortField::Created, true);
        let codes = hooks.iter().map(|w| w.code.as_str()).collect::<Vec<_>>();
        assert_eq!(codes, vec!["alpha", "zeta", "mid"]);
    }
