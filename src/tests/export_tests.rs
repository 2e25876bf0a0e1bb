    use super::*;

    fn lead_json(id: &str, data: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "leadId": id,
            "system": {
                "clientVersion": "1.0.0",
                "host": "example.com",
                "Origin": "https://example.com",
                "referrer": "https://google.com",
                "userAgent": "curl/8",
                "remoteAddr": "10.0.0.1",
                "created": "2020-05-01T10:00:00Z"
            },
            "data": data,
            "tracking": {}
        })
    }

    fn container(leads: Vec<serde_json::Value>) -> String {
        serde_json::json!({ "object": "list", "data": leads }).to_string()
    }

    fn run(format: ExportFormat, body: &str) -> Result<(usize, String), ExportError> {
        let mut out = Vec::new();
        let n = export_leads(format, body.as_bytes(), &mut out)?;
        Ok((n, String::from_utf8(out).expect("utf8 output")))
    }

    fn collect(body: &str) -> Result<Vec<Lead>, ExportError> {
        let mut leads = Vec::new();
        read_leads(body.as_bytes(), |lead| {
            leads.push(lead);
            Ok(())
        })?;
        Ok(leads)
    }

    #[test]
    fn stream_yields_each_lead_in_order() {
        let body = container(vec![
            lead_json("l1", serde_json::json!({ "a": 1 })),
            lead_json("l2", serde_json::json!({ "b": "x" })),
        ]);
        let ids = collect(&body)
            .expect("read leads")
            .into_iter()
            .map(|l| l.lead_id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["l1", "l2"]);
    }

    #[test]
    fn stream_handles_whitespace_extra_keys_and_tricky_strings() {
        let body = r#"
          { "object" : "list",
            "meta": {"next": [1, {"x": "]}"}], "n": -1.5e3, "ok": true, "none": null},
            "data" : [
              {"leadId": "l\"1]", "system": {"created": "2020-05-01T10:00:00Z"},
               "data": {"note": "brace } and bracket ] and \\ slash"}}
              ,
              {"leadId": "l2", "system": {"created": "2020-05-01T10:00:00Z"}}
            ],
            "trailer": 7
          }
        "#;
        let leads = collect(body).expect("read leads");
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].lead_id, "l\"1]");
        assert_eq!(
            leads[0].data["note"],
            "brace } and bracket ] and \\ slash"
        );
        assert!(leads[1].data.is_empty());
    }

    #[test]
    fn stream_over_empty_array_is_empty() {
        let leads = collect(r#"{"object":"list","data":[]}"#).expect("read leads");
        assert!(leads.is_empty());
    }

    #[test]
    fn stream_rejects_missing_data_and_truncation() {
        let err = collect(r#"{"object":"list"}"#).unwrap_err();
        assert!(matches!(err, ExportError::Framing(ref msg) if msg == "container has no data array"));

        let body = container(vec![
            lead_json("l1", serde_json::json!({})),
            lead_json("l2", serde_json::json!({})),
        ]);
        let truncated = &body[..body.len() - 10];
        let mut seen = 0;
        let err = read_leads(truncated.as_bytes(), |_| {
            seen += 1;
            Ok(())
        })
        .unwrap_err();
        assert!(matches!(err, ExportError::Framing(_)));
        assert_eq!(seen, 1);

        let err = collect(r#"{"object":"list","data":{}}"#).unwrap_err();
        assert!(matches!(err, ExportError::Framing(_)));
        assert_eq!(err.kind(), ErrorKind::MalformedInput);

        let err = collect(r#"{"object":"list","data":[]} trailing"#).unwrap_err();
        assert!(matches!(err, ExportError::Framing(_)));
    }

    #[test]
    fn sink_error_stops_the_read_and_is_returned_unchanged() {
        let body = container(vec![
            lead_json("l1", serde_json::json!({})),
            lead_json("l2", serde_json::json!({})),
            lead_json("l3", serde_json::json!({})),
        ]);
        let mut seen = Vec::new();
        let err = read_leads(body.as_bytes(), |lead| {
            if lead.lead_id == "l2" {
                return Err(ExportError::UnsupportedValue {
                    key: "k".to_string(),
                    value: "v".to_string(),
                });
            }
            seen.push(lead.lead_id);
            Ok(())
        })
        .unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedValue { ref key, .. } if key == "k"));
        assert_eq!(seen, vec!["l1"]);
    }

    #[test]
    fn json_export_writes_one_document_per_line() -> Result<(), ExportError> {
        let body = container(vec![
            lead_json("l1", serde_json::json!({ "a": 1 })),
            lead_json("l2", serde_json::json!({ "b": true })),
        ]);
        let (n, out) = run(ExportFormat::Json, &body)?;
        assert_eq!(n, 2);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0])?;
        assert_eq!(first["leadId"], "l1");
        assert_eq!(first["data"]["a"], 1);
        assert_eq!(first["system"]["origin"], "https://example.com");
        Ok(())
    }

    #[test]
    fn yaml_export_is_a_document_stream() -> Result<(), ExportError> {
        let body = container(vec![
            lead_json("l1", serde_json::json!({ "a": 1 })),
            lead_json("l2", serde_json::json!({ "a": 2 })),
        ]);
        let (n, out) = run(ExportFormat::Yaml, &body)?;
        assert_eq!(n, 2);
        assert!(out.contains("leadId: l1"));
        assert!(out.contains("leadId: l2"));
        assert!(out.contains("\n---\n") || out.starts_with("---"));
        Ok(())
    }

    #[test]
    fn csv_columns_accumulate_in_first_seen_order() -> Result<(), ExportError> {
        let body = container(vec![
            lead_json("l1", serde_json::json!({ "a": 1 })),
            lead_json("l2", serde_json::json!({ "b": 2 })),
        ]);
        let (n, out) = run(ExportFormat::Csv, &body)?;
        assert_eq!(n, 2);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(
            lines[0],
            "l1,1,1.0.0,example.com,https://google.com,curl/8,2020-05-01T10:00:00Z"
        );
        assert_eq!(
            lines[1],
            "l2,,2,1.0.0,example.com,https://google.com,curl/8,2020-05-01T10:00:00Z"
        );
        Ok(())
    }

    #[test]
    fn csv_cells_render_scalars() -> Result<(), ExportError> {
        let body = container(vec![lead_json(
            "l1",
            serde_json::json!({ "s": "hi, there", "b": false, "i": -3, "f": 2.5 }),
        )]);
        let (_, out) = run(ExportFormat::Csv, &body)?;
        assert!(out.starts_with("l1,\"hi, there\",false,-3,2.5,"));
        Ok(())
    }

    #[test]
    fn list_value_is_a_typed_error_naming_the_key() {
        let body = container(vec![lead_json("l1", serde_json::json!({ "x": [1, 2] }))]);
        for format in [ExportFormat::Json, ExportFormat::Yaml, ExportFormat::Csv] {
            match run(format, &body) {
                Err(ExportError::UnsupportedValue { key, value }) => {
                    assert_eq!(key, "x");
                    assert_eq!(value, "[1,2]");
                }
                other => panic!("expected unsupported value for {:?}, got {:?}", format, other),
            }
        }
    }

    #[test]
    fn earlier_records_stay_written_when_a_later_one_fails() {
        let body = container(vec![
            lead_json("l1", serde_json::json!({ "a": 1 })),
            lead_json("l2", serde_json::json!({ "a": null })),
        ]);
        let mut out = Vec::new();
        let err = export_leads(ExportFormat::Json, body.as_bytes(), &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        let written = String::from_utf8(out).expect("utf8");
        assert_eq!(written.lines().count(), 1);
        assert!(written.contains("\"l1\""));
    }

    #[test]
    fn column_order_tracks_keys() -> Result<(), ExportError> {
        let mut columns = ColumnOrder::default();
        let lead: Lead = serde_json::from_value(lead_json(
            "l1",
            serde_json::json!({ "z": 1, "a": 2 }),
        ))?;
        let row = columns.row(&lead)?;
        assert_eq!(columns.keys(), ["z".to_string(), "a".to_string()]);
        assert_eq!(&row[..3], ["l1", "1", "2"]);
        Ok(())
    }
