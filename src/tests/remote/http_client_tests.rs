    use super::http_client::translate_error;
    use super::*;

    use reqwest::StatusCode;

    fn envelope(status: u16, code: &str) -> String {
        serde_json::json!({ "status": status, "code": code, "message": "details" }).to_string()
    }

    #[test]
    fn known_codes_map_to_sentinels() {
        let cases = [
            ("buckets/bucket-code-exists", "BucketCodeExists"),
            ("bucket/bucket-code-exists", "BucketCodeExists"),
            ("webhook/webhook-url-exists", "WebhookUrlExists"),
            ("webhook/webhook-code/exists", "WebhookCodeExists"),
            ("webhook/webhook-code-exists", "WebhookCodeExists"),
            ("webhook/webhook-resources-not-found", "WebhookResourcesNotFound"),
            ("bad-request", "BadRequest"),
        ];
        for (code, want) in cases {
            let err = translate_error(StatusCode::CONFLICT, &envelope(409, code), "test");
            let got = format!("{:?}", err);
            assert!(got.starts_with(want), "code {} mapped to {}", code, got);
        }
    }

    #[test]
    fn sentinel_kinds() {
        assert_eq!(ApiError::BucketCodeExists.kind(), ErrorKind::Conflict);
        assert_eq!(ApiError::WebhookUrlExists.kind(), ErrorKind::Conflict);
        assert_eq!(ApiError::WebhookResourcesNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            ApiError::BadRequest {
                message: String::new()
            }
            .kind(),
            ErrorKind::MalformedInput
        );
    }

    #[test]
    fn unknown_code_keeps_status() {
        let err = translate_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            &envelope(500, "internal/oops"),
            "list buckets",
        );
        match &err {
            ApiError::Status {
                status,
                code,
                message,
                ..
            } => {
                assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(code, "internal/oops");
                assert_eq!(message, "details");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(err.kind(), ErrorKind::ServerError);
    }

    #[test]
    fn non_envelope_body_still_maps_by_status() {
        let err = translate_error(StatusCode::NOT_FOUND, "<html>nope</html>", "get bucket");
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = translate_error(StatusCode::UNAUTHORIZED, "", "get bucket");
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[test]
    fn client_trims_trailing_slash_and_swaps_token() {
        let client = RemoteClient::new("http://localhost:8080/", None).expect("client");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/buckets"), "http://localhost:8080/buckets");
        assert!(client.auth().is_none());

        let authed = client.with_token("abc".to_string());
        assert_eq!(authed.auth().as_deref(), Some("Bearer abc"));
    }
