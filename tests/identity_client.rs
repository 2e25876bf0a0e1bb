mod common;

use anyhow::Result;
use mockito::Matcher;

use capturoo::error::ErrorKind;
use capturoo::identity::{IdentityClient, IdentityEndpoints, IdentityError};

fn client(server: &mockito::Server) -> Result<IdentityClient> {
    Ok(IdentityClient::with_endpoints(IdentityEndpoints::single(
        &server.url(),
    ))?)
}

fn key_query() -> Matcher {
    Matcher::UrlEncoded("key".into(), common::API_KEY.into())
}

#[test]
fn password_sign_in_returns_tokens() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/accounts:signInWithPassword")
        .match_query(key_query())
        .match_body(Matcher::Json(serde_json::json!({
            "email": "test@example.com",
            "password": "hunter2",
            "returnSecureToken": true
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "kind": "identitytoolkit#VerifyPasswordResponse",
                "localId": "uid-1",
                "email": "test@example.com",
                "idToken": "id-1",
                "registered": true,
                "refreshToken": "refresh-1",
                "expiresIn": "3600"
            })
            .to_string(),
        )
        .create();

    let out = client(&server)?.sign_in_with_password(
        common::API_KEY,
        "test@example.com",
        "hunter2",
    )?;
    mock.assert();
    assert_eq!(out.local_id, "uid-1");
    let pair = out.token_pair();
    assert_eq!(pair.id_token, "id-1");
    assert_eq!(pair.refresh_token, "refresh-1");
    Ok(())
}

#[test]
fn structured_400_becomes_auth_error() -> Result<()> {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/v1/accounts:signInWithPassword")
        .match_query(key_query())
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "error": {
                    "code": 400,
                    "message": "INVALID_PASSWORD",
                    "errors": [{ "message": "INVALID_PASSWORD", "domain": "global", "reason": "invalid" }]
                }
            })
            .to_string(),
        )
        .create();

    let err = client(&server)?
        .sign_in_with_password(common::API_KEY, "test@example.com", "wrong")
        .unwrap_err();
    match err {
        IdentityError::Auth { code, ref message } => {
            assert_eq!(code, 400);
            assert_eq!(message, "INVALID_PASSWORD");
        }
        ref other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(err.to_string(), "400 INVALID_PASSWORD");
    Ok(())
}

#[test]
fn other_statuses_become_http_errors() -> Result<()> {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/identitytoolkit/v3/relyingparty/verifyCustomToken")
        .match_query(key_query())
        .with_status(503)
        .with_body("unavailable")
        .create();

    let err = client(&server)?
        .exchange_custom_token(common::API_KEY, "custom")
        .unwrap_err();
    assert!(matches!(
        err,
        IdentityError::Http { status } if status == reqwest::StatusCode::SERVICE_UNAVAILABLE
    ));
    assert_eq!(err.kind(), ErrorKind::ServerError);
    Ok(())
}

#[test]
fn custom_token_exchange_posts_json() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/identitytoolkit/v3/relyingparty/verifyCustomToken")
        .match_query(key_query())
        .match_body(Matcher::Json(serde_json::json!({
            "token": "custom-abc",
            "returnSecureToken": true
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "kind": "identitytoolkit#VerifyCustomTokenResponse",
                "idToken": "id-2",
                "refreshToken": "refresh-2",
                "expiresIn": "3600",
                "isNewUser": false
            })
            .to_string(),
        )
        .create();

    let pair = client(&server)?.exchange_custom_token(common::API_KEY, "custom-abc")?;
    mock.assert();
    assert_eq!(pair.id_token, "id-2");
    assert_eq!(pair.refresh_token, "refresh-2");
    Ok(())
}

#[test]
fn refresh_uses_form_encoding() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/token")
        .match_query(key_query())
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("grant_type=refresh_token".into()),
            Matcher::Regex("refresh_token=old-refresh".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "access_token": "id-3",
                "expires_in": "3600",
                "token_type": "Bearer",
                "refresh_token": "refresh-3",
                "id_token": "id-3",
                "user_id": "uid-1",
                "project_id": "1234"
            })
            .to_string(),
        )
        .create();

    let pair = client(&server)?.refresh_token(common::API_KEY, "old-refresh")?;
    mock.assert();
    assert_eq!(pair.id_token, "id-3");
    assert_eq!(pair.refresh_token, "refresh-3");
    Ok(())
}

#[test]
fn connection_failure_is_transport() -> Result<()> {
    // Nothing listens on port 9 of localhost in the test environment.
    let client = IdentityClient::with_endpoints(IdentityEndpoints::single("http://127.0.0.1:9"))?;
    let err = client.refresh_token(common::API_KEY, "r").unwrap_err();
    assert!(matches!(err, IdentityError::Transport(_)));
    assert_eq!(err.kind(), ErrorKind::Transport);
    Ok(())
}
