use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

pub const ACCOUNT_ID: &str = "acc-123";
pub const API_KEY: &str = "test-api-key";

pub fn now() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

/// Unsigned JWT-shaped token carrying the usual Capturoo claims.
pub fn id_token(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let claims = serde_json::json!({
        "name": "Test User",
        "email": "test@example.com",
        "cap_aid": ACCOUNT_ID,
        "cap_role": "admin",
        "user_id": "uid-1",
        "aud": "capturoo-test",
        "iss": "https://securetoken.google.com/capturoo-test",
        "sub": "uid-1",
        "iat": exp - 3600,
        "exp": exp
    });
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}

#[allow(dead_code)]
pub fn autoconf_body() -> String {
    serde_json::json!({
        "object": "autoconf",
        "data": {
            "firebaseConfig": {
                "apiKey": API_KEY,
                "authDomain": "capturoo-test.firebaseapp.com",
                "databaseURL": "https://capturoo-test.firebaseio.com",
                "projectId": "capturoo-test"
            }
        }
    })
    .to_string()
}

#[allow(dead_code)]
pub fn bucket_json(id: &str, resource: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "object": "bucket",
        "bucketId": id,
        "accountId": ACCOUNT_ID,
        "resourceName": resource,
        "bucketName": name,
        "publicApiKey": format!("pk-{}", id),
        "created": "2020-04-01T09:00:00Z",
        "modified": "2020-04-02T09:00:00Z"
    })
}

#[allow(dead_code)]
pub fn webhook_json(id: &str, code: &str, events: &[&str], enabled: bool) -> serde_json::Value {
    serde_json::json!({
        "object": "webhook",
        "webhookId": id,
        "code": code,
        "events": events,
        "url": "https://hooks.example.com/capturoo",
        "enabled": enabled,
        "created": "2020-04-01T09:00:00Z",
        "modified": "2020-04-02T09:00:00Z"
    })
}

#[allow(dead_code)]
pub fn lead_json(id: &str, data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "leadId": id,
        "system": {
            "clientVersion": "0.3.1",
            "host": "www.example.com",
            "Origin": "https://www.example.com",
            "referrer": "https://www.google.com/",
            "userAgent": "Mozilla/5.0",
            "remoteAddr": "203.0.113.9",
            "created": "2020-05-01T10:00:00Z"
        },
        "data": data,
        "tracking": { "utm_source": "newsletter" }
    })
}

#[allow(dead_code)]
pub fn list_body(object: &str, data: Vec<serde_json::Value>) -> String {
    serde_json::json!({ "object": object, "data": data }).to_string()
}
