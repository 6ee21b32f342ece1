use super::*;

#[test]
fn credentials_serialize_as_email_password_object() {
    let creds = Credentials::new("farmer@example.com", "hunter2");
    let json = serde_json::to_value(&creds).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "farmer@example.com", "password": "hunter2" }));
}

#[test]
fn credentials_debug_hides_password() {
    let creds = Credentials::new("farmer@example.com", "hunter2");
    let debug = format!("{creds:?}");
    assert!(debug.contains("farmer@example.com"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn login_response_reads_access_token_field() {
    let body: LoginResponse = serde_json::from_str(r#"{"accessToken":"abc"}"#).unwrap();
    assert_eq!(body.into_token().as_deref(), Some("abc"));
}

#[test]
fn login_response_accepts_token_field() {
    let body: LoginResponse = serde_json::from_str(r#"{"token":"xyz","user":"ignored"}"#).unwrap();
    assert_eq!(body.into_token().as_deref(), Some("xyz"));
}

#[test]
fn login_response_prefers_access_token_over_token() {
    let body: LoginResponse = serde_json::from_str(r#"{"accessToken":"a","token":"b"}"#).unwrap();
    assert_eq!(body.into_token().as_deref(), Some("a"));
}

#[test]
fn login_response_skips_empty_access_token() {
    let body: LoginResponse = serde_json::from_str(r#"{"accessToken":"","token":"b"}"#).unwrap();
    assert_eq!(body.into_token().as_deref(), Some("b"));
}

#[test]
fn error_body_missing_field_is_none() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.error, None);
}
