use super::*;

// =============================================================
// endpoint
// =============================================================

#[test]
fn endpoint_joins_with_single_slash() {
    assert_eq!(endpoint("https://auth.test", "/login"), "https://auth.test/login");
    assert_eq!(endpoint("https://auth.test/", "/signup"), "https://auth.test/signup");
    assert_eq!(endpoint("https://auth.test", "login"), "https://auth.test/login");
}

// =============================================================
// interpret_login
// =============================================================

#[test]
fn login_2xx_with_token_succeeds() {
    for status in [200, 201, 299] {
        let token = interpret_login(status, r#"{"accessToken":"tok-1"}"#).unwrap();
        assert_eq!(token.as_str(), "tok-1");
    }
}

#[test]
fn login_2xx_with_both_token_fields_uses_access_token() {
    let token = interpret_login(200, r#"{"accessToken":"a","token":"b"}"#).unwrap();
    assert_eq!(token.as_str(), "a");
}

#[test]
fn login_2xx_with_only_token_field_succeeds() {
    let token = interpret_login(200, r#"{"token":"b"}"#).unwrap();
    assert_eq!(token.as_str(), "b");
}

#[test]
fn login_2xx_without_token_is_malformed() {
    let err = interpret_login(200, r#"{"ok":true}"#).unwrap_err();
    assert!(matches!(err, AuthError::Malformed(_)));
    assert_eq!(err.user_message(), None);
}

#[test]
fn login_2xx_with_empty_token_is_malformed() {
    let err = interpret_login(200, r#"{"accessToken":""}"#).unwrap_err();
    assert!(matches!(err, AuthError::Malformed(_)));
}

#[test]
fn login_failure_status_uses_server_error_message() {
    let err = interpret_login(401, r#"{"error":"Invalid email or password"}"#).unwrap_err();
    assert_eq!(
        err,
        AuthError::Rejected { status: 401, message: "Invalid email or password".to_owned() }
    );
    assert_eq!(err.user_message(), Some("Invalid email or password"));
    assert_eq!(err.to_string(), "Invalid email or password");
}

#[test]
fn login_redirect_status_is_not_success() {
    let err = interpret_login(302, r#"{"error":"moved"}"#).unwrap_err();
    assert_eq!(err.user_message(), Some("moved"));
}

#[test]
fn login_failure_with_html_body_is_malformed() {
    let err = interpret_login(502, "<html>Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, AuthError::Malformed(_)));
}

// =============================================================
// interpret_signup
// =============================================================

#[test]
fn signup_204_succeeds() {
    assert_eq!(interpret_signup(204, ""), Ok(()));
}

#[test]
fn signup_200_is_not_success() {
    let err = interpret_signup(200, r#"{"error":"unexpected"}"#).unwrap_err();
    assert_eq!(err, AuthError::Rejected { status: 200, message: "unexpected".to_owned() });
}

#[test]
fn signup_conflict_uses_server_error_message() {
    let err = interpret_signup(409, r#"{"error":"User already exists"}"#).unwrap_err();
    assert_eq!(err.user_message(), Some("User already exists"));
}

#[test]
fn signup_failure_without_error_field_is_malformed() {
    let err = interpret_signup(500, "{}").unwrap_err();
    assert_eq!(err, AuthError::Malformed("status 500 without error message".to_owned()));
}

// =============================================================
// HttpAuthClient outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn http_client_reports_transport_error_natively() {
    let client = HttpAuthClient::new("https://auth.test");
    let creds = Credentials::new("a@b.com", "pw");
    let err = futures::executor::block_on(client.login(&creds)).unwrap_err();
    assert_eq!(
        err,
        AuthError::Transport("https://auth.test/login: not available outside the browser".to_owned())
    );
    let err = futures::executor::block_on(client.signup(&creds)).unwrap_err();
    assert!(matches!(err, AuthError::Transport(_)));
}
