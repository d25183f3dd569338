use super::*;

#[test]
fn auth_request_serializes_email_and_password() {
    let req = AuthRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "pw" })
    );
}

#[test]
fn from_body_reads_message() {
    let resp = AuthResponse::from_body(r#"{"message":"Login successful"}"#);
    assert_eq!(resp.message.as_deref(), Some("Login successful"));
}

#[test]
fn from_body_ignores_unknown_fields() {
    let resp = AuthResponse::from_body(r#"{"message":"ok","token":"abc","user":{"id":1}}"#);
    assert_eq!(resp.message.as_deref(), Some("ok"));
}

#[test]
fn from_body_without_message_is_empty() {
    assert_eq!(AuthResponse::from_body("{}"), AuthResponse::default());
}

#[test]
fn from_body_tolerates_non_json() {
    assert_eq!(AuthResponse::from_body("<html>created</html>"), AuthResponse::default());
    assert_eq!(AuthResponse::from_body(""), AuthResponse::default());
}

#[test]
fn from_body_tolerates_non_string_message() {
    assert_eq!(AuthResponse::from_body(r#"{"message":42}"#), AuthResponse::default());
}
