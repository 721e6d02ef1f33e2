use super::*;

#[test]
fn error_message_prefers_error_field() {
    let body = r#"{"error":"Partición no montada o no encontrada"}"#;
    assert_eq!(
        error_message_from_body(body).as_deref(),
        Some("Partición no montada o no encontrada")
    );
}

#[test]
fn error_message_ignores_blank_and_non_json_bodies() {
    assert_eq!(error_message_from_body(r#"{"error":"  "}"#), None);
    assert_eq!(error_message_from_body("Método no permitido"), None);
    assert_eq!(error_message_from_body(r#"{"detail":"x"}"#), None);
}

#[test]
fn base_url_trailing_slash_is_dropped() {
    let client = RemoteClient::new("http://localhost:8080/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
    assert_eq!(client.url("/disks"), "http://localhost:8080/disks");
}
