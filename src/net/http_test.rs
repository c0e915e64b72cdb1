use super::*;

#[test]
fn allow_list_skips_auth_header() {
    assert!(is_auth_endpoint("/auth/login/"));
    assert!(is_auth_endpoint("/users/register/"));
    assert!(is_auth_endpoint("/users/verify-email/"));
    assert!(is_auth_endpoint("/auth/token/refresh/"));
}

#[test]
fn other_paths_are_authenticated() {
    assert!(!is_auth_endpoint("/jobs/applications/"));
    assert!(!is_auth_endpoint("/users/profile/"));
    assert!(!is_auth_endpoint("/admin/users/3/deactivate/"));
}

#[test]
fn bearer_header_format() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
}

#[test]
fn error_message_prefers_detail() {
    let body = r#"{"detail":"Invalid credentials.","message":"ignored"}"#;
    assert_eq!(error_message(401, body), "Invalid credentials.");
}

#[test]
fn error_message_falls_back_to_message() {
    let body = r#"{"message":"Broadcast failed"}"#;
    assert_eq!(error_message(500, body), "Broadcast failed");
}

#[test]
fn error_message_reads_field_errors() {
    let body = r#"{"email":["A user with this email already exists."]}"#;
    assert_eq!(
        error_message(400, body),
        "A user with this email already exists."
    );
}

#[test]
fn error_message_generic_fallback() {
    assert_eq!(error_message(502, "<html>"), "Request failed (HTTP 502)");
    assert_eq!(error_message(500, "{}"), "Request failed (HTTP 500)");
}

#[test]
fn encode_component_passes_unreserved() {
    assert_eq!(encode_component("Acme-Corp_1.0~x"), "Acme-Corp_1.0~x");
}

#[test]
fn encode_component_escapes_the_rest() {
    assert_eq!(encode_component("Foo Bar & Sons"), "Foo%20Bar%20%26%20Sons");
    assert_eq!(encode_component("a/b?c=d"), "a%2Fb%3Fc%3Dd");
}

#[test]
fn api_error_status() {
    let err = ApiError::Http {
        status: 404,
        message: "missing".to_owned(),
    };
    assert_eq!(err.status(), Some(404));
    assert_eq!(ApiError::Network("down".to_owned()).status(), None);
}

#[test]
fn default_base_url() {
    assert_eq!(base_url(), "/api");
}
