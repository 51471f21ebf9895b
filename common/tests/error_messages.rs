use common::model::error::{
    message_from_binary_body, message_from_json_body, message_from_transport,
    GENERIC_SERVER_ERROR, GENERIC_TRANSPORT_ERROR, UNREADABLE_RESPONSE,
};

#[test]
fn binary_body_with_detail_field() {
    assert_eq!(message_from_binary_body(r#"{"detail":"bad file"}"#), "bad file");
}

#[test]
fn binary_body_prefers_detail_over_message() {
    assert_eq!(
        message_from_binary_body(r#"{"detail":"upstream rejected","message":"other"}"#),
        "upstream rejected"
    );
}

#[test]
fn binary_body_falls_back_to_message_field() {
    assert_eq!(
        message_from_binary_body(r#"{"message":"quota exceeded"}"#),
        "quota exceeded"
    );
}

#[test]
fn binary_body_without_known_fields() {
    assert_eq!(
        message_from_binary_body(r#"{"code":500}"#),
        GENERIC_SERVER_ERROR
    );
}

#[test]
fn unparsable_binary_body_uses_fixed_fallback() {
    assert_eq!(message_from_binary_body("%PDF-1.7 garbage"), UNREADABLE_RESPONSE);
    assert_eq!(message_from_binary_body(""), UNREADABLE_RESPONSE);
    assert_eq!(
        message_from_binary_body("<html><body>502 Bad Gateway</body></html>"),
        UNREADABLE_RESPONSE
    );
}

#[test]
fn gateway_may_proxy_structured_detail() {
    // The gateway forwards upstream error bodies verbatim, so `detail` can
    // itself be an object; it is serialized rather than dropped.
    assert_eq!(
        message_from_binary_body(r#"{"detail":{"reason":"encrypted"}}"#),
        r#"{"reason":"encrypted"}"#
    );
}

#[test]
fn json_body_with_message_field() {
    assert_eq!(message_from_json_body(r#"{"message":"x"}"#), "x");
}

#[test]
fn json_body_without_known_fields_is_shown_whole() {
    assert_eq!(
        message_from_json_body(r#"{"error":"busy"}"#),
        r#"{"error":"busy"}"#
    );
}

#[test]
fn json_body_that_is_not_json() {
    assert_eq!(message_from_json_body("Internal Server Error"), GENERIC_SERVER_ERROR);
}

#[test]
fn empty_string_fields_are_treated_as_absent() {
    assert_eq!(
        message_from_binary_body(r#"{"detail":"","message":"fallback"}"#),
        "fallback"
    );
    assert_eq!(
        message_from_binary_body(r#"{"detail":null}"#),
        GENERIC_SERVER_ERROR
    );
}

#[test]
fn transport_failure_keeps_its_message() {
    assert_eq!(message_from_transport("NetworkError when attempting to fetch resource"), "NetworkError when attempting to fetch resource");
}

#[test]
fn transport_failure_without_message_gets_generic_fallback() {
    assert_eq!(message_from_transport(""), GENERIC_TRANSPORT_ERROR);
    assert_eq!(message_from_transport("   "), GENERIC_TRANSPORT_ERROR);
}
