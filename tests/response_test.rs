//! Integration tests for generator response handling.

use logoprint::{
    from_response, ConvertOptions, DocumentSource, Error, Locale, Logoprint, ResponsePayload,
};

#[test]
fn test_error_field_used_for_failed_status() {
    let err = from_response(429, r#"{"error":"rate limited"}"#, &ConvertOptions::default())
        .unwrap_err();
    assert_eq!(err.status(), Some(429));
    assert_eq!(err.to_string(), "rate limited");
}

#[test]
fn test_message_field_used_when_error_missing() {
    let err = from_response(400, r#"{"message":"missing prompt"}"#, &ConvertOptions::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "missing prompt");
}

#[test]
fn test_raw_body_used_for_failed_status() {
    let err = from_response(503, "Service Unavailable", &ConvertOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "Service Unavailable");

    let err = from_response(504, "", &ConvertOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "HTTP 504");
}

#[test]
fn test_failed_status_never_renders_printable() {
    let body = r#"{"printable":{"html_a4":"<p>x</p>"}}"#;
    let result = from_response(500, body, &ConvertOptions::default());
    assert!(matches!(result, Err(Error::Http { status: 500, .. })));
}

#[test]
fn test_malformed_json_falls_back_to_text() {
    let generation = from_response(200, "{ not json\nsegunda", &ConvertOptions::default()).unwrap();
    assert!(matches!(generation.payload, ResponsePayload::Raw(_)));
    assert_eq!(
        generation.document.source,
        DocumentSource::CardGrid { filled: 2, slots: 12 }
    );
}

#[test]
fn test_json_string_literal_is_decoded() {
    let body = r#""Actividades: rimas\nmar\npan""#;
    let generation = from_response(200, body, &ConvertOptions::default()).unwrap();
    let html = generation.document.as_str();
    assert!(html.contains("<h1>Actividades: rimas</h1>"));
    assert!(html.contains("<span>mar</span>"));
    assert!(html.contains("<span>pan</span>"));
}

#[test]
fn test_html_text_response_is_embedded() {
    let body = "```html\n<html><body>hoja</body></html>\n```";
    let generation = from_response(200, body, &ConvertOptions::default()).unwrap();
    assert_eq!(generation.document.source, DocumentSource::Embedded);
    assert_eq!(generation.document.as_str(), "<html><body>hoja</body></html>");
}

#[test]
fn test_printable_payload_with_ok_false_warns() {
    let body = r#"{"ok":false,"printable":{"html_a4":"<p>parcial</p>","css_print":""}}"#;
    let generation = Logoprint::new()
        .with_locale(Locale::En)
        .convert_response(200, body)
        .unwrap();
    assert!(generation.reported_failure());
    assert_eq!(generation.document.source, DocumentSource::Wrapped);
    assert!(generation.document.as_str().contains("<html lang=\"en\">"));
}

#[test]
fn test_empty_success_body_has_no_content() {
    let result = from_response(200, "", &ConvertOptions::default());
    assert!(matches!(result, Err(Error::NoPrintableContent)));

    let result = from_response(200, r#"{"ok":true}"#, &ConvertOptions::default());
    assert!(matches!(result, Err(Error::NoPrintableContent)));
}
