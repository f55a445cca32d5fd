use super::*;
use serde_json::json;

#[test]
fn test_parse_value() {
    assert_eq!(parse_value("42"), LogValue::Json(json!(42)));
    assert_eq!(parse_value("true"), LogValue::Json(json!(true)));
    assert_eq!(parse_value(r#"{"a":1}"#), LogValue::Json(json!({"a": 1})));
    assert_eq!(parse_value("hello"), LogValue::Str("hello".to_string()));
    assert_eq!(parse_value("{broken"), LogValue::Str("{broken".to_string()));
}

#[test]
fn test_parse_values_keeps_order() {
    let args = vec!["count".to_string(), "3".to_string()];
    assert_eq!(
        parse_values(&args),
        vec![LogValue::Str("count".to_string()), LogValue::Json(json!(3))]
    );
}
