use super::*;
use serde_json::json;

#[test]
fn test_array_of_objects() {
    let data = json!([{"name": "kick", "hits": 4}, {"name": "snare", "gain": 0.5}]);
    let out = render_table(&[LogValue::from(data)]).expect("tabular");
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1], "│ (index) │ name  │ hits │ gain │");
    assert_eq!(lines[3], "│ 0       │ kick  │ 4    │      │");
    assert_eq!(lines[4], "│ 1       │ snare │      │ 0.5  │");
    assert!(lines[0].starts_with('┌'));
    assert!(lines[5].ends_with('┘'));
}

#[test]
fn test_scalars_use_values_column() {
    let out = render_table(&[LogValue::from(json!(["a", 2, true]))]).expect("tabular");
    assert!(out.contains("│ (index) │ Values │"));
    assert!(out.contains("│ 2       │ true   │"));
}

#[test]
fn test_object_rows_keyed_by_property() {
    let data = json!({"alice": {"age": 30}, "bob": {"age": 25}});
    let out = render_table(&[LogValue::from(data)]).expect("tabular");
    assert!(out.contains("│ alice   │ 30  │"));
    assert!(out.contains("│ bob     │ 25  │"));
}

#[test]
fn test_column_filter() {
    let data = json!([{"a": 1, "b": 2, "c": 3}]);
    let filter = LogValue::from(json!(["c", "a"]));
    let out = render_table(&[LogValue::from(data), filter]).expect("tabular");
    let header = out.lines().nth(1).unwrap();
    assert_eq!(header, "│ (index) │ c │ a │");
}

#[test]
fn test_non_tabular_input() {
    assert!(render_table(&[]).is_none());
    assert!(render_table(&[LogValue::from("text")]).is_none());
    assert!(render_table(&[LogValue::from(json!(42))]).is_none());
}

#[test]
fn test_widths_count_chars_not_bytes() {
    let data = json!([{"name": "café"}, {"name": "ab"}]);
    let out = render_table(&[LogValue::from(data)]).expect("tabular");
    assert!(out.contains("│ 0       │ café │"));
    assert!(out.contains("│ 1       │ ab   │"));
    let widths: Vec<usize> = out.lines().map(|l| l.chars().count()).collect();
    assert!(widths.iter().all(|w| *w == widths[0]));
}
