use super::*;
use serde_json::json;
use time::macros::datetime;

#[test]
fn test_format_timestamp_millis_utc() {
    let at = datetime!(2024-03-05 07:08:09.123456 UTC);
    assert_eq!(format_timestamp(at), "2024-03-05T07:08:09.123Z");
}

#[test]
fn test_timestamp_shape() {
    let ts = timestamp();
    assert_eq!(ts.len(), 24);
    assert!(ts.ends_with('Z'));
    assert_eq!(&ts[10..11], "T");
    assert_eq!(&ts[19..20], ".");
}

#[test]
fn test_prefix() {
    assert_eq!(
        prefix(LogLevel::Warn, "2024-01-01T00:00:00.000Z"),
        "[2024-01-01T00:00:00.000Z] [WARN]"
    );
}

#[test]
fn test_paint_for_level() {
    assert_eq!(Paint::for_level(LogLevel::Error), Some(Paint::Red));
    assert_eq!(Paint::for_level(LogLevel::Warn), Some(Paint::Yellow));
    assert_eq!(Paint::for_level(LogLevel::Info), Some(Paint::Green));
    assert_eq!(Paint::for_level(LogLevel::Debug), None);
}

#[test]
fn test_painted_render_plain_keeps_items_separate() {
    let values = vec![LogValue::from("boom"), LogValue::from(json!({"code": 7}))];
    let line = Paint::Red.paint("[ts] [ERROR]", values);
    assert_eq!(line.items.len(), 3);
    assert_eq!(line.render(false), "[ts] [ERROR] boom {\"code\":7}");
}

#[test]
fn test_painted_render_ansi_wraps_whole_line() {
    let line = Paint::Green.paint("[ts] [INFO]", vec![LogValue::from("ready")]);
    let out = line.render(true);
    assert!(out.starts_with("\u{1b}["));
    assert!(out.contains("[ts] [INFO] ready"));
    assert!(out.ends_with("\u{1b}[0m"));
}

#[test]
fn test_highlight_value_only_colored_with_ansi() {
    let line = Painted::plain(vec![
        LogValue::Painted(Paint::Highlight, "hot".to_string()),
        LogValue::from(3),
    ]);
    assert_eq!(line.render(false), "hot 3");
    assert!(line.render(true).contains("hot"));
    assert_ne!(line.render(true), "hot 3");
}

#[test]
fn test_paint_escape_codes() {
    assert_eq!(
        Paint::Red.apply("x"),
        format!("{}x{}", SetForegroundColor(Color::Red), ResetColor)
    );
    assert_eq!(
        Paint::Yellow.apply("x"),
        format!("{}x{}", SetForegroundColor(Color::Yellow), ResetColor)
    );
    assert_eq!(
        Paint::Green.apply("x"),
        format!("{}x{}", SetForegroundColor(Color::Green), ResetColor)
    );
    assert_eq!(
        Paint::Highlight.apply("x"),
        format!(
            "{}{}x{}",
            SetBackgroundColor(Color::White),
            SetForegroundColor(Color::Black),
            ResetColor
        )
    );
}

#[test]
fn test_level_lines_use_level_color() {
    let cases = [
        (LogLevel::Error, Color::Red),
        (LogLevel::Warn, Color::Yellow),
        (LogLevel::Info, Color::Green),
    ];
    for (level, color) in cases {
        let line = Painted::new(Paint::for_level(level), "[ts]", vec![LogValue::from("m")]);
        assert_eq!(
            line.render(true),
            format!("{}[ts] m{}", SetForegroundColor(color), ResetColor)
        );
    }

    let debug = Painted::new(
        Paint::for_level(LogLevel::Debug),
        "[ts]",
        vec![LogValue::from("m")],
    );
    assert_eq!(debug.render(true), "[ts] m");
}

#[test]
fn test_highlighted_value_inside_plain_line() {
    let line = Painted::plain(vec![
        LogValue::Painted(Paint::Highlight, "hot".to_string()),
        LogValue::from(3),
    ]);
    let expected = format!(
        "{}{}hot{} 3",
        SetBackgroundColor(Color::White),
        SetForegroundColor(Color::Black),
        ResetColor
    );
    assert_eq!(line.render(true), expected);
}

#[test]
fn test_timer_messages() {
    assert_eq!(timer_message("load", 12.3456), "Timer [load]: 12.35 ms");
    assert_eq!(timer_message("x", 0.0), "Timer [x]: 0.00 ms");
    assert_eq!(missing_timer_message("gone"), "No timer found for label: gone");
}
