use super::*;
use crate::values;
use regex::Regex;
use serde_json::json;
use std::time::Duration;

fn logger_with(level: LogLevel) -> (Logger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::with_sink(LoggerConfig { level }, sink.clone());
    (logger, sink)
}

fn elapsed_of(line: &str) -> f64 {
    let re = Regex::new(r"Timer \[[^\]]*\]: (\d+\.\d{2}) ms$").unwrap();
    let caps = re.captures(line).expect("timer line");
    caps[1].parse().unwrap()
}

/// Captures painted lines as handed over, before rendering.
#[derive(Default)]
struct RecordingSink {
    general: Mutex<Vec<Painted>>,
}

impl Sink for RecordingSink {
    fn error(&self, _line: &Painted) {}
    fn warn(&self, _line: &Painted) {}
    fn info(&self, _line: &Painted) {}
    fn debug(&self, _line: &Painted) {}
    fn log(&self, line: &Painted) {
        self.general.lock().unwrap().push(line.clone());
    }
    fn table(&self, _values: &[LogValue]) {}
}

#[test]
fn test_gate_matrix() {
    for threshold in LogLevel::ALL {
        for message in LogLevel::ALL {
            let (logger, sink) = logger_with(threshold);
            logger.log(message, ["msg"]);
            let expected = message.rank() <= threshold.rank();
            assert_eq!(
                !sink.is_empty(),
                expected,
                "threshold={threshold} message={message}"
            );
        }
    }
}

#[test]
fn test_threshold_warn() {
    let (logger, sink) = logger_with(LogLevel::Warn);
    logger.error(["e"]);
    logger.warn(["w"]);
    logger.info(["i"]);
    logger.debug(["d"]);

    assert_eq!(sink.lines(Channel::Error).len(), 1);
    assert_eq!(sink.lines(Channel::Warn).len(), 1);
    assert!(sink.lines(Channel::Info).is_empty());
    assert!(sink.lines(Channel::Debug).is_empty());
}

#[test]
fn test_line_format_and_channels() {
    let (logger, sink) = logger_with(LogLevel::Debug);
    logger.info(values!["loaded", 3, json!({"ok": true})]);
    logger.debug(["trace"]);

    let info = sink.lines(Channel::Info);
    let re = Regex::new(r#"^\[\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z\] \[INFO\] loaded 3 \{"ok":true\}$"#)
        .unwrap();
    assert!(re.is_match(&info[0]), "got {:?}", info[0]);

    let debug = sink.lines(Channel::Debug);
    assert!(debug[0].ends_with("[DEBUG] trace"));
}

#[test]
fn test_threshold_changes_between_calls() {
    let (logger, sink) = logger_with(LogLevel::Error);
    logger.info(["hidden"]);
    logger.set_level(LogLevel::Info);
    logger.info(["shown"]);
    logger.set_level(LogLevel::Error);
    logger.info(["hidden again"]);

    let info = sink.lines(Channel::Info);
    assert_eq!(info.len(), 1);
    assert!(info[0].ends_with("shown"));
}

#[test]
fn test_set_get_level() {
    let (logger, _sink) = logger_with(LogLevel::Info);
    assert_eq!(logger.get_level(), LogLevel::Info);
    for level in LogLevel::ALL {
        logger.set_level(level);
        assert_eq!(logger.get_level(), level);
    }
}

#[test]
fn test_table_and_highlight_need_debug() {
    let (logger, sink) = logger_with(LogLevel::Info);
    logger.table([json!([{"a": 1}])]);
    logger.highlight(["look"]);
    assert!(sink.is_empty());

    logger.set_level(LogLevel::Debug);
    logger.table([json!([{"a": 1}])]);
    logger.highlight(["look"]);
    assert_eq!(sink.lines(Channel::Table).len(), 1);
    assert_eq!(sink.lines(Channel::Log), vec!["look".to_string()]);
}

#[test]
fn test_table_forwards_structured_data() {
    let (logger, sink) = logger_with(LogLevel::Debug);
    logger.table([json!([{"name": "kick"}, {"name": "snare"}])]);
    let grid = &sink.lines(Channel::Table)[0];
    assert!(grid.contains("│ (index) │ name  │"));
    assert!(grid.contains("│ 1       │ snare │"));
}

#[test]
fn test_highlight_wraps_only_strings() {
    let sink = Arc::new(RecordingSink::default());
    let logger = Logger::with_sink(
        LoggerConfig {
            level: LogLevel::Debug,
        },
        sink.clone(),
    );
    logger.highlight(values!["hot", 7, json!("also text"), json!({"k": 1})]);

    let lines = sink.general.lock().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].paint, None);
    assert_eq!(
        lines[0].items,
        vec![
            LogValue::Painted(Paint::Highlight, "hot".to_string()),
            LogValue::from(7),
            LogValue::Painted(Paint::Highlight, "also text".to_string()),
            LogValue::Json(json!({"k": 1})),
        ]
    );
}

#[test]
fn test_start_end_timer() {
    let (logger, sink) = logger_with(LogLevel::Info);
    logger.start_timer("x");
    assert_eq!(logger.active_timers(), 1);
    logger.end_timer("x");
    assert_eq!(logger.active_timers(), 0);

    let info = sink.lines(Channel::Info);
    assert_eq!(info.len(), 1);
    assert!(info[0].contains("[INFO] Timer [x]: "));
    assert!(elapsed_of(&info[0]) >= 0.0);

    logger.end_timer("x");
    let warn = sink.lines(Channel::Warn);
    assert_eq!(warn.len(), 1);
    assert!(warn[0].ends_with("[WARN] No timer found for label: x"));
}

#[test]
fn test_end_missing_timer_only_warns() {
    let (logger, sink) = logger_with(LogLevel::Debug);
    logger.end_timer("missing");
    assert_eq!(
        sink.entries()
            .iter()
            .map(|(channel, _)| *channel)
            .collect::<Vec<_>>(),
        vec![Channel::Warn]
    );
    assert_eq!(logger.active_timers(), 0);
}

#[test]
fn test_timer_line_respects_info_gate() {
    let (logger, sink) = logger_with(LogLevel::Warn);
    logger.start_timer("quiet");
    logger.end_timer("quiet");
    assert!(sink.is_empty());
    assert_eq!(logger.active_timers(), 0);
}

#[test]
fn test_restart_measures_from_second_start() {
    let (logger, sink) = logger_with(LogLevel::Info);
    logger.start_timer("x");
    std::thread::sleep(Duration::from_millis(60));
    logger.start_timer("x");
    logger.end_timer("x");

    let info = sink.lines(Channel::Info);
    assert_eq!(info.len(), 1);
    assert!(elapsed_of(&info[0]) < 60.0);
    assert!(sink.lines(Channel::Warn).is_empty());
}

#[test]
fn test_scoped_timer_ends_on_drop() {
    let (logger, sink) = logger_with(LogLevel::Info);
    {
        let timer = logger.scoped_timer("block");
        assert_eq!(timer.label(), "block");
        std::thread::sleep(Duration::from_millis(5));
    }
    let info = sink.lines(Channel::Info);
    assert_eq!(info.len(), 1);
    assert!(elapsed_of(&info[0]) >= 5.0);
}

#[test]
fn test_instances_are_independent() {
    let (a, sink_a) = logger_with(LogLevel::Debug);
    let (b, sink_b) = logger_with(LogLevel::Error);
    a.start_timer("shared");
    b.end_timer("shared");
    a.end_timer("shared");

    assert_eq!(sink_a.lines(Channel::Info).len(), 1);
    assert!(sink_a.lines(Channel::Warn).is_empty());
    // b is at error level, so its warn is suppressed
    assert!(sink_b.is_empty());
    assert_eq!(b.get_level(), LogLevel::Error);
}

#[tokio::test]
async fn test_time_returns_value() {
    let (logger, sink) = logger_with(LogLevel::Info);
    let value = logger.time("y", || async { 42 }).await;

    assert_eq!(value, 42);
    let info = sink.lines(Channel::Info);
    assert_eq!(info.len(), 1);
    assert!(info[0].contains("Timer [y]: "));
    assert_eq!(logger.active_timers(), 0);
}

#[derive(Debug, PartialEq)]
struct WorkFailed(&'static str);

#[tokio::test]
async fn test_time_propagates_failure_unchanged() {
    let (logger, sink) = logger_with(LogLevel::Info);
    let result: Result<u32, WorkFailed> = logger
        .time("z", || async { Err(WorkFailed("E")) })
        .await;

    assert_eq!(result, Err(WorkFailed("E")));
    assert_eq!(sink.lines(Channel::Info).len(), 1);
    assert!(sink.lines(Channel::Info)[0].contains("Timer [z]: "));
}

#[tokio::test]
async fn test_time_measures_awaited_work() {
    let (logger, sink) = logger_with(LogLevel::Info);
    logger
        .time("sleep", || tokio::time::sleep(Duration::from_millis(20)))
        .await;
    assert!(elapsed_of(&sink.lines(Channel::Info)[0]) >= 20.0);
}

#[tokio::test]
async fn test_time_ends_timer_when_cancelled() {
    let (logger, sink) = logger_with(LogLevel::Info);
    let outcome = tokio::time::timeout(
        Duration::from_millis(10),
        logger.time("stuck", std::future::pending::<()>),
    )
    .await;

    assert!(outcome.is_err());
    assert_eq!(logger.active_timers(), 0);
    let info = sink.lines(Channel::Info);
    assert_eq!(info.len(), 1);
    assert!(info[0].contains("Timer [stuck]: "));
}

#[tokio::test]
async fn test_other_calls_interleave_during_time() {
    let (logger, sink) = logger_with(LogLevel::Info);
    let logger = Arc::new(logger);
    let inner = Arc::clone(&logger);

    logger
        .time("outer", || async move {
            inner.info(["during"]);
            inner.start_timer("inner");
            inner.end_timer("inner");
        })
        .await;

    let info = sink.lines(Channel::Info);
    assert_eq!(info.len(), 3);
    assert!(info[0].ends_with("during"));
    assert!(info[1].contains("Timer [inner]: "));
    assert!(info[2].contains("Timer [outer]: "));
}

#[tokio::test]
async fn test_time_ends_timer_when_work_panics() {
    let (logger, sink) = logger_with(LogLevel::Info);
    let logger = Arc::new(logger);
    let task_logger = Arc::clone(&logger);

    let joined = tokio::spawn(async move {
        task_logger
            .time("p", || async {
                panic!("work exploded");
            })
            .await
    })
    .await;

    assert!(joined.is_err());
    assert_eq!(logger.active_timers(), 0);
    let info = sink.lines(Channel::Info);
    assert_eq!(info.len(), 1);
    assert!(info[0].contains("Timer [p]: "));
}
