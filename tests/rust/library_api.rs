use std::sync::Arc;

use egonlog::{Channel, LogLevel, Logger, LoggerConfig, MemorySink, values};

#[test]
fn library_logger_with_memory_sink() {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::with_sink(LoggerConfig::new(LogLevel::Info), sink.clone());

    logger.info(values!["ready", 1]);
    logger.debug(["skipped"]);
    logger.end_timer("never-started");

    assert_eq!(sink.len(), 2);
    assert!(sink.lines(Channel::Info)[0].ends_with("[INFO] ready 1"));
    assert!(sink.lines(Channel::Warn)[0].ends_with("No timer found for label: never-started"));

    sink.clear();
    assert!(sink.is_empty());
}

#[test]
fn library_time_blocks_on_runtime() {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::with_sink(LogLevel::Debug.into(), sink.clone());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime");
    let result: Result<(), String> =
        runtime.block_on(logger.time("work", || async { Err("nope".to_string()) }));

    assert_eq!(result, Err("nope".to_string()));
    assert_eq!(sink.lines(Channel::Info).len(), 1);
}
