//! Leveled console logging with named timers.
//!
//! ```no_run
//! use egonlog::{LogLevel, Logger, LoggerConfig, values};
//!
//! let logger = Logger::new(LoggerConfig::new(LogLevel::Info));
//! logger.info(values!["listening on port", 8080]);
//! logger.debug(["suppressed at info"]);
//!
//! logger.start_timer("load");
//! logger.end_timer("load");
//! ```

pub mod platform;
pub mod tools;

pub use platform::config::LoggerConfig;
pub use tools::logger::{
    Channel, ConsoleSink, LogLevel, LogValue, Logger, MemorySink, Paint, Painted,
    ParseLevelError, Sink, TimerGuard,
};
