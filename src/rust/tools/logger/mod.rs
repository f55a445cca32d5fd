use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Instant;

use crate::platform::config::LoggerConfig;

pub mod format;
pub mod level;
pub mod sinks;
pub mod table;
pub mod timer;
pub mod value;

pub use format::{Paint, Painted};
pub use level::{LogLevel, ParseLevelError};
pub use sinks::{Channel, ConsoleSink, MemorySink, Sink};
pub use timer::TimerGuard;
pub use value::LogValue;

/// Leveled console logger with named timers.
///
/// Every emission passes one gate: a message of severity `S` is written iff
/// `S.rank() <= threshold.rank()`. The threshold is read fresh on every call.
/// Timer starts use a monotonic clock; line timestamps use UTC wall-clock time.
pub struct Logger {
    level: RwLock<LogLevel>,
    timers: Mutex<HashMap<String, Instant>>,
    sink: Arc<dyn Sink>,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_sink(config, Arc::new(ConsoleSink::new()))
    }

    pub fn with_sink(config: LoggerConfig, sink: Arc<dyn Sink>) -> Self {
        Self {
            level: RwLock::new(config.level),
            timers: Mutex::new(HashMap::new()),
            sink,
        }
    }

    pub fn set_level(&self, level: LogLevel) {
        let mut current = self.level.write().unwrap_or_else(PoisonError::into_inner);
        *current = level;
    }

    pub fn get_level(&self) -> LogLevel {
        match self.level.read() {
            Ok(level) => *level,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Whether a message at `level` would currently be written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.get_level().permits(level)
    }

    pub fn log<I, V>(&self, level: LogLevel, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<LogValue>,
    {
        if !self.enabled(level) {
            return;
        }

        let stamp = format::timestamp();
        let prefix = format::prefix(level, &stamp);
        let values: Vec<LogValue> = values.into_iter().map(Into::into).collect();
        let line = Painted::new(Paint::for_level(level), prefix, values);

        match level {
            LogLevel::Error => self.sink.error(&line),
            LogLevel::Warn => self.sink.warn(&line),
            LogLevel::Info => self.sink.info(&line),
            LogLevel::Debug => self.sink.debug(&line),
        }
    }

    pub fn error<I, V>(&self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<LogValue>,
    {
        self.log(LogLevel::Error, values);
    }

    pub fn warn<I, V>(&self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<LogValue>,
    {
        self.log(LogLevel::Warn, values);
    }

    pub fn info<I, V>(&self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<LogValue>,
    {
        self.log(LogLevel::Info, values);
    }

    pub fn debug<I, V>(&self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<LogValue>,
    {
        self.log(LogLevel::Debug, values);
    }

    /// Forward values untouched to the sink's table renderer. Debug-gated.
    pub fn table<I, V>(&self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<LogValue>,
    {
        if !self.enabled(LogLevel::Debug) {
            return;
        }

        let values: Vec<LogValue> = values.into_iter().map(Into::into).collect();
        self.sink.table(&values);
    }

    /// Write values to the general channel with every string value
    /// highlighted. Non-string values pass through. Debug-gated.
    pub fn highlight<I, V>(&self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<LogValue>,
    {
        if !self.enabled(LogLevel::Debug) {
            return;
        }

        let values: Vec<LogValue> = values
            .into_iter()
            .map(|value| {
                let value: LogValue = value.into();
                match value.as_str() {
                    Some(text) => LogValue::Painted(Paint::Highlight, text.to_string()),
                    None => value,
                }
            })
            .collect();
        self.sink.log(&Painted::plain(values));
    }

    /// Record the current instant under `label`. Restarting a running label
    /// replaces its start.
    pub fn start_timer(&self, label: &str) {
        let mut timers = self.timers.lock().unwrap_or_else(PoisonError::into_inner);
        timers.insert(label.to_string(), Instant::now());
    }

    /// Log the elapsed time for `label` at info level and forget it, or warn
    /// when no such timer is running.
    pub fn end_timer(&self, label: &str) {
        let started = self
            .timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(label);

        match started {
            Some(start) => {
                let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
                self.info([format::timer_message(label, elapsed_ms)]);
            }
            None => self.warn([format::missing_timer_message(label)]),
        }
    }

    /// Number of timers started and not yet ended.
    pub fn active_timers(&self) -> usize {
        self.timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Timer that ends when the returned guard is dropped.
    pub fn scoped_timer(&self, label: impl Into<String>) -> TimerGuard<'_> {
        TimerGuard::start(self, label)
    }

    /// Time an asynchronous unit of work under `label`.
    ///
    /// The output of `work` is returned as-is, so an `Err` reaches the caller
    /// unchanged. The timer is ended before this returns, and also if the
    /// work panics or the future is dropped before completion.
    pub async fn time<F, Fut, T>(&self, label: &str, work: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let _timer = self.scoped_timer(label);
        work().await
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.get_level())
            .field("active_timers", &self.active_timers())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "test_logger.rs"]
mod tests;
