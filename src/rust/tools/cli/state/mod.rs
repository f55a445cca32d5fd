use std::sync::Arc;

use crate::platform::config::LoggerConfig;
use crate::tools::logger::{ConsoleSink, Logger};

#[derive(Clone)]
pub struct CliContext {
    logger: Arc<Logger>,
}

impl CliContext {
    pub fn new(config: LoggerConfig, color: bool) -> Self {
        let sink = if color {
            ConsoleSink::new()
        } else {
            ConsoleSink::with_ansi(false)
        };

        Self {
            logger: Arc::new(Logger::with_sink(config, Arc::new(sink))),
        }
    }

    pub fn logger(&self) -> Arc<Logger> {
        Arc::clone(&self.logger)
    }
}
