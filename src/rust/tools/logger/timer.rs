use super::Logger;

/// Starts a named timer on creation and ends it when dropped, so the timer
/// line is written on every exit path: normal return, early `?`, panic
/// unwinding, or a future being dropped mid-await.
#[must_use = "the timer ends as soon as the guard is dropped"]
pub struct TimerGuard<'a> {
    logger: &'a Logger,
    label: String,
}

impl<'a> TimerGuard<'a> {
    pub fn start(logger: &'a Logger, label: impl Into<String>) -> Self {
        let label = label.into();
        logger.start_timer(&label);
        Self { logger, label }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Drop for TimerGuard<'_> {
    fn drop(&mut self) {
        self.logger.end_timer(&self.label);
    }
}
