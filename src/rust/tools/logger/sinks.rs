use std::io::{self, Write};
use std::sync::Mutex;

use super::format::Painted;
use super::table::render_table;
use super::value::LogValue;

/// Output channel a line was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Error,
    Warn,
    Info,
    Debug,
    Log,
    Table,
}

/// Destination for rendered log output. Writes never fail from the caller's
/// point of view.
pub trait Sink: Send + Sync {
    fn error(&self, line: &Painted);
    fn warn(&self, line: &Painted);
    fn info(&self, line: &Painted);
    fn debug(&self, line: &Painted);
    /// General output channel.
    fn log(&self, line: &Painted);
    fn table(&self, values: &[LogValue]);
}

/// Process stdout/stderr. Error and warn go to stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    stdout_ansi: bool,
    stderr_ansi: bool,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    /// Colors are enabled per stream when it is attached to a terminal.
    pub fn new() -> Self {
        Self {
            stdout_ansi: atty::is(atty::Stream::Stdout),
            stderr_ansi: atty::is(atty::Stream::Stderr),
        }
    }

    pub fn with_ansi(ansi: bool) -> Self {
        Self {
            stdout_ansi: ansi,
            stderr_ansi: ansi,
        }
    }

    fn to_stdout(&self, text: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{}", text);
    }

    fn to_stderr(&self, text: &str) {
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "{}", text);
    }
}

impl Sink for ConsoleSink {
    fn error(&self, line: &Painted) {
        self.to_stderr(&line.render(self.stderr_ansi));
    }

    fn warn(&self, line: &Painted) {
        self.to_stderr(&line.render(self.stderr_ansi));
    }

    fn info(&self, line: &Painted) {
        self.to_stdout(&line.render(self.stdout_ansi));
    }

    fn debug(&self, line: &Painted) {
        self.to_stdout(&line.render(self.stdout_ansi));
    }

    fn log(&self, line: &Painted) {
        self.to_stdout(&line.render(self.stdout_ansi));
    }

    fn table(&self, values: &[LogValue]) {
        match render_table(values) {
            Some(grid) => self.to_stdout(&grid),
            None => self.log(&Painted::plain(values.to_vec())),
        }
    }
}

/// Keeps every line in memory as plain text.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(Channel, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Channel, String)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Lines written to `channel`, oldest first.
    pub fn lines(&self, channel: Channel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, text)| text)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.clear();
    }

    fn push(&self, channel: Channel, text: String) {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.push((channel, text));
    }
}

impl Sink for MemorySink {
    fn error(&self, line: &Painted) {
        self.push(Channel::Error, line.render(false));
    }

    fn warn(&self, line: &Painted) {
        self.push(Channel::Warn, line.render(false));
    }

    fn info(&self, line: &Painted) {
        self.push(Channel::Info, line.render(false));
    }

    fn debug(&self, line: &Painted) {
        self.push(Channel::Debug, line.render(false));
    }

    fn log(&self, line: &Painted) {
        self.push(Channel::Log, line.render(false));
    }

    fn table(&self, values: &[LogValue]) {
        let text = render_table(values)
            .unwrap_or_else(|| Painted::plain(values.to_vec()).render(false));
        self.push(Channel::Table, text);
    }
}
