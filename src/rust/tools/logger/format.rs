use crossterm::style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor};
use time::OffsetDateTime;
use time::macros::format_description;

use super::level::LogLevel;
use super::value::LogValue;

const TIMESTAMP_FORMAT: &[time::format_description::FormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);
const EPOCH_TIMESTAMP: &str = "1970-01-01T00:00:00.000Z";

/// Color treatment applied to a rendered line or a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Red,
    Yellow,
    Green,
    /// Black text on a white background.
    Highlight,
}

impl Paint {
    /// Paint used for a severity's line; `Debug` lines stay uncolored.
    pub fn for_level(level: LogLevel) -> Option<Paint> {
        match level {
            LogLevel::Error => Some(Paint::Red),
            LogLevel::Warn => Some(Paint::Yellow),
            LogLevel::Info => Some(Paint::Green),
            LogLevel::Debug => None,
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Paint::Red => format!("{}{}{}", SetForegroundColor(Color::Red), text, ResetColor),
            Paint::Yellow => format!(
                "{}{}{}",
                SetForegroundColor(Color::Yellow),
                text,
                ResetColor
            ),
            Paint::Green => format!(
                "{}{}{}",
                SetForegroundColor(Color::Green),
                text,
                ResetColor
            ),
            Paint::Highlight => format!(
                "{}{}{}{}",
                SetBackgroundColor(Color::White),
                SetForegroundColor(Color::Black),
                text,
                ResetColor
            ),
        }
    }

    /// Wrap a prefix and trailing values into one styled renderable.
    pub fn paint(self, prefix: impl Into<String>, values: Vec<LogValue>) -> Painted {
        Painted::new(Some(self), prefix, values)
    }
}

/// A line waiting to be written: optional paint plus its items, unjoined.
#[derive(Debug, Clone, PartialEq)]
pub struct Painted {
    pub paint: Option<Paint>,
    pub items: Vec<LogValue>,
}

impl Painted {
    pub fn new(paint: Option<Paint>, prefix: impl Into<String>, values: Vec<LogValue>) -> Self {
        let mut items = Vec::with_capacity(values.len() + 1);
        items.push(LogValue::Str(prefix.into()));
        items.extend(values);
        Self { paint, items }
    }

    /// A line with no prefix and no line-level paint.
    pub fn plain(values: Vec<LogValue>) -> Self {
        Self {
            paint: None,
            items: values,
        }
    }

    pub fn render(&self, ansi: bool) -> String {
        let text = self
            .items
            .iter()
            .map(|item| item.render(ansi))
            .collect::<Vec<_>>()
            .join(" ");

        match self.paint {
            Some(paint) if ansi => paint.apply(&text),
            _ => text,
        }
    }
}

/// Current UTC wall-clock time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn timestamp() -> String {
    format_timestamp(OffsetDateTime::now_utc())
}

pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| EPOCH_TIMESTAMP.to_string())
}

/// `[<timestamp>] [<LEVEL>]`
pub fn prefix(level: LogLevel, timestamp: &str) -> String {
    format!("[{}] [{}]", timestamp, level.as_label())
}

pub fn timer_message(label: &str, elapsed_ms: f64) -> String {
    format!("Timer [{}]: {:.2} ms", label, elapsed_ms)
}

pub fn missing_timer_message(label: &str) -> String {
    format!("No timer found for label: {}", label)
}

#[cfg(test)]
#[path = "test_format.rs"]
mod tests;
