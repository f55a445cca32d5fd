use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use super::{parse_value, parse_values};
use crate::tools::cli::state::CliContext;
use crate::tools::logger::{LogLevel, LogValue};

#[derive(Debug, Clone, Args)]
pub struct LogCommand {
    /// Severity of the message (error, warn, info, debug)
    pub severity: LogLevel,

    /// Values to log; JSON literals are kept structured
    #[arg(num_args = 0.., allow_hyphen_values = true)]
    pub values: Vec<String>,
}

impl LogCommand {
    pub fn execute(&self, ctx: &CliContext) {
        ctx.logger().log(self.severity, parse_values(&self.values));
    }
}

#[derive(Debug, Clone, Args)]
pub struct TableCommand {
    /// JSON array or object to tabulate
    pub data: String,

    /// Only show these columns
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,
}

impl TableCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let data: Value = serde_json::from_str(&self.data)
            .with_context(|| format!("table data is not valid JSON: {}", self.data))?;

        let mut values = vec![LogValue::Json(data)];
        if !self.columns.is_empty() {
            values.push(LogValue::Json(Value::from(self.columns.clone())));
        }

        ctx.logger().table(values);
        Ok(())
    }
}

#[derive(Debug, Clone, Args)]
pub struct HighlightCommand {
    /// Values to print; strings are highlighted
    #[arg(num_args = 0.., allow_hyphen_values = true)]
    pub values: Vec<String>,
}

impl HighlightCommand {
    pub fn execute(&self, ctx: &CliContext) {
        ctx.logger()
            .highlight(self.values.iter().map(|raw| parse_value(raw)));
    }
}
