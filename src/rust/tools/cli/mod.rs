mod commands;
pub mod state;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use state::CliContext;

use crate::platform::config::LoggerConfig;
use crate::tools::logger::LogLevel;

#[derive(Parser, Debug)]
#[command(name = "egonlog")]
#[command(version, about = "egonlog – leveled, timestamped console logging with timers.")]
pub struct Cli {
    /// Minimum severity to print (error, warn, info, debug); overrides the config file
    #[arg(short, long, global = true)]
    level: Option<LogLevel>,

    /// Config file (defaults to egonlog.toml / egonlog.json in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long, global = true, default_value_t = false)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log values at a severity
    Log(commands::emit::LogCommand),
    /// Render a JSON value as a table (debug level only)
    Table(commands::emit::TableCommand),
    /// Print values with strings highlighted (debug level only)
    Highlight(commands::emit::HighlightCommand),
    /// Time a simulated unit of async work
    Time(commands::time::TimeCommand),
    /// Run every logger operation once
    Demo,
}

impl Cli {
    fn resolve_config(&self) -> Result<LoggerConfig> {
        let mut config = match &self.config {
            Some(path) => LoggerConfig::load(path)?,
            None => LoggerConfig::discover(std::env::current_dir()?)?,
        };
        if let Some(level) = self.level {
            config.level = level;
        }
        Ok(config)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let ctx = CliContext::new(config, !cli.no_color);
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async move {
        match cli.command {
            Commands::Log(command) => command.execute(&ctx),
            Commands::Table(command) => command.execute(&ctx)?,
            Commands::Highlight(command) => command.execute(&ctx),
            Commands::Time(command) => command.execute(&ctx).await?,
            Commands::Demo => commands::demo::execute(&ctx).await?,
        }
        Ok(())
    })
}
