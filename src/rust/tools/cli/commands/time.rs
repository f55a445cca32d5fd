use std::time::Duration;

use anyhow::{Result, anyhow};
use clap::Args;
use tokio::time::sleep;

use crate::tools::cli::state::CliContext;

#[derive(Debug, Clone, Args)]
pub struct TimeCommand {
    /// Timer label
    pub label: String,

    /// How long the simulated work takes
    #[arg(long, default_value_t = 50)]
    pub sleep_ms: u64,

    /// Make the work fail after sleeping
    #[arg(long, default_value_t = false)]
    pub fail: bool,
}

impl TimeCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();
        let duration = Duration::from_millis(self.sleep_ms);
        let fail = self.fail;
        let label = self.label.clone();

        logger
            .time(&self.label, || async move {
                sleep(duration).await;
                if fail {
                    Err(anyhow!("work '{}' failed", label))
                } else {
                    Ok(())
                }
            })
            .await
    }
}
