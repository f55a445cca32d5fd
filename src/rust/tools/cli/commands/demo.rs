use std::time::Duration;

use anyhow::Result;
use serde_json::json;
use tokio::time::sleep;

use crate::tools::cli::state::CliContext;
use crate::tools::logger::LogLevel;
use crate::values;

pub async fn execute(ctx: &CliContext) -> Result<()> {
    let logger = ctx.logger();
    let initial = logger.get_level();

    logger.error(["something broke"]);
    logger.warn(["disk almost full:", "93%"]);
    logger.info(values!["listening on port", 8080]);
    logger.debug(values!["request", json!({"method": "GET", "path": "/"})]);

    logger.set_level(LogLevel::Debug);
    logger.table([json!([
        {"label": "parse", "ms": 1.25},
        {"label": "render", "ms": 4.5},
    ])]);
    logger.highlight(values!["highlighted", 42, "text"]);
    logger.set_level(initial);

    logger.start_timer("sync");
    logger.end_timer("sync");
    logger.end_timer("sync");

    let answer = logger
        .time("async", || async {
            sleep(Duration::from_millis(25)).await;
            42
        })
        .await;
    logger.info(values!["async work returned", answer]);

    Ok(())
}
