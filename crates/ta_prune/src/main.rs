#[macro_use]
extern crate tracing;

mod config;
mod tube_archivist;
mod utils;
mod workflow;

use std::time::Duration;

use anyhow::Result;
use config::ARGS;
use once_cell::sync::Lazy;
use tokio::time;

use crate::tube_archivist::TaClient;
use crate::utils::init_logger;
use crate::workflow::prune_videos;

#[tokio::main]
async fn main() -> Result<()> {
    Lazy::force(&ARGS);
    init_logger(&ARGS.log_level);
    let ta_client = TaClient::new(&ARGS.url, &ARGS.token);
    loop {
        prune_videos(&ta_client, ARGS.min_watched_age, ARGS.ignore_watch_status).await?;
        if !ARGS.endless {
            return Ok(());
        }
        info!("endless 模式运行中，等待 {} 秒后进行下一轮清理", ARGS.sleep);
        time::sleep(Duration::from_secs(ARGS.sleep)).await;
    }
}
