use clap::Args;
use mtrack_types::config::TrackerConfig;

use crate::{
    commands::{open_tracker, Executor},
    presentation::render_dashboard,
};

#[derive(Args, Debug)]
pub struct StatsCmd {
    #[command(flatten)]
    config: TrackerConfig,
}

impl Executor for StatsCmd {
    async fn run(self) -> anyhow::Result<()> {
        let tracker = open_tracker(&self.config).await?;
        println!("{}", render_dashboard(&tracker.dashboard()));
        Ok(())
    }
}
