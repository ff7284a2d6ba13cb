use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use mtrack_dal::Error;
use mtrack_types::config::TrackerConfig;
use tokio::fs;

use crate::{
    commands::{open_tracker, report_saved, Executor},
    prompt::PromptConfirm,
};

#[derive(Args, Debug)]
pub struct ImportCmd {
    #[command(flatten)]
    config: TrackerConfig,
    #[arg(short, long, help = "Backup file created by export command")]
    input: PathBuf,
    #[arg(short, long, help = "Do not ask for confirmation")]
    yes: bool,
}

impl Executor for ImportCmd {
    async fn run(self) -> anyhow::Result<()> {
        let document = fs::read_to_string(&self.input)
            .await
            .with_context(|| format!("Cannot read {}", self.input.display()))?;
        let mut tracker = open_tracker(&self.config).await?;
        let mut events = tracker.subscribe();
        let mut confirm = PromptConfirm::new(self.yes);
        match tracker.import(&document, &mut confirm).await {
            Ok(count) => {
                println!("Restored {count} items");
                report_saved(&mut events);
                Ok(())
            }
            Err(Error::Cancelled) => {
                println!("Import cancelled, list is unchanged");
                Ok(())
            }
            Err(e @ (Error::ParseError(_) | Error::InvalidBackup(_))) => {
                Err(anyhow::Error::new(e).context("Invalid backup file, list is unchanged"))
            }
            Err(e) => Err(e.into()),
        }
    }
}
