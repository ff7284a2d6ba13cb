use std::path::PathBuf;

use clap::Args;
use mtrack_dal::backup::BACKUP_FILE_NAME;
use mtrack_types::config::TrackerConfig;
use tokio::fs;

use crate::commands::{open_tracker, Executor};

#[derive(Args, Debug)]
pub struct ExportCmd {
    #[command(flatten)]
    config: TrackerConfig,
    #[arg(short, long, default_value = BACKUP_FILE_NAME, help = "Backup file to write")]
    output: PathBuf,
}

impl Executor for ExportCmd {
    async fn run(self) -> anyhow::Result<()> {
        let tracker = open_tracker(&self.config).await?;
        let document = tracker.export()?;
        fs::write(&self.output, document).await?;
        println!(
            "Exported {} items to {}",
            tracker.items().len(),
            self.output.display()
        );
        Ok(())
    }
}
