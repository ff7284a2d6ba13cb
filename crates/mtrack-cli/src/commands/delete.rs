use clap::Args;
use mtrack_dal::Error;
use mtrack_types::config::TrackerConfig;

use crate::{
    commands::{open_tracker, report_saved, Executor},
    prompt::PromptConfirm,
};

#[derive(Args, Debug)]
pub struct DeleteCmd {
    #[command(flatten)]
    config: TrackerConfig,
    #[arg(long, help = "Id of the item, as shown by list command")]
    id: i64,
    #[arg(short, long, help = "Do not ask for confirmation")]
    yes: bool,
}

impl Executor for DeleteCmd {
    async fn run(self) -> anyhow::Result<()> {
        let mut tracker = open_tracker(&self.config).await?;
        let mut events = tracker.subscribe();
        let mut confirm = PromptConfirm::new(self.yes);
        match tracker.delete(self.id, &mut confirm).await {
            Ok(record) => {
                println!("Deleted {}", record.title);
                report_saved(&mut events);
                Ok(())
            }
            Err(Error::Cancelled) => {
                println!("Nothing deleted");
                Ok(())
            }
            Err(Error::NotFound(id)) => {
                println!("No item with id {id}, nothing deleted");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
