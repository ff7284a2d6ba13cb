use clap::Args;
use mtrack_dal::{EditMode, Error};
use mtrack_types::{config::TrackerConfig, RawFields};

use crate::{
    commands::{open_tracker, report_saved, Executor, RecordArgs},
    presentation::render_record,
};

#[derive(Args, Debug)]
pub struct EditCmd {
    #[command(flatten)]
    config: TrackerConfig,
    #[arg(long, help = "Id of the item, as shown by list command")]
    id: i64,
    #[command(flatten)]
    record: RecordArgs,
}

impl Executor for EditCmd {
    async fn run(self) -> anyhow::Result<()> {
        let mut tracker = open_tracker(&self.config).await?;
        // form is prefilled with current values
        let current = tracker
            .get(self.id)
            .map(RawFields::from)
            .ok_or(Error::NotFound(self.id))?;
        let fields = self.record.apply(current).coerce()?;
        let mut events = tracker.subscribe();
        let record = tracker.submit(EditMode::Editing(self.id), fields).await?;
        println!("Updated:\n{}", render_record(&record));
        report_saved(&mut events);
        Ok(())
    }
}
