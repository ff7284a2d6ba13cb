use clap::Args;
use mtrack_types::config::TrackerConfig;

use crate::{
    commands::{open_tracker, report_saved, Executor, RecordArgs},
    presentation::render_record,
};

#[derive(Args, Debug)]
pub struct AddCmd {
    #[command(flatten)]
    config: TrackerConfig,
    #[command(flatten)]
    record: RecordArgs,
}

impl Executor for AddCmd {
    async fn run(self) -> anyhow::Result<()> {
        let fields = self.record.apply(RecordArgs::new_form()).coerce()?;
        let mut tracker = open_tracker(&self.config).await?;
        let mut events = tracker.subscribe();
        let record = tracker.create(fields).await?;
        println!("Added:\n{}", render_record(&record));
        report_saved(&mut events);
        Ok(())
    }
}
