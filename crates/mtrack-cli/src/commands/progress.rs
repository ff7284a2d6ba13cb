use clap::Args;
use mtrack_dal::{Error, ProgressOutcome};
use mtrack_types::{coerce, config::TrackerConfig};

use crate::{
    commands::{open_tracker, report_saved, Executor},
    presentation::render_record,
};

#[derive(Args, Debug)]
pub struct ProgressCmd {
    #[command(flatten)]
    config: TrackerConfig,
    #[arg(long, help = "Id of the item, as shown by list command")]
    id: i64,
    #[arg(
        long,
        help = "Progress as you saw it, increment is refused if it already reached total. Defaults to stored value"
    )]
    current: Option<String>,
    #[arg(long, help = "Total as you saw it. Defaults to stored value")]
    total: Option<String>,
}

impl Executor for ProgressCmd {
    async fn run(self) -> anyhow::Result<()> {
        let mut tracker = open_tracker(&self.config).await?;
        let stored = tracker.get(self.id).ok_or(Error::NotFound(self.id))?;
        let current = self
            .current
            .as_deref()
            .map(coerce::count)
            .unwrap_or(stored.current_progress);
        let total = self
            .total
            .as_deref()
            .map(coerce::count)
            .unwrap_or(stored.total_count);
        let mut events = tracker.subscribe();
        match tracker.increment_progress(self.id, current, total).await? {
            ProgressOutcome::Advanced(record) => {
                println!("{}", render_record(&record));
                report_saved(&mut events);
            }
            ProgressOutcome::AlreadyComplete => {
                println!("Already at {current} / {total}, nothing to add");
            }
        }
        Ok(())
    }
}
