use clap::Args;
use mtrack_dal::{Query, SortMode, StatusFilter};
use mtrack_types::config::TrackerConfig;

use crate::{
    commands::{open_tracker, Executor},
    presentation::render_view,
};

#[derive(Args, Debug)]
pub struct ListCmd {
    #[command(flatten)]
    config: TrackerConfig,
    #[arg(
        short,
        long,
        default_value = "All",
        help = "All, Progress (items with total count) or exact status like Completed"
    )]
    filter: StatusFilter,
    #[arg(
        short,
        long,
        default_value = "",
        help = "Search in titles, also matches initials - aot finds Attack on Titan"
    )]
    search: String,
    #[arg(
        long,
        default_value = "newest",
        help = "Order - best, az, oldest or newest"
    )]
    sort: SortMode,
}

impl Executor for ListCmd {
    async fn run(self) -> anyhow::Result<()> {
        let tracker = open_tracker(&self.config).await?;
        let query = Query::new()
            .with_filter(self.filter)
            .with_search(self.search)
            .with_sort(self.sort);
        let groups = tracker.view(&query);
        if groups.is_empty() {
            println!("Nothing to show");
        } else {
            print!("{}", render_view(&groups));
        }
        Ok(())
    }
}
