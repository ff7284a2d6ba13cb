use clap::Args;
use mtrack_dal::{Tracker, events::EventReceiver, events::TrackerEvent};
use mtrack_store::{FileStore, ValidKey};
use mtrack_types::{RawFields, Status, config::TrackerConfig};

use crate::presentation::render_dashboard;

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod progress;
pub mod stats;
pub mod theme;

#[allow(async_fn_in_trait)]
pub trait Executor {
    async fn run(self) -> anyhow::Result<()>;
}

pub(crate) async fn open_tracker(config: &TrackerConfig) -> anyhow::Result<Tracker<FileStore>> {
    let store = FileStore::new(config.data_dir());
    let key = ValidKey::new(config.snapshot_key())?;
    let tracker = Tracker::load(store, key).await?;
    Ok(tracker)
}

/// Prints refreshed counters if the last operation saved the list
pub(crate) fn report_saved(events: &mut EventReceiver) {
    while let Ok(event) = events.try_recv() {
        match event {
            TrackerEvent::Saved(dashboard) => println!("{}", render_dashboard(&dashboard)),
        }
    }
}

/// Record fields as given on command line, numbers are taken as text and coerced
#[derive(Args, Debug, Default)]
pub struct RecordArgs {
    #[arg(short, long, help = "Title of the item")]
    pub title: Option<String>,

    #[arg(short, long, help = "Category - one of Game, Anime, Manga, Movie")]
    pub category: Option<String>,

    #[arg(
        short,
        long,
        help = "Status, e.g. Planned, InProgress, Completed - any text is accepted"
    )]
    pub status: Option<String>,

    #[arg(short, long, help = "Rating 0-5, shown as stars")]
    pub rating: Option<String>,

    #[arg(long, help = "Link to the item, e.g. store or wiki page")]
    pub link: Option<String>,

    #[arg(long, help = "Short review")]
    pub review: Option<String>,

    #[arg(long, help = "Current progress (episode, chapter ...)")]
    pub current: Option<String>,

    #[arg(long, help = "Total count of episodes, chapters ..., 0 means progress is not tracked")]
    pub total: Option<String>,
}

impl RecordArgs {
    /// Fields given on command line replace those in `base`
    pub fn apply(self, base: RawFields) -> RawFields {
        RawFields {
            title: self.title.unwrap_or(base.title),
            category: self.category.unwrap_or(base.category),
            status: self.status.unwrap_or(base.status),
            rating: self.rating.unwrap_or(base.rating),
            link: self.link.unwrap_or(base.link),
            review: self.review.unwrap_or(base.review),
            current_progress: self.current.unwrap_or(base.current_progress),
            total_count: self.total.unwrap_or(base.total_count),
        }
    }

    /// Values of a fresh form
    pub fn new_form() -> RawFields {
        RawFields {
            category: mtrack_types::Category::Game.to_string(),
            status: Status::PLANNED.to_string(),
            rating: "0".to_string(),
            ..Default::default()
        }
    }
}
