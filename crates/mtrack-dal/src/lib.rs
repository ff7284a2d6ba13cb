pub mod backup;
pub mod clock;
pub mod collection;
pub mod confirm;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod preferences;
pub mod query;
pub mod tracker;

pub use collection::Collection;
pub use confirm::Confirm;
pub use dashboard::Dashboard;
pub use error::{Error, Result};
pub use query::{Group, Query, SortMode, StatusFilter};
pub use tracker::{EditMode, ProgressOutcome, Tracker};
