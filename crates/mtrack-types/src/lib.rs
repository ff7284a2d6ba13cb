pub mod coerce;
pub mod config;
pub mod error;
pub mod record;
pub mod theme;
pub mod utils;

pub use error::UnknownValue;
pub use record::{Category, RawFields, Record, RecordFields, Status};
pub use theme::Theme;
