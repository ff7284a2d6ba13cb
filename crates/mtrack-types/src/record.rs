use std::{borrow::Borrow, fmt::Display, str::FromStr};

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::{
    coerce::{self, lenient},
    error::UnknownValue,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Game,
    Anime,
    Manga,
    Movie,
}

impl Category {
    /// Order in which category sections are presented
    pub const PRESENTATION_ORDER: [Category; 4] = [
        Category::Game,
        Category::Anime,
        Category::Manga,
        Category::Movie,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Game => "Game",
            Category::Anime => "Anime",
            Category::Manga => "Manga",
            Category::Movie => "Movie",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::PRESENTATION_ORDER
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownValue::new("category", s))
    }
}

/// Status of a record. Open set, the well known values are provided as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Validate, Serialize, Deserialize)]
#[garde(transparent)]
#[serde(transparent)]
pub struct Status(#[garde(length(min = 1))] String);

impl Status {
    pub const PLANNED: &'static str = "Planned";
    pub const IN_PROGRESS: &'static str = "InProgress";
    pub const COMPLETED: &'static str = "Completed";

    pub fn planned() -> Self {
        Status(Self::PLANNED.to_string())
    }

    pub fn in_progress() -> Self {
        Status(Self::IN_PROGRESS.to_string())
    }

    pub fn completed() -> Self {
        Status(Self::COMPLETED.to_string())
    }

    pub fn is_completed(&self) -> bool {
        self.0 == Self::COMPLETED
    }

    pub fn is_planned(&self) -> bool {
        self.0 == Self::PLANNED
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::planned()
    }
}

impl AsRef<str> for Status {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for Status {
    fn borrow(&self) -> &str {
        self.as_ref()
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Status {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for Status {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Status(s.trim().to_string()))
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn non_blank(value: &String, _context: &()) -> garde::Result {
    if value.trim().is_empty() {
        Err(garde::Error::new("must not be blank"))
    } else {
        Ok(())
    }
}

/// One tracked media entry, as persisted in the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Validate, Serialize, Deserialize)]
pub struct Record {
    #[garde(skip)]
    pub id: i64,
    #[garde(custom(non_blank))]
    pub title: String,
    #[garde(skip)]
    pub category: Category,
    #[serde(default)]
    #[garde(dive)]
    pub status: Status,
    #[serde(default, deserialize_with = "lenient::rating")]
    #[garde(range(max = 5))]
    pub rating: u8,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        serialize_with = "lenient::serialize_optional_text"
    )]
    #[garde(skip)]
    pub link: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        serialize_with = "lenient::serialize_optional_text"
    )]
    #[garde(skip)]
    pub review: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    #[garde(skip)]
    pub current_progress: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    #[garde(skip)]
    pub total_count: u32,
    #[serde(default)]
    #[garde(skip)]
    pub created_at: String,
}

impl Record {
    /// `total_count` of 0 means progress is not tracked
    pub fn tracks_progress(&self) -> bool {
        self.total_count > 0
    }

    pub fn progress_percent(&self) -> Option<f64> {
        self.tracks_progress()
            .then(|| self.current_progress as f64 / self.total_count as f64 * 100.0)
    }

    pub fn fields(&self) -> RecordFields {
        RecordFields {
            title: self.title.clone(),
            category: self.category,
            status: self.status.clone(),
            rating: self.rating,
            link: self.link.clone(),
            review: self.review.clone(),
            current_progress: self.current_progress,
            total_count: self.total_count,
        }
    }
}

/// Everything user can set on a record, already coerced to proper types
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RecordFields {
    #[garde(custom(non_blank))]
    pub title: String,
    #[garde(skip)]
    pub category: Category,
    #[garde(dive)]
    pub status: Status,
    #[garde(range(max = 5))]
    pub rating: u8,
    #[garde(skip)]
    pub link: Option<String>,
    #[garde(skip)]
    pub review: Option<String>,
    #[garde(skip)]
    pub current_progress: u32,
    #[garde(skip)]
    pub total_count: u32,
}

impl RecordFields {
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        RecordFields {
            title: title.into(),
            category,
            status: Status::default(),
            rating: 0,
            link: None,
            review: None,
            current_progress: 0,
            total_count: 0,
        }
    }

    pub fn into_record(self, id: i64, created_at: String) -> Record {
        Record {
            id,
            title: self.title,
            category: self.category,
            status: self.status,
            rating: self.rating,
            link: self.link,
            review: self.review,
            current_progress: self.current_progress,
            total_count: self.total_count,
            created_at,
        }
    }
}

/// Field values as they come from a text entry surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    pub title: String,
    pub category: String,
    pub status: String,
    pub rating: String,
    pub link: String,
    pub review: String,
    pub current_progress: String,
    pub total_count: String,
}

impl RawFields {
    /// Applies coercion rules, only category can fail as it is a closed set
    pub fn coerce(self) -> Result<RecordFields, UnknownValue> {
        let status = self.status.trim();
        Ok(RecordFields {
            title: self.title.trim().to_string(),
            category: self.category.parse()?,
            status: if status.is_empty() {
                Status::default()
            } else {
                Status::from(status)
            },
            rating: coerce::rating(&self.rating),
            link: coerce::optional_text(&self.link),
            review: coerce::optional_text(&self.review),
            current_progress: coerce::count(&self.current_progress),
            total_count: coerce::count(&self.total_count),
        })
    }
}

impl From<&Record> for RawFields {
    fn from(record: &Record) -> Self {
        RawFields {
            title: record.title.clone(),
            category: record.category.to_string(),
            status: record.status.to_string(),
            rating: record.rating.to_string(),
            link: record.link.clone().unwrap_or_default(),
            review: record.review.clone().unwrap_or_default(),
            current_progress: record.current_progress.to_string(),
            total_count: record.total_count.to_string(),
        }
    }
}
