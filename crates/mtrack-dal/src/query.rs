//! Derives displayable view from the collection: filter, search, sort and group by category.
//!
//! View is recomputed completely on every call, nothing is cached.

use std::{cmp::Ordering, convert::Infallible, fmt::Display, str::FromStr};

use mtrack_types::{
    Category, Record, Status,
    utils::{acronym, collation},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    /// Only records which track progress
    Progress,
    /// Exact, case sensitive status match
    Status(Status),
}

impl StatusFilter {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Progress => record.tracks_progress(),
            StatusFilter::Status(status) => &record.status == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "All" => StatusFilter::All,
            "Progress" => StatusFilter::Progress,
            other => StatusFilter::Status(Status::from(other)),
        })
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "All"),
            StatusFilter::Progress => write!(f, "Progress"),
            StatusFilter::Status(status) => write!(f, "{status}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Highest rating first
    Best,
    /// Title, alphabetically
    Az,
    Oldest,
    #[default]
    Newest,
}

impl SortMode {
    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortMode::Best => b.rating.cmp(&a.rating),
            SortMode::Az => collation::compare(&a.title, &b.title),
            SortMode::Oldest => a.id.cmp(&b.id),
            SortMode::Newest => b.id.cmp(&a.id),
        }
    }
}

/// Unknown modes fall back to newest first
impl FromStr for SortMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "best" => SortMode::Best,
            "az" => SortMode::Az,
            "oldest" => SortMode::Oldest,
            _ => SortMode::Newest,
        })
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Best => write!(f, "best"),
            SortMode::Az => write!(f, "az"),
            SortMode::Oldest => write!(f, "oldest"),
            SortMode::Newest => write!(f, "newest"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Query {
    pub filter: StatusFilter,
    pub search: String,
    pub sort: SortMode,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: StatusFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }
}

#[derive(Debug)]
pub struct Group<'a> {
    pub category: Category,
    pub records: Vec<&'a Record>,
}

/// Term is expected lower-cased and trimmed
fn matches_search(record: &Record, term: &str) -> bool {
    term.is_empty()
        || record.title.to_lowercase().contains(term)
        || acronym(&record.title).contains(term)
}

/// Filtered and sorted records, not grouped
pub fn select<'a>(records: &'a [Record], query: &Query) -> Vec<&'a Record> {
    let term = query.search.trim().to_lowercase();
    let mut selected: Vec<&Record> = records
        .iter()
        .filter(|r| query.filter.matches(r) && matches_search(r, &term))
        .collect();
    // stable, equal keys keep collection order
    selected.sort_by(|a, b| query.sort.compare(a, b));
    selected
}

/// Sections in fixed category order, empty sections are omitted
pub fn view<'a>(records: &'a [Record], query: &Query) -> Vec<Group<'a>> {
    let selected = select(records, query);
    Category::PRESENTATION_ORDER
        .into_iter()
        .filter_map(|category| {
            let records: Vec<&Record> = selected
                .iter()
                .copied()
                .filter(|r| r.category == category)
                .collect();
            (!records.is_empty()).then_some(Group { category, records })
        })
        .collect()
}
