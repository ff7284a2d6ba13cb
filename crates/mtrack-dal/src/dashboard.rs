use mtrack_types::Record;
use serde::Serialize;

/// Counters shown above the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub total: usize,
    pub finished: usize,
    pub todo: usize,
}

impl Dashboard {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        records
            .into_iter()
            .fold(Dashboard::default(), |mut dashboard, record| {
                dashboard.total += 1;
                if record.status.is_completed() {
                    dashboard.finished += 1;
                } else if record.status.is_planned() {
                    dashboard.todo += 1;
                }
                dashboard
            })
    }
}
