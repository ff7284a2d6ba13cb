use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Source of id seeds and creation timestamps
pub trait Clock {
    /// Milliseconds since Unix epoch
    fn now_millis(&self) -> i64;
    /// Human readable creation timestamp
    fn timestamp(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        let now = OffsetDateTime::now_utc();
        now.unix_timestamp()
            .saturating_mul(1000)
            .saturating_add(i64::from(now.millisecond()))
    }

    fn timestamp(&self) -> String {
        // local offset is not available in every environment
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(TIMESTAMP_FORMAT)
            .unwrap_or_else(|_| now.to_string())
    }
}

/// Clock standing still, for tests and reproducible imports
#[derive(Debug, Clone)]
pub struct FixedClock {
    pub millis: i64,
    pub timestamp: String,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        FixedClock {
            millis,
            timestamp: format!("@{millis}"),
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }

    fn timestamp(&self) -> String {
        self.timestamp.clone()
    }
}
