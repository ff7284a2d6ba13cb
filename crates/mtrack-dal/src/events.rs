use crate::dashboard::Dashboard;

pub const EVENTS_CAPACITY: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackerEvent {
    /// Snapshot was persisted, carries fresh counters for the display
    Saved(Dashboard),
}

pub type EventSender = tokio::sync::broadcast::Sender<TrackerEvent>;
pub type EventReceiver = tokio::sync::broadcast::Receiver<TrackerEvent>;

pub fn channel() -> EventSender {
    let (sender, _) = tokio::sync::broadcast::channel(EVENTS_CAPACITY);
    sender
}
