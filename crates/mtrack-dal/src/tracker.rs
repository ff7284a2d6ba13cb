use garde::Validate as _;
use mtrack_store::{SlotInfo, Store, ValidKey, error::StoreError};
use mtrack_types::{Record, RecordFields};
use tracing::{debug, warn};

use crate::{
    backup,
    clock::{Clock, SystemClock},
    collection::Collection,
    confirm::{Confirm, DELETE_PROMPT, IMPORT_PROMPT},
    dashboard::Dashboard,
    error::{Error, Result},
    events::{self, EventReceiver, EventSender, TrackerEvent},
    query::{self, Group, Query},
};

/// What submitted fields are meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Creating,
    Editing(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressOutcome {
    Advanced(Record),
    /// Snapshot says progress is already at total, nothing changed
    AlreadyComplete,
}

/// Owns the collection and keeps its persisted snapshot in sync.
/// Every mutation is persisted immediately as a full snapshot.
pub struct Tracker<S, C = SystemClock> {
    store: S,
    key: ValidKey,
    clock: C,
    items: Collection,
    events: EventSender,
}

async fn read_snapshot(store: &impl Store, key: &ValidKey) -> Result<Collection> {
    let data = match store.load_data(key).await {
        Ok(data) => data,
        Err(StoreError::NotFound(_)) => {
            return Err(Error::EmptyCollection(format!("slot {key} not found")));
        }
        Err(e) => return Err(e.into()),
    };
    backup::decode(&data).map_err(|e| Error::EmptyCollection(e.to_string()))
}

impl<S: Store> Tracker<S> {
    pub async fn load(store: S, key: ValidKey) -> Result<Self> {
        Self::load_with_clock(store, key, SystemClock).await
    }
}

impl<S: Store, C: Clock> Tracker<S, C> {
    pub async fn load_with_clock(store: S, key: ValidKey, clock: C) -> Result<Self> {
        let items = match read_snapshot(&store, &key).await {
            Ok(items) => {
                debug!("Loaded {} records from {key}", items.len());
                items
            }
            Err(Error::EmptyCollection(reason)) => {
                warn!("Starting with empty collection: {reason}");
                Collection::new()
            }
            Err(e) => return Err(e),
        };
        Ok(Tracker {
            store,
            key,
            clock,
            items,
            events: events::channel(),
        })
    }

    pub fn items(&self) -> &Collection {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&Record> {
        self.items.get(id)
    }

    pub fn subscribe(&self) -> EventReceiver {
        self.events.subscribe()
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::from_records(&self.items)
    }

    pub fn view(&self, query: &Query) -> Vec<Group<'_>> {
        query::view(self.items.as_slice(), query)
    }

    /// Persists full snapshot and notifies subscribers
    pub async fn save(&mut self) -> Result<SlotInfo> {
        self.commit(self.items.clone()).await
    }

    /// Persists `items` and only then makes it the current collection,
    /// so failed write leaves collection as it was
    async fn commit(&mut self, items: Collection) -> Result<SlotInfo> {
        let data = backup::encode(&items)?;
        let info = self.store.store_data_overwrite(&self.key, &data).await?;
        debug!(
            "Saved {} records ({} bytes, sha256 {})",
            items.len(),
            info.size,
            info.hash
        );
        self.items = items;
        // no subscribers is fine
        self.events
            .send(TrackerEvent::Saved(self.dashboard()))
            .ok();
        Ok(info)
    }

    pub async fn create(&mut self, fields: RecordFields) -> Result<Record> {
        fields.validate()?;
        let id = self
            .items
            .next_id(self.clock.now_millis())
            .ok_or(Error::IdsExhausted)?;
        let record = fields.into_record(id, self.clock.timestamp());
        let mut items = self.items.clone();
        items.push(record.clone());
        self.commit(items).await?;
        debug!("Created record {id}");
        Ok(record)
    }

    /// Replaces all fields, except id and creation time
    pub async fn update(&mut self, id: i64, fields: RecordFields) -> Result<Record> {
        fields.validate()?;
        let mut items = self.items.clone();
        let record = items.get_mut(id).ok_or(Error::NotFound(id))?;
        let created_at = std::mem::take(&mut record.created_at);
        *record = fields.into_record(id, created_at);
        let record = record.clone();
        self.commit(items).await?;
        debug!("Updated record {id}");
        Ok(record)
    }

    pub async fn submit(&mut self, mode: EditMode, fields: RecordFields) -> Result<Record> {
        match mode {
            EditMode::Creating => self.create(fields).await,
            EditMode::Editing(id) => self.update(id, fields).await,
        }
    }

    /// Asks for confirmation before removing the record.
    /// Unknown id is reported as `NotFound` right away, without prompting.
    pub async fn delete(&mut self, id: i64, confirm: &mut impl Confirm) -> Result<Record> {
        if !self.items.contains(id) {
            return Err(Error::NotFound(id));
        }
        if !confirm.confirm(DELETE_PROMPT) {
            debug!("Delete of {id} not confirmed");
            return Err(Error::Cancelled);
        }
        let mut items = self.items.clone();
        let removed = items.remove(id).ok_or(Error::NotFound(id))?;
        self.commit(items).await?;
        debug!("Deleted record {id}");
        Ok(removed)
    }

    /// `current` and `total` are values the user saw when asking for increment,
    /// they guard against increments from stale display
    pub async fn increment_progress(
        &mut self,
        id: i64,
        current: u32,
        total: u32,
    ) -> Result<ProgressOutcome> {
        if total > 0 && current >= total {
            return Ok(ProgressOutcome::AlreadyComplete);
        }
        let mut items = self.items.clone();
        let record = items.get_mut(id).ok_or(Error::NotFound(id))?;
        record.current_progress = current.saturating_add(1);
        let record = record.clone();
        self.commit(items).await?;
        Ok(ProgressOutcome::Advanced(record))
    }

    pub fn export(&self) -> Result<String> {
        backup::export(&self.items)
    }

    /// Replaces whole collection with backup content, returns number of records restored
    pub async fn import(&mut self, document: &str, confirm: &mut impl Confirm) -> Result<usize> {
        let items = backup::parse(document)?;
        if !confirm.confirm(IMPORT_PROMPT) {
            debug!("Import not confirmed");
            return Err(Error::Cancelled);
        }
        let count = items.len();
        self.commit(items).await?;
        debug!("Imported {count} records");
        Ok(count)
    }
}
