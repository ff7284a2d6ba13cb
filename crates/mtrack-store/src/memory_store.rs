use std::{collections::HashMap, sync::Arc};

use bytes::Bytes;
use tokio::sync::Mutex;

use super::{
    SlotInfo, Store, ValidKey,
    error::{StoreError, StoreResult},
};

/// Process local store, content is lost when last clone is dropped
#[derive(Clone, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<ValidKey, Bytes>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    async fn load_data(&self, key: &ValidKey) -> StoreResult<Bytes> {
        self.slots
            .lock()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn store_data_overwrite(&self, key: &ValidKey, data: &[u8]) -> StoreResult<SlotInfo> {
        self.slots
            .lock()
            .await
            .insert(key.clone(), Bytes::copy_from_slice(data));
        Ok(SlotInfo::new(key, data))
    }
}
