#![allow(async_fn_in_trait)]
use std::{fmt::Display, str::FromStr};

use bytes::Bytes;
use error::{StoreError, StoreResult};
use sha2::{Digest, Sha256};

pub mod error;
pub mod file_store;
pub mod memory_store;
use tracing::debug;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

const MAX_KEY_LEN: usize = 255;
const KEY_INVALID_CHARS: &str = r#"/\:"#;

fn validate_key(key: &str) -> StoreResult<()> {
    if key.is_empty() || key.len() > MAX_KEY_LEN {
        return Err(StoreError::InvalidKey);
    }
    if key.starts_with('.')
        || key
            .chars()
            .any(|c| KEY_INVALID_CHARS.contains(c) || c.is_ascii_control())
    {
        return Err(StoreError::InvalidKey);
    }
    Ok(())
}

/// name of a slot, validated to be usable as single file name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidKey(String);

impl ValidKey {
    pub fn new(key: impl Into<String>) -> StoreResult<Self> {
        let key = key.into();
        validate_key(key.as_str()).inspect_err(|_| debug!("Invalid key: {key}"))?;
        Ok(ValidKey(key))
    }
}

impl FromStr for ValidKey {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidKey::new(s)
    }
}

impl AsRef<str> for ValidKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ValidKey> for String {
    fn from(value: ValidKey) -> Self {
        value.0
    }
}

impl Display for ValidKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug)]
pub struct SlotInfo {
    pub key: ValidKey,
    pub size: u64,
    /// SHA256 hash
    pub hash: String,
}

impl SlotInfo {
    fn new(key: &ValidKey, data: &[u8]) -> Self {
        let digest = Sha256::digest(data);
        SlotInfo {
            key: key.clone(),
            size: data.len() as u64,
            hash: base16ct::lower::encode_string(&digest),
        }
    }
}

/// Key-value store of named slots, each slot holds one complete value
pub trait Store {
    async fn load_data(&self, key: &ValidKey) -> StoreResult<Bytes>;
    /// Replaces whole slot content, readers see either old or new content, never a mix
    async fn store_data_overwrite(&self, key: &ValidKey, data: &[u8]) -> StoreResult<SlotInfo>;
}
