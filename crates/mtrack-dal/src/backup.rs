//! Backup document - JSON array with all records, same shape as the persisted snapshot.

use garde::Validate as _;
use tracing::debug;

use crate::{
    collection::Collection,
    error::{Error, Result},
};

pub const BACKUP_FILE_NAME: &str = "media_tracker_backup.json";

pub fn export(collection: &Collection) -> Result<String> {
    serde_json::to_string(collection).map_err(Error::Serialization)
}

pub(crate) fn encode(collection: &Collection) -> Result<Vec<u8>> {
    serde_json::to_vec(collection).map_err(Error::Serialization)
}

/// Parses snapshot without any further checks
pub(crate) fn decode(data: &[u8]) -> Result<Collection> {
    let collection = serde_json::from_slice(data)?;
    Ok(collection)
}

/// Parses and validates backup document, it must be usable as a complete new collection
pub fn parse(document: &str) -> Result<Collection> {
    let collection: Collection = serde_json::from_str(document)?;
    for record in &collection {
        record.validate().map_err(|report| {
            debug!("Invalid record {} in backup: {report}", record.id);
            Error::InvalidBackup(format!("record {}: {report}", record.id))
        })?;
    }
    if let Some(id) = collection.duplicate_id() {
        return Err(Error::InvalidBackup(format!("duplicate id {id}")));
    }
    Ok(collection)
}
