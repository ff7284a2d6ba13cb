use std::{
    io::Write as _,
    path::{Path, PathBuf},
    sync::Arc,
};

use bytes::Bytes;
use tempfile::NamedTempFile;
use tokio::{fs, task::spawn_blocking};
use tracing::{debug, error};

use super::{
    SlotInfo, Store, ValidKey,
    error::{StoreError, StoreResult},
};

const SLOT_EXT: &str = "json";

fn not_found(key: &ValidKey) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StoreError::NotFound(key.to_string())
        } else {
            e.into()
        }
    }
}

/// Writes data to temporary file in the same directory and then persists it over the target
fn write_atomic(root: &Path, target: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut tmp = NamedTempFile::new_in(root)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

struct FileStoreInner {
    root: PathBuf,
    lock: tokio::sync::Mutex<()>,
}

/// One file per slot in the root directory
#[derive(Clone)]
pub struct FileStore {
    inner: Arc<FileStoreInner>,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(FileStoreInner {
                root: root.into(),
                lock: tokio::sync::Mutex::new(()),
            }),
        }
    }

    pub fn slot_path(&self, key: &ValidKey) -> PathBuf {
        self.inner
            .root
            .join(format!("{}.{SLOT_EXT}", key.as_ref()))
    }

    async fn ensure_root(&self) -> StoreResult<()> {
        let root = &self.inner.root;
        match fs::metadata(root).await {
            Ok(meta) => {
                if !meta.is_dir() {
                    error!("Store root is not a directory: {root:?}");
                    return Err(StoreError::InvalidRoot);
                }
            }
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    fs::create_dir_all(root).await?;
                } else {
                    error!("Failed to stat store root: {root:?}: {e}");
                    return Err(e.into());
                }
            }
        }
        Ok(())
    }
}

impl Store for FileStore {
    async fn load_data(&self, key: &ValidKey) -> StoreResult<Bytes> {
        let path = self.slot_path(key);
        let data = fs::read(&path).await.map_err(not_found(key))?;
        Ok(Bytes::from(data))
    }

    async fn store_data_overwrite(&self, key: &ValidKey, data: &[u8]) -> StoreResult<SlotInfo> {
        let _lock = self.inner.lock.lock().await;
        self.ensure_root().await?;
        let target = self.slot_path(key);
        spawn_blocking({
            let root = self.inner.root.clone();
            let target = target.clone();
            let data = data.to_vec();
            move || write_atomic(&root, &target, &data)
        })
        .await?
        .inspect_err(|e| error!("Failed to store slot {target:?}: {e}"))?;
        let info = SlotInfo::new(key, data);
        debug!("Stored {} bytes to {target:?}", info.size);
        Ok(info)
    }
}
