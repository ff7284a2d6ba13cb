use mtrack_store::{Store, ValidKey, error::StoreError};
use mtrack_types::Theme;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Missing or unreadable preference means default theme
pub async fn load_theme(store: &impl Store, key: &ValidKey) -> Result<Theme> {
    match store.load_data(key).await {
        Ok(data) => Ok(serde_json::from_slice(&data).unwrap_or_else(|e| {
            warn!("Ignoring invalid theme preference: {e}");
            Theme::default()
        })),
        Err(StoreError::NotFound(_)) => {
            debug!("No theme preference stored");
            Ok(Theme::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn save_theme(store: &impl Store, key: &ValidKey, theme: Theme) -> Result<()> {
    let data = serde_json::to_vec(&theme).map_err(Error::Serialization)?;
    store.store_data_overwrite(key, &data).await?;
    Ok(())
}

pub async fn toggle_theme(store: &impl Store, key: &ValidKey) -> Result<Theme> {
    let theme = load_theme(store, key).await?.toggle();
    save_theme(store, key, theme).await?;
    Ok(theme)
}
