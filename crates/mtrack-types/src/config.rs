use clap::Args;
use std::path::PathBuf;

pub const DEFAULT_SNAPSHOT_KEY: &str = "mediaItems";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Args)]
pub struct TrackerConfig {
    #[arg(
        long,
        env = "MTRACK_DATA_DIR",
        help = "Data directory (snapshot and preferences), default is system default like ~/.local/share/media-tracker",
        default_value_t = default_data_dir()
    )]
    data_dir: String,

    #[arg(
        long,
        env = "MTRACK_SNAPSHOT_KEY",
        help = "Name of the slot holding the list snapshot",
        default_value = DEFAULT_SNAPSHOT_KEY
    )]
    snapshot_key: String,
}

/// Directory is not created here, store creates it on first write
fn default_data_dir() -> String {
    dirs::data_dir()
        .map(|p| p.join("media-tracker"))
        .unwrap_or_else(|| PathBuf::from("media-tracker"))
        .to_string_lossy()
        .to_string()
}

impl TrackerConfig {
    pub fn new(data_dir: impl Into<String>) -> Self {
        TrackerConfig {
            data_dir: data_dir.into(),
            snapshot_key: DEFAULT_SNAPSHOT_KEY.to_string(),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    pub fn snapshot_key(&self) -> &str {
        &self.snapshot_key
    }

    pub fn theme_key(&self) -> &str {
        THEME_KEY
    }
}
