use clap::Args;
use mtrack_dal::preferences::{load_theme, save_theme, toggle_theme};
use mtrack_store::{FileStore, ValidKey};
use mtrack_types::{config::TrackerConfig, Theme};

use crate::commands::Executor;

#[derive(Args, Debug)]
pub struct ThemeCmd {
    #[command(flatten)]
    config: TrackerConfig,
    #[arg(long, help = "Switch between light and dark")]
    toggle: bool,
    #[arg(long, conflicts_with = "toggle", help = "Set theme - light or dark")]
    set: Option<Theme>,
}

impl Executor for ThemeCmd {
    async fn run(self) -> anyhow::Result<()> {
        let store = FileStore::new(self.config.data_dir());
        let key = ValidKey::new(self.config.theme_key())?;
        let theme = if self.toggle {
            toggle_theme(&store, &key).await?
        } else if let Some(theme) = self.set {
            save_theme(&store, &key, theme).await?;
            theme
        } else {
            load_theme(&store, &key).await?
        };
        println!("{} {theme}", theme.icon());
        Ok(())
    }
}
