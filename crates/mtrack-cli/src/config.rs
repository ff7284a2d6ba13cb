use clap::{Parser, Subcommand};

use crate::commands::{
    add::AddCmd, delete::DeleteCmd, edit::EditCmd, export::ExportCmd, import::ImportCmd,
    list::ListCmd, progress::ProgressCmd, stats::StatsCmd, theme::ThemeCmd,
};

#[derive(Parser)]
#[command(
    version,
    about,
    long_about = "mtrack - keeps list of games, anime, manga and movies you play, watch or read."
)]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add new item to the list
    Add(AddCmd),
    /// Change existing item, fields not given stay as they are
    Edit(EditCmd),
    /// Delete item
    Delete(DeleteCmd),
    /// Increase progress of item by one
    Progress(ProgressCmd),
    /// Show list grouped by category
    List(ListCmd),
    /// Show counters
    Stats(StatsCmd),
    /// Write backup file with the whole list
    Export(ExportCmd),
    /// Replace the whole list with content of backup file
    Import(ImportCmd),
    /// Show or change color theme preference
    Theme(ThemeCmd),
}

impl crate::commands::Executor for Command {
    async fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Add(cmd) => cmd.run().await,
            Command::Edit(cmd) => cmd.run().await,
            Command::Delete(cmd) => cmd.run().await,
            Command::Progress(cmd) => cmd.run().await,
            Command::List(cmd) => cmd.run().await,
            Command::Stats(cmd) => cmd.run().await,
            Command::Export(cmd) => cmd.run().await,
            Command::Import(cmd) => cmd.run().await,
            Command::Theme(cmd) => cmd.run().await,
        }
    }
}
