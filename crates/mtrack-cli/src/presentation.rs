use std::fmt::Write as _;

use mtrack_dal::{Dashboard, Group};
use mtrack_types::Record;

const STAR: &str = "⭐";
const LINK: &str = "🔗";
const BAR_WIDTH: usize = 20;

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0 * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn render_record(record: &Record) -> String {
    let mut out = String::new();
    write!(out, "  [{}] {}", record.id, record.title).ok();
    if record.rating > 0 {
        write!(out, " {}", STAR.repeat(record.rating as usize)).ok();
    }
    if let Some(ref link) = record.link {
        write!(out, " {LINK} {link}").ok();
    }
    write!(
        out,
        "\n      {} | Progress: {} / {}",
        record.status, record.current_progress, record.total_count
    )
    .ok();
    if let Some(percent) = record.progress_percent() {
        write!(out, " {} {:.0}%", progress_bar(percent), percent).ok();
    }
    if let Some(ref review) = record.review {
        write!(out, "\n      \"{review}\"").ok();
    }
    out
}

pub fn render_view(groups: &[Group<'_>]) -> String {
    let mut out = String::new();
    for group in groups {
        writeln!(out, "## {}", group.category).ok();
        for record in &group.records {
            writeln!(out, "{}", render_record(record)).ok();
        }
        out.push('\n');
    }
    out
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    format!(
        "Total: {}  Finished: {}  To do: {}",
        dashboard.total, dashboard.finished, dashboard.todo
    )
}
