//! Human-readable reward log.
//!
//! Every run appends one box-drawn table of outcomes to the log file and
//! echoes the same text to stdout.

use crate::prelude::*;
use chrono::{SecondsFormat, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const FILE_ID_WIDTH: usize = 10;
pub const STATUS_WIDTH: usize = 10;
/// Length of a `0x`-prefixed transaction hash
pub const TX_HASH_WIDTH: usize = 66;
pub const MIN_MESSAGE_WIDTH: usize = 50;
const MESSAGE_PADDING: usize = 4;
/// Width reserved for an empty message
const EMPTY_MESSAGE_WIDTH: usize = "Successfully rewarded".len();
const PLACEHOLDER: &str = "-";

/// Reward Log
///
/// Append-only log file of reward outcomes
#[derive(Debug, Clone)]
pub struct RewardLog {
    path: PathBuf,
}

impl RewardLog {
    /// Opens the log, creating its directory if missing
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        debug!("Reward log at {}", path.display());

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a table of `outcomes` and echoes it to stdout
    pub fn append(&self, outcomes: &[Outcome]) -> Result<()> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let entry = render_table(outcomes, &timestamp);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(entry.as_bytes())?;
        info!("Appended {} outcomes to {}", outcomes.len(), self.path.display());

        println!("{entry}");
        Ok(())
    }
}

/// Width of the message column for `outcomes`
pub fn message_width(outcomes: &[Outcome]) -> usize {
    let longest = outcomes
        .iter()
        .map(|o| match o.message() {
            "" => EMPTY_MESSAGE_WIDTH,
            message => message.chars().count(),
        })
        .max()
        .unwrap_or(0);

    (longest + MESSAGE_PADDING).max(MIN_MESSAGE_WIDTH)
}

/// Renders `outcomes` as a fixed-width table headed by `timestamp`
pub fn render_table(outcomes: &[Outcome], timestamp: &str) -> String {
    let widths = [FILE_ID_WIDTH, message_width(outcomes), STATUS_WIDTH, TX_HASH_WIDTH];

    let mut lines = vec![
        format!("=== Rewarding Results ({timestamp}) ==="),
        rule(&widths, '┌', '┬', '┐'),
        row(&widths, ["File ID", "Message", "Status", "Transaction Hash"]),
        rule(&widths, '├', '┼', '┤'),
    ];
    lines.extend(outcomes.iter().map(|outcome| {
        let file_id = outcome.file_id().to_string();
        row(
            &widths,
            [
                file_id.as_str(),
                or_placeholder(outcome.message()),
                outcome.status().as_str(),
                or_placeholder(outcome.tx_hash()),
            ],
        )
    }));
    lines.push(rule(&widths, '└', '┴', '┘'));

    format!("\n{}\n\n", lines.join("\n"))
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() { PLACEHOLDER } else { value }
}

fn rule(widths: &[usize; 4], left: char, middle: char, right: char) -> String {
    let segments: Vec<_> = widths.iter().map(|w| "─".repeat(*w)).collect();
    format!("{left}{}{right}", segments.join(&middle.to_string()))
}

fn row(widths: &[usize; 4], cells: [&str; 4]) -> String {
    let cells: Vec<_> = widths
        .iter()
        .zip(cells)
        .map(|(width, cell)| format!(" {cell:<pad$} ", pad = width - 2))
        .collect();
    format!("│{}│", cells.join("│"))
}
