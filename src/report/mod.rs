//! Feature report generation.
//!
//! One pass over the embedded table produces two artifacts: a formatted
//! spreadsheet ([`workbook`]) and a markdown document with per-prototype
//! summaries ([`markdown`]). Grouping by prototype label is computed here at
//! render time; nothing is stored between runs.

mod markdown;
mod workbook;

pub use markdown::render_markdown;
pub use workbook::write_workbook;

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use thiserror::Error;

use crate::models::FeatureRecord;

/// File name of the generated spreadsheet.
pub const WORKBOOK_FILENAME: &str = "PARTNER_FEEDBACK_FEATURES.xlsx";

/// File name of the generated markdown report.
pub const MARKDOWN_FILENAME: &str = "PARTNER_FEEDBACK_FEATURES.md";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build spreadsheet: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

/// Paths of the files written by [`generate`].
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub workbook: PathBuf,
    pub markdown: PathBuf,
}

/// A prototype label together with the records filed under it.
///
/// `rows` pairs each record with its 1-based position in the full table, so
/// grouped views keep the original numbering.
#[derive(Debug)]
pub struct PrototypeGroup<'a> {
    pub label: &'a str,
    pub rows: Vec<(usize, &'a FeatureRecord)>,
}

/// Group records by prototype label, labels in first-seen order.
pub fn prototype_groups(records: &[FeatureRecord]) -> Vec<PrototypeGroup<'_>> {
    let mut groups: Vec<PrototypeGroup> = Vec::new();
    for (index, record) in records.iter().enumerate() {
        match groups.iter_mut().find(|g| g.label == record.prototype) {
            Some(group) => group.rows.push((index + 1, record)),
            None => groups.push(PrototypeGroup {
                label: &record.prototype,
                rows: vec![(index + 1, record)],
            }),
        }
    }
    groups
}

/// Per-label record counts, sorted descending by count.
///
/// The sort is stable, so labels with equal counts stay in first-seen order.
pub fn prototype_counts<'a>(groups: &[PrototypeGroup<'a>]) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&str, usize)> = groups
        .iter()
        .map(|group| (group.label, group.rows.len()))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Write both report files into `out_dir` and return their paths.
///
/// The timestamp is taken as a parameter so the markdown output is a pure
/// function of its inputs. Either write failing is fatal; there is no retry
/// and a partial write is not cleaned up.
pub fn generate<Tz: TimeZone>(
    records: &[FeatureRecord],
    out_dir: &Path,
    generated_at: DateTime<Tz>,
) -> Result<ReportPaths, ReportError>
where
    Tz::Offset: std::fmt::Display,
{
    let workbook_path = out_dir.join(WORKBOOK_FILENAME);
    let markdown_path = out_dir.join(MARKDOWN_FILENAME);

    write_workbook(records, &workbook_path)?;
    tracing::info!("Spreadsheet written to {}", workbook_path.display());

    let document = render_markdown(records, generated_at);
    std::fs::write(&markdown_path, document).map_err(|source| ReportError::Write {
        path: markdown_path.clone(),
        source,
    })?;
    tracing::info!("Markdown report written to {}", markdown_path.display());

    Ok(ReportPaths {
        workbook: workbook_path,
        markdown: markdown_path,
    })
}
