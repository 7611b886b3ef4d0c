//! Markdown rendering for the feature report.

use chrono::{DateTime, TimeZone};

use super::{prototype_counts, prototype_groups};
use crate::models::FeatureRecord;

const FULL_COLUMNS: [&str; 6] = [
    "#",
    "Feature",
    "Short Description",
    "Prototype",
    "Notes",
    "Suggested by",
];

const GROUP_COLUMNS: [&str; 4] = ["#", "Feature", "Short Description", "Suggested by"];

/// Render the complete markdown report.
///
/// Sections, in order: title, generation timestamp, total count, summary by
/// prototype (descending by count), the full table, one sub-table per
/// prototype label in first-seen order, and a provenance footer. Given the
/// same records and timestamp the output is byte-identical across runs.
///
/// The timestamp is stamped without a zone marker, so callers pick the zone;
/// the CLI passes local time.
pub fn render_markdown<Tz: TimeZone>(records: &[FeatureRecord], generated_at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let groups = prototype_groups(records);

    let mut out = String::new();
    out.push_str("# Partner Feedback Features Table\n\n");
    out.push_str(&format!(
        "**Generated**: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("**Total Features**: {}\n\n", records.len()));

    out.push_str("## Summary by Prototype\n\n");
    for (label, count) in prototype_counts(&groups) {
        out.push_str(&format!("- **{}**: {} features\n", label, count));
    }

    out.push_str("\n---\n\n## Complete Feature Table\n\n");
    let full_rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            vec![
                (index + 1).to_string(),
                record.feature.clone(),
                record.short_description.clone(),
                record.prototype.clone(),
                record.notes.clone(),
                record.suggested_by.clone(),
            ]
        })
        .collect();
    out.push_str(&render_table(&FULL_COLUMNS, &full_rows));

    out.push_str("\n---\n\n## Features by Prototype Category\n\n");
    for group in &groups {
        out.push_str(&format!("### {}\n\n", group.label));
        let rows: Vec<Vec<String>> = group
            .rows
            .iter()
            .map(|(number, record)| {
                vec![
                    number.to_string(),
                    record.feature.clone(),
                    record.short_description.clone(),
                    record.suggested_by.clone(),
                ]
            })
            .collect();
        out.push_str(&render_table(&GROUP_COLUMNS, &rows));
        out.push('\n');
    }

    out.push_str("---\n\n");
    out.push_str("*This document was auto-generated from partner feedback analysis.*\n");
    out.push_str("*Source: PARTNER_FEEDBACK_SUMMARY.md*\n");
    out
}

/// Render a pipe table with every column padded to its widest cell.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, headers.iter().copied(), &widths);
    out.push('|');
    for width in &widths {
        out.push_str(&format!("{:-<pad$}|", "", pad = width + 2));
    }
    out.push('\n');
    for row in rows {
        write_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.zip(widths) {
        out.push(' ');
        out.push_str(cell);
        for _ in 0..width.saturating_sub(cell.chars().count()) {
            out.push(' ');
        }
        out.push_str(" |");
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, Utc};

    fn sample_records() -> Vec<FeatureRecord> {
        vec![
            FeatureRecord::new("Alpha", "First feature", "Mirror", "n/a", "Jop"),
            FeatureRecord::new("Beta", "Second feature", "Forest", "n/a", "Thomas"),
            FeatureRecord::new("Gamma", "Third feature", "Forest", "n/a", "Moses"),
        ]
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn renders_padded_pipe_table() {
        let rows = vec![
            vec!["1".to_string(), "Alpha".to_string()],
            vec!["2".to_string(), "Beta".to_string()],
        ];
        let table = render_table(&["#", "Feature"], &rows);
        let expected = "\
| # | Feature |\n\
|---|---------|\n\
| 1 | Alpha   |\n\
| 2 | Beta    |\n";
        assert_eq!(table, expected);
    }

    #[test]
    fn summary_is_sorted_descending_by_count() {
        let document = render_markdown(&sample_records(), noon());
        let forest = document
            .find("- **Forest**: 2 features")
            .expect("Forest summary line missing");
        let mirror = document
            .find("- **Mirror**: 1 features")
            .expect("Mirror summary line missing");
        assert!(forest < mirror);
    }

    #[test]
    fn grouped_sections_keep_first_seen_order_and_numbering() {
        let document = render_markdown(&sample_records(), noon());
        let mirror = document.find("### Mirror").expect("Mirror section missing");
        let forest = document.find("### Forest").expect("Forest section missing");
        assert!(mirror < forest);

        // Gamma keeps its original table number inside the Forest section.
        let forest_section = &document[forest..];
        assert!(forest_section.contains("| 3 | Gamma"));
    }

    #[test]
    fn output_is_deterministic_for_a_fixed_timestamp() {
        let records = sample_records();
        assert_eq!(
            render_markdown(&records, noon()),
            render_markdown(&records, noon())
        );
    }

    #[test]
    fn only_the_timestamp_line_varies_between_runs() {
        let records = sample_records();
        let first = render_markdown(&records, noon());
        let second = render_markdown(&records, Utc.with_ymd_and_hms(2025, 6, 2, 8, 30, 0).unwrap());

        let differing: Vec<(&str, &str)> = first
            .lines()
            .zip(second.lines())
            .filter(|(a, b)| a != b)
            .collect();
        assert_eq!(differing.len(), 1);
        assert!(differing[0].0.starts_with("**Generated**: "));
    }

    #[test]
    fn timestamp_uses_second_precision() {
        let document = render_markdown(&sample_records(), noon());
        assert!(document.contains("**Generated**: 2025-06-01 12:00:00"));
    }

    #[test]
    fn accepts_local_timestamps() {
        let generated_at = Local
            .with_ymd_and_hms(2025, 6, 1, 9, 15, 0)
            .single()
            .expect("unambiguous local time");
        let document = render_markdown(&sample_records(), generated_at);
        assert!(document.contains("**Generated**: 2025-06-01 09:15:00"));
    }
}
