//! Spreadsheet output for the feature report.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, XlsxError};

use crate::models::FeatureRecord;

/// Column headers, in sheet order.
pub const COLUMNS: [&str; 6] = [
    "#",
    "Feature",
    "Short Description",
    "Prototype",
    "Notes",
    "Suggested by",
];

/// Character widths per column, matching the header order.
const COLUMN_WIDTHS: [f64; 6] = [5.0, 35.0, 60.0, 30.0, 60.0, 25.0];

/// Header fill: dark blue behind bold white text.
const HEADER_FILL: Color = Color::RGB(0x366092);

const HEADER_ROW_HEIGHT: f64 = 30.0;

/// Write the feature table to an `.xlsx` workbook at `path`.
///
/// One sheet named `Features`, a styled header row, then one top-aligned
/// wrapped row per record. Row count is therefore always the record count
/// plus one.
pub fn write_workbook(records: &[FeatureRecord], path: &Path) -> Result<(), XlsxError> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_font_size(12)
        .set_background_color(HEADER_FILL)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap();
    let body_format = Format::new().set_align(FormatAlign::Top).set_text_wrap();

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Features")?;
    sheet.set_row_height(0, HEADER_ROW_HEIGHT)?;

    for (col, (title, width)) in COLUMNS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        sheet.set_column_width(col, width)?;
        sheet.write_with_format(0, col, *title, &header_format)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        sheet.write_with_format(row, 0, (index + 1) as u32, &body_format)?;
        sheet.write_with_format(row, 1, record.feature.as_str(), &body_format)?;
        sheet.write_with_format(row, 2, record.short_description.as_str(), &body_format)?;
        sheet.write_with_format(row, 3, record.prototype.as_str(), &body_format)?;
        sheet.write_with_format(row, 4, record.notes.as_str(), &body_format)?;
        sheet.write_with_format(row, 5, record.suggested_by.as_str(), &body_format)?;
    }

    workbook.save(path)
}
