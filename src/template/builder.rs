use anyhow::{Context, Result};
use rust_xlsxwriter::{
    Color, DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Formula, Workbook,
};
use std::path::Path;

use crate::template::layout::{
    profit_formula, total_expense_formula, COLUMN_WIDTH, FIRST_DATA_ROW, HEADERS, HEADER_FILL,
    LAST_DATA_ROW, SHEET_NAME,
};

// Zero-based worksheet columns holding the derived values (I and J).
const TOTAL_EXPENSE_COL: u16 = 8;
const PROFIT_COL: u16 = 9;

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(HEADER_FILL)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::Black)
}

/// Build the template workbook in memory: one styled header row plus the
/// expense and profit formulas for each of the 100 data rows.
pub fn build_workbook() -> Result<Workbook> {
    let mut workbook = Workbook::new();

    // Fixed creation timestamp; repeated runs must emit identical bytes.
    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    let properties = DocProperties::new().set_creation_datetime(&created);
    workbook.set_properties(&properties);

    let worksheet = workbook.add_worksheet().set_name(SHEET_NAME)?;

    // Header row and column widths
    let header_format = header_format();
    for (col, header) in HEADERS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *header, &header_format)?;
        worksheet.set_column_width(col, COLUMN_WIDTH)?;
    }

    // Columns A-H stay blank for manual entry; only the two derived
    // columns carry formulas.
    for row in FIRST_DATA_ROW..=LAST_DATA_ROW {
        let row_idx = row - 1;
        let total_expense = Formula::new(total_expense_formula(row));
        let profit = Formula::new(profit_formula(row));

        worksheet.write_formula(row_idx, TOTAL_EXPENSE_COL, total_expense)?;
        worksheet.write_formula(row_idx, PROFIT_COL, profit)?;
    }

    Ok(workbook)
}

/// Build the workbook and save it to `path`, replacing any existing file.
pub fn write_template<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = build_workbook()?;

    workbook
        .save(path)
        .with_context(|| format!("Unable to save Excel file: {}", path.display()))?;

    Ok(())
}
