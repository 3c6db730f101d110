mod builder;
mod layout;

pub use builder::{build_workbook, write_template};
pub use layout::{
    profit_formula, total_expense_formula, COLUMN_WIDTH, FIRST_DATA_ROW, HEADERS, HEADER_FILL,
    LAST_DATA_ROW, OUTPUT_FILE, SHEET_NAME,
};
