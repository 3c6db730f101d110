//! Fixed layout of the profit/loss template: sheet name, header labels,
//! presentation constants, and the per-row formula strings.

pub const SHEET_NAME: &str = "Profit-Loss Sheet";

/// Written into the current working directory, replacing any previous run.
pub const OUTPUT_FILE: &str = "CCTV_Service_Profit_Loss_Management.xlsx";

/// Column labels for row 1, in column order A through J.
pub const HEADERS: [&str; 10] = [
    "Date",
    "Client Name",
    "Service Type",
    "Income (INR)",
    "Cost of Materials (INR)",
    "Labor Cost (INR)",
    "Transport Cost (INR)",
    "Other Expenses (INR)",
    "Total Expense (INR)",
    "Profit (INR)",
];

/// Display width applied to every labeled column.
pub const COLUMN_WIDTH: f64 = 18.0;

/// Solid fill behind the header labels.
pub const HEADER_FILL: u32 = 0x4F81BD;

// Data rows in Excel's 1-based numbering. Row 1 is the header; rows 2..=101
// take one service job each, entered by hand in columns A-H.
pub const FIRST_DATA_ROW: u32 = 2;
pub const LAST_DATA_ROW: u32 = 101;

/// Total Expense for a row: materials + labor + transport + other (E-H).
pub fn total_expense_formula(row: u32) -> String {
    format!("=SUM(E{row}:H{row})")
}

/// Profit for a row: income (D) minus total expense (I).
pub fn profit_formula(row: u32) -> String {
    format!("=D{row}-I{row}")
}
