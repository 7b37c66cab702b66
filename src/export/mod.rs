//! Spreadsheet export of the expense list.

pub mod download;
pub mod workbook;

use crate::error::AppResult;
use crate::models::ExpenseRecord;

pub const FILE_NAME: &str = "Expenses.xlsx";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Writes every record to `Expenses.xlsx` and starts the download.
pub fn export_expenses(records: &[ExpenseRecord]) -> AppResult<()> {
    let bytes = workbook::build_workbook(records)?;
    download::download_bytes(&bytes, FILE_NAME, XLSX_MIME)?;
    log::info!("exported {} expense(s) to {}", records.len(), FILE_NAME);
    Ok(())
}
