use rust_xlsxwriter::{Format, Workbook};

use crate::error::AppResult;
use crate::models::ExpenseRecord;

#[cfg(test)]
#[path = "workbook_test.rs"]
mod workbook_test;

pub const SHEET_NAME: &str = "Expenses";

/// One column per record field, in field order.
pub const COLUMNS: [&str; 6] = ["id", "name", "amount", "date", "description", "category"];

/// Serialises `records` into an `.xlsx` file held in memory. Amounts and ids
/// are numeric cells; a record without an id leaves its cell empty.
pub fn build_workbook(records: &[ExpenseRecord]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    for (col, title) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        if let Some(id) = record.id {
            sheet.write_number(row, 0, id as f64)?;
        }
        sheet.write_string(row, 1, &record.name)?;
        sheet.write_number(row, 2, record.amount)?;
        sheet.write_string(row, 3, &record.date)?;
        sheet.write_string(row, 4, &record.description)?;
        sheet.write_string(row, 5, &record.category)?;
    }

    Ok(workbook.save_to_buffer()?)
}
