//! Spreadsheet report on a single worksheet.
//!
//! Layout: output header on row 0, output rows from row 1, a bold caption
//! two rows below the last output row, then the failed header and rows.

use crate::error::Result;
use crate::report::{Report, FAILED_CAPTION, FAILED_COLUMNS, OUTPUT_COLUMNS};
use crate::table::Cell;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

pub const SHEET_NAME: &str = "Sheet1";

pub fn write(report: &Report, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    fill_sheet(report, sheet)?;
    workbook.save(path)?;
    Ok(())
}

fn fill_sheet(report: &Report, sheet: &mut Worksheet) -> Result<()> {
    let bold = Format::new().set_bold();

    let records = report.output_records();
    write_header(sheet, 0, &OUTPUT_COLUMNS, &bold)?;
    for (i, record) in records.iter().enumerate() {
        write_record(sheet, 1 + i as u32, record)?;
    }

    let caption_row = records.len() as u32 + 2;
    sheet.write_string_with_format(caption_row, 0, FAILED_CAPTION, &bold)?;
    write_header(sheet, caption_row + 1, &FAILED_COLUMNS, &bold)?;
    for (i, record) in report.failed_records().iter().enumerate() {
        write_record(sheet, caption_row + 2 + i as u32, record)?;
    }
    Ok(())
}

fn write_header(sheet: &mut Worksheet, row: u32, columns: &[&str], bold: &Format) -> Result<()> {
    for (col, name) in columns.iter().enumerate() {
        sheet.write_string_with_format(row, col as u16, *name, bold)?;
    }
    Ok(())
}

fn write_record(sheet: &mut Worksheet, row: u32, record: &[Cell]) -> Result<()> {
    for (col, cell) in record.iter().enumerate() {
        let col = col as u16;
        match cell {
            Cell::Empty => {}
            Cell::Text(s) => {
                sheet.write_string(row, col, s)?;
            }
            Cell::Number(n) => {
                sheet.write_number(row, col, *n)?;
            }
            Cell::Bool(b) => {
                sheet.write_boolean(row, col, *b)?;
            }
        }
    }
    Ok(())
}
