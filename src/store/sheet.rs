//! Workbook codec for the "Projects" sheet.
//!
//! Writing goes through `rust_xlsxwriter`, reading through `calamine`.
//! Dates land as Excel date serials with a date number format so the file
//! opens cleanly in office tooling; the reader accepts serials, date cells
//! and ISO strings interchangeably.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::{Format, Workbook};

use crate::errors::{AppError, AppResult};
use crate::models::project::{ProjectRecord, COLUMNS};
use crate::utils::date::{date_to_excel_serial, excel_serial_to_date, parse_date};

pub const SHEET_NAME: &str = "Projects";

/// Write the full table, header row first, in fixed column order.
pub fn write_sheet(path: &Path, records: &[ProjectRecord]) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook
        .add_worksheet()
        .set_name(SHEET_NAME)
        .map_err(to_storage_error)?;

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet
            .write(0, col as u16, *header)
            .map_err(to_storage_error)?;
    }

    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet
            .write(row, 0, record.year as f64)
            .map_err(to_storage_error)?;
        worksheet
            .write(row, 1, record.code.as_str())
            .map_err(to_storage_error)?;
        worksheet
            .write(row, 2, record.name.as_str())
            .map_err(to_storage_error)?;
        worksheet
            .write(row, 3, record.location.as_str())
            .map_err(to_storage_error)?;
        worksheet
            .write_with_format(row, 4, date_to_excel_serial(&record.start), &date_format)
            .map_err(to_storage_error)?;
        worksheet
            .write_with_format(row, 5, date_to_excel_serial(&record.end), &date_format)
            .map_err(to_storage_error)?;
        worksheet
            .write(row, 6, record.team.as_str())
            .map_err(to_storage_error)?;
    }

    workbook.save(path).map_err(to_storage_error)?;
    Ok(())
}

/// Read the full table in on-disk order. An unreadable workbook or a sheet
/// whose header does not match the fixed columns is a fatal store error.
pub fn read_sheet(path: &Path) -> AppResult<Vec<ProjectRecord>> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(to_storage_error)?;
    let range = workbook.worksheet_range(SHEET_NAME).map_err(|e| {
        AppError::Storage(format!(
            "cannot read sheet '{SHEET_NAME}' in {}: {e}",
            path.display()
        ))
    })?;

    let mut rows = range.rows();

    match rows.next() {
        Some(header) => {
            let got: Vec<String> = header.iter().map(cell_to_string).collect();
            if got.len() < COLUMNS.len() || got[..COLUMNS.len()] != COLUMNS.map(String::from) {
                return Err(AppError::Storage(format!(
                    "unexpected header in {}: {:?}",
                    path.display(),
                    got
                )));
            }
        }
        None => return Ok(Vec::new()),
    }

    let mut records = Vec::new();
    for (i, row) in rows.enumerate() {
        // Row 0 is the header; data rows report 1-based positions in errors.
        records.push(row_to_record(row, i + 1)?);
    }
    Ok(records)
}

fn row_to_record(row: &[Data], position: usize) -> AppResult<ProjectRecord> {
    let cell = |col: usize| row.get(col).unwrap_or(&Data::Empty);

    Ok(ProjectRecord {
        year: cell_to_year(cell(0))?,
        code: cell_to_string(cell(1)),
        name: cell_to_string(cell(2)),
        location: cell_to_string(cell(3)),
        start: cell_to_date(cell(4))
            .ok_or_else(|| AppError::Storage(format!("row {position}: bad Project Start")))?,
        end: cell_to_date(cell(5))
            .ok_or_else(|| AppError::Storage(format!("row {position}: bad Project End")))?,
        team: cell_to_string(cell(6)),
    })
}

/// Missing string cells read as empty; everything downstream treats null
/// fields as empty strings.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_to_year(cell: &Data) -> AppResult<i32> {
    match cell {
        Data::Float(f) => Ok(*f as i32),
        Data::Int(i) => Ok(*i as i32),
        Data::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| AppError::Storage(format!("bad Year value: {s}"))),
        Data::Empty => Ok(0),
        other => Err(AppError::Storage(format!("bad Year value: {other:?}"))),
    }
}

fn to_storage_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Storage(e.to_string())
}

fn cell_to_date(cell: &Data) -> Option<chrono::NaiveDate> {
    match cell {
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64()),
        Data::Float(f) => excel_serial_to_date(*f),
        Data::Int(i) => excel_serial_to_date(*i as f64),
        Data::String(s) => parse_date(s),
        _ => None,
    }
}
