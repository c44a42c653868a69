use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::project::{ProjectRecord, COLUMNS};
use crate::store::SHEET_NAME;
use crate::ui::messages::info;
use crate::utils::date::date_to_excel_serial;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Styled spreadsheet export. The sheet name, column order and cell values
/// mirror the store format exactly, so the output can be re-loaded by the
/// Tabular Store with identical field values; only the styling differs.
pub(crate) fn export_xlsx(records: &[ProjectRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook
        .add_worksheet()
        .set_name(SHEET_NAME)
        .map_err(to_export_error)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x4CAF50))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = COLUMNS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xF5F5F5);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, record) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        write_year(worksheet, row, record.year, band)?;
        write_text(worksheet, row, 1, &record.code, band)?;
        write_text(worksheet, row, 2, &record.name, band)?;
        write_text(worksheet, row, 3, &record.location, band)?;
        write_date(worksheet, row, 4, date_to_excel_serial(&record.start), band)?;
        write_date(worksheet, row, 5, date_to_excel_serial(&record.end), band)?;
        write_text(worksheet, row, 6, &record.team, band)?;

        for (col, value) in record.to_row().iter().enumerate() {
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn banded(band: Color) -> Format {
    Format::new()
        .set_background_color(band)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_year(worksheet: &mut Worksheet, row: u32, year: i32, band: Color) -> AppResult<()> {
    let fmt = banded(band).set_align(FormatAlign::Right);
    worksheet
        .write_with_format(row, 0, year as f64, &fmt)
        .map_err(to_export_error)?;
    Ok(())
}

fn write_text(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    band: Color,
) -> AppResult<()> {
    worksheet
        .write_with_format(row, col, value, &banded(band))
        .map_err(to_export_error)?;
    Ok(())
}

fn write_date(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    serial: f64,
    band: Color,
) -> AppResult<()> {
    let fmt = banded(band).set_num_format("yyyy-mm-dd");
    worksheet
        .write_with_format(row, col, serial, &fmt)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
