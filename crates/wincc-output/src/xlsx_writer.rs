use std::io;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use wincc_model::{ConversionError, HmiTable, Result};

/// Character width of each column: longest cell or header plus two.
pub fn column_widths(table: &HmiTable) -> Vec<usize> {
    table
        .columns
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let longest = table
                .rows
                .iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            longest.max(header.chars().count()) + 2
        })
        .collect()
}

pub fn write_xlsx(table: &HmiTable, path: &Path, sheet_name: &str) -> Result<()> {
    build_workbook(table, sheet_name)
        .and_then(|mut workbook| workbook.save(path))
        .map_err(|err| ConversionError::output_write(path, xlsx_to_io(err)))
}

fn build_workbook(table: &HmiTable, sheet_name: &str) -> std::result::Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;
    for (col, name) in table.columns.iter().enumerate() {
        let col = to_col(col)?;
        worksheet.write_string_with_format(0, col, name, &header)?;
    }
    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = u32::try_from(row_idx + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, value) in row.iter().enumerate() {
            worksheet.write_string(row_num, to_col(col)?, value)?;
        }
    }
    for (col, width) in column_widths(table).into_iter().enumerate() {
        worksheet.set_column_width(to_col(col)?, width as f64)?;
    }
    Ok(workbook)
}

fn to_col(index: usize) -> std::result::Result<u16, XlsxError> {
    u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn xlsx_to_io(err: XlsxError) -> io::Error {
    match err {
        XlsxError::IoError(source) => source,
        other => io::Error::other(other.to_string()),
    }
}
