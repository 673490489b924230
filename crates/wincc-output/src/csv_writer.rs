use std::io;
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use wincc_model::{ConversionError, HmiTable, Result};

pub fn write_csv(table: &HmiTable, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|err| ConversionError::output_write(path, csv_to_io(err)))?;
    write_records(&mut writer, table).map_err(|err| ConversionError::output_write(path, err))
}

/// Render `table` as CSV text.
pub fn render_csv(table: &HmiTable) -> io::Result<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    write_records(&mut writer, table)?;
    let bytes = writer
        .into_inner()
        .map_err(|err| io::Error::other(err.to_string()))?;
    String::from_utf8(bytes).map_err(io::Error::other)
}

fn write_records<W: io::Write>(writer: &mut csv::Writer<W>, table: &HmiTable) -> io::Result<()> {
    writer.write_record(&table.columns).map_err(csv_to_io)?;
    for row in &table.rows {
        writer.write_record(row).map_err(csv_to_io)?;
    }
    writer.flush()
}

fn csv_to_io(err: csv::Error) -> io::Error {
    io::Error::other(err)
}
