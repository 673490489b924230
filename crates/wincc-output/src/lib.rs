//! Output generation for the assembled HMI tag table.
//!
//! - **XLSX**: single sheet with a bold header row and fitted column widths
//! - **CSV**: header row plus data rows

mod csv_writer;
mod xlsx_writer;

use std::path::Path;

use tracing::info;

use wincc_model::{ConversionError, HmiTable, Result};

pub use csv_writer::{render_csv, write_csv};
pub use xlsx_writer::{column_widths, write_xlsx};

/// Write `table` to `path`, choosing the format from the file extension.
pub fn write_hmi_table(table: &HmiTable, path: &Path, sheet_name: &str) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "csv" => write_csv(table, path)?,
        "xlsx" => write_xlsx(table, path, sheet_name)?,
        other => {
            return Err(ConversionError::output_write(
                path,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("unsupported output type {other:?} (expected csv or xlsx)"),
                ),
            ));
        }
    }
    info!(path = %path.display(), rows = table.len(), "saved HMI tags");
    Ok(())
}
