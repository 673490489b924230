use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use csv::ReaderBuilder;
use tracing::debug;

use wincc_model::{CaseInsensitiveSet, ConversionError, Result};

/// Document kind, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Csv,
    Workbook,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Some(Self::Workbook),
            _ => None,
        }
    }
}

/// Header row plus text cells of the first sheet of a document.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SourceTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header_lookup(&self) -> CaseInsensitiveSet {
        CaseInsensitiveSet::new(&self.headers)
    }

    fn from_raw(raw_rows: Vec<Vec<String>>) -> Self {
        let mut raw_rows = raw_rows
            .into_iter()
            .filter(|row| row.iter().any(|value| !value.trim().is_empty()));
        let Some(header_row) = raw_rows.next() else {
            return Self::default();
        };
        let headers: Vec<String> = header_row.iter().map(|h| normalize_header(h)).collect();
        let rows = raw_rows
            .map(|record| {
                (0..headers.len())
                    .map(|idx| record.get(idx).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();
        Self { headers, rows }
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Read the first sheet of a CSV or workbook document.
pub fn read_table(path: &Path) -> Result<SourceTable> {
    if !path.exists() {
        return Err(ConversionError::input_read(path, "file not found"));
    }
    let format = DocumentFormat::from_path(path).ok_or_else(|| {
        ConversionError::input_read(path, "unsupported document type (expected csv or xlsx)")
    })?;
    let table = match format {
        DocumentFormat::Csv => read_csv(path)?,
        DocumentFormat::Workbook => read_workbook(path)?,
    };
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "read table"
    );
    Ok(table)
}

fn read_csv(path: &Path) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| ConversionError::input_read(path, error))?;
    let mut raw_rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| ConversionError::input_read(path, error))?;
        raw_rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(SourceTable::from_raw(raw_rows))
}

fn read_workbook(path: &Path) -> Result<SourceTable> {
    let mut workbook =
        open_workbook_auto(path).map_err(|error| ConversionError::input_read(path, error))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ConversionError::input_read(path, "workbook has no sheets"))?
        .map_err(|error| ConversionError::input_read(path, error))?;
    let raw_rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    Ok(SourceTable::from_raw(raw_rows))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        Data::Float(value) => format_float(*value),
        Data::Int(value) => format!("{value}.0"),
        Data::Bool(value) => if *value { "True" } else { "False" }.to_string(),
        other => other.to_string(),
    }
}

/// Render a workbook number the way the ECS export tooling does.
///
/// Integral values keep a `.0` suffix (`12.0`); the DB-number strip and
/// address truncation downstream depend on it.
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
