//! Tag document loading and column validation.

use std::path::Path;

use tracing::{info, warn};

use wincc_model::{ColumnMapping, ConversionError, IoAddress, Result, TagRecord};

use crate::table::{SourceTable, read_table};

/// Read the tag export at `path` into records, in document order.
///
/// Fails with `MissingColumn` when any mapped column is absent and with
/// `EmptyInput` when the document has no data rows.
pub fn load_tag_records(path: &Path, columns: &ColumnMapping) -> Result<Vec<TagRecord>> {
    let table = read_table(path)?;
    let records = records_from_table(path, &table, columns)?;
    info!(path = %path.display(), records = records.len(), "read ECS tags");
    Ok(records)
}

/// Extract records from an already loaded table. `path` is used for errors.
pub fn records_from_table(
    path: &Path,
    table: &SourceTable,
    columns: &ColumnMapping,
) -> Result<Vec<TagRecord>> {
    if table.headers.is_empty() || table.is_empty() {
        return Err(ConversionError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    let lookup = table.header_lookup();
    let missing: Vec<String> = columns
        .required()
        .iter()
        .filter(|name| !lookup.contains(name))
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        warn!(path = %path.display(), missing = ?missing, "tag document is missing columns");
        return Err(ConversionError::MissingColumn {
            path: path.to_path_buf(),
            columns: missing,
        });
    }
    let index = |name: &str| lookup.position(name).unwrap_or_default();
    let layout = Layout {
        designation: index(&columns.designation),
        point_type: index(&columns.point_type),
        plc: index(&columns.plc),
        address: index(&columns.address),
        simulation: index(&columns.simulation),
        db: index(&columns.db),
        functional_hierarchy: index(&columns.functional_hierarchy),
        default_text: index(&columns.default_text),
        unit: index(&columns.unit),
        decimals: index(&columns.decimals),
        path: index(&columns.path),
    };
    Ok(table.rows.iter().map(|row| layout.record(row)).collect())
}

/// Resolved column positions.
struct Layout {
    designation: usize,
    point_type: usize,
    plc: usize,
    address: usize,
    simulation: usize,
    db: usize,
    functional_hierarchy: usize,
    default_text: usize,
    unit: usize,
    decimals: usize,
    path: usize,
}

impl Layout {
    fn record(&self, row: &[String]) -> TagRecord {
        let text = |idx: usize| row.get(idx).cloned().unwrap_or_default();
        let optional = |idx: usize| row.get(idx).filter(|v| !v.trim().is_empty()).cloned();
        TagRecord {
            designation: text(self.designation),
            point_type: text(self.point_type),
            io: IoAddress {
                plc: optional(self.plc),
                address: optional(self.address),
                simulation: optional(self.simulation),
                db: optional(self.db),
            },
            functional_hierarchy: text(self.functional_hierarchy),
            default_text: text(self.default_text),
            unit: text(self.unit),
            decimals: text(self.decimals),
            path: text(self.path),
        }
    }
}
