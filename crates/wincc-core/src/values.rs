//! Placeholder values computed from tag records.
//!
//! The string shaping rules here mirror the ECS export: PLC number is the
//! first three characters of the PLC field, the DB field loses a trailing
//! `.0`, and interlock addresses lose their last two characters.

use wincc_model::{ConversionOptions, Result, TagRecord};

use crate::decimals::decimal_format;
use crate::expander::Placeholders;

/// Bindings for a point's own template rows.
pub fn point_placeholders(
    record: &TagRecord,
    parent_info: &str,
    options: &ConversionOptions,
) -> Result<Placeholders> {
    let decimals = decimal_format(&record.decimals).map_err(|err| err.for_tag(&record.designation))?;
    Ok(Placeholders::new()
        .with("tag_name", record.designation.as_str())
        .with("plc_num", plc_number(record.io.plc.as_deref()))
        .with("dbnum", db_number(record.io.db.as_deref()))
        .with("parent_info", parent_info)
        .with("description", record.default_text.as_str())
        .with("eu", engineering_unit(&record.unit, &options.unit_prefixes))
        .with("decimals", decimals)
        .with(
            "trend_tag_name",
            format!("{}{}", record.designation, options.trend_suffix),
        ))
}

/// Bindings for one interlock child of `parent`.
pub fn interlock_placeholders(parent: &TagRecord, child: &TagRecord) -> Placeholders {
    Placeholders::new()
        .with("tag_name", parent.designation.as_str())
        .with("interlock", interlock_name(&child.path))
        .with("plc_num", plc_number(parent.io.plc.as_deref()))
        .with("addr", truncate_address(child.io.address.as_deref()))
        .with("description", child.default_text.as_str())
}

/// First three characters of the PLC-bearing field.
pub fn plc_number(field: Option<&str>) -> String {
    field.unwrap_or_default().chars().take(3).collect()
}

/// DB-bearing field without a trailing `.0`.
pub fn db_number(field: Option<&str>) -> String {
    let field = field.unwrap_or_default();
    field.strip_suffix(".0").unwrap_or(field).to_string()
}

/// Address field with its last two characters removed.
///
/// Assumes the export renders the address as a number with a one-digit
/// fraction (`12.0`); any other shape loses its last two characters as well.
pub fn truncate_address(field: Option<&str>) -> String {
    let field = field.unwrap_or_default();
    let keep = field.chars().count().saturating_sub(2);
    field.chars().take(keep).collect()
}

/// Text after the last `:` of a colon-delimited path.
pub fn interlock_name(path: &str) -> &str {
    path.rsplit(':').next().unwrap_or(path)
}

/// Unit with namespace prefixes removed, led by a space when present.
pub fn engineering_unit(unit: &str, prefixes: &[String]) -> String {
    if unit.is_empty() {
        return String::new();
    }
    let stripped = prefixes
        .iter()
        .filter(|prefix| !prefix.is_empty())
        .fold(unit.to_string(), |acc, prefix| acc.replace(prefix.as_str(), ""));
    format!(" {stripped}")
}
