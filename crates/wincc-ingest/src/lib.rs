//! Document ingestion for the ECS to WinCC converter.
//!
//! Reads CSV and workbook documents into [`SourceTable`]s and extracts
//! [`wincc_model::TagRecord`]s and templates from them.

pub mod table;
pub mod tags;
pub mod templates;

pub use table::{DocumentFormat, SourceTable, format_float, read_table};
pub use tags::{load_tag_records, records_from_table};
pub use templates::{read_template, template_from_table};
