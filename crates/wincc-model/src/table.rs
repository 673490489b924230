//! Tabular row containers shared by templates and output.

use std::path::PathBuf;

use crate::category::TemplateCategory;

/// Ordered rows over a fixed column set.
///
/// Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RowSet {
    /// Build a row set, padding or truncating rows to the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index).map(String::as_str)
    }
}

/// A reusable row blueprint with `$placeholder$` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub category: TemplateCategory,
    /// Document the template was read from, if any.
    pub source: Option<PathBuf>,
    pub rows: RowSet,
}

impl Template {
    pub fn new(category: TemplateCategory, rows: RowSet) -> Self {
        Self {
            category,
            source: None,
            rows,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// The assembled HMI tag table written to the output document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HmiTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl HmiTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append rows, aligning cells by column name.
    ///
    /// Columns not yet known are added; existing rows get an empty cell for them.
    pub fn append(&mut self, set: &RowSet) {
        let positions: Vec<usize> = set
            .columns
            .iter()
            .map(|column| self.ensure_column(column))
            .collect();
        let width = self.columns.len();
        for source in &set.rows {
            let mut row = vec![String::new(); width];
            for (cell, &position) in source.iter().zip(&positions) {
                row[position].clone_from(cell);
            }
            self.rows.push(row);
        }
    }

    /// Set `column` to `value` on every row, adding the column if absent.
    pub fn force_column(&mut self, column: &str, value: &str) {
        let position = self.ensure_column(column);
        for row in &mut self.rows {
            row[position] = value.to_string();
        }
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(index).map(String::as_str)
    }

    fn ensure_column(&mut self, column: &str) -> usize {
        if let Some(position) = self.columns.iter().position(|c| c == column) {
            return position;
        }
        self.columns.push(column.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.columns.len() - 1
    }
}
