//! Template document reading.

use std::path::Path;

use tracing::debug;

use wincc_model::{Result, RowSet, Template, TemplateCategory};

use crate::table::{SourceTable, read_table};

/// Read one template document. Emptiness is checked by the template store.
pub fn read_template(category: TemplateCategory, path: &Path) -> Result<Template> {
    let table = read_table(path)?;
    let template = template_from_table(category, table).with_source(path);
    debug!(
        category = %category,
        path = %path.display(),
        rows = template.row_count(),
        "read template"
    );
    Ok(template)
}

pub fn template_from_table(category: TemplateCategory, table: SourceTable) -> Template {
    Template::new(category, RowSet::new(table.headers, table.rows))
}
