//! Template store: one immutable row template per category.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{info, warn};

use wincc_ingest::read_template;
use wincc_model::{ConversionError, Result, Template, TemplateCategory, TemplateFiles};

/// Loaded templates keyed by category. Never mutated after construction;
/// [`TemplateStore::get`] hands out copies.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: BTreeMap<TemplateCategory, Template>,
}

impl TemplateStore {
    /// Build a store from templates already in memory.
    ///
    /// Fails with `TemplateEmpty` for a template without rows. A later
    /// template replaces an earlier one of the same category.
    pub fn from_templates(templates: impl IntoIterator<Item = Template>) -> Result<Self> {
        let mut store = BTreeMap::new();
        for template in templates {
            if template.rows.is_empty() {
                return Err(ConversionError::TemplateEmpty {
                    category: template.category,
                    path: template
                        .source
                        .clone()
                        .unwrap_or_else(|| PathBuf::from(template.category.file_stem())),
                });
            }
            store.insert(template.category, template);
        }
        let store = Self { templates: store };
        store.warn_on_schema_mismatch();
        Ok(store)
    }

    /// Load every category from `files`, failing on the first missing or
    /// empty document.
    pub fn load(files: &TemplateFiles) -> Result<Self> {
        let mut templates = Vec::with_capacity(TemplateCategory::ALL.len());
        for category in TemplateCategory::ALL {
            let candidates = files.candidates(category);
            let Some(path) = candidates.iter().find(|path| path.is_file()) else {
                return Err(ConversionError::TemplateMissing {
                    category,
                    path: candidates.first().cloned(),
                });
            };
            templates.push(read_template(category, path)?);
        }
        let store = Self::from_templates(templates)?;
        info!(
            dir = %files.dir.display(),
            templates = store.len(),
            "opened templates"
        );
        Ok(store)
    }

    /// A private copy of the template for `category`.
    pub fn get(&self, category: TemplateCategory) -> Result<Template> {
        self.templates
            .get(&category)
            .cloned()
            .ok_or(ConversionError::TemplateMissing {
                category,
                path: None,
            })
    }

    pub fn contains(&self, category: TemplateCategory) -> bool {
        self.templates.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Categories whose column set differs from the first template's.
    pub fn schema_mismatches(&self) -> Vec<TemplateCategory> {
        let mut templates = self.templates.values();
        let Some(first) = templates.next() else {
            return Vec::new();
        };
        templates
            .filter(|template| template.rows.columns != first.rows.columns)
            .map(|template| template.category)
            .collect()
    }

    fn warn_on_schema_mismatch(&self) {
        for category in self.schema_mismatches() {
            warn!(
                category = %category,
                "template columns differ from the other templates; output columns are merged"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use wincc_model::RowSet;

    fn template(category: TemplateCategory, columns: &[&str], rows: usize) -> Template {
        let columns: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        let rows = (0..rows).map(|_| vec!["$tag_name$".to_string()]).collect();
        Template::new(category, RowSet::new(columns, rows))
    }

    #[test]
    fn get_returns_independent_copies() {
        let store = TemplateStore::from_templates([template(TemplateCategory::Motor, &["Name"], 2)])
            .unwrap();
        let mut copy = store.get(TemplateCategory::Motor).unwrap();
        copy.rows.rows.clear();
        assert_eq!(store.get(TemplateCategory::Motor).unwrap().row_count(), 2);
    }

    #[test]
    fn missing_category_is_reported() {
        let store = TemplateStore::from_templates([template(TemplateCategory::Motor, &["Name"], 1)])
            .unwrap();
        assert!(matches!(
            store.get(TemplateCategory::Interlock),
            Err(ConversionError::TemplateMissing {
                category: TemplateCategory::Interlock,
                path: None
            })
        ));
    }

    #[test]
    fn empty_template_is_rejected() {
        let result = TemplateStore::from_templates([template(TemplateCategory::Valve, &["Name"], 0)]);
        assert!(matches!(
            result,
            Err(ConversionError::TemplateEmpty {
                category: TemplateCategory::Valve,
                ..
            })
        ));
    }

    #[test]
    fn schema_mismatch_is_detected() {
        let store = TemplateStore::from_templates([
            template(TemplateCategory::Motor, &["Name"], 1),
            template(TemplateCategory::Interlock, &["Name", "Comment"], 1),
        ])
        .unwrap();
        assert_eq!(store.schema_mismatches(), vec![TemplateCategory::Interlock]);
    }

    #[test]
    fn load_fails_on_first_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("wincc_motor_template.csv"),
            "Name\n$tag_name$\n",
        )
        .unwrap();
        let files = TemplateFiles {
            dir: dir.path().to_path_buf(),
            ..TemplateFiles::default()
        };
        let error = TemplateStore::load(&files).unwrap_err();
        match error {
            ConversionError::TemplateMissing { category, path } => {
                assert_eq!(category, TemplateCategory::Valve);
                assert_eq!(
                    path,
                    Some(dir.path().join("wincc_valve_template.xlsx"))
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_reads_all_categories() {
        let dir = tempfile::tempdir().unwrap();
        for category in TemplateCategory::ALL {
            fs::write(
                dir.path().join(format!("{}.csv", category.file_stem())),
                "Name\n$tag_name$\n",
            )
            .unwrap();
        }
        let files = TemplateFiles {
            dir: dir.path().to_path_buf(),
            ..TemplateFiles::default()
        };
        let store = TemplateStore::load(&files).unwrap();
        assert_eq!(store.len(), 4);
        assert!(store.contains(TemplateCategory::Interlock));
    }

    #[test]
    fn load_rejects_header_only_document() {
        let dir = tempfile::tempdir().unwrap();
        for category in TemplateCategory::ALL {
            let body = if category == TemplateCategory::Analog {
                "Name\n"
            } else {
                "Name\n$tag_name$\n"
            };
            fs::write(
                dir.path().join(format!("{}.csv", category.file_stem())),
                body,
            )
            .unwrap();
        }
        let files = TemplateFiles {
            dir: dir.path().to_path_buf(),
            ..TemplateFiles::default()
        };
        assert!(matches!(
            TemplateStore::load(&files),
            Err(ConversionError::TemplateEmpty {
                category: TemplateCategory::Analog,
                ..
            })
        ));
    }
}
