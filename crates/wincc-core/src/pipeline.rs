//! Conversion pipeline with explicit stages.
//!
//! The pipeline moves through these stages in order:
//! 1. **Idle**: nothing loaded
//! 2. **TemplatesLoaded**: template store injected
//! 3. **CatalogLoaded**: tag catalog injected
//! 4. **Filtered**: catalog filtered and simulated slots dropped
//! 5. **Expanded**: every selected tag and its interlocks expanded
//! 6. **Finalized**: forced compatibility columns applied
//!
//! Any failure moves the pipeline to `Failed` and aborts the run; no
//! partial table is returned.

use std::fmt;
use std::time::Instant;

use tracing::{debug_span, error, info, info_span, warn};

use wincc_model::{
    ConversionError, ConversionOptions, HmiTable, PointCategory, Result, RowSet, TagFilter,
    TagRecord, TemplateCategory,
};

use crate::catalog::TagCatalog;
use crate::classifier::classify_point;
use crate::expander::expand;
use crate::templates::TemplateStore;
use crate::values::{interlock_placeholders, point_placeholders};

/// Stage of a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    TemplatesLoaded,
    CatalogLoaded,
    Filtered,
    Expanded,
    Finalized,
    Failed,
}

impl PipelineStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::TemplatesLoaded => "templates-loaded",
            Self::CatalogLoaded => "catalog-loaded",
            Self::Filtered => "filtered",
            Self::Expanded => "expanded",
            Self::Finalized => "finalized",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-tag contribution to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSummary {
    pub designation: String,
    pub category: PointCategory,
    /// Rows from the point template.
    pub base_rows: usize,
    /// Interlock children found for the tag.
    pub interlocks: usize,
    /// All rows contributed, interlock rows included.
    pub rows: usize,
}

/// Result of a successful run.
#[derive(Debug, Clone, Default)]
pub struct ConversionOutcome {
    pub table: HmiTable,
    /// Records matching the filter before simulated slots were dropped.
    pub matched: usize,
    /// Records dropped because their simulation marker holds the sentinel.
    pub skipped_simulated: usize,
    pub tags: Vec<TagSummary>,
}

impl ConversionOutcome {
    /// True when no tag matched; a valid, successful result.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn interlock_count(&self) -> usize {
        self.tags.iter().map(|tag| tag.interlocks).sum()
    }
}

/// Orchestrates filtering, per-tag expansion and table assembly over an
/// injected template store and tag catalog.
#[derive(Debug)]
pub struct ConversionPipeline {
    options: ConversionOptions,
    templates: TemplateStore,
    catalog: TagCatalog,
    stage: PipelineStage,
}

impl ConversionPipeline {
    pub fn new(options: ConversionOptions) -> Self {
        Self {
            options,
            templates: TemplateStore::default(),
            catalog: TagCatalog::default(),
            stage: PipelineStage::Idle,
        }
    }

    #[must_use]
    pub fn with_templates(mut self, templates: TemplateStore) -> Self {
        self.templates = templates;
        self.stage = PipelineStage::TemplatesLoaded;
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: TagCatalog) -> Self {
        self.catalog = catalog;
        self.stage = PipelineStage::CatalogLoaded;
        self
    }

    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    pub fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    /// Run filtering, expansion and finalization.
    ///
    /// Requires the pipeline to be in `CatalogLoaded`. An empty result is
    /// returned as a successful outcome and logged as a warning.
    pub fn run(&mut self, filter: &TagFilter) -> Result<ConversionOutcome> {
        if self.stage != PipelineStage::CatalogLoaded {
            return Err(ConversionError::InvalidRequest {
                message: format!(
                    "pipeline is {} but must be {} to run",
                    self.stage,
                    PipelineStage::CatalogLoaded
                ),
            });
        }
        let span = info_span!(
            "convert",
            point_type = %filter.point_type,
            plc = %filter.plc,
            filter = %filter.designation_pattern
        );
        let _guard = span.enter();
        let start = Instant::now();

        let (selected, matched) = match self.select(filter) {
            Ok(selection) => selection,
            Err(err) => return Err(self.fail(err, None)),
        };
        let skipped_simulated = matched - selected.len();
        self.stage = PipelineStage::Filtered;
        info!(
            stage = %self.stage,
            matched,
            skipped_simulated,
            selected = selected.len(),
            "filtered tags"
        );

        let expansion = TagExpansion {
            options: &self.options,
            templates: &self.templates,
            catalog: &self.catalog,
        };
        let mut table = HmiTable::default();
        let mut tags = Vec::with_capacity(selected.len());
        let mut failure = None;
        for record in &selected {
            match expansion.expand_tag(record) {
                Ok((sets, summary)) => {
                    for set in &sets {
                        table.append(set);
                    }
                    tags.push(summary);
                }
                Err(err) => {
                    failure = Some((err, record.designation.clone()));
                    break;
                }
            }
        }
        if let Some((err, designation)) = failure {
            return Err(self.fail(err, Some(&designation)));
        }
        self.stage = PipelineStage::Expanded;

        if !table.is_empty() {
            for column in &self.options.forced_columns {
                table.force_column(column, &self.options.forced_value);
            }
        }
        self.stage = PipelineStage::Finalized;

        if table.is_empty() {
            warn!(stage = %self.stage, "no tags matched the filter");
        } else {
            info!(
                stage = %self.stage,
                tags = tags.len(),
                rows = table.len(),
                duration_ms = start.elapsed().as_millis(),
                "conversion complete"
            );
        }
        Ok(ConversionOutcome {
            table,
            matched,
            skipped_simulated,
            tags,
        })
    }

    /// Filtered records without simulated slots, plus the pre-exclusion count.
    fn select(&self, filter: &TagFilter) -> Result<(Vec<TagRecord>, usize)> {
        let matched = self.catalog.filter(filter)?;
        let count = matched.len();
        let sentinel = self.options.simulation_sentinel.as_str();
        let kept = matched
            .into_iter()
            .filter(|record| sentinel.is_empty() || !record.is_simulated(sentinel))
            .cloned()
            .collect();
        Ok((kept, count))
    }

    fn fail(&mut self, err: ConversionError, tag: Option<&str>) -> ConversionError {
        let stage = self.stage;
        self.stage = PipelineStage::Failed;
        let err = match tag {
            Some(designation) => err.for_tag(designation),
            None => err,
        };
        error!(
            stage = %stage,
            tag = tag.unwrap_or("-"),
            error = %err,
            "conversion failed"
        );
        err
    }
}

/// Shared read-only state for expanding one tag at a time.
struct TagExpansion<'a> {
    options: &'a ConversionOptions,
    templates: &'a TemplateStore,
    catalog: &'a TagCatalog,
}

impl TagExpansion<'_> {
    /// Base rows followed by one row set per interlock child, in child order.
    fn expand_tag(&self, record: &TagRecord) -> Result<(Vec<RowSet>, TagSummary)> {
        let span = debug_span!("tag", tag = %record.designation);
        let _guard = span.enter();

        let category = classify_point(&record.point_type);
        let template_category = category.template().ok_or_else(|| {
            ConversionError::UnknownTemplateCategory {
                tag: record.designation.clone(),
                point_type: record.point_type.clone(),
            }
        })?;
        let parent_info = self
            .catalog
            .resolve_parent_info(&record.functional_hierarchy)?;
        let placeholders = point_placeholders(record, &parent_info, self.options)?;
        let base = expand(self.templates.get(template_category)?, &placeholders);
        let base_rows = base.len();

        let children = self.catalog.find_interlock_children(&record.designation);
        let mut sets = Vec::with_capacity(children.len() + 1);
        sets.push(base);
        for child in &children {
            let placeholders = interlock_placeholders(record, child);
            sets.push(expand(
                self.templates.get(TemplateCategory::Interlock)?,
                &placeholders,
            ));
        }
        let rows: usize = sets.iter().map(RowSet::len).sum();
        info!(
            tag = %record.designation,
            category = %category,
            rows,
            interlocks = children.len(),
            "expanded tag"
        );
        Ok((
            sets,
            TagSummary {
                designation: record.designation.clone(),
                category,
                base_rows,
                interlocks: children.len(),
                rows,
            },
        ))
    }
}
