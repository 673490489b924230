use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use wincc_core::{ConversionPipeline, TagCatalog, TemplateStore};
use wincc_ingest::load_tag_records;
use wincc_model::{ConversionRequest, ConverterConfig};
use wincc_output::write_hmi_table;

use crate::progress::StageProgress;
use crate::types::RunResult;

/// Everything one run needs, resolved from flags and configuration.
#[derive(Debug, Clone)]
pub struct ConvertJob {
    pub request: ConversionRequest,
    pub config: ConverterConfig,
    /// Run the full conversion but skip writing the output document.
    pub dry_run: bool,
}

pub fn run_convert(job: &ConvertJob, progress: &StageProgress) -> Result<RunResult> {
    let request = &job.request;
    let convert_span = info_span!(
        "ecs2wincc",
        input = %request.input.display(),
        point_type = %request.filter.point_type,
        plc = %request.filter.plc,
    );
    let _convert_guard = convert_span.enter();
    let started = Instant::now();

    request.validate().context("invalid request")?;

    // =========================================================================
    // Stage 1: Load templates
    // =========================================================================
    progress.start("templates");
    let templates = {
        let _span = info_span!("templates").entered();
        let dir = &job.config.templates.dir;
        TemplateStore::load(&job.config.templates)
            .with_context(|| format!("open templates in {}", dir.display()))?
    };
    info!(templates = templates.len(), "templates ready");
    progress.advance();

    // =========================================================================
    // Stage 2: Load ECS tags
    // =========================================================================
    progress.start("tags");
    let catalog = {
        let _span = info_span!("catalog").entered();
        let records = load_tag_records(&request.input, &job.config.columns)
            .with_context(|| format!("open ECS tags {}", request.input.display()))?;
        TagCatalog::new(records)
    };
    info!(tags = catalog.len(), "catalog ready");
    progress.advance();

    // =========================================================================
    // Stage 3: Filter and expand
    // =========================================================================
    progress.start("convert");
    let mut pipeline = ConversionPipeline::new(job.config.conversion.clone())
        .with_templates(templates)
        .with_catalog(catalog);
    let outcome = pipeline
        .run(&request.filter)
        .context("convert ECS tags")?;
    progress.advance();

    // =========================================================================
    // Stage 4: Save HMI tags
    // =========================================================================
    progress.start("save");
    let written = if outcome.is_empty() {
        info!(path = %request.output.display(), "empty result, output not written");
        None
    } else if job.dry_run {
        info!(path = %request.output.display(), "dry run, output not written");
        None
    } else {
        let _span = info_span!("save", path = %request.output.display()).entered();
        write_hmi_table(
            &outcome.table,
            &request.output,
            &job.config.conversion.sheet_name,
        )
        .with_context(|| format!("save HMI tags {}", request.output.display()))?;
        Some(request.output.clone())
    };
    progress.advance();

    let duration = started.elapsed();
    info!(
        tags = outcome.tags.len(),
        rows = outcome.table.len(),
        duration_ms = duration.as_millis(),
        "conversion complete"
    );
    progress.finish(format!("{} tags", outcome.tags.len()));

    Ok(RunResult {
        request: request.clone(),
        outcome,
        written,
        dry_run: job.dry_run,
        duration,
    })
}
