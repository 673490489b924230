//! ECS to WinCC tag converter CLI.

use std::env;
use std::io::{self, IsTerminal};

use clap::{ColorChoice, FromArgMatches};
use tracing::error;
use tracing::level_filters::LevelFilter;
use wincc_cli::args::normalize_args;
use wincc_cli::commands::{ConvertJob, run_convert};
use wincc_cli::config::{
    CONFIG_ENV_VAR, TEMPLATES_ENV_VAR, apply_templates_dir, load_config, resolve_config_source,
};
use wincc_cli::logging::{LogConfig, LogFormat, init_logging};
use wincc_cli::progress::StageProgress;
use wincc_cli::types::RunResult;
use wincc_model::{ConversionRequest, TagFilter};

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, command};
use crate::summary::print_summary;

fn main() {
    let matches = command().get_matches_from(normalize_args(env::args_os()));
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|error| error.exit());
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(result) => {
            print_summary(&result);
            0
        }
        Err(error) => {
            error!(error = %format!("{error:#}"), "conversion aborted");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<RunResult> {
    let working_dir = env::current_dir()?;
    let source = resolve_config_source(
        cli.config.as_deref(),
        env::var_os(CONFIG_ENV_VAR),
        &working_dir,
    );
    let mut config = load_config(&source)?;
    apply_templates_dir(
        &mut config,
        cli.templates_dir.as_deref(),
        env::var_os(TEMPLATES_ENV_VAR),
    );
    let job = ConvertJob {
        request: ConversionRequest {
            input: cli.file.clone(),
            output: cli.output.clone(),
            filter: TagFilter {
                point_type: cli.point_type.token().to_string(),
                plc: cli.plc.clone(),
                designation_pattern: cli.filter.clone(),
            },
        },
        config,
        dry_run: cli.dry_run,
    };
    let progress = StageProgress::new();
    let result = run_convert(&job, &progress);
    if result.is_err() {
        progress.abandon();
    }
    result
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig::default()
        .with_format(format)
        .with_timestamps(cli.log_timestamps)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = cli.log_level.is_none();
    if let Some(level) = cli.log_level {
        config = config.with_level(match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        });
    }
    config
}
