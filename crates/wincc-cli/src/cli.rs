//! CLI argument definitions for the ECS to WinCC converter.

use std::path::PathBuf;

use clap::{Arg, ArgAction, CommandFactory, Parser, ValueEnum};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ecs2wincc",
    version,
    disable_version_flag = true,
    about = "Conversion of tag export from XLSX ECS to import format XLSX WinCC Prof",
    long_about = "Convert an ECS tag export into a WinCC Professional HMI tag import table.\n\n\
                  Tags are selected by point type, PLC number and a designation filter, \
                  expanded through the per-category templates, and written together with \
                  their interlock tags.",
    after_help = "The legacy spelling -ftr PATTERN is accepted for --filter."
)]
pub struct Cli {
    /// Name of the file with ECS tags.
    #[arg(value_name = "FILE", default_value = "Points.xlsx")]
    pub file: PathBuf,

    /// Name of the output file for WinCC.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "tags_wincc.xlsx"
    )]
    pub output: PathBuf,

    /// Type of ECS tags to convert.
    #[arg(
        short = 't',
        long = "point_type",
        value_enum,
        default_value = "unimotor"
    )]
    pub point_type: PointTypeArg,

    /// PLC number.
    #[arg(short = 'p', long = "plc", default_value = "994")]
    pub plc: String,

    /// Designation filter (regular expression).
    #[arg(
        short = 'f',
        long = "filter",
        value_name = "PATTERN",
        default_value = ".*",
        allow_hyphen_values = true
    )]
    pub filter: String,

    /// Configuration file (default: $ECS2WINCC_CONFIG or ./ecs2wincc.toml).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the WinCC templates.
    #[arg(long = "templates-dir", value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Convert and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (default: warn, or RUST_LOG when set).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Prefix log lines with a timestamp (json output always has one).
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Full command, with `-v` bound to `--version`.
pub fn command() -> clap::Command {
    Cli::command().arg(
        Arg::new("version")
            .short('v')
            .long("version")
            .action(ArgAction::Version)
            .help("Print version"),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PointTypeArg {
    Unimotor,
    Valve,
    Analog,
}

impl PointTypeArg {
    /// Token matched against the ECS `PointType` column.
    pub fn token(self) -> &'static str {
        match self {
            Self::Unimotor => "unimotor",
            Self::Valve => "valve",
            Self::Analog => "analog",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
