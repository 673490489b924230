use std::path::PathBuf;

use thiserror::Error;

use crate::category::TemplateCategory;

/// Errors raised while converting an ECS export. All of them abort the run.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("missing required columns in {path}: {}", .columns.join(", "))]
    MissingColumn { path: PathBuf, columns: Vec<String> },

    #[error("empty input document: {path}")]
    EmptyInput { path: PathBuf },

    #[error("failed to read {path}: {message}")]
    InputRead { path: PathBuf, message: String },

    #[error("template not found for {category}{}", .path.as_ref().map(|p| format!(" ({})", p.display())).unwrap_or_default())]
    TemplateMissing {
        category: TemplateCategory,
        path: Option<PathBuf>,
    },

    #[error("empty {category} template: {path}")]
    TemplateEmpty {
        category: TemplateCategory,
        path: PathBuf,
    },

    #[error("parent tag not found: {hierarchy}{}", .tag.as_ref().map(|t| format!(" (referenced by {t})")).unwrap_or_default())]
    ParentNotFound {
        tag: Option<String>,
        hierarchy: String,
    },

    #[error("invalid decimal format{}: {value:?}", .tag.as_ref().map(|t| format!(" for {t}")).unwrap_or_default())]
    InvalidFormat { tag: Option<String>, value: String },

    #[error("no template for point type {point_type:?} of tag {tag}")]
    UnknownTemplateCategory { tag: String, point_type: String },

    #[error("invalid tag filter {pattern:?}: {message}")]
    InvalidFilter { pattern: String, message: String },

    #[error("invalid conversion request: {message}")]
    InvalidRequest { message: String },

    #[error("can't write tags to {path}: {source}")]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConversionError {
    pub fn input_read(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::InputRead {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWriteFailure {
            path: path.into(),
            source,
        }
    }

    /// Attach the tag being processed to lookup and format errors.
    #[must_use]
    pub fn for_tag(self, designation: &str) -> Self {
        match self {
            Self::InvalidFormat { tag: None, value } => Self::InvalidFormat {
                tag: Some(designation.to_string()),
                value,
            },
            Self::ParentNotFound {
                tag: None,
                hierarchy,
            } => Self::ParentNotFound {
                tag: Some(designation.to_string()),
                hierarchy,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
