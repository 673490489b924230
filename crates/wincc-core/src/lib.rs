//! Tag resolution and template expansion engine.
//!
//! The [`pipeline::ConversionPipeline`] filters a [`catalog::TagCatalog`],
//! expands each selected tag and its interlock children through the
//! [`templates::TemplateStore`], and assembles the HMI tag table.

pub mod catalog;
pub mod classifier;
pub mod decimals;
pub mod expander;
pub mod pipeline;
pub mod templates;
pub mod values;

pub use catalog::TagCatalog;
pub use classifier::classify_point;
pub use decimals::decimal_format;
pub use expander::{Placeholders, expand};
pub use pipeline::{ConversionOutcome, ConversionPipeline, PipelineStage, TagSummary};
pub use templates::TemplateStore;
