//! Configuration options for ECS to WinCC conversion.
//!
//! All sections deserialize from a TOML file and fall back to the defaults
//! of the ECS export format when a key is omitted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::category::TemplateCategory;

/// Source column names of the tag export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnMapping {
    pub designation: String,
    pub point_type: String,
    /// PLC-number-bearing column.
    pub plc: String,
    /// Address-bearing column read for interlock children.
    pub address: String,
    /// Simulation-marker column.
    pub simulation: String,
    /// DB-number-bearing column.
    pub db: String,
    pub functional_hierarchy: String,
    pub default_text: String,
    pub unit: String,
    pub decimals: String,
    pub path: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            designation: "Designation".to_string(),
            point_type: "PointType".to_string(),
            plc: "IOType_0".to_string(),
            address: "IOType_3".to_string(),
            simulation: "IOType_5".to_string(),
            db: "IOType_6".to_string(),
            functional_hierarchy: "FunctionalHierarchy".to_string(),
            default_text: "DefaultText".to_string(),
            unit: "Unit".to_string(),
            decimals: "Decimals".to_string(),
            path: "Path".to_string(),
        }
    }
}

impl ColumnMapping {
    /// Every column the tag document must provide.
    pub fn required(&self) -> [&str; 11] {
        [
            self.designation.as_str(),
            self.point_type.as_str(),
            self.plc.as_str(),
            self.db.as_str(),
            self.simulation.as_str(),
            self.functional_hierarchy.as_str(),
            self.default_text.as_str(),
            self.unit.as_str(),
            self.decimals.as_str(),
            self.path.as_str(),
            self.address.as_str(),
        ]
    }
}

/// Where the row templates live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateFiles {
    pub dir: PathBuf,
    pub motor: Option<String>,
    pub valve: Option<String>,
    pub analog: Option<String>,
    pub interlock: Option<String>,
}

impl Default for TemplateFiles {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("resources/templates"),
            motor: None,
            valve: None,
            analog: None,
            interlock: None,
        }
    }
}

impl TemplateFiles {
    /// File extensions probed when no explicit file name is configured.
    pub const EXTENSIONS: [&'static str; 2] = ["xlsx", "csv"];

    /// Explicitly configured file name for a category.
    pub fn file_for(&self, category: TemplateCategory) -> Option<&str> {
        match category {
            TemplateCategory::Motor => self.motor.as_deref(),
            TemplateCategory::Valve => self.valve.as_deref(),
            TemplateCategory::Analog => self.analog.as_deref(),
            TemplateCategory::Interlock => self.interlock.as_deref(),
        }
        .filter(|name| !name.trim().is_empty())
    }

    /// Candidate paths for a category, in probe order.
    pub fn candidates(&self, category: TemplateCategory) -> Vec<PathBuf> {
        if let Some(name) = self.file_for(category) {
            return vec![self.dir.join(name)];
        }
        let stem = category.file_stem();
        Self::EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{stem}.{ext}")))
            .collect()
    }
}

/// Value-level conversion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionOptions {
    /// Records whose simulation marker contains this token are skipped.
    pub simulation_sentinel: String,
    /// Namespace prefixes removed from engineering units.
    pub unit_prefixes: Vec<String>,
    /// Appended to the designation to form `trend_tag_name`.
    pub trend_suffix: String,
    /// Columns overwritten with `forced_value` on every output row.
    pub forced_columns: Vec<String>,
    pub forced_value: String,
    /// Sheet name of the XLSX output.
    pub sheet_name: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            simulation_sentinel: "SIMNONE".to_string(),
            unit_prefixes: vec!["Acesys.Unit.".to_string(), "PointType.Unit.".to_string()],
            trend_suffix: ".MSW.VALUE".to_string(),
            forced_columns: vec![
                "Limit Upper 2 Type".to_string(),
                "Limit Lower 2 Type".to_string(),
            ],
            forced_value: "None".to_string(),
            sheet_name: "Hmi Tags".to_string(),
        }
    }
}

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    pub columns: ColumnMapping,
    pub templates: TemplateFiles,
    pub conversion: ConversionOptions,
}
