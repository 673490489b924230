//! Point and template categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a source point, derived from its free-text point type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointCategory {
    Motor,
    Valve,
    Analog,
    Unknown,
}

impl PointCategory {
    /// Template used to expand points of this category.
    ///
    /// `Unknown` has no template.
    pub fn template(self) -> Option<TemplateCategory> {
        match self {
            Self::Motor => Some(TemplateCategory::Motor),
            Self::Valve => Some(TemplateCategory::Valve),
            Self::Analog => Some(TemplateCategory::Analog),
            Self::Unknown => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Motor => "motor",
            Self::Valve => "valve",
            Self::Analog => "analog",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PointCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One loadable row template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TemplateCategory {
    Motor,
    Valve,
    Analog,
    Interlock,
}

impl TemplateCategory {
    /// All categories in load order.
    pub const ALL: [TemplateCategory; 4] = [
        TemplateCategory::Motor,
        TemplateCategory::Valve,
        TemplateCategory::Analog,
        TemplateCategory::Interlock,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Motor => "motor",
            Self::Valve => "valve",
            Self::Analog => "analog",
            Self::Interlock => "interlock",
        }
    }

    /// Default document file stem, e.g. `wincc_motor_template`.
    pub fn file_stem(self) -> String {
        format!("wincc_{}_template", self.as_str())
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
