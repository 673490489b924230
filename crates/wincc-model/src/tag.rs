//! Source tag records as exported by the ECS engineering tool.

use serde::{Deserialize, Serialize};

/// I/O address sub-fields of a tag. Blank cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoAddress {
    /// PLC-number-bearing field (e.g. `994.DB12`).
    pub plc: Option<String>,
    /// Address-bearing field used by interlock rows.
    pub address: Option<String>,
    /// Simulation marker; `SIMNONE` marks unused slots.
    pub simulation: Option<String>,
    /// DB-number-bearing field.
    pub db: Option<String>,
}

/// One row of the source tag document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub designation: String,
    pub point_type: String,
    pub io: IoAddress,
    pub functional_hierarchy: String,
    pub default_text: String,
    pub unit: String,
    pub decimals: String,
    pub path: String,
}

impl TagRecord {
    pub fn new(designation: impl Into<String>) -> Self {
        Self {
            designation: designation.into(),
            ..Self::default()
        }
    }

    /// True when the simulation marker contains `sentinel`.
    pub fn is_simulated(&self, sentinel: &str) -> bool {
        self.io
            .simulation
            .as_deref()
            .is_some_and(|marker| marker.contains(sentinel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_marker_is_not_simulated() {
        let record = TagRecord::new("020PU044U01");
        assert!(!record.is_simulated("SIMNONE"));
    }

    #[test]
    fn marker_containing_sentinel_is_simulated() {
        let mut record = TagRecord::new("020PU044U01");
        record.io.simulation = Some("IO.SIMNONE".to_string());
        assert!(record.is_simulated("SIMNONE"));
    }
}
