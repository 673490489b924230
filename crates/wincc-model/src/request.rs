//! Conversion request: filter tokens plus document paths.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, Result};

/// Selection criteria applied to the tag catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilter {
    /// Literal, case-insensitive substring of `point_type`.
    pub point_type: String,
    /// Literal, case-insensitive substring of the PLC-bearing field.
    pub plc: String,
    /// Case-insensitive regular expression searched in `designation`.
    pub designation_pattern: String,
}

impl Default for TagFilter {
    fn default() -> Self {
        Self {
            point_type: "unimotor".to_string(),
            plc: "994".to_string(),
            designation_pattern: ".*".to_string(),
        }
    }
}

/// One conversion run. Immutable for the duration of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub filter: TagFilter,
}

impl ConversionRequest {
    /// Reject requests with blank paths or filter tokens.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (self.input.as_os_str().is_empty(), "input file path is required"),
            (self.output.as_os_str().is_empty(), "output file path is required"),
            (self.filter.point_type.trim().is_empty(), "point type is required"),
            (self.filter.plc.trim().is_empty(), "PLC number is required"),
            (
                self.filter.designation_pattern.is_empty(),
                "tag filter is required",
            ),
        ];
        match checks.iter().find(|(failed, _)| *failed) {
            Some((_, message)) => Err(ConversionError::InvalidRequest {
                message: (*message).to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ConversionRequest {
        ConversionRequest {
            input: "Points.xlsx".into(),
            output: "tags_wincc.xlsx".into(),
            filter: TagFilter::default(),
        }
    }

    #[test]
    fn default_request_is_valid() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn blank_plc_is_rejected() {
        let mut request = request();
        request.filter.plc = "  ".to_string();
        let error = request.validate().unwrap_err();
        assert!(error.to_string().contains("PLC number is required"));
    }

    #[test]
    fn blank_output_is_rejected() {
        let mut request = request();
        request.output = PathBuf::new();
        assert!(matches!(
            request.validate(),
            Err(ConversionError::InvalidRequest { .. })
        ));
    }
}
