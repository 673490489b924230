pub mod category;
pub mod error;
pub mod lookup;
pub mod options;
pub mod request;
pub mod table;
pub mod tag;

pub use category::{PointCategory, TemplateCategory};
pub use error::{ConversionError, Result};
pub use lookup::CaseInsensitiveSet;
pub use options::{ColumnMapping, ConversionOptions, ConverterConfig, TemplateFiles};
pub use request::{ConversionRequest, TagFilter};
pub use table::{HmiTable, RowSet, Template};
pub use tag::{IoAddress, TagRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_categories_map_to_templates() {
        assert_eq!(
            PointCategory::Motor.template(),
            Some(TemplateCategory::Motor)
        );
        assert_eq!(
            PointCategory::Analog.template(),
            Some(TemplateCategory::Analog)
        );
        assert_eq!(PointCategory::Unknown.template(), None);
    }

    #[test]
    fn request_serializes() {
        let request = ConversionRequest {
            input: "Points.xlsx".into(),
            output: "tags_wincc.xlsx".into(),
            filter: TagFilter::default(),
        };
        let json = serde_json::to_string(&request).expect("serialize request");
        let round: ConversionRequest = serde_json::from_str(&json).expect("deserialize request");
        assert_eq!(round.filter.plc, "994");
        assert_eq!(round.filter.point_type, "unimotor");
    }
}
