//! In-memory index over the loaded tag records.
//!
//! Parent and child relations are found by case-insensitive substring
//! containment, not by exact keys. A hierarchy token contained in several
//! designations resolves to the first one in document order.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use wincc_model::{ConversionError, Result, TagFilter, TagRecord};

/// Designations of interlock, stop and start signals (`INT01`, `STP2`, `STR10`).
static INTERLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"int\d+|stp\d+|str\d+")
        .case_insensitive(true)
        .build()
        .expect("interlock pattern is valid")
});

#[derive(Debug, Clone)]
struct IndexedTag {
    record: TagRecord,
    designation: String,
    hierarchy: String,
}

/// Read-only catalog of tag records in source order.
#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    tags: Vec<IndexedTag>,
}

impl TagCatalog {
    pub fn new(records: Vec<TagRecord>) -> Self {
        let tags = records
            .into_iter()
            .map(|record| IndexedTag {
                designation: record.designation.to_lowercase(),
                hierarchy: record.functional_hierarchy.to_lowercase(),
                record,
            })
            .collect();
        Self { tags }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &TagRecord> {
        self.tags.iter().map(|tag| &tag.record)
    }

    /// `"{token} {default_text}"` of the first record whose designation
    /// contains `token`.
    pub fn resolve_parent_info(&self, token: &str) -> Result<String> {
        let needle = token.to_lowercase();
        match self.tags.iter().find(|tag| tag.designation.contains(&needle)) {
            Some(parent) => Ok(format!("{token} {}", parent.record.default_text)),
            None => {
                debug!(hierarchy = %token, "parent tag not found");
                Err(ConversionError::ParentNotFound {
                    tag: None,
                    hierarchy: token.to_string(),
                })
            }
        }
    }

    /// Interlock children of `designation`: records whose hierarchy contains
    /// it and whose own designation names an interlock/stop/start signal.
    pub fn find_interlock_children(&self, designation: &str) -> Vec<&TagRecord> {
        let needle = designation.to_lowercase();
        let children: Vec<&TagRecord> = self
            .tags
            .iter()
            .filter(|tag| tag.hierarchy.contains(&needle))
            .filter(|tag| INTERLOCK_PATTERN.is_match(&tag.record.designation))
            .map(|tag| &tag.record)
            .collect();
        debug!(tag = %designation, children = children.len(), "found interlock children");
        children
    }

    /// Records matching all three filter conditions, in source order.
    pub fn filter(&self, filter: &TagFilter) -> Result<Vec<&TagRecord>> {
        let pattern = RegexBuilder::new(&filter.designation_pattern)
            .case_insensitive(true)
            .build()
            .map_err(|err| ConversionError::InvalidFilter {
                pattern: filter.designation_pattern.clone(),
                message: err.to_string(),
            })?;
        let point_type = filter.point_type.to_lowercase();
        let plc = filter.plc.to_lowercase();
        let matched = self
            .tags
            .iter()
            .filter(|tag| tag.record.point_type.to_lowercase().contains(&point_type))
            .filter(|tag| {
                tag.record
                    .io
                    .plc
                    .as_deref()
                    .is_some_and(|field| field.to_lowercase().contains(&plc))
            })
            .filter(|tag| pattern.is_match(&tag.record.designation))
            .map(|tag| &tag.record)
            .collect();
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(designation: &str, hierarchy: &str, text: &str) -> TagRecord {
        TagRecord {
            designation: designation.to_string(),
            functional_hierarchy: hierarchy.to_string(),
            default_text: text.to_string(),
            ..TagRecord::default()
        }
    }

    fn point(designation: &str, point_type: &str, plc: Option<&str>) -> TagRecord {
        let mut record = tag(designation, "", "");
        record.point_type = point_type.to_string();
        record.io.plc = plc.map(str::to_string);
        record
    }

    #[test]
    fn parent_info_joins_token_and_text() {
        let catalog = TagCatalog::new(vec![tag("020PU044", "020", "Feed pump")]);
        assert_eq!(
            catalog.resolve_parent_info("020pu044").unwrap(),
            "020pu044 Feed pump"
        );
    }

    #[test]
    fn parent_lookup_takes_first_match() {
        let catalog = TagCatalog::new(vec![
            tag("020PU044A", "", "First"),
            tag("020PU044B", "", "Second"),
        ]);
        assert_eq!(
            catalog.resolve_parent_info("020PU044").unwrap(),
            "020PU044 First"
        );
    }

    #[test]
    fn parent_lookup_is_literal() {
        let catalog = TagCatalog::new(vec![tag("020PU044", "", "Pump")]);
        assert!(matches!(
            catalog.resolve_parent_info("020.U044"),
            Err(ConversionError::ParentNotFound { .. })
        ));
    }

    #[test]
    fn children_require_hierarchy_and_signal_name() {
        let catalog = TagCatalog::new(vec![
            tag("020PU044U01", "020PU044", "Motor"),
            tag("020PU044INT01", "ECS/020PU044U01", "Overload"),
            tag("020PU044STP2", "ecs/020pu044u01", "Emergency stop"),
            tag("020PU044STR", "ECS/020PU044U01", "Start without digits"),
            tag("020PU045INT01", "ECS/020PU045U01", "Other motor"),
        ]);
        let children = catalog.find_interlock_children("020PU044U01");
        let names: Vec<&str> = children.iter().map(|c| c.designation.as_str()).collect();
        assert_eq!(names, vec!["020PU044INT01", "020PU044STP2"]);
    }

    #[test]
    fn no_children_is_empty() {
        let catalog = TagCatalog::new(vec![tag("M1", "", "Motor")]);
        assert!(catalog.find_interlock_children("M1").is_empty());
    }

    #[test]
    fn filter_ands_all_conditions() {
        let catalog = TagCatalog::new(vec![
            point("020PU044U01", "Unimotor", Some("994.DB1")),
            point("020PU045U01", "Unimotor", Some("995.DB1")),
            point("020VA001", "Valve", Some("994.DB1")),
            point("020PU046U01", "UNIMOTOR", None),
            point("030PU001U01", "unimotor", Some("994.DB7")),
        ]);
        let filter = TagFilter {
            point_type: "unimotor".to_string(),
            plc: "994".to_string(),
            designation_pattern: "^020".to_string(),
        };
        let matched = catalog.filter(&filter).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].designation, "020PU044U01");
    }

    #[test]
    fn filter_pattern_is_case_insensitive() {
        let catalog = TagCatalog::new(vec![point("020PU044U01", "Unimotor", Some("994"))]);
        let filter = TagFilter {
            designation_pattern: "pu044".to_string(),
            ..TagFilter::default()
        };
        assert_eq!(catalog.filter(&filter).unwrap().len(), 1);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let catalog = TagCatalog::new(vec![]);
        let filter = TagFilter {
            designation_pattern: "(".to_string(),
            ..TagFilter::default()
        };
        assert!(matches!(
            catalog.filter(&filter),
            Err(ConversionError::InvalidFilter { .. })
        ));
    }
}
