//! Literal `$name$` placeholder substitution over template rows.

use wincc_model::{RowSet, Template};

/// Ordered placeholder bindings. Substitution runs in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    entries: Vec<(String, String)>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` (without dollar signs) to `value`, replacing an earlier
    /// binding of the same name in place.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let token = format!("${name}$");
        let value = value.into();
        match self.entries.iter_mut().find(|(t, _)| *t == token) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((token, value)),
        }
    }

    /// Value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        let token = format!("${name}$");
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every bound token in `text`. Unbound tokens are left verbatim.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (token, value) in &self.entries {
            if out.contains(token.as_str()) {
                out = out.replace(token.as_str(), value);
            }
        }
        out
    }
}

/// Expand a template copy into concrete rows.
///
/// Every cell of every row is substituted; the column set is unchanged.
pub fn expand(template: Template, placeholders: &Placeholders) -> RowSet {
    let RowSet { columns, rows } = template.rows;
    let rows = rows
        .into_iter()
        .map(|row| row.iter().map(|cell| placeholders.apply(cell)).collect())
        .collect();
    RowSet { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wincc_model::TemplateCategory;

    use crate::templates::TemplateStore;

    fn template(cells: &[&str]) -> Template {
        let columns = (0..cells.len()).map(|i| format!("C{i}")).collect();
        let row = cells.iter().map(|c| c.to_string()).collect();
        Template::new(TemplateCategory::Motor, RowSet::new(columns, vec![row]))
    }

    #[test]
    fn replaces_every_occurrence() {
        let placeholders = Placeholders::new().with("tag_name", "M1");
        let rows = expand(
            template(&["$tag_name$.CMD", "$tag_name$/$tag_name$", "plain"]),
            &placeholders,
        );
        assert_eq!(rows.rows[0], vec!["M1.CMD", "M1/M1", "plain"]);
    }

    #[test]
    fn unknown_tokens_pass_through() {
        let placeholders = Placeholders::new().with("tag_name", "M1");
        let rows = expand(template(&["$tag_name$ $unknown$"]), &placeholders);
        assert_eq!(rows.rows[0][0], "M1 $unknown$");
    }

    #[test]
    fn values_are_inserted_literally() {
        let placeholders = Placeholders::new().with("description", r"Pump $1 \d+");
        let rows = expand(template(&["$description$"]), &placeholders);
        assert_eq!(rows.rows[0][0], r"Pump $1 \d+");
    }

    #[test]
    fn rebinding_keeps_position() {
        let placeholders = Placeholders::new()
            .with("a", "1")
            .with("b", "2")
            .with("a", "3");
        assert_eq!(placeholders.len(), 2);
        assert_eq!(placeholders.get("a"), Some("3"));
        assert_eq!(placeholders.get("c"), None);
    }

    proptest! {
        #[test]
        fn expansion_is_repeatable(value in "[A-Za-z0-9 .]{0,12}", literal in "[a-z ]{0,12}") {
            let cell = format!("{literal}$tag_name${literal}");
            let source = template(&[cell.as_str(), literal.as_str()]);
            let store = TemplateStore::from_templates([source.clone()]).expect("store");
            let placeholders = Placeholders::new().with("tag_name", value.clone());
            let first = expand(store.get(TemplateCategory::Motor).expect("motor"), &placeholders);
            let second = expand(store.get(TemplateCategory::Motor).expect("motor"), &placeholders);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(&store.get(TemplateCategory::Motor).expect("motor"), &source);
            prop_assert_eq!(&first.rows[0][0], &format!("{literal}{value}{literal}"));
            prop_assert_eq!(&first.rows[0][1], &literal);
        }

        #[test]
        fn unbound_tokens_survive(name in "[a-z]{1,10}") {
            prop_assume!(name != "tag_name");
            let cell = format!("${name}$");
            let placeholders = Placeholders::new().with("tag_name", "M1");
            let rows = expand(template(&[cell.as_str()]), &placeholders);
            prop_assert_eq!(&rows.rows[0][0], &cell);
        }
    }
}
