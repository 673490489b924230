use std::collections::HashMap;

/// Header name lookup that ignores ASCII case.
///
/// Maps each uppercased name to its position; the first occurrence wins.
#[derive(Debug, Clone)]
pub struct CaseInsensitiveSet {
    map: HashMap<String, usize>,
}

impl CaseInsensitiveSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for (index, name) in names.into_iter().enumerate() {
            let key = name.as_ref().trim().to_ascii_uppercase();
            map.entry(key).or_insert(index);
        }
        Self { map }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.map.get(&name.trim().to_ascii_uppercase()).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }
}
