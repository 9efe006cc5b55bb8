use crate::Record;
use indexmap::map::Entry;
use indexmap::IndexMap;
use psm_model::SolutionExt;

/// A deduplicated set of records, keyed by the lexical value of the key term (usually an IRI).
///
/// Iteration order is the order in which keys were first seen.
pub type KeyedSet = IndexMap<String, Record>;

/// Describes how to collect a [KeyedSet] from solution rows.
///
/// A row contributes to the set if it binds the key and all required fields. The first
/// contributing row for a key decides the values; later rows for the same key are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetSpec {
    name: String,
    key: String,
    values: Vec<String>,
    required: Vec<String>,
}

impl SetSpec {
    /// Creates a spec keyed by `key`. The set is named after its key.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            name: key.clone(),
            key,
            values: Vec::new(),
            required: Vec::new(),
        }
    }

    /// Names the set, e.g. to tell several sets of a [GroupSpec](crate::GroupSpec) apart.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds value fields that are captured for each key.
    #[must_use]
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.push_value(value.into());
        }
        self
    }

    /// Adds value fields that a row must bind to contribute to the set.
    #[must_use]
    pub fn requiring<I, S>(mut self, required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for field in required {
            let field = field.into();
            self.push_value(field.clone());
            if !self.required.contains(&field) {
                self.required.push(field);
            }
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Folds a single row into `set`.
    pub fn fold<R: SolutionExt + ?Sized>(&self, set: &mut KeyedSet, row: &R) {
        let Some(key) = row.value(&self.key) else {
            return;
        };
        if !self.required.iter().all(|field| row.value(field).is_some()) {
            return;
        }
        if let Entry::Vacant(entry) = set.entry(key.to_owned()) {
            entry.insert(Record::capture(row, &self.values));
        }
    }

    /// Collects the set from `rows`.
    pub fn collect<R: SolutionExt>(&self, rows: &[R]) -> KeyedSet {
        let mut set = KeyedSet::new();
        for row in rows {
            self.fold(&mut set, row);
        }
        set
    }

    fn push_value(&mut self, value: String) {
        if !self.values.contains(&value) {
            self.values.push(value);
        }
    }
}

/// Collects `value_fields` for each distinct value of `key_field`, keeping the first row seen
/// for each key.
pub fn dedupe_by_key<R: SolutionExt>(
    rows: &[R],
    key_field: &str,
    value_fields: &[&str],
) -> KeyedSet {
    SetSpec::new(key_field)
        .with_values(value_fields.iter().copied())
        .collect(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::row;
    use std::collections::HashSet;

    fn same_product_rows() -> Vec<psm_model::QuerySolution> {
        vec![
            row(&[("sameProduct", "https://x/W-1"), ("sameProductName", "Zeta")]),
            row(&[("sameProduct", "https://x/W-2"), ("sameProductName", "Alpha")]),
            row(&[("sameProduct", "https://x/W-1"), ("sameProductName", "Zeta (CH)")]),
            row(&[("sameProductName", "orphan")]),
        ]
    }

    #[test]
    fn first_seen_value_wins() {
        let set = dedupe_by_key(&same_product_rows(), "sameProduct", &["sameProductName"]);
        assert_eq!(
            set.keys().collect::<Vec<_>>(),
            vec!["https://x/W-1", "https://x/W-2"]
        );
        assert_eq!(set["https://x/W-1"].get("sameProductName"), Some("Zeta"));
    }

    #[test]
    fn is_idempotent() {
        let rows = same_product_rows();
        let first = dedupe_by_key(&rows, "sameProduct", &["sameProductName"]);
        let second = dedupe_by_key(&rows, "sameProduct", &["sameProductName"]);
        assert_eq!(first, second);
    }

    #[test]
    fn one_entry_per_distinct_key() {
        let rows = vec![
            row(&[("k", "a")]),
            row(&[("k", "b")]),
            row(&[("k", "a")]),
            row(&[("k", "c")]),
            row(&[("k", "b")]),
        ];
        let distinct = rows
            .iter()
            .filter_map(|row| row.value("k"))
            .collect::<HashSet<_>>();
        assert_eq!(dedupe_by_key(&rows, "k", &[]).len(), distinct.len());
    }

    #[test]
    fn required_fields_filter_rows() {
        let rows = vec![
            row(&[("type", "https://x/Herbicide")]),
            row(&[("type", "https://x/Herbicide"), ("typeLabel", "Herbizid")]),
        ];
        let set = SetSpec::new("type").requiring(["typeLabel"]).collect(&rows);
        assert_eq!(set.len(), 1);
        assert_eq!(set["https://x/Herbicide"].get("typeLabel"), Some("Herbizid"));

        let tolerant = SetSpec::new("type").with_values(["typeLabel"]).collect(&rows);
        assert_eq!(tolerant["https://x/Herbicide"].get("typeLabel"), None);
    }
}
