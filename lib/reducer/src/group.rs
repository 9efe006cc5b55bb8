use crate::{KeyedSet, Record, SetSpec};
use indexmap::{IndexMap, IndexSet};
use psm_model::SolutionExt;
use serde::Serialize;

/// Groups keyed by the lexical value of the group key, in order of first occurrence.
pub type Grouped = IndexMap<String, GroupRecord>;

/// Describes how [group_by] buckets rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSpec {
    key: String,
    scalars: Vec<String>,
    sets: Vec<SetSpec>,
    notes: Option<String>,
}

impl GroupSpec {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            scalars: Vec::new(),
            sets: Vec::new(),
            notes: None,
        }
    }

    /// Adds fields that are read once, from the row that creates the group.
    #[must_use]
    pub fn with_scalars<I, S>(mut self, scalars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scalars.extend(scalars.into_iter().map(Into::into));
        self
    }

    /// Adds a nested set that is collected per group.
    #[must_use]
    pub fn with_set(mut self, set: SetSpec) -> Self {
        self.sets.push(set);
        self
    }

    /// Collects the distinct values of `field` per group.
    #[must_use]
    pub fn with_notes(mut self, field: impl Into<String>) -> Self {
        self.notes = Some(field.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// The accumulated state of one group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupRecord {
    key: String,
    scalars: Record,
    sets: IndexMap<String, KeyedSet>,
    notes: IndexSet<String>,
}

impl GroupRecord {
    fn new<R: SolutionExt>(key: &str, spec: &GroupSpec, row: &R) -> Self {
        Self {
            key: key.to_owned(),
            scalars: Record::capture(row, &spec.scalars),
            sets: spec
                .sets
                .iter()
                .map(|set| (set.name().to_owned(), KeyedSet::new()))
                .collect(),
            notes: IndexSet::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn scalars(&self) -> &Record {
        &self.scalars
    }

    pub fn scalar(&self, field: &str) -> Option<&str> {
        self.scalars.get(field)
    }

    /// Returns the nested set named `name`. Every set of the [GroupSpec] exists, possibly empty.
    pub fn set(&self, name: &str) -> Option<&KeyedSet> {
        self.sets.get(name)
    }

    pub fn notes(&self) -> &IndexSet<String> {
        &self.notes
    }
}

/// Buckets `rows` by the value of the spec's key field.
///
/// The first row of a group provides its scalars. Every row of a group is folded into the
/// group's nested sets and notes. Rows that do not bind the key are skipped.
pub fn group_by<R: SolutionExt>(rows: &[R], spec: &GroupSpec) -> Grouped {
    let mut groups = Grouped::new();
    for row in rows {
        let Some(key) = row.value(&spec.key) else {
            continue;
        };
        let group = groups
            .entry(key.to_owned())
            .or_insert_with(|| GroupRecord::new(key, spec, row));

        for set_spec in &spec.sets {
            if let Some(set) = group.sets.get_mut(set_spec.name()) {
                set_spec.fold(set, row);
            }
        }
        if let Some(note) = spec.notes.as_deref().and_then(|field| row.value(field)) {
            if !group.notes.contains(note) {
                group.notes.insert(note.to_owned());
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::row;

    fn indication_spec() -> GroupSpec {
        GroupSpec::new("ind")
            .with_scalars(["area"])
            .with_set(
                SetSpec::new("crop")
                    .named("crops")
                    .requiring(["cropLabel"]),
            )
            .with_notes("obligation")
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let rows = vec![
            row(&[("ind", "https://x/b")]),
            row(&[("ind", "https://x/a")]),
            row(&[("ind", "https://x/b")]),
            row(&[("ind", "https://x/c")]),
        ];
        let groups = group_by(&rows, &GroupSpec::new("ind"));
        assert_eq!(
            groups.keys().collect::<Vec<_>>(),
            vec!["https://x/b", "https://x/a", "https://x/c"]
        );
    }

    #[test]
    fn scalars_come_from_the_first_row() {
        let rows = vec![
            row(&[("ind", "https://x/1"), ("area", "Feldbau")]),
            row(&[("ind", "https://x/1"), ("area", "Gemüsebau")]),
        ];
        let groups = group_by(&rows, &indication_spec());
        assert_eq!(groups["https://x/1"].scalar("area"), Some("Feldbau"));
    }

    #[test]
    fn folds_nested_sets_and_notes() {
        let rows = vec![
            row(&[
                ("ind", "https://x/1"),
                ("crop", "https://x/crop/wheat"),
                ("cropLabel", "Weizen"),
                ("obligation", "Nur im Freiland"),
            ]),
            row(&[
                ("ind", "https://x/1"),
                ("crop", "https://x/crop/barley"),
                ("cropLabel", "Gerste"),
                ("obligation", "Nur im Freiland"),
            ]),
            row(&[
                ("ind", "https://x/1"),
                ("crop", "https://x/crop/wheat"),
                ("cropLabel", "Weizen"),
                ("obligation", "Maximal 1 Behandlung"),
            ]),
            row(&[("ind", "https://x/2")]),
        ];
        let groups = group_by(&rows, &indication_spec());

        let first = &groups["https://x/1"];
        let crops = first.set("crops").unwrap();
        assert_eq!(
            crops.values().map(|crop| crop.get("cropLabel")).collect::<Vec<_>>(),
            vec![Some("Weizen"), Some("Gerste")]
        );
        assert_eq!(
            first.notes().iter().collect::<Vec<_>>(),
            vec!["Nur im Freiland", "Maximal 1 Behandlung"]
        );

        let second = &groups["https://x/2"];
        assert!(second.set("crops").unwrap().is_empty());
        assert!(second.notes().is_empty());
    }

    #[test]
    fn skips_rows_without_group_key() {
        let rows = vec![row(&[("area", "Feldbau")])];
        assert!(group_by(&rows, &indication_spec()).is_empty());
    }
}
