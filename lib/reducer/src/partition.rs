use indexmap::IndexMap;
use psm_model::SolutionExt;
use serde::Serialize;

/// Names the variables read by [partition_by_class].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionSpec {
    pub class: String,
    pub code: String,
    pub label: String,
}

impl Default for PartitionSpec {
    fn default() -> Self {
        Self {
            class: "class".to_owned(),
            code: "code".to_owned(),
            label: "label".to_owned(),
        }
    }
}

/// A single row of a class partition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassEntry {
    pub code: Option<String>,
    pub label: String,
}

/// Rows partitioned by class, for tables that show each class once with a row span.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassPartition(IndexMap<String, Vec<ClassEntry>>);

impl ClassPartition {
    /// Classes in order of first appearance.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn entries(&self, class: &str) -> &[ClassEntry] {
        self.0.get(class).map(Vec::as_slice).unwrap_or_default()
    }

    /// The number of table rows the class cell spans.
    pub fn rowspan(&self, class: &str) -> usize {
        self.entries(class).len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ClassEntry])> {
        self.0
            .iter()
            .map(|(class, entries)| (class.as_str(), entries.as_slice()))
    }

    /// The number of classes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of rows over all classes.
    pub fn row_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

/// Partitions (class, code, label) rows by class.
///
/// Classes keep the order of their first appearance, rows keep their order within a class.
/// The code is optional; rows without class or label are skipped.
pub fn partition_by_class<R: SolutionExt>(rows: &[R], spec: &PartitionSpec) -> ClassPartition {
    let mut partition = IndexMap::<String, Vec<ClassEntry>>::new();
    for row in rows {
        let (Some(class), Some(label)) = (row.value(&spec.class), row.value(&spec.label)) else {
            continue;
        };
        partition
            .entry(class.to_owned())
            .or_default()
            .push(ClassEntry {
                code: row.owned_value(&spec.code),
                label: label.to_owned(),
            });
    }
    ClassPartition(partition)
}
