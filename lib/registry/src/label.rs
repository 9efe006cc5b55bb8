use psm_model::last_segment;
use psm_reducer::KeyedSet;
use serde::Serialize;

/// A linked entity with its display label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LabeledItem {
    pub iri: String,
    pub label: String,
}

impl LabeledItem {
    /// The local name of the IRI, used to address the entity in the registry.
    pub fn id(&self) -> &str {
        last_segment(&self.iri)
    }
}

/// Turns a set keyed by IRI into labeled items, keeping entries that carry a label.
pub(crate) fn labeled_items(set: &KeyedSet, label_field: &str) -> Vec<LabeledItem> {
    set.iter()
        .filter_map(|(iri, record)| {
            Some(LabeledItem {
                iri: iri.clone(),
                label: record.owned(label_field)?,
            })
        })
        .collect()
}
