use crate::label::labeled_items;
use crate::LabeledItem;
use indexmap::IndexSet;
use psm_model::SolutionExt;
use psm_reducer::{format_range, group_by, GroupSpec, RangeItem, SetSpec};
use serde::Serialize;

/// A use of a product: in an application area, against pests, on crops.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Indication {
    pub iri: String,
    pub area: Option<String>,
    pub crops: Vec<LabeledItem>,
    pub pests: Vec<LabeledItem>,
    pub dosage: RangeItem,
    /// Numbers of the [Obligation]s that apply.
    pub obligations: Vec<usize>,
}

impl Indication {
    pub fn dosage_label(&self) -> String {
        format_range(&self.dosage)
    }
}

/// A notice that restricts an indication. Numbers start at 1 and are unique within a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Obligation {
    pub number: usize,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Indications {
    pub indications: Vec<Indication>,
    pub obligations: Vec<Obligation>,
}

fn spec() -> GroupSpec {
    GroupSpec::new("ind")
        .with_scalars(["area", "dosage", "dosageMin", "dosageMax", "dosageUnit"])
        .with_set(SetSpec::new("crop").named("crops").requiring(["cropLabel"]))
        .with_set(SetSpec::new("pest").named("pests").requiring(["pestLabel"]))
        .with_notes("oblLabel")
}

/// Reduces the rows of the indications query.
///
/// Obligation texts are numbered in the order they are first seen over all indications, so an
/// obligation shared by several indications keeps one number.
pub fn reduce_indications<R: SolutionExt>(rows: &[R]) -> Indications {
    let groups = group_by(rows, &spec());

    let mut texts = IndexSet::<String>::new();
    let indications = groups
        .into_values()
        .map(|group| {
            let obligations = group
                .notes()
                .iter()
                .map(|note| texts.insert_full(note.clone()).0 + 1)
                .collect();
            let scalars = group.scalars();
            Indication {
                iri: group.key().to_owned(),
                area: scalars.owned("area"),
                crops: group
                    .set("crops")
                    .map(|set| labeled_items(set, "cropLabel"))
                    .unwrap_or_default(),
                pests: group
                    .set("pests")
                    .map(|set| labeled_items(set, "pestLabel"))
                    .unwrap_or_default(),
                dosage: RangeItem {
                    value: scalars.owned("dosage"),
                    min: scalars.owned("dosageMin"),
                    max: scalars.owned("dosageMax"),
                    unit: scalars.owned("dosageUnit"),
                },
                obligations,
            }
        })
        .collect();

    let obligations = texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| Obligation {
            number: index + 1,
            text,
        })
        .collect();
    Indications {
        indications,
        obligations,
    }
}
