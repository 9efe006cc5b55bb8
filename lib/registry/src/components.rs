use psm_model::{chebi_id, last_segment, SolutionExt};
use psm_reducer::{format_decimal, SetSpec};
use serde::Serialize;

/// A substance portion of a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Component {
    pub portion: String,
    pub substance: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub grams_per_litre: Option<String>,
    pub percentage: Option<String>,
    pub chebi: Option<String>,
    pub iupac: Option<String>,
    pub smiles: Option<String>,
    pub formula: Option<String>,
}

impl Component {
    pub fn substance_id(&self) -> Option<&str> {
        self.substance.as_deref().map(last_segment)
    }

    /// The ChEBI identifier, e.g. `CHEBI:27744`.
    pub fn chebi_id(&self) -> Option<String> {
        self.chebi.as_deref().map(chebi_id)
    }

    /// The amount of the substance, e.g. `18.70 % / 200.0 g/L`.
    pub fn portion_label(&self) -> Option<String> {
        let parts = [
            format_decimal(self.percentage.as_deref(), 2).map(|pct| format!("{pct} %")),
            format_decimal(self.grams_per_litre.as_deref(), 1).map(|grams| format!("{grams} g/L")),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
        (!parts.is_empty()).then(|| parts.join(" / "))
    }
}

/// Reduces the rows of the components query to one component per portion, in query order.
pub fn reduce_components<R: SolutionExt>(rows: &[R]) -> Vec<Component> {
    SetSpec::new("portion")
        .with_values([
            "substance",
            "subName",
            "roleName",
            "grams",
            "pct",
            "chebiIRI",
            "iupac",
            "smiles",
            "formula",
        ])
        .collect(rows)
        .into_iter()
        .map(|(portion, record)| Component {
            portion,
            substance: record.owned("substance"),
            name: record.owned("subName"),
            role: record.owned("roleName"),
            grams_per_litre: record.owned("grams"),
            percentage: record.owned("pct"),
            chebi: record.owned("chebiIRI"),
            iupac: record.owned("iupac"),
            smiles: record.owned("smiles"),
            formula: record.owned("formula"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(percentage: Option<&str>, grams_per_litre: Option<&str>) -> Component {
        Component {
            portion: "https://agriculture.ld.admin.ch/plant-protection/portion/1".to_owned(),
            substance: None,
            name: None,
            role: None,
            grams_per_litre: grams_per_litre.map(ToOwned::to_owned),
            percentage: percentage.map(ToOwned::to_owned),
            chebi: None,
            iupac: None,
            smiles: None,
            formula: None,
        }
    }

    #[test]
    fn portion_label_shows_present_amounts() {
        assert_eq!(
            component(Some("18.7"), None).portion_label().as_deref(),
            Some("18.70 %")
        );
        assert_eq!(
            component(None, Some("200")).portion_label().as_deref(),
            Some("200.0 g/L")
        );
        assert_eq!(component(None, None).portion_label(), None);
    }
}
