use psm_model::{last_segment, SolutionExt};
use psm_reducer::{format_decimal, SetSpec};
use serde::Serialize;

/// One substance with the number of products it is part of.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubstanceRow {
    pub iri: String,
    pub name: String,
    pub iupac: Option<String>,
    /// The roles of the substance over all products, e.g. `Wirkstoff + Synergist`.
    pub roles: Option<String>,
    pub products: Option<u64>,
    pub average_percentage: Option<String>,
}

impl SubstanceRow {
    pub fn slug(&self) -> &str {
        last_segment(&self.iri)
    }
}

/// Reduces the rows of the substance aggregate query, keeping the query order.
pub fn reduce_substances<R: SolutionExt>(rows: &[R]) -> Vec<SubstanceRow> {
    SetSpec::new("substance")
        .requiring(["substanceName"])
        .with_values(["iupac", "roles", "products", "averagePercentage"])
        .collect(rows)
        .into_iter()
        .filter_map(|(iri, record)| {
            Some(SubstanceRow {
                iri,
                name: record.owned("substanceName")?,
                iupac: record.owned("iupac"),
                roles: record.owned("roles").filter(|roles| !roles.is_empty()),
                products: record.get("products").and_then(|count| count.parse().ok()),
                average_percentage: format_decimal(record.get("averagePercentage"), 2),
            })
        })
        .collect()
}
