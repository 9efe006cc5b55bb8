use crate::label::labeled_items;
use crate::{LabeledItem, RegistryConfig};
use psm_model::{last_segment, SolutionExt};
use psm_reducer::{pick_primary, LabelCollator, NoDataError, SetSpec};
use serde::Serialize;

/// The scalar attributes of a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    pub iri: String,
    pub name: Option<String>,
    pub federal_no: Option<String>,
    pub foreign_no: Option<String>,
    pub formulation: Option<String>,
    pub country: Option<Country>,
    /// The IRI of the permission holder.
    pub company: Option<String>,
}

impl ProductRecord {
    /// The local name of the product IRI, e.g. `W-7300`.
    pub fn id(&self) -> &str {
        last_segment(&self.iri)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Country {
    pub name: String,
    pub code: Option<String>,
}

/// A product that is registered as the same product under another number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SameProduct {
    pub iri: String,
    pub name: String,
    pub country_code: Option<String>,
    /// The name, suffixed with the country code for products from abroad.
    pub label: String,
}

impl SameProduct {
    pub fn id(&self) -> &str {
        last_segment(&self.iri)
    }
}

/// The part of a product profile that is read from the product query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductOverview {
    pub record: ProductRecord,
    pub types: Vec<LabeledItem>,
    pub same_products: Vec<SameProduct>,
}

/// Reduces the rows of the product query.
///
/// `subject` is the IRI that was queried. It stands in for the product IRI if the rows do not
/// bind it.
pub fn reduce_product<R: SolutionExt>(
    subject: &str,
    rows: &[R],
    config: &RegistryConfig,
    collator: &LabelCollator,
) -> Result<ProductOverview, NoDataError> {
    let primary = pick_primary(rows, &["productName", "federalNo"])?;
    let record = ProductRecord {
        iri: primary.owned_value("p").unwrap_or_else(|| subject.to_owned()),
        name: primary.owned_value("productName"),
        federal_no: primary.owned_value("federalNo"),
        foreign_no: primary.owned_value("foreignNo"),
        formulation: primary.owned_value("formLabel"),
        country: primary.owned_value("countryName").map(|name| Country {
            name,
            code: primary.owned_value("countryCode"),
        }),
        company: primary.owned_value("company"),
    };

    let types = SetSpec::new("producttype")
        .requiring(["producttypeLabel"])
        .collect(rows);

    let mut same_products = SetSpec::new("sameProduct")
        .requiring(["sameProductName"])
        .with_values(["sameCountryCode"])
        .collect(rows)
        .into_iter()
        .filter_map(|(iri, record)| {
            let name = record.owned("sameProductName")?;
            let country_code = record.owned("sameCountryCode");
            let label = match &country_code {
                Some(code) if config.home_country.as_ref() != Some(code) => {
                    format!("{name} ({code})")
                }
                _ => name.clone(),
            };
            Some(SameProduct {
                iri,
                name,
                country_code,
                label,
            })
        })
        .collect::<Vec<_>>();
    collator.sort_by_label(&mut same_products, |product| product.label.as_str());

    Ok(ProductOverview {
        record,
        types: labeled_items(&types, "producttypeLabel"),
        same_products,
    })
}
