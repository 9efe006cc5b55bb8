use psm_model::{last_segment, SolutionExt};
use psm_reducer::{pick_primary, LabelCollator, NoDataError, SetSpec};
use serde::Serialize;

/// All products of one product type, e.g. all herbicides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductTypeOverview {
    pub iri: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub products: Vec<ProductSummary>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductSummary {
    pub iri: String,
    pub name: String,
    pub federal_no: Option<String>,
    pub company: Option<String>,
    pub company_name: Option<String>,
}

impl ProductSummary {
    pub fn id(&self) -> &str {
        last_segment(&self.iri)
    }
}

/// Reduces the rows of the product type query. Products are sorted by name.
pub fn reduce_product_type<R: SolutionExt>(
    iri: &str,
    rows: &[R],
    collator: &LabelCollator,
) -> Result<ProductTypeOverview, NoDataError> {
    let primary = pick_primary(rows, &["typeName"])?;

    let mut products = SetSpec::new("product")
        .requiring(["name"])
        .with_values(["number", "company", "companyName"])
        .collect(rows)
        .into_iter()
        .filter_map(|(iri, record)| {
            Some(ProductSummary {
                iri,
                name: record.owned("name")?,
                federal_no: record.owned("number"),
                company: record.owned("company"),
                company_name: record.owned("companyName"),
            })
        })
        .collect::<Vec<_>>();
    collator.sort_by_label(&mut products, |product| product.name.as_str());

    Ok(ProductTypeOverview {
        iri: iri.to_owned(),
        name: primary.owned_value("typeName"),
        description: primary.owned_value("typeDescription"),
        products,
    })
}
