use psm_model::{strip_tel_scheme, SolutionExt};
use psm_reducer::{merge_first_bound, SetSpec};
use serde::Serialize;

/// The identifier kinds shown for a company, in display order.
pub const COMPANY_IDENTIFIERS: [&str; 3] = ["CompanyUID", "CompanyCHID", "CompanyEHRAID"];

const FIELDS: [&str; 7] = [
    "name",
    "streetAddress",
    "postalCode",
    "addressLocality",
    "telephone",
    "email",
    "fax",
];

/// The permission holder of a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Company {
    pub iri: String,
    pub name: Option<String>,
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
    pub locality: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub fax: Option<String>,
    /// `(kind, value)` pairs, see [COMPANY_IDENTIFIERS].
    pub identifiers: Vec<(String, String)>,
}

impl Company {
    /// Joins the present parts of the postal address.
    pub fn address(&self) -> Option<String> {
        let place = match (&self.postal_code, &self.locality) {
            (Some(code), Some(locality)) => Some(format!("{code} {locality}")),
            (code, locality) => code.clone().or_else(|| locality.clone()),
        };
        let parts = [self.street_address.clone(), place]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        (!parts.is_empty()).then(|| parts.join(", "))
    }

    pub fn identifier(&self, kind: &str) -> Option<&str> {
        self.identifiers
            .iter()
            .find(|(candidate, _)| candidate == kind)
            .map(|(_, value)| value.as_str())
    }
}

/// Reduces the rows of the company query. Returns [None] if the company is unknown.
pub fn reduce_company<R: SolutionExt>(iri: &str, rows: &[R]) -> Option<Company> {
    if rows.is_empty() {
        return None;
    }
    let record = merge_first_bound(rows, &FIELDS);
    let found = SetSpec::new("idName").requiring(["idValue"]).collect(rows);
    let identifiers = COMPANY_IDENTIFIERS
        .iter()
        .filter_map(|kind| {
            let value = found.get(*kind)?.owned("idValue")?;
            Some(((*kind).to_owned(), value))
        })
        .collect();

    Some(Company {
        iri: iri.to_owned(),
        name: record.owned("name"),
        street_address: record.owned("streetAddress"),
        postal_code: record.owned("postalCode"),
        locality: record.owned("addressLocality"),
        telephone: record.get("telephone").map(|t| strip_tel_scheme(t).to_owned()),
        email: record.owned("email"),
        fax: record.get("fax").map(|f| strip_tel_scheme(f).to_owned()),
        identifiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> Company {
        Company {
            iri: "https://agriculture.ld.admin.ch/plant-protection/company/1001".to_owned(),
            name: Some("Syngenta Agro AG".to_owned()),
            street_address: None,
            postal_code: None,
            locality: None,
            telephone: None,
            email: None,
            fax: None,
            identifiers: Vec::new(),
        }
    }

    #[test]
    fn address_skips_absent_parts() {
        assert_eq!(company().address(), None);

        let only_locality = Company {
            locality: Some("Basel".to_owned()),
            ..company()
        };
        assert_eq!(only_locality.address().as_deref(), Some("Basel"));

        let without_place = Company {
            street_address: Some("Rosentalstrasse 67".to_owned()),
            ..company()
        };
        assert_eq!(
            without_place.address().as_deref(),
            Some("Rosentalstrasse 67")
        );
    }
}
