use psm_model::NamedNodeRef;
use std::fmt::Display;

const LANGUAGE: &str = "%LANGUAGE%";

/// The queries the registry views are built from.
///
/// The query texts live in `queries/*.sparql` and contain placeholders for the label language and
/// the IRI of the entity a view is about.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum RegistryQuery {
    Product,
    Company,
    Hazards,
    Components,
    Indications,
    ProductType,
    Substances,
}

impl RegistryQuery {
    pub fn list_queries() -> Vec<Self> {
        vec![
            RegistryQuery::Product,
            RegistryQuery::Company,
            RegistryQuery::Hazards,
            RegistryQuery::Components,
            RegistryQuery::Indications,
            RegistryQuery::ProductType,
            RegistryQuery::Substances,
        ]
    }

    fn template(&self) -> &'static str {
        match self {
            RegistryQuery::Product => include_str!("../queries/product.sparql"),
            RegistryQuery::Company => include_str!("../queries/company.sparql"),
            RegistryQuery::Hazards => include_str!("../queries/hazards.sparql"),
            RegistryQuery::Components => include_str!("../queries/components.sparql"),
            RegistryQuery::Indications => include_str!("../queries/indications.sparql"),
            RegistryQuery::ProductType => include_str!("../queries/product_type.sparql"),
            RegistryQuery::Substances => include_str!("../queries/substances.sparql"),
        }
    }

    /// The placeholder that is replaced by the subject IRI, if the query has a subject.
    fn subject_placeholder(&self) -> Option<&'static str> {
        match self {
            RegistryQuery::Product
            | RegistryQuery::Hazards
            | RegistryQuery::Components
            | RegistryQuery::Indications => Some("%PRODUCT%"),
            RegistryQuery::Company => Some("%COMPANY%"),
            RegistryQuery::ProductType => Some("%TYPE%"),
            RegistryQuery::Substances => None,
        }
    }

    /// Renders the query text.
    ///
    /// `language` must already be a valid language tag. Taking the subject as a [NamedNodeRef]
    /// guarantees that it cannot escape the `<...>` it is placed in.
    pub fn render(&self, language: &str, subject: Option<NamedNodeRef<'_>>) -> String {
        let query = self.template().replace(LANGUAGE, language);
        match (self.subject_placeholder(), subject) {
            (Some(placeholder), Some(subject)) => query.replace(placeholder, subject.as_str()),
            _ => query,
        }
    }
}

impl Display for RegistryQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
