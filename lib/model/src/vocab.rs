//! IRIs of the vocabularies used by the plant protection registry.

pub mod psm {
    use oxrdf::{IriParseError, NamedNode};

    /// Namespace of products, companies, codes and the registry ontology.
    pub const NAMESPACE: &str = "https://agriculture.ld.admin.ch/plant-protection/";

    /// Builds the IRI of a registry resource from its local name (e.g., `W-7300`).
    ///
    /// Fails if the local name contains characters that are not allowed in an IRI. This keeps
    /// user input from breaking out of the `<...>` of a query.
    pub fn resource(local_name: &str) -> Result<NamedNode, IriParseError> {
        NamedNode::new(format!("{NAMESPACE}{local_name}"))
    }
}
