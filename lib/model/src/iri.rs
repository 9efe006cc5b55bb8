/// Returns everything after the last `/` of an IRI, e.g. the product number of a product IRI.
pub fn last_segment(iri: &str) -> &str {
    iri.rsplit_once('/').map_or(iri, |(_, segment)| segment)
}

/// Turns a ChEBI IRI (`http://purl.obolibrary.org/obo/CHEBI_12345`) into its CURIE
/// (`CHEBI:12345`).
pub fn chebi_id(iri: &str) -> String {
    last_segment(iri).replacen('_', ":", 1)
}

/// Removes a leading `tel:` scheme from telephone and fax IRIs.
pub fn strip_tel_scheme(value: &str) -> &str {
    value.strip_prefix("tel:").unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment_of_iri() {
        assert_eq!(
            last_segment("https://agriculture.ld.admin.ch/plant-protection/W-7300"),
            "W-7300"
        );
        assert_eq!(last_segment("W-7300"), "W-7300");
    }

    #[test]
    fn chebi_curie() {
        assert_eq!(
            chebi_id("http://purl.obolibrary.org/obo/CHEBI_27744"),
            "CHEBI:27744"
        );
    }

    #[test]
    fn telephone_scheme() {
        assert_eq!(strip_tel_scheme("tel:+41587777777"), "+41587777777");
        assert_eq!(strip_tel_scheme("+41587777777"), "+41587777777");
    }
}
