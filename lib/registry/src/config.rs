/// Holds the configuration of a [Registry](crate::Registry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// The language tag that labels are requested in, e.g. `de` or `fr`.
    pub language: String,
    /// The locale whose collation orders label lists.
    pub collation_locale: String,
    /// Same-products from this country are listed without a country suffix.
    pub home_country: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            language: "de".to_owned(),
            collation_locale: "de".to_owned(),
            home_country: Some("CH".to_owned()),
        }
    }
}

impl RegistryConfig {
    /// Returns whether the language can be placed into a query as a language tag.
    pub(crate) fn has_valid_language(&self) -> bool {
        !self.language.is_empty()
            && self
                .language
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    }
}
