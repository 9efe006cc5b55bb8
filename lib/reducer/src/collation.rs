use crate::CollationError;
use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

/// Compares labels with the collation rules of a locale.
///
/// Byte-wise comparison sorts `Zwiebel` before `Öl`; German collation does not.
pub struct LabelCollator {
    locale: Locale,
    collator: Collator,
}

impl LabelCollator {
    /// Creates a collator for a BCP-47 language tag such as `de` or `de-CH`.
    pub fn try_new(locale: &str) -> Result<Self, CollationError> {
        let locale = locale
            .parse::<Locale>()
            .map_err(|_| CollationError::InvalidLocale(locale.to_owned()))?;
        let collator = Collator::try_new(&(&locale).into(), CollatorOptions::new()).map_err(
            |error| CollationError::MissingData {
                locale: locale.to_string(),
                message: error.to_string(),
            },
        )?;
        Ok(Self { locale, collator })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }

    /// Sorts `items` by the label returned by `label`. The sort is stable.
    pub fn sort_by_label<T>(&self, items: &mut [T], label: impl Fn(&T) -> &str) {
        items.sort_by(|left, right| self.compare(label(left), label(right)));
    }
}

impl Debug for LabelCollator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelCollator")
            .field("locale", &self.locale.to_string())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_umlauts_with_their_base_letter() {
        let collator = LabelCollator::try_new("de").unwrap();
        let mut labels = vec!["Zwiebel", "\u{d6}l", "Apfel"];
        collator.sort_by_label(&mut labels, |label| *label);
        assert_eq!(labels, vec!["Apfel", "\u{d6}l", "Zwiebel"]);
    }

    #[test]
    fn ignores_case_at_primary_level() {
        let collator = LabelCollator::try_new("de-CH").unwrap();
        assert_eq!(collator.compare("banane", "Birne"), Ordering::Less);
    }

    #[test]
    fn rejects_invalid_locales() {
        assert!(matches!(
            LabelCollator::try_new("not a locale"),
            Err(CollationError::InvalidLocale(_))
        ));
    }
}
