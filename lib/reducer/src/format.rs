use serde::Serialize;

/// Rendered in place of a value that is absent.
pub const NO_DATA: &str = "\u{2014}";

const RANGE_SEPARATOR: char = '\u{2013}';

/// An amount given either as a single value or as a range, with an optional unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RangeItem {
    pub value: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub unit: Option<String>,
}

impl RangeItem {
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn between(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: Some(min.into()),
            max: Some(max.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Returns whether neither a value nor a bound is present.
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.min.is_none() && self.max.is_none()
    }
}

/// Formats an amount for display.
///
/// A value wins over bounds. Two different bounds render as a range, a single or repeated bound
/// renders as that bound. Without any amount the result is [NO_DATA]; the unit alone is never
/// rendered.
pub fn format_range(item: &RangeItem) -> String {
    let amount = match (&item.value, &item.min, &item.max) {
        (Some(value), _, _) => value.clone(),
        (None, Some(min), Some(max)) if min != max => format!("{min}{RANGE_SEPARATOR}{max}"),
        (None, Some(bound), _) | (None, None, Some(bound)) => bound.clone(),
        (None, None, None) => return NO_DATA.to_owned(),
    };
    let unit = item.unit.as_deref().unwrap_or_default();
    format!("{amount} {unit}").trim().to_owned()
}

/// Formats a numeric literal with a fixed number of fractional digits.
///
/// Returns [None] for absent or non-numeric input instead of a zero.
pub fn format_decimal(lexical: Option<&str>, places: usize) -> Option<String> {
    let number = lexical?.trim().parse::<f64>().ok()?;
    number.is_finite().then(|| format!("{number:.places$}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value() {
        assert_eq!(format_range(&RangeItem::value("5").with_unit("kg")), "5 kg");
    }

    #[test]
    fn range_of_two_bounds() {
        assert_eq!(
            format_range(&RangeItem::between("1", "3").with_unit("L")),
            "1\u{2013}3 L"
        );
    }

    #[test]
    fn equal_bounds_collapse() {
        assert_eq!(
            format_range(&RangeItem::between("2", "2").with_unit("L")),
            "2 L"
        );
    }

    #[test]
    fn single_bound() {
        let only_max = RangeItem {
            max: Some("0.5".to_owned()),
            unit: Some("%".to_owned()),
            ..RangeItem::default()
        };
        assert_eq!(format_range(&only_max), "0.5 %");

        let only_min = RangeItem {
            min: Some("4".to_owned()),
            ..RangeItem::default()
        };
        assert_eq!(format_range(&only_min), "4");
    }

    #[test]
    fn value_wins_over_bounds() {
        let item = RangeItem {
            value: Some("7".to_owned()),
            min: Some("1".to_owned()),
            max: Some("9".to_owned()),
            unit: None,
        };
        assert_eq!(format_range(&item), "7");
    }

    #[test]
    fn no_data() {
        assert_eq!(format_range(&RangeItem::default()), "\u{2014}");
        let only_unit = RangeItem {
            unit: Some("kg/ha".to_owned()),
            ..RangeItem::default()
        };
        assert_eq!(format_range(&only_unit), NO_DATA);
        assert!(only_unit.is_empty());
    }

    #[test]
    fn decimals() {
        assert_eq!(format_decimal(Some("12.3456"), 2).as_deref(), Some("12.35"));
        assert_eq!(format_decimal(Some("480"), 1).as_deref(), Some("480.0"));
        assert_eq!(format_decimal(Some("n/a"), 2), None);
        assert_eq!(format_decimal(None, 2), None);
    }
}
