use indexmap::IndexMap;
use psm_model::SolutionExt;
use serde::Serialize;

/// Field values captured from one solution row.
///
/// Unbound variables are kept as [None] so that "absent" never turns into an empty string or a
/// zero further down the line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, Option<String>>);

impl Record {
    /// Captures `fields` from `row`, in the given order.
    pub fn capture<R, I, S>(row: &R, fields: I) -> Self
    where
        R: SolutionExt + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = fields
            .into_iter()
            .map(|field| {
                let field = field.as_ref();
                (field.to_owned(), row.owned_value(field))
            })
            .collect();
        Self(values)
    }

    /// Creates a record with all `fields` absent.
    pub fn unbound<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            fields
                .into_iter()
                .map(|field| (field.as_ref().to_owned(), None))
                .collect(),
        )
    }

    /// Returns the value of `field`, or [None] if the field is absent or was not captured.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Option::as_deref)
    }

    /// Returns an owned copy of the value of `field`.
    pub fn owned(&self, field: &str) -> Option<String> {
        self.get(field).map(ToOwned::to_owned)
    }

    /// Returns whether `field` was captured and is bound.
    pub fn is_bound(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Sets `field` only if it is not yet bound. Returns whether the value was taken.
    pub fn fill(&mut self, field: &str, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return false;
        };
        let slot = self.0.entry(field.to_owned()).or_default();
        if slot.is_some() {
            return false;
        }
        *slot = Some(value.to_owned());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_deref()))
    }
}
