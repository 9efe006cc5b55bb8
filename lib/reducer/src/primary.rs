use crate::{NoDataError, Record};
use psm_model::SolutionExt;

/// Picks the row that carries the scalar attributes of the primary entity.
///
/// Returns the first row binding all of `required`, or the first row if no row binds all of
/// them. Optional joins fan the primary entity out into several rows, and only some of them may
/// carry every required attribute.
pub fn pick_primary<'rows, R: SolutionExt>(
    rows: &'rows [R],
    required: &[&str],
) -> Result<&'rows R, NoDataError> {
    rows.iter()
        .find(|row| row.binds_all(required))
        .or_else(|| rows.first())
        .ok_or_else(NoDataError::new)
}

/// Merges `fields` across rows that describe the same entity.
///
/// Each field takes its value from the first row that binds it. Fields bound by no row stay
/// absent.
pub fn merge_first_bound<R: SolutionExt>(rows: &[R], fields: &[&str]) -> Record {
    let mut record = Record::unbound(fields);
    for row in rows {
        for field in fields {
            record.fill(field, row.value(field));
        }
    }
    record
}
