//! Reduces the flat solution rows of SPARQL `SELECT` queries into nested view models.
//!
//! SPARQL results are tables. A single product with two types, three same-products and an
//! optional country yields up to six rows that all repeat the product's name. The functions in
//! this crate undo that fan-out:
//!
//! - [pick_primary] and [merge_first_bound] read the scalar attributes of the primary entity.
//! - [dedupe_by_key] collects label sets keyed by IRI.
//! - [group_by] buckets rows into records with nested, deduplicated sets.
//! - [partition_by_class] splits (class, code, label) rows for tables with row spans.
//!
//! Grouping and deduplication always key on the lexical value of a term (IRI equality) and keep
//! the first value seen for a key. Sorting for display is a separate, final step
//! ([LabelCollator]).
//!
//! All functions are pure and operate on already-fetched rows.

mod collation;
mod error;
mod format;
mod group;
mod partition;
mod primary;
mod record;
mod set;
#[cfg(test)]
mod test_utils;

pub use collation::LabelCollator;
pub use error::{CollationError, NoDataError};
pub use format::{format_decimal, format_range, RangeItem, NO_DATA};
pub use group::{group_by, GroupRecord, GroupSpec, Grouped};
pub use partition::{partition_by_class, ClassEntry, ClassPartition, PartitionSpec};
pub use primary::{merge_first_bound, pick_primary};
pub use record::Record;
pub use set::{dedupe_by_key, KeyedSet, SetSpec};
