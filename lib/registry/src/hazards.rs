use psm_model::SolutionExt;
use psm_reducer::{partition_by_class, ClassPartition, PartitionSpec};

/// Partitions the hazard statements of a product by their class (R-Satz, S-Satz, ...).
pub fn reduce_hazards<R: SolutionExt>(rows: &[R]) -> ClassPartition {
    partition_by_class(rows, &PartitionSpec::default())
}
