use crate::{Company, Component, Indications, LabeledItem, ProductRecord, SameProduct};
use psm_reducer::ClassPartition;
use serde::Serialize;

/// Everything shown on the page of a single product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductProfile {
    pub product: ProductRecord,
    pub types: Vec<LabeledItem>,
    pub same_products: Vec<SameProduct>,
    /// Absent if the permission holder is not known to the registry.
    pub company: Option<Company>,
    pub hazards: ClassPartition,
    pub components: Vec<Component>,
    pub indications: Indications,
}
