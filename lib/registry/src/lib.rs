//! View models of the Swiss plant protection product registry (Pflanzenschutzmittelverzeichnis).
//!
//! A [Registry] runs the queries of a view against a [SparqlClient](psm_client::SparqlClient)
//! and reduces the results into serializable view models:
//!
//! - [Registry::product_profile]: a single product with its types, same-products, permission
//!   holder, hazard statements, components and indications.
//! - [Registry::product_type]: all products of a product type.
//! - [Registry::substance_table]: all substances with the number of products they are part of.
//!
//! The reduce functions are public so that views can be built from rows fetched elsewhere.

mod company;
mod components;
mod config;
mod error;
mod hazards;
mod indications;
mod label;
mod product;
mod product_type;
mod profile;
mod queries;
mod registry;
mod substances;

pub use company::{reduce_company, Company, COMPANY_IDENTIFIERS};
pub use components::{reduce_components, Component};
pub use config::RegistryConfig;
pub use error::RegistryError;
pub use hazards::reduce_hazards;
pub use indications::{reduce_indications, Indication, Indications, Obligation};
pub use label::LabeledItem;
pub use product::{reduce_product, Country, ProductOverview, ProductRecord, SameProduct};
pub use product_type::{reduce_product_type, ProductSummary, ProductTypeOverview};
pub use profile::ProductProfile;
pub use queries::RegistryQuery;
pub use registry::Registry;
pub use substances::{reduce_substances, SubstanceRow};
