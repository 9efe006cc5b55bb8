use crate::{
    reduce_company, reduce_components, reduce_hazards, reduce_indications, reduce_product,
    reduce_product_type, reduce_substances, ProductProfile, ProductTypeOverview, RegistryConfig,
    RegistryError, RegistryQuery, SubstanceRow,
};
use futures::try_join;
use psm_client::SparqlClient;
use psm_model::vocab::psm;
use psm_model::{NamedNode, NamedNodeRef, QuerySolution};
use psm_reducer::LabelCollator;
use tracing::{debug, instrument};

/// Builds the views of the registry from the results of a [SparqlClient].
#[derive(Debug)]
pub struct Registry<C> {
    client: C,
    config: RegistryConfig,
    collator: LabelCollator,
}

impl<C: SparqlClient> Registry<C> {
    pub fn try_new(client: C, config: RegistryConfig) -> Result<Self, RegistryError> {
        if !config.has_valid_language() {
            return Err(RegistryError::InvalidLanguage(config.language));
        }
        let collator = LabelCollator::try_new(&config.collation_locale)?;
        Ok(Self {
            client,
            config,
            collator,
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Loads the profile of the product with the admission number `id`, e.g. `W-7300`.
    ///
    /// The product query runs first because the company query needs the IRI of the permission
    /// holder. All other queries run concurrently.
    #[instrument(skip(self))]
    pub async fn product_profile(&self, id: &str) -> Result<ProductProfile, RegistryError> {
        let product = resource(id)?;
        let rows = self
            .select(RegistryQuery::Product, Some(product.as_ref()))
            .await?;
        let overview = reduce_product(product.as_str(), &rows, &self.config, &self.collator)
            .map_err(|error| error.for_subject(id))?;

        let company = overview
            .record
            .company
            .as_deref()
            .map(|iri| {
                NamedNodeRef::new(iri).map_err(|_| RegistryError::InvalidIdentifier(iri.to_owned()))
            })
            .transpose()?;
        let company_rows = async {
            match company {
                Some(company) => self.select(RegistryQuery::Company, Some(company)).await,
                None => Ok(Vec::new()),
            }
        };

        let (company_rows, hazard_rows, component_rows, indication_rows) = try_join!(
            company_rows,
            self.select(RegistryQuery::Hazards, Some(product.as_ref())),
            self.select(RegistryQuery::Components, Some(product.as_ref())),
            self.select(RegistryQuery::Indications, Some(product.as_ref())),
        )?;

        let company = company.and_then(|iri| reduce_company(iri.as_str(), &company_rows));
        Ok(ProductProfile {
            company,
            hazards: reduce_hazards(&hazard_rows),
            components: reduce_components(&component_rows),
            indications: reduce_indications(&indication_rows),
            product: overview.record,
            types: overview.types,
            same_products: overview.same_products,
        })
    }

    /// Loads all products of the product type `slug`, e.g. `Herbicide`.
    #[instrument(skip(self))]
    pub async fn product_type(&self, slug: &str) -> Result<ProductTypeOverview, RegistryError> {
        let product_type = resource(slug)?;
        let rows = self
            .select(RegistryQuery::ProductType, Some(product_type.as_ref()))
            .await?;
        reduce_product_type(product_type.as_str(), &rows, &self.collator)
            .map_err(|error| error.for_subject(slug).into())
    }

    /// Loads all substances that are part of a product.
    #[instrument(skip(self))]
    pub async fn substance_table(&self) -> Result<Vec<SubstanceRow>, RegistryError> {
        let rows = self.select(RegistryQuery::Substances, None).await?;
        Ok(reduce_substances(&rows))
    }

    async fn select(
        &self,
        query: RegistryQuery,
        subject: Option<NamedNodeRef<'_>>,
    ) -> Result<Vec<QuerySolution>, RegistryError> {
        debug!(%query, subject = subject.map(|s| s.as_str()), "Running registry query");
        let text = query.render(&self.config.language, subject);
        let results = self.client.run_query(&text).await?;
        debug!(%query, rows = results.len(), "Registry query finished");
        Ok(results.into_rows())
    }
}

fn resource(id: &str) -> Result<NamedNode, RegistryError> {
    if id.is_empty() || id.contains('/') {
        return Err(RegistryError::InvalidIdentifier(id.to_owned()));
    }
    psm::resource(id).map_err(|_| RegistryError::InvalidIdentifier(id.to_owned()))
}
