use log::debug;

use crate::api::{TeamsGateway, list_teams};
use crate::domain::TeamsPage;
use crate::pagination::{PaginationConfig, RequestContext, resolve_pagination};

/// Loads the data behind the teams list view
pub struct TeamsPageLoader<G> {
    gateway: G,
    pagination: PaginationConfig,
}

impl<G: TeamsGateway> TeamsPageLoader<G> {
    pub fn new(gateway: G, pagination: PaginationConfig) -> Self {
        Self {
            gateway,
            pagination,
        }
    }

    #[cfg(test)]
    pub(crate) fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Resolve pagination from the request and fetch exactly one page
    pub async fn load(&self, context: &RequestContext) -> Result<TeamsPage, G::Error> {
        let params = resolve_pagination(context, &self.pagination);
        debug!(
            "Resolved page {} (limit {}, offset {}) for route {}",
            params.page, params.limit, params.offset, context.route
        );

        let teams = list_teams(&self.gateway, &params).await?;
        Ok(TeamsPage::new(params, teams))
    }
}
