use log::debug;

use super::query::{CREATED_AT, Query};
use crate::domain::TeamList;
use crate::pagination::PaginationParameters;

/// Source of team listings
pub trait TeamsGateway {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch one page of teams; `search` filters when present
    fn list(
        &self,
        queries: &[Query],
        search: Option<&str>,
    ) -> impl Future<Output = Result<TeamList, Self::Error>> + Send;
}

/// Directives for a page of teams, newest first
pub fn page_queries(params: &PaginationParameters) -> Vec<Query> {
    vec![
        Query::Limit(params.limit),
        Query::Offset(params.offset),
        Query::order_desc(CREATED_AT),
    ]
}

/// Issue a single list request for the given page; errors are returned untouched
pub async fn list_teams<G: TeamsGateway>(
    gateway: &G,
    params: &PaginationParameters,
) -> Result<TeamList, G::Error> {
    let queries = page_queries(params);
    debug!(
        "Listing teams: limit={} offset={} search={:?}",
        params.limit, params.offset, params.search
    );
    gateway.list(&queries, params.search.as_deref()).await
}
