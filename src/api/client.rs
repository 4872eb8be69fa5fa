use anyhow::Result;
use log::{info, warn};

use super::gateway::TeamsGateway;
use super::query::Query;
use crate::config::settings::ApiSettings;
use crate::domain::TeamList;
use crate::errors::ApiError;
use crate::http::ProjectClient;

const QUERIES_PARAM: &str = "queries[]";
const SEARCH_PARAM: &str = "search";

/// Teams endpoint of the listing API
#[derive(Debug, Clone)]
pub struct ApiClient {
    endpoint: String,
    client: ProjectClient,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = ProjectClient::new(
            &settings.user_agent,
            settings.timeout_secs,
            &settings.project_id,
            settings.api_key.as_deref(),
        )?;

        Ok(Self {
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn build_teams_url(&self) -> String {
        format!("{}/teams", self.endpoint)
    }

    fn build_params(
        queries: &[Query],
        search: Option<&str>,
    ) -> Result<Vec<(&'static str, String)>, ApiError> {
        let mut params = queries
            .iter()
            .map(|query| query.to_wire().map(|wire| (QUERIES_PARAM, wire)))
            .collect::<Result<Vec<_>, ApiError>>()?;

        if let Some(term) = search {
            params.push((SEARCH_PARAM, term.to_string()));
        }

        Ok(params)
    }
}

impl TeamsGateway for ApiClient {
    type Error = ApiError;

    async fn list(&self, queries: &[Query], search: Option<&str>) -> Result<TeamList, ApiError> {
        let url = self.build_teams_url();
        let params = Self::build_params(queries, search)?;
        info!("Fetching teams from {} ({} directives)", url, queries.len());

        let response = self
            .client
            .get(&url, &params)
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            warn!("Listing teams failed with status {}", status);
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            data_type: "team list",
            source,
        })
    }
}
