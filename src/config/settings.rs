use anyhow::{Context, Result, bail};
use std::collections::HashMap;

use crate::errors::env_context;
use crate::pagination::{PAGE_LIMIT, PaginationConfig};

/// Route identifier of the teams list view, used to look up its page size
pub const TEAMS_ROUTE: &str = "/console/project-[project]/auth/teams";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: Option<String>,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost/v1".to_string(),
            project_id: "console".to_string(),
            api_key: None,
            user_agent: "TeamsConsole/0.1".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginationSettings {
    pub page_limit: u64,
    pub route_limits: HashMap<String, u64>,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            page_limit: PAGE_LIMIT,
            route_limits: HashMap::new(),
        }
    }
}

impl PaginationSettings {
    pub fn to_config(&self) -> PaginationConfig {
        self.route_limits.iter().fold(
            PaginationConfig::new().with_default_limit(self.page_limit),
            |config, (route, limit)| config.with_route_limit(route.clone(), *limit),
        )
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub pagination: PaginationSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
            pagination: PaginationSettings::default(),
        }
    }

    /// Defaults overlaid with `TEAMS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::new();

        if let Some(endpoint) = lookup("TEAMS_API_ENDPOINT") {
            config.api.endpoint = endpoint.trim_end_matches('/').to_string();
        }
        if let Some(project_id) = lookup("TEAMS_PROJECT_ID") {
            config.api.project_id = project_id;
        }
        if let Some(key) = lookup("TEAMS_API_KEY").filter(|key| !key.is_empty()) {
            config.api.api_key = Some(key);
        }
        if let Some(limit) = lookup("TEAMS_PAGE_LIMIT") {
            config.pagination.page_limit = parse_limit(&limit)
                .with_context(|| env_context("TEAMS_PAGE_LIMIT"))?;
        }
        if let Some(routes) = lookup("TEAMS_ROUTE_LIMITS") {
            config.pagination.route_limits =
                parse_route_limits(&routes).with_context(|| env_context("TEAMS_ROUTE_LIMITS"))?;
        }

        Ok(config)
    }
}

/// Parse `route=limit` pairs separated by commas
fn parse_route_limits(raw: &str) -> Result<HashMap<String, u64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> Result<(String, u64)> {
            let (route, limit) = entry
                .rsplit_once('=')
                .with_context(|| format!("Expected route=limit, got '{}'", entry))?;
            Ok((route.trim().to_string(), parse_limit(limit)?))
        })
        .collect()
}

fn parse_limit(raw: &str) -> Result<u64> {
    let limit: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a page size", raw))?;
    if limit == 0 {
        bail!("Page size must be positive");
    }
    Ok(limit)
}
