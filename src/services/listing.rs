use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use reqwest::Url;

use super::TeamsPageLoader;
use crate::api::{ApiClient, TeamsGateway};
use crate::config::AppConfig;
use crate::domain::{Team, TeamsPage};
use crate::pagination::RequestContext;

const LOCAL_ORIGIN: &str = "http://localhost";

/// Loads a single teams page for the command line
pub struct ListingService<G = ApiClient> {
    loader: TeamsPageLoader<G>,
}

impl ListingService<ApiClient> {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = ApiClient::new(&config.api)?;
        Ok(Self::with_gateway(client, config))
    }
}

impl<G: TeamsGateway> ListingService<G> {
    pub fn with_gateway(gateway: G, config: &AppConfig) -> Self {
        Self {
            loader: TeamsPageLoader::new(gateway, config.pagination.to_config()),
        }
    }

    pub async fn run(&self, url: &str, route: &str, json: bool) -> Result<()> {
        let page = self.fetch(url, route).await?;
        let output = if json {
            serde_json::to_string_pretty(&page).context("Failed to serialize teams page")?
        } else {
            render_table(&page)
        };

        println!("{}", output);
        Ok(())
    }

    pub async fn fetch(&self, url: &str, route: &str) -> Result<TeamsPage> {
        let url = parse_request_url(url)?;
        info!("Loading teams page for {}", url);

        let context = RequestContext::new(url, route);
        let page = self
            .loader
            .load(&context)
            .await
            .context("Failed to list teams")?;
        Ok(page)
    }
}

/// Accept absolute URLs or paths/queries relative to the console origin
pub fn parse_request_url(raw: &str) -> Result<Url> {
    let base = Url::parse(LOCAL_ORIGIN).context("Invalid console origin")?;
    base.join(raw)
        .with_context(|| format!("Invalid request URL: {}", raw))
}

fn created_label(team: &Team) -> String {
    team.created()
        .map(|created| created.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| team.created_at.clone())
}

pub fn render_table(page: &TeamsPage) -> String {
    let mut lines = vec![format!(
        "{:<24} {:<32} {:>8}  {}",
        "ID".bold(),
        "NAME".bold(),
        "MEMBERS".bold(),
        "CREATED".bold()
    )];

    lines.extend(page.teams.teams.iter().map(|team| {
        format!(
            "{:<24} {:<32} {:>8}  {}",
            team.id.cyan(),
            team.name,
            team.total.map_or_else(|| "-".to_string(), |total| total.to_string()),
            created_label(team)
        )
    }));

    if page.teams.teams.is_empty() {
        lines.push(match &page.search {
            Some(term) => format!("No teams match '{}'", term).yellow().to_string(),
            None => "No teams yet".yellow().to_string(),
        });
    }

    lines.push(
        format!(
            "Page {} of {} ({} teams)",
            page.page,
            page.total_pages(),
            page.teams.total
        )
        .dimmed()
        .to_string(),
    );

    lines.join("\n")
}
