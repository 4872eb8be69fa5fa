use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

const PROJECT_HEADER: &str = "x-appwrite-project";
const KEY_HEADER: &str = "x-appwrite-key";

/// HTTP client scoped to one project of the listing API
#[derive(Debug, Clone)]
pub struct ProjectClient {
    client: Client,
}

impl ProjectClient {
    pub fn new(
        user_agent: &str,
        timeout_secs: u64,
        project_id: &str,
        api_key: Option<&str>,
    ) -> Result<Self> {
        let headers = Self::build_headers(project_id, api_key)?;
        let client = Self::build_client(user_agent, timeout_secs, headers)?;
        Ok(Self { client })
    }

    pub async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> reqwest::Result<reqwest::Response> {
        self.client.get(url).query(query).send().await
    }

    fn build_headers(project_id: &str, api_key: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(PROJECT_HEADER),
            HeaderValue::from_str(project_id).context("Invalid project id header value")?,
        );

        if let Some(key) = api_key {
            let mut value = HeaderValue::from_str(key).context("Invalid API key header value")?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(KEY_HEADER), value);
        }

        Ok(headers)
    }

    fn build_client(user_agent: &str, timeout_secs: u64, headers: HeaderMap) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")
    }
}
