use reqwest::Url;
use serde::Serialize;

use super::config::PaginationConfig;
use super::urls::{get_limit, get_page, get_search, page_to_offset};

/// Incoming page request: the URL and the route identifier it matched
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub url: Url,
    pub route: String,
}

impl RequestContext {
    pub fn new(url: Url, route: impl Into<String>) -> Self {
        Self {
            url,
            route: route.into(),
        }
    }
}

/// Resolved pagination for a single list request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationParameters {
    pub page: u64,
    pub limit: u64,
    pub offset: u64,
    pub search: Option<String>,
}

/// Derive page, limit, offset and search from a request.
///
/// Malformed values never fail; each falls back to its default.
pub fn resolve_pagination(
    context: &RequestContext,
    config: &PaginationConfig,
) -> PaginationParameters {
    let page = get_page(&context.url);
    let search = get_search(&context.url);
    let limit = get_limit(&context.url, &context.route, config);
    let offset = page_to_offset(page, limit);

    PaginationParameters {
        page,
        limit,
        offset,
        search,
    }
}
