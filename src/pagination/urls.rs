use reqwest::Url;

use super::config::PaginationConfig;

const PAGE_PARAM: &str = "page";
const SEARCH_PARAM: &str = "search";
const LIMIT_PARAM: &str = "limit";

/// Read the 1-indexed page number, falling back to the first page
pub fn get_page(url: &Url) -> u64 {
    find_param(url, PAGE_PARAM)
        .and_then(|value| parse_positive(&value))
        .unwrap_or(1)
}

/// Read the search term; an empty term means no filter
pub fn get_search(url: &Url) -> Option<String> {
    find_param(url, SEARCH_PARAM).filter(|value| !value.is_empty())
}

/// Resolve the page size: explicit `limit` parameter, then route override, then default
pub fn get_limit(url: &Url, route: &str, config: &PaginationConfig) -> u64 {
    find_param(url, LIMIT_PARAM)
        .and_then(|value| parse_positive(&value))
        .unwrap_or_else(|| config.limit_for(route))
}

/// Number of records skipped before the given page
pub fn page_to_offset(page: u64, limit: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(limit)
}

fn find_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

fn parse_positive(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|n| *n > 0)
}
