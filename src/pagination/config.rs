use std::collections::HashMap;

/// Global default page size for console list views
pub const PAGE_LIMIT: u64 = 12;

/// Configuration for paginated list views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_limit: u64,
    pub route_limits: HashMap<String, u64>,
}

impl PaginationConfig {
    pub fn new() -> Self {
        Self {
            default_limit: PAGE_LIMIT,
            route_limits: HashMap::new(),
        }
    }

    pub fn with_default_limit(mut self, limit: u64) -> Self {
        if limit > 0 {
            self.default_limit = limit;
        }
        self
    }

    pub fn with_route_limit(mut self, route: impl Into<String>, limit: u64) -> Self {
        if limit > 0 {
            self.route_limits.insert(route.into(), limit);
        }
        self
    }

    /// Page size for a route: its override if one is set, otherwise the default
    pub fn limit_for(&self, route: &str) -> u64 {
        self.route_limits
            .get(route)
            .copied()
            .unwrap_or(self.default_limit)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new()
    }
}
