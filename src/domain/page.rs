use serde::Serialize;

use super::models::TeamList;
use crate::pagination::PaginationParameters;

/// Data handed to the teams list view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsPage {
    pub offset: u64,
    pub limit: u64,
    pub search: Option<String>,
    pub page: u64,
    pub teams: TeamList,
}

impl TeamsPage {
    pub fn new(params: PaginationParameters, teams: TeamList) -> Self {
        Self {
            offset: params.offset,
            limit: params.limit,
            search: params.search,
            page: params.page,
            teams,
        }
    }

    /// Pages needed to show every matching team; an empty listing still has one
    pub fn total_pages(&self) -> u64 {
        self.teams.total.div_ceil(self.limit.max(1)).max(1)
    }
}
