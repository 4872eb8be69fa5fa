use axum::{Router, routing::get};
use std::sync::Arc;

use super::gateway::TeamsGateway;
use super::handlers::{AppState, get_teams};
use crate::errors::ApiError;

pub fn create_router<G>(state: Arc<AppState<G>>) -> Router
where
    G: TeamsGateway<Error = ApiError> + Send + Sync + 'static,
{
    Router::new()
        .route("/console/:project/auth/teams", get(get_teams::<G>))
        .with_state(state)
}
