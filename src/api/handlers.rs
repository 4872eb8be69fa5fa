use axum::{
    extract::{OriginalUri, Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use log::warn;
use reqwest::Url;
use std::sync::Arc;

use super::gateway::TeamsGateway;
use super::models::ErrorResponse;
use crate::config::TEAMS_ROUTE;
use crate::errors::ApiError;
use crate::pagination::RequestContext;
use crate::services::TeamsPageLoader;

const PROJECT_PREFIX: &str = "project-";
const LOCAL_ORIGIN: &str = "http://localhost";

pub struct AppState<G> {
    pub loader: TeamsPageLoader<G>,
}

pub async fn get_teams<G>(
    State(state): State<Arc<AppState<G>>>,
    Path(project): Path<String>,
    OriginalUri(uri): OriginalUri,
) -> Response
where
    G: TeamsGateway<Error = ApiError> + Send + Sync + 'static,
{
    if !project.starts_with(PROJECT_PREFIX) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let url = match request_url(&uri) {
        Some(url) => url,
        None => return StatusCode::BAD_REQUEST.into_response(),
    };
    let context = RequestContext::new(url, TEAMS_ROUTE);

    match state.loader.load(&context).await {
        Ok(page) => Json(page).into_response(),
        Err(error) => error_response(&error),
    }
}

fn request_url(uri: &Uri) -> Option<Url> {
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    Url::parse(LOCAL_ORIGIN).ok()?.join(path_and_query).ok()
}

fn error_response(error: &ApiError) -> Response {
    warn!("Teams page failed: {}", error);

    let status = match error {
        ApiError::Status { code, .. } => {
            StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        ApiError::Transport { source, .. } if source.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
        ApiError::Transport { .. } | ApiError::Decode { .. } => StatusCode::BAD_GATEWAY,
        ApiError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let (kind, message) = match error {
        ApiError::Status { kind, message, .. } => (kind.clone(), message.clone()),
        other => (String::new(), other.to_string()),
    };

    let body = ErrorResponse {
        code: status.as_u16(),
        kind,
        message,
    };

    (status, Json(body)).into_response()
}
