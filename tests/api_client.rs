use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Url;
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

use teams_console::api::ApiClient;
use teams_console::config::AppConfig;
use teams_console::config::settings::ApiSettings;
use teams_console::errors::ApiError;
use teams_console::pagination::{PaginationConfig, RequestContext};
use teams_console::services::TeamsPageLoader;

const ROUTE: &str = "/console/project-[project]/auth/teams";

#[derive(Clone, Default)]
struct Recorded {
    requests: Arc<Mutex<Vec<(Vec<(String, String)>, Option<String>)>>>,
    fail_with: Option<u16>,
}

async fn list_teams(
    State(recorded): State<Recorded>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let url = Url::parse(&format!("http://stub/?{}", query.unwrap_or_default())).unwrap();
    let pairs = url.query_pairs().into_owned().collect();
    let project = headers
        .get("x-appwrite-project")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    recorded.requests.lock().unwrap().push((pairs, project));

    if let Some(code) = recorded.fail_with {
        let body = json!({"message": "Server Error", "code": code, "type": "general_unknown"});
        return (StatusCode::from_u16(code).unwrap(), Json(body)).into_response();
    }

    Json(listing_body()).into_response()
}

fn listing_body() -> Value {
    json!({
        "total": 1,
        "teams": [{
            "$id": "t1",
            "$createdAt": "2024-03-01T12:00:00.000+02:00",
            "$updatedAt": null,
            "name": "Acme",
            "total": 2,
            "prefs": {},
            "labels": ["beta"]
        }]
    })
}

async fn start_stub(recorded: Recorded) -> String {
    let app = Router::new()
        .route("/v1/teams", get(list_teams))
        .with_state(recorded);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1")
}

fn loader(endpoint: String, pagination: PaginationConfig) -> TeamsPageLoader<ApiClient> {
    let settings = ApiSettings {
        endpoint,
        project_id: "p1".to_string(),
        ..AppConfig::new().api
    };
    TeamsPageLoader::new(ApiClient::new(&settings).unwrap(), pagination)
}

fn context(query: &str) -> RequestContext {
    let url = Url::parse(&format!("https://console.test/console/project-p1/auth/teams{query}"))
        .unwrap();
    RequestContext::new(url, ROUTE)
}

#[tokio::test]
async fn sends_page_directives_and_search() {
    let recorded = Recorded::default();
    let endpoint = start_stub(recorded.clone()).await;
    let pagination = PaginationConfig::new()
        .with_default_limit(25)
        .with_route_limit(ROUTE, 10);

    let page = loader(endpoint, pagination)
        .load(&context("?search=acme&page=2"))
        .await
        .unwrap();

    assert_eq!(page.offset, 10);
    assert_eq!(page.teams.total, 1);
    assert_eq!(page.teams.teams[0].name, "Acme");

    let requests = recorded.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    let (pairs, project) = &requests[0];
    assert_eq!(project.as_deref(), Some("p1"));
    assert_eq!(
        pairs,
        &vec![
            ("queries[]".to_string(), r#"{"method":"limit","values":[10]}"#.to_string()),
            ("queries[]".to_string(), r#"{"method":"offset","values":[10]}"#.to_string()),
            (
                "queries[]".to_string(),
                r#"{"method":"orderDesc","attribute":"$createdAt"}"#.to_string()
            ),
            ("search".to_string(), "acme".to_string()),
        ]
    );
}

#[tokio::test]
async fn listing_reaches_the_page_verbatim() {
    let endpoint = start_stub(Recorded::default()).await;

    let page = loader(endpoint, PaginationConfig::new())
        .load(&context(""))
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(&page.teams).unwrap(), listing_body());
}

#[tokio::test]
async fn omits_search_when_absent() {
    let recorded = Recorded::default();
    let endpoint = start_stub(recorded.clone()).await;

    loader(endpoint, PaginationConfig::new())
        .load(&context(""))
        .await
        .unwrap();

    let requests = recorded.requests.lock().unwrap().clone();
    assert!(requests[0].0.iter().all(|(name, _)| name != "search"));
}

#[rstest]
#[case(401)]
#[case(500)]
#[case(503)]
#[tokio::test]
async fn failure_status_is_returned_once(#[case] code: u16) {
    let recorded = Recorded {
        fail_with: Some(code),
        ..Recorded::default()
    };
    let endpoint = start_stub(recorded.clone()).await;

    let error = loader(endpoint, PaginationConfig::new())
        .load(&context("?page=4"))
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), Some(code));
    assert!(matches!(error, ApiError::Status { ref message, .. } if message == "Server Error"));
    assert_eq!(recorded.requests.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn unreachable_api_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let error = loader(format!("http://{addr}/v1"), PaginationConfig::new())
        .load(&context(""))
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Transport { .. }));
}
