//! Hub match listing against a mock Data API.

use faceit_client::{FaceitClient, FaceitError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> FaceitClient {
    FaceitClient::new("test-key".to_string()).with_base_url(server.uri())
}

#[tokio::test]
async fn test_hub_matches_sends_paging_query_and_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/v4/hubs/hub-1/matches"))
        .and(header("authorization", "Bearer test-key"))
        .and(query_param("type", "past"))
        .and(query_param("offset", "20"))
        .and(query_param("limit", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-RateLimit-Remaining-hour", "9876")
                .set_body_json(json!({
                    "items": [
                        {
                            "match_id": "m2",
                            "status": "FINISHED",
                            "demo_url": ["https://demos.example/m2.dem.gz"],
                            "teams": {
                                "faction1": {"name": "team_alpha"},
                                "faction2": {"name": "team_bravo"}
                            }
                        },
                        {
                            "match_id": "m1",
                            "status": "ONGOING"
                        }
                    ]
                })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = client_for(&mock_server)
        .hub_matches("hub-1", 20, 10)
        .await
        .expect("page should load");

    assert_eq!(page.rate_limit_remaining.as_deref(), Some("9876"));
    assert_eq!(page.items.len(), 2);

    let finished = &page.items[0];
    assert!(finished.is_finished());
    assert_eq!(
        finished.primary_demo_url(),
        Some("https://demos.example/m2.dem.gz")
    );
    let teams = finished.teams.as_ref().expect("teams present");
    assert_eq!(teams.faction1.name, "team_alpha");
    assert_eq!(teams.faction2.name, "team_bravo");

    let ongoing = &page.items[1];
    assert!(!ongoing.is_finished());
    assert!(ongoing.primary_demo_url().is_none());
    assert!(ongoing.teams.is_none());
}

#[tokio::test]
async fn test_hub_matches_without_rate_limit_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/v4/hubs/hub-1/matches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&mock_server)
        .await;

    let page = client_for(&mock_server)
        .hub_matches("hub-1", 0, 10)
        .await
        .expect("page should load");

    assert!(page.items.is_empty());
    assert!(page.rate_limit_remaining.is_none());
}

#[tokio::test]
async fn test_hub_matches_api_error_carries_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/v4/hubs/missing/matches"))
        .respond_with(ResponseTemplate::new(404).set_body_string("hub not found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .hub_matches("missing", 0, 10)
        .await
        .expect_err("404 must fail");

    match err {
        FaceitError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "hub not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_hub_matches_malformed_body_is_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/v4/hubs/hub-1/matches"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .hub_matches("hub-1", 0, 10)
        .await
        .expect_err("garbage body must fail");

    assert!(matches!(err, FaceitError::Http(_)));
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let client =
        FaceitClient::new("k".to_string()).with_base_url("http://localhost:8080/");
    assert_eq!(client.base_url(), "http://localhost:8080");
}
