//! The real HTTP client against a mock concept service

use sagegraph::config::RemoteConfig;
use sagegraph::remote::{ConceptService, HttpConceptService, RemoteError};
use sagegraph::{GraphRepository, Provenance};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "secret-token";

fn config_for(server: &MockServer) -> RemoteConfig {
    RemoteConfig {
        base_url: server.uri(),
        api_key: Some(TOKEN.to_string()),
        timeout_secs: 5,
        ..RemoteConfig::default()
    }
}

fn service_for(server: &MockServer) -> HttpConceptService {
    HttpConceptService::new(&config_for(server)).unwrap()
}

fn small_graph_json() -> serde_json::Value {
    json!({
        "nodes": [
            { "id": "ren", "name": "仁", "category": "core", "description": "Benevolence" },
            { "id": "yi", "name": "义", "category": "virtue" },
            { "id": "wen", "name": "文", "category": "culture" }
        ],
        "links": [
            { "source": "ren", "target": "yi", "relationship": "grounds" },
            { "source": "yi", "target": "ghost", "relationship": "dangling" }
        ]
    })
}

#[tokio::test]
async fn sends_bearer_credential_and_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/knowledge-graph"))
        .and(query_param("concept", "ren"))
        .and(query_param("depth", "1"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(small_graph_json()))
        .expect(1)
        .mount(&server)
        .await;

    let graph = service_for(&server)
        .knowledge_graph(Some(&"ren".into()), Some(1))
        .await
        .unwrap();

    assert_eq!(graph.node_count(), 3);
}

#[tokio::test]
async fn unknown_category_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/knowledge-graph"))
        .respond_with(ResponseTemplate::new(200).set_body_json(small_graph_json()))
        .mount(&server)
        .await;

    let graph = service_for(&server).knowledge_graph(None, None).await.unwrap();

    let wen = graph.node(&"wen".into()).unwrap();
    assert_eq!(wen.category.to_string(), "culture");
}

#[tokio::test]
async fn server_error_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/concept-details/ren"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "boom" })))
        .mount(&server)
        .await;

    let result = service_for(&server).concept_details(&"ren".into()).await;

    match result {
        Err(RemoteError::Status { status, endpoint }) => {
            assert_eq!(status, 500);
            assert_eq!(endpoint, "/concept-details/ren");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search-concepts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = service_for(&server).search_concepts("仁").await;

    assert!(matches!(result, Err(RemoteError::Malformed(_))));
}

#[tokio::test]
async fn search_text_round_trips_through_query_encoding() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search-concepts"))
        .and(query_param("query", "仁 义"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let results = service_for(&server).search_concepts("仁 义").await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn concept_id_is_a_single_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/concept-relations/a%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "relations": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let relations = service_for(&server)
        .concept_relations(&"a/b".into())
        .await
        .unwrap();

    assert!(relations.is_empty());
}

#[tokio::test]
async fn repository_serves_sanitized_remote_graph() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/knowledge-graph"))
        .respond_with(ResponseTemplate::new(200).set_body_json(small_graph_json()))
        .expect(2)
        .mount(&server)
        .await;
    let repo = GraphRepository::builder()
        .service(Arc::new(service_for(&server)))
        .build();

    let resolved = repo.full_graph().await;
    assert_eq!(resolved.provenance, Provenance::Online);
    assert_eq!(resolved.value.link_count(), 1);

    // Remote stays first in the chain while it answers
    let again = repo.full_graph().await;
    assert_eq!(again.provenance, Provenance::Online);
}

#[tokio::test]
async fn repository_falls_back_when_server_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    let repo = GraphRepository::builder()
        .service(Arc::new(service_for(&server)))
        .build();

    let resolved = repo.get_subgraph(Some("ren".into()), Some(1)).await;

    assert_eq!(resolved.provenance, Provenance::Offline);
    assert!(resolved.value.contains(&"yi".into()));
    assert!(resolved.warning.is_some());
}

#[tokio::test]
async fn repository_falls_back_on_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/knowledge-graph"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "nodes": 42 })))
        .mount(&server)
        .await;
    let repo = GraphRepository::builder()
        .service(Arc::new(service_for(&server)))
        .build();

    let resolved = repo.get_subgraph(Some("xingshan".into()), Some(1)).await;

    assert_eq!(resolved.provenance, Provenance::Offline);
    assert_eq!(resolved.value.node_count(), 2);
}

#[tokio::test]
async fn missing_credential_never_connects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(small_graph_json()))
        .expect(0)
        .mount(&server)
        .await;
    let config = RemoteConfig {
        api_key: None,
        ..config_for(&server)
    };
    let repo = GraphRepository::builder()
        .service(Arc::new(HttpConceptService::new(&config).unwrap()))
        .build();

    let resolved = repo.full_graph().await;

    assert_eq!(resolved.provenance, Provenance::Offline);
}
