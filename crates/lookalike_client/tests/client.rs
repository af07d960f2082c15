use std::time::Duration;

use lookalike_client::{
    ClientSettings, FailureKind, ImageUpload, MatchClient, ReqwestMatchClient,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestMatchClient {
    let settings = ClientSettings {
        api_host: server.uri(),
        ..ClientSettings::default()
    };
    ReqwestMatchClient::new(settings).expect("client")
}

fn sample_image() -> ImageUpload {
    ImageUpload {
        file_name: "query.png".to_string(),
        bytes: b"fake png bytes".to_vec(),
    }
}

#[tokio::test]
async fn submit_sends_image_and_folder_as_multipart_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/match-image/"))
        .and(body_string_contains("name=\"image\""))
        .and(body_string_contains("filename=\"query.png\""))
        .and(body_string_contains("fake png bytes"))
        .and(body_string_contains("name=\"folder_id\""))
        .and(body_string_contains("XYZ123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": [
                {"name": "hero.png", "score": 0.72, "link": "https://drive.example/a"},
                {"name": "logo.png", "score": 0.95, "link": "https://drive.example/b"},
            ],
            "total_matches": 2,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .submit_match(sample_image(), "XYZ123")
        .await
        .expect("submit ok");

    // Rows come back in the service's relevance order, not sorted locally.
    let names: Vec<&str> = response
        .matches
        .iter()
        .map(|result| result.name.as_str())
        .collect();
    assert_eq!(names, vec!["hero.png", "logo.png"]);
    assert_eq!(response.total(), 2);
}

#[tokio::test]
async fn unauthorized_maps_to_auth_required_regardless_of_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/match-image/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("<html>sign in</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .submit_match(sample_image(), "")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::AuthRequired);
}

#[tokio::test]
async fn service_failure_carries_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/match-image/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Drive quota exceeded"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .submit_match(sample_image(), "")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Service { status: 500 });
    assert_eq!(err.message, "Drive quota exceeded");
}

#[tokio::test]
async fn success_body_that_is_not_json_is_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/match-image/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .submit_match(sample_image(), "")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Transport);
    assert!(err.message.contains("malformed response"));
}

#[tokio::test]
async fn slow_service_is_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/match-image/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"matches": []})),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        api_host: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    };
    let client = ReqwestMatchClient::new(settings).expect("client");
    let err = client
        .submit_match(sample_image(), "")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Transport);
}

#[tokio::test]
async fn unreachable_service_is_a_transport_failure() {
    let settings = ClientSettings {
        api_host: "http://127.0.0.1:1".to_string(),
        connect_timeout: Duration::from_millis(200),
        request_timeout: Duration::from_millis(500),
    };
    let client = ReqwestMatchClient::new(settings).expect("client");
    let err = client.fetch_history().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Transport);
}

#[tokio::test]
async fn history_parses_entries_with_their_matches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-history/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "history": [
                {
                    "query_file": "latest.png",
                    "matches": [
                        {"name": "hero.png", "score": 0.9, "link": "https://drive.example/a"},
                        {"name": "logo.png", "score": 0.4, "link": "https://drive.example/b"},
                    ],
                },
                {"query_file": "older.png"},
            ],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let history = client.fetch_history().await.expect("history ok");

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].query_file, "latest.png");
    assert_eq!(history[0].matches.len(), 2);
    assert_eq!(history[1].query_file, "older.png");
    assert!(history[1].matches.is_empty());
}

#[tokio::test]
async fn history_unauthorized_is_auth_required() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-history/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_history().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::AuthRequired);
}

#[tokio::test]
async fn auth_probe_reads_the_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth-status/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"authenticated": false})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(!client.auth_status().await.expect("probe ok"));
}

#[tokio::test]
async fn session_cookie_is_replayed_on_later_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth-status/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "sessionid=abc123; Path=/")
                .set_body_json(json!({"authenticated": true})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/get-history/"))
        .and(header("cookie", "sessionid=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"history": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.auth_status().await.expect("probe ok"));
    // Without the replayed cookie the history mock would not match and the
    // server would answer 404.
    let history = client.fetch_history().await.expect("history ok");
    assert!(history.is_empty());
}
