use chrono::NaiveDateTime;
use secrecy::SecretString;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use langsmith_cli::{LangSmithClient, LangSmithConfig, LangSmithError, TimeWindow};

fn client_for(server: &MockServer) -> LangSmithClient {
    let config = LangSmithConfig::new(SecretString::new("test-key".to_string()))
        .with_api_url(server.uri());
    LangSmithClient::new(config)
}

async fn query_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|request| request.url.path() == "/api/v1/runs/query")
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}

#[tokio::test]
async fn sessions_sends_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/sessions"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "s-1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let sessions = client_for(&server).sessions().await.unwrap();
    assert_eq!(sessions, json!([{"id": "s-1"}]));
}

#[tokio::test]
async fn missing_session_reports_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/sessions/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"detail":"Not found"}"#))
        .mount(&server)
        .await;

    let err = client_for(&server).session("nope").await.unwrap_err();
    assert!(matches!(err, LangSmithError::Http { .. }));
    let report = err.to_string();
    assert!(report.contains("404"), "{report}");
    assert!(report.contains(r#"Response: {"detail":"Not found"}"#), "{report}");
    assert!(!report.contains("Request payload"), "{report}");
}

#[tokio::test]
async fn server_error_without_body_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/sessions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).sessions().await.unwrap_err();
    assert!(matches!(
        err,
        LangSmithError::Http { status, ref body, payload: None }
            if status.as_u16() == 503 && body.is_empty()
    ));
    assert_eq!(err.to_string(), "HTTP Error 503: Service Unavailable");
}

#[tokio::test]
async fn thread_is_fetched_with_session_and_reshaped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/runs/threads/t-1"))
        .and(query_param("session_id", "s-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "thread_id": "t-1",
            "previews": {
                "all_messages": "{\"role\":\"user\",\"content\":\"hi\"}\n\n{\"role\":\"tool\",\"content\":\"{\\\"x\\\":1}\"}",
                "first_human_last_ai": "hi",
                "human_ai_pairs": [["hi", "hello"]]
            }
        })))
        .mount(&server)
        .await;

    let thread = client_for(&server).thread("t-1", "s-1").await.unwrap();
    assert_eq!(
        thread,
        json!({
            "thread_id": "t-1",
            "previews": {
                "all_messages": [
                    {"role": "user", "content": "hi"},
                    {"role": "tool", "content": {"x": 1}}
                ]
            }
        })
    );
}

#[tokio::test]
async fn runs_posts_query_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/runs/query"))
        .and(header("x-api-key", "test-key"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "session": ["s-1"],
            "select": ["name", "run_type", "start_time", "end_time", "status", "error", "thread_id"],
            "limit": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"runs": []})))
        .expect(1)
        .mount(&server)
        .await;

    let runs = client_for(&server)
        .runs("s-1", TimeWindow::minutes(15))
        .await
        .unwrap();
    assert_eq!(runs, json!({"runs": []}));

    let bodies = query_bodies(&server).await;
    let start_time = bodies[0]["start_time"].as_str().unwrap();
    assert!(NaiveDateTime::parse_from_str(start_time, "%Y-%m-%dT%H:%M:%S").is_ok());
}

#[tokio::test]
async fn failed_query_reports_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/runs/query"))
        .respond_with(ResponseTemplate::new(422).set_body_string("bad select"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .runs("s-1", TimeWindow::default())
        .await
        .unwrap_err();
    let report = err.to_string();
    assert!(report.starts_with("HTTP Error 422: Unprocessable Entity"), "{report}");
    assert!(report.contains("Response: bad select"), "{report}");
    assert!(report.contains(r#"Request payload: {"session":["s-1"]"#), "{report}");
}

#[tokio::test]
async fn last_thread_widens_until_a_thread_appears() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/runs/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"runs": [{"name": "llm", "thread_id": null}]})),
        )
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/runs/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"runs": [
            {"name": "tool"},
            {"name": "agent", "thread_id": "t-30"},
            {"name": "later", "thread_id": "t-other"}
        ]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/runs/threads/t-30"))
        .and(query_param("session_id", "s-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "thread_id": "t-30",
            "previews": {"all_messages": "{\"role\":\"user\",\"content\":\"hi\"}", "human_ai_pairs": []}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let thread = client_for(&server).last_thread("s-1").await.unwrap();
    assert_eq!(
        thread,
        json!({
            "thread_id": "t-30",
            "previews": {"all_messages": [{"role": "user", "content": "hi"}]}
        })
    );

    let starts: Vec<NaiveDateTime> = query_bodies(&server)
        .await
        .iter()
        .map(|body| {
            NaiveDateTime::parse_from_str(body["start_time"].as_str().unwrap(), "%Y-%m-%dT%H:%M:%S")
                .unwrap()
        })
        .collect();
    assert_eq!(starts.len(), 3);
    let gap = |a: NaiveDateTime, b: NaiveDateTime| (a - b).num_minutes();
    assert!((9..=10).contains(&gap(starts[0], starts[1])));
    assert!((14..=15).contains(&gap(starts[1], starts[2])));
}

#[tokio::test]
async fn last_thread_gives_up_after_sixty_minutes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/runs/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"runs": []})))
        .expect(4)
        .mount(&server)
        .await;

    let err = client_for(&server).last_thread("s-1").await.unwrap_err();
    assert!(matches!(err, LangSmithError::NoThreadFound { minutes: 60 }));
    assert_eq!(
        err.to_string(),
        "No runs with thread_id found in last 60 minutes"
    );
    assert_eq!(query_bodies(&server).await.len(), 4);
}

#[tokio::test]
async fn unreachable_host_is_a_request_error() {
    let config = LangSmithConfig::new(SecretString::new("test-key".to_string()))
        .with_api_url("http://127.0.0.1:9");
    let err = LangSmithClient::new(config).sessions().await.unwrap_err();
    assert!(matches!(err, LangSmithError::Request(_)));
    assert!(err.to_string().starts_with("URL Error:"));
}
