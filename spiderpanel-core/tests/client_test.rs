use spiderpanel_core::{PanelError, ServerConfig, SpiderClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SpiderClient {
    let config = ServerConfig {
        url: server.uri(),
        ..Default::default()
    };
    SpiderClient::new(&config)
}

#[tokio::test]
async fn fetches_server_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/server"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "running_time": 90061.2,
            "cost": 12.3456,
            "paused": false,
            "pending_requests_by_host": {"a.com": 3, "b.com": 0},
            "active_requests": 7
        })))
        .mount(&server)
        .await;

    let status = client_for(&server).get_server_status().await.unwrap();
    assert_eq!(status.running_time, Some(90061.2));
    assert_eq!(status.paused, Some(false));
    assert_eq!(status.active_requests, Some(7));
    assert!(status.pending_requests.is_none());
}

#[tokio::test]
async fn fetches_exposed_function_details_as_pairs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/exposed_function_details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            ["fetch_feed", {
                "interval": 3600,
                "required_arguments": ["url"],
                "optional_arguments": ["depth", "timeout"]
            }],
            ["ping", {
                "interval": 60,
                "required_arguments": [],
                "optional_arguments": []
            }]
        ])))
        .mount(&server)
        .await;

    let functions = client_for(&server)
        .get_exposed_function_details()
        .await
        .unwrap();
    assert_eq!(functions.len(), 2);
    assert_eq!(functions[0].name, "fetch_feed");
    assert_eq!(
        functions[0].descriptor.optional_arguments,
        vec!["depth", "timeout"]
    );
    assert!(functions[1].descriptor.required_arguments.is_empty());
}

#[tokio::test]
async fn pause_unwraps_true_ack() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/control/pause"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).pause().await.unwrap();
}

#[tokio::test]
async fn control_error_object_becomes_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/control/delete_reservation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": "Reservation not found.",
            "traceback": "Traceback (most recent call last): ..."
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .delete_reservation("ad9c9b38-d588-4658-8a4f-8960cad20aa9")
        .await
        .unwrap_err();
    match err {
        PanelError::ControlRejected { message, traceback } => {
            assert_eq!(message, "Reservation not found.");
            assert!(traceback.is_some());
        }
        other => panic!("expected ControlRejected, got {:?}", other),
    }
}

#[tokio::test]
async fn delete_reservation_sends_uuid_query_param() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/control/delete_reservation"))
        .and(query_param("uuid", "ad9c9b38-d588-4658-8a4f-8960cad20aa9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .delete_reservation("ad9c9b38-d588-4658-8a4f-8960cad20aa9")
        .await
        .unwrap();
}

#[tokio::test]
async fn invalid_uuid_never_reaches_the_server() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 and the test would still pass,
    // but expect(0) below makes the contract explicit.
    Mock::given(method("POST"))
        .and(path("/control/delete_reservation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(true)))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .delete_reservation("not-a-uuid")
        .await
        .unwrap_err();
    assert!(matches!(err, PanelError::InvalidReservationId(_)));
}

#[tokio::test]
async fn delete_function_reservations_sends_function_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/control/delete_function_reservations"))
        .and(query_param("function_name", "fetch_feed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .delete_function_reservations("fetch_feed")
        .await
        .unwrap();
}

#[tokio::test]
async fn show_reservation_returns_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/show_reservation"))
        .and(query_param("uuid", "ad9c9b38-d588-4658-8a4f-8960cad20aa9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "function_name": "fetch_feed",
            "url": "http://example.com/feed.xml"
        })))
        .mount(&server)
        .await;

    let record = client_for(&server)
        .show_reservation("ad9c9b38-d588-4658-8a4f-8960cad20aa9")
        .await
        .unwrap();
    assert_eq!(
        record.get("function_name").and_then(|v| v.as_str()),
        Some("fetch_feed")
    );
}

#[tokio::test]
async fn check_peers_posts_to_peer_check() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/peer/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).check_peers().await.unwrap();
}

#[tokio::test]
async fn refresh_tolerates_one_failed_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/server"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "paused": true
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/exposed_function_details"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let snapshot = client_for(&server).refresh().await;
    assert!(snapshot.connected);
    assert_eq!(snapshot.status.unwrap().paused, Some(true));
    assert!(snapshot.functions.is_none());
    assert!(snapshot.error.is_some());
}

#[tokio::test]
async fn unreachable_server_reports_disconnect() {
    // Port 1 is never listening.
    let config = ServerConfig {
        url: "http://127.0.0.1:1".to_string(),
        ..Default::default()
    };
    let snapshot = SpiderClient::new(&config).refresh().await;
    assert!(!snapshot.connected);
    assert!(snapshot.status.is_none());
    assert!(snapshot.error.is_some());
}
