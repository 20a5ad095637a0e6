mod helpers;

use helpers::setup_test_app;

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client.get("/api/health").await;
    assert_eq!(response.status_code(), 200);

    let data: serde_json::Value = response.json();
    assert_eq!(data["status"], "ok");

    let timestamp = data["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}
