mod helpers;

use helpers::{minimal_pdf, setup_test_app, upload_pdf};
use pdf2docx_core::ConversionRecord;

#[tokio::test]
async fn test_history_empty_initially() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client.get("/api/history").await;
    assert_eq!(response.status_code(), 200);

    let data: serde_json::Value = response.json();
    assert_eq!(data.as_array().map(|a| a.len()), Some(0));
}

#[tokio::test]
async fn test_history_most_recent_first() {
    let app = setup_test_app().await;
    let client = app.client();

    for name in ["a.pdf", "b.pdf", "c.pdf"] {
        let response = upload_pdf(client, minimal_pdf(name), name).await;
        assert_eq!(response.status_code(), 200);
    }

    let response = client.get("/api/history").await;
    assert_eq!(response.status_code(), 200);

    let records: Vec<serde_json::Value> = response.json();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["originalName"], "c.pdf");
    assert_eq!(records[1]["originalName"], "b.pdf");
    assert_eq!(records[2]["originalName"], "a.pdf");
    assert_eq!(records[0]["status"], "completed");
}

#[tokio::test]
async fn test_history_capped_at_20() {
    let app = setup_test_app().await;
    let client = app.client();

    for i in 0..25 {
        app.state.history.record(ConversionRecord::completed(
            format!("{}.pdf", i),
            format!("{}.docx", i),
        ));
    }

    let response = client.get("/api/history").await;
    let records: Vec<serde_json::Value> = response.json();
    assert_eq!(records.len(), 20);
    // the 20 most recent: 24 down to 5
    assert_eq!(records[0]["originalName"], "24.pdf");
    assert_eq!(records[19]["originalName"], "5.pdf");
}

#[tokio::test]
async fn test_history_contains_expected_record_shape() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = upload_pdf(client, minimal_pdf("shape"), "shape.pdf").await;
    assert_eq!(response.status_code(), 200);

    let records: Vec<serde_json::Value> = client.get("/api/history").await.json();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert!(record["id"].as_str().is_some());
    assert_eq!(record["originalName"], "shape.pdf");
    assert_eq!(record["status"], "completed");
    assert!(record["fileName"].as_str().unwrap().ends_with(".docx"));
    assert!(record["downloadUrl"]
        .as_str()
        .unwrap()
        .starts_with("/downloads/"));
    assert!(record["createdAt"].as_str().is_some());
    assert!(record.get("error").is_none());
}
