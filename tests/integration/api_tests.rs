//! API integration tests (require a running server and database)

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to create an equipment, ignoring conflicts from previous runs
async fn ensure_equipment(client: &Client, id: &str) {
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "id": id,
            "name": format!("Test equipment {}", id),
            "category": "industrial",
            "is_critical": true
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status() == 201 || response.status() == 409);
}

async fn create_order(client: &Client, equipment_id: &str, kind: &str) -> Value {
    let response = client
        .post(format!("{}/work-orders", BASE_URL))
        .json(&json!({
            "equipment_id": equipment_id,
            "maintenance_type": kind,
            "scheduled_date": "2026-01-10",
            "man_hours": [{ "maintainer": "Ana", "hours": 4.0 }]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

async fn transition(client: &Client, id: &str, body: Value) -> reqwest::Response {
    client
        .post(format!("{}/work-orders/{}/transition", BASE_URL, id))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_unknown_equipment() {
    let client = Client::new();

    let response = client
        .get(format!("{}/equipment/does-not-exist", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_work_order_lifecycle() {
    let client = Client::new();
    ensure_equipment(&client, "IT-E1").await;

    let order = create_order(&client, "IT-E1", "corrective").await;
    let id = order["id"].as_str().expect("No order ID").to_string();
    assert_eq!(order["status"], "scheduled");
    assert!(order["end_date"].is_null());

    // Prepare
    let response = client
        .post(format!("{}/work-orders/prepare", BASE_URL))
        .json(&json!({ "ids": [id] }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["prepared"][0]["is_prepared"], true);

    // Execute with an explicit end date
    let response = transition(&client, &id, json!({ "status": "executed", "end_date": "2026-01-10" })).await;
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["end_date"], "2026-01-10");

    // Deactivate, then nothing else is allowed
    let response = transition(&client, &id, json!({ "status": "deactivated" })).await;
    assert!(response.status().is_success());
    let response = transition(&client, &id, json!({ "status": "scheduled" })).await;
    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "InvalidTransition");

    // Cleanup
    let response = client
        .delete(format!("{}/work-orders/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_next_number() {
    let client = Client::new();

    let response = client
        .get(format!("{}/work-orders/next-number", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let number = body["number"].as_str().expect("No number");
    assert!(number.len() >= 4);
    assert!(number.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
#[ignore]
async fn test_reliability_invalid_range() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/reliability?equipment_ids=IT-E1&start_date=2026-12-31&end_date=2026-01-01",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_reliability_compute() {
    let client = Client::new();

    let response = client
        .post(format!("{}/reliability/compute", BASE_URL))
        .json(&json!({
            "equipment_ids": ["E1", "E2"],
            "start_date": "2026-01-01",
            "end_date": "2026-12-31",
            "work_orders": [{
                "id": "OS-0001",
                "equipment_id": "E1",
                "maintenance_type": 1,
                "status": 2,
                "scheduled_date": "2026-01-10",
                "end_date": "2026-01-10",
                "man_hours": [{ "maintainer": "Ana", "hours": 4.0 }]
            }]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["metrics"]["E1"]["mtbf"], 8756.0);
    assert_eq!(body["metrics"]["E1"]["mttr"], 4.0);
    assert!(body["metrics"]["E2"]["mtbf"].is_null());
    assert_eq!(body["metrics"]["E2"]["availability"], 100.0);
}

#[tokio::test]
#[ignore]
async fn test_reliability_compute_skips_unparseable_records() {
    let client = Client::new();

    let response = client
        .post(format!("{}/reliability/compute", BASE_URL))
        .json(&json!({
            "equipment_ids": ["E1"],
            "start_date": "2026-01-01",
            "end_date": "2026-12-31",
            "work_orders": [
                {
                    "id": "OS-0001",
                    "equipment_id": "E1",
                    "maintenance_type": 1,
                    "status": 2,
                    "scheduled_date": "2026-01-10",
                    "end_date": "2026-01-10",
                    "man_hours": [{ "maintainer": "Ana", "hours": 4.0 }]
                },
                {
                    "id": "OS-0002",
                    "equipment_id": "E1",
                    "maintenance_type": 1,
                    "status": 2,
                    "scheduled_date": "2026-02-30"
                }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["skipped_records"], 1);
    assert_eq!(body["metrics"]["E1"]["total_failures"], 1);
}

#[tokio::test]
#[ignore]
async fn test_concurrent_creates_never_fail_with_server_error() {
    let client = Client::new();
    ensure_equipment(&client, "IT-E2").await;

    let body = json!({
        "equipment_id": "IT-E2",
        "maintenance_type": "preventive",
        "scheduled_date": "2026-01-10"
    });
    let url = format!("{}/work-orders", BASE_URL);
    let (a, b) = tokio::join!(
        client.post(&url).json(&body).send(),
        client.post(&url).json(&body).send()
    );

    for response in [a, b] {
        let response = response.expect("Failed to send request");
        assert!(response.status() == 201 || response.status() == 409);
        if response.status() == 201 {
            let order: Value = response.json().await.expect("Failed to parse response");
            let id = order["id"].as_str().expect("No order ID");
            client
                .delete(format!("{}/work-orders/{}", BASE_URL, id))
                .send()
                .await
                .expect("Failed to send request");
        }
    }
}
