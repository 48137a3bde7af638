//! API integration tests against a running server and database

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

fn timestamp(value: &Value) -> DateTime<Utc> {
    value
        .as_str()
        .expect("Timestamp is not a string")
        .parse()
        .expect("Timestamp is not RFC 3339")
}

async fn create_tractor(client: &Client) -> Value {
    let response = client
        .post(format!("{}/api/alatpertanian", BASE_URL))
        .json(&json!({
            "name": "Tractor",
            "photo": "x.jpg",
            "price_per_week": 120.5,
            "category": "heavy"
        }))
        .send()
        .await
        .expect("Failed to send create request");

    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse create response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_create_update_delete() {
    let client = Client::new();
    let created = create_tractor(&client).await;
    let id = created["id"].as_i64().expect("No equipment ID");
    assert!(id > 0);
    assert_eq!(created["created_at"], created["updated_at"]);

    let response = client
        .put(format!("{}/api/alatpertanian/{}", BASE_URL, id))
        .json(&json!({"name": "Harvester", "photo": "h.jpg", "price_per_week": 200.0, "category": "heavy"}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["name"], "Harvester");
    assert_eq!(updated["created_at"], created["created_at"]);
    assert!(timestamp(&updated["updated_at"]) > timestamp(&created["updated_at"]));

    let response = client
        .delete(format!("{}/api/alatpertanian/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["deleted"], id);

    let response = client
        .get(format!("{}/api/alatpertanian/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_without_name() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/alatpertanian", BASE_URL))
        .json(&json!({"photo": "x.jpg"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_legacy_list() {
    let client = Client::new();
    create_tractor(&client).await;

    let response = client
        .get(format!("{}/api/legacy/alatpertanian", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(response.headers()["deprecation"], "@1704067200");

    let body: Value = response.json().await.expect("Failed to parse response");
    let items = body.as_array().expect("Expected an array");
    assert!(!items.is_empty());
    assert!(items[0]["photo_url"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_list_newest_first() {
    let client = Client::new();
    let older = create_tractor(&client).await;
    let newer = create_tractor(&client).await;

    let response = client
        .get(format!("{}/api/alatpertanian", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let ids: Vec<i64> = body
        .as_array()
        .expect("Expected an array")
        .iter()
        .filter_map(|e| e["id"].as_i64())
        .collect();
    assert!(ids.windows(2).all(|pair| pair[0] > pair[1]));

    let newer_pos = ids.iter().position(|&id| Some(id) == newer["id"].as_i64());
    let older_pos = ids.iter().position(|&id| Some(id) == older["id"].as_i64());
    assert!(newer_pos < older_pos);
}
