//! API integration tests
//!
//! These run against a live server with the fixture loaded by
//! `cargo run --bin seed`: an admin account (admin/admin), an owner
//! account (maria/maria) holding two active farms and one archived
//! farm, and a plain account with no owner record (pedro/pedro).

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to get an authenticated client token
async fn get_auth_token(client: &Client, login: &str, password: &str) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": login,
            "password": password
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response
        .json()
        .await
        .expect("Failed to parse login response");
    body["token"]
        .as_str()
        .expect("No token in response")
        .to_string()
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

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["user"]["is_admin"], true);
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[ignore]
async fn test_get_current_user() {
    let client = Client::new();
    let token = get_auth_token(&client, "maria", "maria").await;

    let response = client
        .get(format!("{}/auth/me", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["login"], "maria");
    assert!(body["owner_id"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_list_farms_as_owner() {
    let client = Client::new();
    let token = get_auth_token(&client, "maria", "maria").await;

    let response = client
        .get(format!("{}/farms", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let farms = body.as_array().expect("Expected a farm array");
    // The fixture owner has three farms, one of them archived
    assert_eq!(farms.len(), 2);
    assert!(farms.iter().all(|f| f["archived"] == false));
    assert!(farms.iter().all(|f| f["name"] != "La Vieja"));
}

#[tokio::test]
#[ignore]
async fn test_farm_statistics_as_owner() {
    let client = Client::new();
    let token = get_auth_token(&client, "maria", "maria").await;

    let response = client
        .get(format!("{}/reports/farm-statistics", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);

    let data = &body["data"];
    let summary = &data["summary"];
    let farms = data["farms"].as_array().expect("farms array");
    let herds = data["herds"].as_array().expect("herds array");

    // Exact fixture totals. The archived farm, the archived herd, the
    // archived animal and everything hanging off them stay out of scope;
    // the caretaker on the archived farm is excluded through its farm.
    assert_eq!(summary["total_farms"], 2);
    assert_eq!(summary["total_herds"], 3);
    assert_eq!(summary["total_animals"], 4);
    assert_eq!(summary["total_personnel"], 1);
    assert_eq!(data["animals_by_sex"]["female"], 3);
    assert_eq!(data["animals_by_sex"]["male"], 1);
    assert!(data["animals_by_sex"].get("unknown").is_none());
    assert!(farms.iter().all(|f| f["name"] != "La Vieja"));
    assert!(herds.iter().all(|h| h["name"] != "Retiradas"));
    assert!(herds.iter().all(|h| h["name"] != "Fantasma"));

    // Summary totals agree with the detail rows
    assert_eq!(summary["total_farms"].as_i64().unwrap(), farms.len() as i64);
    assert_eq!(summary["total_herds"].as_i64().unwrap(), herds.len() as i64);

    let animals_from_farms: i64 = farms
        .iter()
        .map(|f| f["animal_count"].as_i64().unwrap())
        .sum();
    assert_eq!(summary["total_animals"].as_i64().unwrap(), animals_from_farms);

    let animals_by_sex: i64 = data["animals_by_sex"]
        .as_object()
        .expect("animals_by_sex map")
        .values()
        .map(|v| v.as_i64().unwrap())
        .sum();
    assert_eq!(summary["total_animals"].as_i64().unwrap(), animals_by_sex);

    let personnel_by_type: i64 = data["personnel_by_type"]
        .as_object()
        .expect("personnel_by_type map")
        .values()
        .map(|v| v.as_i64().unwrap())
        .sum();
    assert_eq!(
        summary["total_personnel"].as_i64().unwrap(),
        personnel_by_type
    );
}

#[tokio::test]
#[ignore]
async fn test_farm_statistics_unknown_owner_as_admin() {
    let client = Client::new();
    let token = get_auth_token(&client, "admin", "admin").await;

    let response = client
        .get(format!(
            "{}/reports/farm-statistics?owner_id=999999",
            BASE_URL
        ))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Owner not found");
}

#[tokio::test]
#[ignore]
async fn test_farm_statistics_foreign_farm_filter() {
    let client = Client::new();
    let token = get_auth_token(&client, "maria", "maria").await;

    // A farm id outside the owner's scope yields an empty farm set
    let response = client
        .get(format!("{}/reports/farm-statistics?farm_id=999999", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "No farms found");
}

#[tokio::test]
#[ignore]
async fn test_farm_statistics_without_owner_account() {
    let client = Client::new();
    let token = get_auth_token(&client, "pedro", "pedro").await;

    let response = client
        .get(format!("{}/reports/farm-statistics", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User is not an owner");
}

/// Fetch one of maria's farms by name
async fn get_farm_id(client: &Client, token: &str, name: &str) -> i64 {
    let body: Value = client
        .get(format!("{}/farms", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    body.as_array()
        .expect("Expected a farm array")
        .iter()
        .find(|f| f["name"] == name)
        .and_then(|f| f["id"].as_i64())
        .expect("Farm not in fixture")
}

#[tokio::test]
#[ignore]
async fn test_list_farm_animals_with_sex_filter() {
    let client = Client::new();
    let token = get_auth_token(&client, "maria", "maria").await;
    let farm_id = get_farm_id(&client, &token, "La Esperanza").await;

    let response = client
        .get(format!("{}/farms/{}/animals", BASE_URL, farm_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let animals = body.as_array().expect("Expected an animal array");
    // Archived animals and archived herds are excluded
    assert_eq!(animals.len(), 3);
    assert!(animals.iter().all(|a| a["archived"] == false));

    let response = client
        .get(format!("{}/farms/{}/animals?sex=female", BASE_URL, farm_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    let females = body.as_array().expect("Expected an animal array");
    assert_eq!(females.len(), 2);
    assert!(females.iter().all(|a| a["sex"] == "female"));
}

#[tokio::test]
#[ignore]
async fn test_list_farm_personnel() {
    let client = Client::new();
    let token = get_auth_token(&client, "maria", "maria").await;
    let farm_id = get_farm_id(&client, &token, "La Esperanza").await;

    let response = client
        .get(format!("{}/farms/{}/personnel", BASE_URL, farm_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let personnel = body.as_array().expect("Expected a personnel array");
    assert_eq!(personnel.len(), 1);
    assert_eq!(personnel[0]["worker_type"], "caretaker");
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/reports/farm-statistics", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}
