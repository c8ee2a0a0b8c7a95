mod common;

use common::{spawn_app, TestApp};
use reqwest::Client;
use serde_json::json;

/// Inserts three companies in order, oldest first.
async fn seed(app: &TestApp, client: &Client) {
    for (name, country, positions) in [
        ("Acme Corp", "USA", json!(["Backend Engineer", "SRE"])),
        ("Globex Corp", "Canada", json!(["Frontend Engineer"])),
        ("Initech GmbH", "Germany", json!([])),
    ] {
        let response = client
            .post(&format!("{}/add_company", app.address))
            .json(&json!({
                "companyName": name,
                "country": country,
                "availablePositions": positions
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), 201);
    }
}

fn names(companies: &serde_json::Value) -> Vec<&str> {
    companies
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|c| c["companyName"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn returns_all_companies_newest_first() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    seed(&app, &client).await;

    let response = client
        .get(&format!("{}/get_companies", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let companies: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        names(&companies),
        vec!["Initech GmbH", "Globex Corp", "Acme Corp"]
    );
}

#[tokio::test]
async fn company_filter_matches_case_insensitive_substrings() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    seed(&app, &client).await;

    let companies: serde_json::Value = client
        .get(&format!("{}/get_companies", app.address))
        .query(&[("company", "acm")])
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(names(&companies), vec!["Acme Corp"]);

    let companies: serde_json::Value = client
        .get(&format!("{}/get_companies", app.address))
        .query(&[("company", "ACME")])
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(names(&companies), vec!["Acme Corp"]);

    let companies: serde_json::Value = client
        .get(&format!("{}/get_companies", app.address))
        .query(&[("company", "zzz")])
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert!(companies.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn country_filter_matches_case_insensitive_substrings() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    seed(&app, &client).await;

    let companies: serde_json::Value = client
        .get(&format!("{}/get_companies", app.address))
        .query(&[("country", "usa")])
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(names(&companies), vec!["Acme Corp"]);
}

#[tokio::test]
async fn position_filter_requires_exact_membership() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    seed(&app, &client).await;

    let companies: serde_json::Value = client
        .get(&format!("{}/get_companies", app.address))
        .query(&[("position", "SRE")])
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(names(&companies), vec!["Acme Corp"]);

    // A prefix of a stored position does not count as membership
    let companies: serde_json::Value = client
        .get(&format!("{}/get_companies", app.address))
        .query(&[("position", "Backend")])
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert!(companies.as_array().unwrap().is_empty());

    let companies: serde_json::Value = client
        .get(&format!("{}/get_companies", app.address))
        .query(&[("position", "Backend Engineer")])
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(names(&companies), vec!["Acme Corp"]);
}

#[tokio::test]
async fn filters_combine_with_and() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    seed(&app, &client).await;

    let companies: serde_json::Value = client
        .get(&format!("{}/get_companies", app.address))
        .query(&[("company", "corp")])
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(names(&companies), vec!["Globex Corp", "Acme Corp"]);

    let companies: serde_json::Value = client
        .get(&format!("{}/get_companies", app.address))
        .query(&[("company", "corp"), ("country", "usa")])
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(names(&companies), vec!["Acme Corp"]);
}

#[tokio::test]
async fn empty_parameters_are_ignored() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    seed(&app, &client).await;

    let companies: serde_json::Value = client
        .get(&format!(
            "{}/get_companies?company=&country=&position=",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(companies.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn get_companies_without_a_store_returns_503() {
    let address = spawn_app(None).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/get_companies", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 503);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Service temporarily unavailable");
}
