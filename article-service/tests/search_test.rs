mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::json;

#[tokio::test]
async fn search_returns_only_matching_articles() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    for (id, title, content) in [
        ("a", "Ownership in practice", "Moves, borrows and lifetimes"),
        ("b", "Weeknight pasta", "Boil water, add salt"),
    ] {
        let response = client
            .post(format!("{}/articles", app.address))
            .json(&json!({ "Id": id, "Title": title, "Content": content }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(200, response.status().as_u16());
    }

    let response = client
        .get(format!("{}/articles/search", app.address))
        .query(&[("q", "ownership")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let matches = body.as_array().expect("expected a JSON array");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["Id"], "a");

    app.cleanup().await;
}

#[tokio::test]
async fn search_matches_subtitle_and_content_too() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/articles", app.address))
        .json(&json!({
            "Id": "c",
            "Title": "Untitled",
            "Subtitle": "a study of espresso",
            "Content": "grind size matters"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(200, response.status().as_u16());

    for term in ["espresso", "grind"] {
        let response = client
            .get(format!("{}/articles/search", app.address))
            .query(&[("q", term)])
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(200, response.status().as_u16());
        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(body.as_array().map(|a| a.len()), Some(1), "term: {}", term);
    }

    app.cleanup().await;
}

// A missing or blank `q` is rejected at the boundary. A 400 here (not a
// 404) also proves the search route is matched ahead of the {id} lookup.
#[tokio::test]
async fn search_without_query_parameter_returns_400() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    for url in [
        format!("{}/articles/search", app.address),
        format!("{}/articles/search?q=", app.address),
        format!("{}/articles/search?q=%20", app.address),
    ] {
        let response = client
            .get(&url)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(400, response.status().as_u16(), "url: {}", url);
        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(body["status"], 400);
    }

    app.cleanup().await;
}
