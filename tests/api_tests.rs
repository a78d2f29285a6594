//! HTTP round trip tests against a bound server

use scrawl::api;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;

mod common;
use common::service;

/// Serve the API on an ephemeral port, returning its base URL.
async fn spawn_api() -> (TempDir, String) {
    let (temp, service) = service();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = api::router(Arc::new(service));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (temp, format!("http://{}", addr))
}

fn hello_entry() -> Value {
    json!({
        "title": "Hello",
        "author": "Amy",
        "body": "World",
        "slug": "hello"
    })
}

#[tokio::test]
async fn test_create_and_get_over_http() {
    let (_temp, base) = spawn_api().await;
    let client = reqwest::Client::new();

    let created = client
        .post(format!("{}/entries", base))
        .json(&hello_entry())
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), 201);

    let fetched = client
        .get(format!("{}/entries/hello", base))
        .send()
        .await
        .unwrap();
    assert_eq!(fetched.status(), 200);

    let entry: Value = fetched.json().await.unwrap();
    assert_eq!(entry, hello_entry());
}

#[tokio::test]
async fn test_duplicate_create_is_conflict() {
    let (_temp, base) = spawn_api().await;
    let client = reqwest::Client::new();

    let url = format!("{}/entries", base);
    assert_eq!(client.post(&url).json(&hello_entry()).send().await.unwrap().status(), 201);

    let second = client.post(&url).json(&hello_entry()).send().await.unwrap();
    assert_eq!(second.status(), 409);

    let body: Value = second.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_get_missing_entry_is_404() {
    let (_temp, base) = spawn_api().await;

    let response = reqwest::get(format!("{}/entries/nope", base)).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_invalid_slug_is_bad_request() {
    let (_temp, base) = spawn_api().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/entries", base))
        .json(&json!({
            "title": "Hello",
            "author": "Amy",
            "body": "World",
            "slug": "has space"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_patch_merges_fields() {
    let (_temp, base) = spawn_api().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/entries", base))
        .json(&hello_entry())
        .send()
        .await
        .unwrap();

    let patched = client
        .patch(format!("{}/entries/hello", base))
        .json(&json!({ "body": "World!" }))
        .send()
        .await
        .unwrap();
    assert_eq!(patched.status(), 200);

    let entry: Value = patched.json().await.unwrap();
    assert_eq!(entry["title"], "Hello");
    assert_eq!(entry["author"], "Amy");
    assert_eq!(entry["body"], "World!");
}

#[tokio::test]
async fn test_list_returns_created_entries() {
    let (_temp, base) = spawn_api().await;
    let client = reqwest::Client::new();

    for slug in ["one", "two"] {
        client
            .post(format!("{}/entries", base))
            .json(&json!({
                "title": slug,
                "author": "Amy",
                "body": "text",
                "slug": slug
            }))
            .send()
            .await
            .unwrap();
    }

    let listed: Value = reqwest::get(format!("{}/entries", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let slugs: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs.len(), 2);
    assert!(slugs.contains(&"one"));
    assert!(slugs.contains(&"two"));
}
