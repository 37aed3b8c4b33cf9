//! Integration tests for the catch-all category page endpoint.

mod helpers;

use http::StatusCode;
use serde_json::Value;

fn ids(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_nested_path_resolves() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/catalog/electronics/phones/smartphones").await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["route"]["state"], "resolved");
    assert_eq!(data["route"]["categoryId"], 3);
    assert_eq!(data["route"]["lookup"], "nested_lookup");
    assert_eq!(data["category"]["id"], 3);

    let names: Vec<&str> = data["breadcrumbs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Electronics", "Phones", "Smartphones"]);
    assert_eq!(ids(&data["expanded"]), vec![1, 2, 3]);
    assert_eq!(data["products"]["total"], 3);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/catalog/electronics/phones/tablets").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.data()["route"]["state"], "not_found");
    assert!(response.data()["breadcrumbs"].as_array().unwrap().is_empty());
    assert!(response.data().get("products").is_none());
}

#[tokio::test]
async fn test_single_segment_uses_flat_lookup() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/catalog/electronics").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["route"]["lookup"], "flat_lookup");
    assert_eq!(response.data()["category"]["productCount"], 5);
    assert_eq!(response.data()["category"]["children"][0]["productCount"], 4);
}

#[tokio::test]
async fn test_root_browse_with_selection() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/catalog?selected=3").await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["route"]["state"], "root_browse");
    assert_eq!(ids(&data["expanded"]), vec![1, 2]);
    assert_eq!(ids(&data["selected"]), vec![3]);
    assert_eq!(data["products"]["total"], 3);
    assert_eq!(data["forest"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_selection_overrides_route_category() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/catalog/electronics?selected=11").await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["route"]["categoryId"], 1);
    assert_eq!(data["products"]["total"], 1);
    assert_eq!(data["products"]["items"][0]["id"], 301);
}

#[tokio::test]
async fn test_filters_and_pagination() {
    let app = helpers::TestApp::new();

    let response = app
        .get("/api/catalog/electronics/phones?brands=1%2C2&maxPrice=900&minPrice=oops&offset=2&limit=2")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["filters"], "brands=1%2C2&maxPrice=900");
    assert_eq!(data["products"]["total"], 4);
    assert_eq!(data["products"]["offset"], 2);
    assert_eq!(data["products"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(data["products"]["hasNext"], false);
    assert!(data["products"].get("has_next").is_none());
}

#[tokio::test]
async fn test_expanded_seed_is_kept() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/catalog/home/kitchen?expanded=2").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.data()["expanded"]), vec![2, 10, 11]);
}

#[tokio::test]
async fn test_invalid_limit_rejected() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/catalog/electronics?limit=0").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
