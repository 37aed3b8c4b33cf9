//! Integration tests for category listing, breadcrumb and path endpoints.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.data()["status"], "ok");
}

#[tokio::test]
async fn test_list_categories_tree() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/categories").await;

    assert_eq!(response.status, StatusCode::OK);
    let roots = response.data().as_array().unwrap();
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0]["slug"], "electronics");
    assert_eq!(roots[0]["children"][0]["children"][0]["slug"], "smartphones");
    assert_eq!(roots[0]["children"][0]["children"][0]["level"], 2);
}

#[tokio::test]
async fn test_list_categories_by_parent_without_children() {
    let app = helpers::TestApp::new();

    let response = app
        .get("/api/categories?parent_id=1&include_children=false")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let slugs: Vec<&str> = response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["phones", "laptops"]);
    assert!(response.data()[0]["children"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_categories_rejects_excessive_depth() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/categories?max_depth=500").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_breadcrumbs_for_deep_category() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/categories/3/breadcrumbs").await;

    assert_eq!(response.status, StatusCode::OK);
    let crumbs = response.data().as_array().unwrap();
    let paths: Vec<&str> = crumbs.iter().map(|c| c["path"].as_str().unwrap()).collect();
    assert_eq!(
        paths,
        vec!["electronics", "electronics/phones", "electronics/phones/smartphones"]
    );
    assert_eq!(crumbs[0]["linkable"], true);
    assert_eq!(crumbs[2]["linkable"], false);
}

#[tokio::test]
async fn test_breadcrumbs_unknown_category() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/categories/999/breadcrumbs").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_path_of_category() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/categories/5/path").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["id"], 5);
    assert_eq!(response.data()["path"], "electronics/phones/accessories");
}

#[tokio::test]
async fn test_path_with_invalid_id() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/categories/abc/path").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_product_colors() {
    let app = helpers::TestApp::new();

    let structured = app.get("/api/products/201/colors").await;
    assert_eq!(structured.status, StatusCode::OK);
    assert_eq!(structured.data()["source"], "structured");
    assert_eq!(structured.data()["values"][1], "Graphite");

    let guessed = app.get("/api/products/105/colors").await;
    assert_eq!(guessed.data()["source"], "name_fallback");
    assert_eq!(guessed.data()["values"][0], "Red");

    let missing = app.get("/api/products/9999/colors").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
