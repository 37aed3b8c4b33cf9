//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use storefront_core::config::AppConfig;
use storefront_core::types::{BrandId, CategoryId, ProductId};
use storefront_entity::category::{CategoryForest, CategoryNode};
use storefront_entity::product::{Product, ProductAttribute};
use storefront_service::source::{CatalogSnapshot, SnapshotCatalog};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a new test application over the fixture catalog
    pub fn new() -> Self {
        let catalog = SnapshotCatalog::new(fixture_snapshot()).expect("Fixture catalog is valid");
        let state = storefront_api::AppState::new(AppConfig::default(), Arc::new(catalog));
        Self {
            router: storefront_api::build_app(state),
        }
    }

    /// Send a GET request and decode the JSON body
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of the response envelope
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }
}

fn node(id: i64, name: &str, slug: &str, children: Vec<CategoryNode>) -> CategoryNode {
    CategoryNode {
        id: CategoryId(id),
        parent_id: None,
        name: name.to_string(),
        slug: slug.to_string(),
        level: 0,
        product_count: None,
        children,
    }
}

fn product(id: i64, name: &str, category: i64, price: f64, brand: i64) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        price,
        rating: Some(4.0),
        brand_id: Some(BrandId(brand)),
        category_id: CategoryId(category),
        attributes: Vec::new(),
    }
}

/// ```text
/// Electronics(1)
/// ├── Phones(2)
/// │   ├── Smartphones(3)
/// │   └── Accessories(5)
/// └── Laptops(4)
/// Home(10)
/// └── Kitchen(11)
/// ```
///
/// Levels and parent ids are recomputed by the snapshot catalog.
pub fn fixture_snapshot() -> CatalogSnapshot {
    let phones = node(
        2,
        "Phones",
        "phones",
        vec![
            node(3, "Smartphones", "smartphones", vec![]),
            node(5, "Phone Accessories", "accessories", vec![]),
        ],
    );
    let electronics = node(
        1,
        "Electronics",
        "electronics",
        vec![phones, node(4, "Laptops", "laptops", vec![])],
    );
    let home = node(10, "Home", "home", vec![node(11, "Kitchen", "kitchen", vec![])]);

    let mut laptop = product(201, "Ultrabook 14", 4, 1299.0, 3);
    laptop.attributes.push(ProductAttribute {
        name: "Color".to_string(),
        values: vec!["Silver".to_string(), "Graphite".to_string()],
    });

    CatalogSnapshot {
        categories: CategoryForest::new(vec![electronics, home]),
        products: vec![
            product(101, "Pixel 9", 3, 799.0, 1),
            product(102, "Galaxy S25", 3, 899.0, 2),
            product(103, "Budget Phone", 3, 199.0, 1),
            product(105, "Red Phone Case", 5, 19.0, 2),
            laptop,
            product(301, "Chef Knife", 11, 59.0, 4),
        ],
    }
}
