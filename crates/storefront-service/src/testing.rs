//! Shared fixtures for unit tests.

use storefront_core::types::{BrandId, CategoryId, ProductId};
use storefront_entity::category::{CategoryForest, CategoryNode};
use storefront_entity::product::{Product, ProductAttribute};

use crate::source::CatalogSnapshot;

pub(crate) fn node(id: i64, parent: Option<i64>, name: &str, slug: &str, level: u32) -> CategoryNode {
    CategoryNode {
        id: CategoryId(id),
        parent_id: parent.map(CategoryId),
        name: name.to_string(),
        slug: slug.to_string(),
        level,
        product_count: None,
        children: Vec::new(),
    }
}

pub(crate) fn with_children(mut parent: CategoryNode, children: Vec<CategoryNode>) -> CategoryNode {
    parent.children = children;
    parent
}

/// ```text
/// Electronics(1)
/// ├── Phones(2)
/// │   ├── Smartphones(3)
/// │   └── Accessories(5)
/// └── Laptops(4)
///     └── Accessories(6)
/// Home(10)
/// └── Kitchen(11)
/// ```
pub(crate) fn sample_forest() -> CategoryForest {
    let phones = with_children(
        node(2, Some(1), "Phones", "phones", 1),
        vec![
            node(3, Some(2), "Smartphones", "smartphones", 2),
            node(5, Some(2), "Phone Accessories", "accessories", 2),
        ],
    );
    let laptops = with_children(
        node(4, Some(1), "Laptops", "laptops", 1),
        vec![node(6, Some(4), "Laptop Accessories", "accessories", 2)],
    );
    let electronics = with_children(
        node(1, None, "Electronics", "electronics", 0),
        vec![phones, laptops],
    );
    let home = with_children(
        node(10, None, "Home", "home", 0),
        vec![node(11, Some(10), "Kitchen", "kitchen", 1)],
    );
    CategoryForest::new(vec![electronics, home])
}

pub(crate) fn product(id: i64, name: &str, category: i64, price: f64, brand: i64) -> Product {
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

pub(crate) fn sample_snapshot() -> CatalogSnapshot {
    let mut red_case = product(105, "Red Phone Case", 5, 19.0, 2);
    red_case.rating = Some(3.0);
    let mut laptop = product(201, "Ultrabook 14", 4, 1299.0, 3);
    laptop.attributes.push(ProductAttribute {
        name: "Color".to_string(),
        values: vec!["Silver".to_string(), "Graphite".to_string()],
    });

    CatalogSnapshot {
        categories: sample_forest(),
        products: vec![
            product(101, "Pixel 9", 3, 799.0, 1),
            product(102, "Galaxy S25", 3, 899.0, 2),
            product(103, "Budget Phone", 3, 199.0, 1),
            red_case,
            laptop,
            product(301, "Chef Knife", 11, 59.0, 4),
        ],
    }
}
