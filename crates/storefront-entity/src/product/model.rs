//! Product model.

use serde::{Deserialize, Serialize};
use storefront_core::types::{BrandId, CategoryId, ProductId};

/// A product as returned by the product listing query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Unit price.
    pub price: f64,
    /// Average review rating, when reviewed.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Brand, when assigned.
    #[serde(default)]
    pub brand_id: Option<BrandId>,
    /// The category the product is listed under.
    pub category_id: CategoryId,
    /// Structured attributes (e.g. `Color`, `Size`).
    #[serde(default)]
    pub attributes: Vec<ProductAttribute>,
}

impl Product {
    /// Look up a structured attribute by name, ignoring case.
    pub fn attribute(&self, name: &str) -> Option<&ProductAttribute> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }
}

/// A named product attribute with its selectable values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttribute {
    /// Attribute name.
    pub name: String,
    /// Selectable values.
    #[serde(default)]
    pub values: Vec<String>,
}
