//! Product listing filters and their query-string form.
//!
//! The storefront keeps the active filters in the URL: `brands` as
//! comma-joined ids, `minPrice`, `maxPrice` and `minRating` as numbers.
//! Every change rewrites the whole filter portion of the query string,
//! so the string alone always describes the state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use storefront_core::types::BrandId;
use url::form_urlencoded;

use super::model::Product;

/// Query-string key for the brand set.
pub const BRANDS_KEY: &str = "brands";
/// Query-string key for the lower price bound.
pub const MIN_PRICE_KEY: &str = "minPrice";
/// Query-string key for the upper price bound.
pub const MAX_PRICE_KEY: &str = "maxPrice";
/// Query-string key for the rating floor.
pub const MIN_RATING_KEY: &str = "minRating";

/// Brand/price/rating filters applied to a product listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Only products from these brands (empty = any brand).
    #[serde(default)]
    pub brands: BTreeSet<BrandId>,
    /// Inclusive lower price bound.
    #[serde(default)]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    #[serde(default)]
    pub max_price: Option<f64>,
    /// Inclusive rating floor.
    #[serde(default)]
    pub min_rating: Option<f64>,
}

impl FilterState {
    /// Whether no filter is active.
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_rating.is_none()
    }

    /// Parse filters from a raw query string (with or without a leading `?`).
    ///
    /// Unknown keys are ignored. Entries that do not parse are dropped
    /// rather than rejected.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                BRANDS_KEY => {
                    state.brands.extend(
                        value
                            .split(',')
                            .filter_map(|raw| raw.parse::<BrandId>().ok()),
                    );
                }
                MIN_PRICE_KEY => state.min_price = parse_bound(&value),
                MAX_PRICE_KEY => state.max_price = parse_bound(&value),
                MIN_RATING_KEY => state.min_rating = parse_bound(&value),
                _ => {}
            }
        }

        state
    }

    /// Serialize the active filters. Inactive filters are omitted.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        self.append_pairs(&mut out);
        out.finish()
    }

    /// Whether a product passes every active filter.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.brands.is_empty() {
            match product.brand_id {
                Some(brand) if self.brands.contains(&brand) => {}
                _ => return false,
            }
        }
        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }
        if let Some(floor) = self.min_rating {
            if product.rating.is_none_or(|r| r < floor) {
                return false;
            }
        }
        true
    }

    fn append_pairs(&self, out: &mut form_urlencoded::Serializer<'_, String>) {
        if !self.brands.is_empty() {
            let joined = self
                .brands
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(",");
            out.append_pair(BRANDS_KEY, &joined);
        }
        if let Some(v) = self.min_price {
            out.append_pair(MIN_PRICE_KEY, &v.to_string());
        }
        if let Some(v) = self.max_price {
            out.append_pair(MAX_PRICE_KEY, &v.to_string());
        }
        if let Some(v) = self.min_rating {
            out.append_pair(MIN_RATING_KEY, &v.to_string());
        }
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
