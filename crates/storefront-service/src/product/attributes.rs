//! Colour options for the product detail view.

use serde::Serialize;
use storefront_entity::product::Product;

/// Name of the structured colour attribute.
pub const COLOR_ATTRIBUTE: &str = "Color";

/// Colour words recognised by the name fallback, checked in order.
const FALLBACK_COLORS: [&str; 10] = [
    "black", "white", "red", "blue", "green", "yellow", "pink", "purple", "silver", "gold",
];

/// Where a product's colour options came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSource {
    /// The product's structured `Color` attribute.
    Structured,
    /// Inferred from a colour word in the product name.
    NameFallback,
    /// No colour information.
    None,
}

/// Colour options shown for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorOptions {
    pub values: Vec<String>,
    pub source: ColorSource,
}

/// Colour options for `product`.
///
/// A structured `Color` attribute with at least one value is returned
/// as-is. Otherwise the name is scanned for a single known colour word;
/// the result is marked [`ColorSource::NameFallback`] so callers can
/// present it as a guess.
pub fn color_options(product: &Product) -> ColorOptions {
    if let Some(attr) = product
        .attribute(COLOR_ATTRIBUTE)
        .filter(|a| !a.values.is_empty())
    {
        return ColorOptions {
            values: attr.values.clone(),
            source: ColorSource::Structured,
        };
    }

    let name = product.name.to_lowercase();
    let guessed = FALLBACK_COLORS.iter().find(|color| {
        name.split(|c: char| !c.is_alphanumeric())
            .any(|word| word == **color)
    });

    match guessed {
        Some(color) => ColorOptions {
            values: vec![capitalize(color)],
            source: ColorSource::NameFallback,
        },
        None => ColorOptions {
            values: Vec::new(),
            source: ColorSource::None,
        },
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
