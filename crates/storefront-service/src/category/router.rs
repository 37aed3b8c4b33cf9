//! Route planning for the category catch-all segment.

use serde::Serialize;

use super::path;

/// Which category query an incoming nested path calls for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoutePlan {
    /// No segments: list the roots, no single-category query.
    RootBrowse,
    /// One segment: query by flat slug.
    FlatLookup { slug: String },
    /// Two or more segments: query by nested path.
    NestedLookup { path: String },
}

impl RoutePlan {
    /// Plan the lookup for a raw route value. Empty segments are dropped first.
    pub fn plan(raw: &str) -> Self {
        let segments = path::decode(raw);
        match segments.as_slice() {
            [] => Self::RootBrowse,
            [slug] => Self::FlatLookup {
                slug: (*slug).to_string(),
            },
            _ => Self::NestedLookup {
                path: path::encode(segments.as_slice()),
            },
        }
    }

    /// Normalized nested path this plan was built from.
    pub fn path(&self) -> &str {
        match self {
            Self::RootBrowse => "",
            Self::FlatLookup { slug } => slug,
            Self::NestedLookup { path } => path,
        }
    }

    /// Slugs of the normalized path.
    pub fn segments(&self) -> Vec<&str> {
        path::decode(self.path())
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RootBrowse => "root_browse",
            Self::FlatLookup { .. } => "flat_lookup",
            Self::NestedLookup { .. } => "nested_lookup",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment_uses_flat_lookup() {
        assert_eq!(
            RoutePlan::plan("electronics"),
            RoutePlan::FlatLookup {
                slug: "electronics".to_string()
            }
        );
        assert_eq!(RoutePlan::plan("/electronics/").kind(), "flat_lookup");
    }

    #[test]
    fn test_multiple_segments_use_nested_lookup() {
        let plan = RoutePlan::plan("electronics//phones/");
        assert_eq!(
            plan,
            RoutePlan::NestedLookup {
                path: "electronics/phones".to_string()
            }
        );
        assert_eq!(plan.segments(), vec!["electronics", "phones"]);
    }

    #[test]
    fn test_empty_route_browses_roots() {
        for raw in ["", "/", "//"] {
            let plan = RoutePlan::plan(raw);
            assert_eq!(plan, RoutePlan::RootBrowse);
            assert_eq!(plan.path(), "");
            assert!(plan.segments().is_empty());
        }
    }
}
