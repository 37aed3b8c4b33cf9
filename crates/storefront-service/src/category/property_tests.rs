//! Property tests for the path codec, tree index, breadcrumbs and expansion
//! over generated slug chains and forests.

use std::collections::BTreeSet;

use proptest::prelude::*;
use proptest::sample::Index;

use storefront_core::types::CategoryId;
use storefront_entity::category::{CategoryForest, CategoryNode};

use super::{breadcrumb, index, path, ExpansionSet};

/// Slugs drawn per sibling group. Cousins reuse them, siblings never do.
const SLUG_POOL: [&str; 6] = ["accessories", "audio", "phones", "kids", "sale", "new"];
const MAX_SIBLINGS: usize = 4;

#[derive(Debug, Clone)]
struct Shape {
    offset: usize,
    children: Vec<Shape>,
}

fn arb_siblings() -> impl Strategy<Value = Vec<Shape>> {
    Just(Vec::<Shape>::new()).prop_recursive(4, 48, MAX_SIBLINGS as u32, |inner| {
        prop::collection::vec(
            (0..SLUG_POOL.len(), inner).prop_map(|(offset, children)| Shape { offset, children }),
            0..=MAX_SIBLINGS,
        )
    })
}

fn build(
    shapes: &[Shape],
    offset: usize,
    parent: Option<CategoryId>,
    level: u32,
    next_id: &mut i64,
) -> Vec<CategoryNode> {
    shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            let id = CategoryId(*next_id);
            *next_id += 1;
            let slug = SLUG_POOL[(offset + i) % SLUG_POOL.len()];
            CategoryNode {
                id,
                parent_id: parent,
                name: format!("{slug} {}", id.get()),
                slug: slug.to_string(),
                level,
                product_count: None,
                children: build(&shape.children, shape.offset, Some(id), level + 1, next_id),
            }
        })
        .collect()
}

/// Forests of up to four levels with unique sibling slugs.
fn arb_forest() -> impl Strategy<Value = CategoryForest> {
    (0..SLUG_POOL.len(), arb_siblings()).prop_map(|(offset, roots)| {
        let mut next_id = 1;
        CategoryForest::new(build(&roots, offset, None, 0, &mut next_id))
    })
}

fn arb_slugs() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9][a-z0-9_.-]{0,10}", 0..8)
}

fn ids(raw: &[i64]) -> BTreeSet<CategoryId> {
    raw.iter().copied().map(CategoryId).collect()
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(slugs in arb_slugs()) {
        let encoded = path::encode(slugs.as_slice());
        prop_assert_eq!(path::decode(&encoded), slugs.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn prop_normalize_is_idempotent(raw in "[a-z/]{0,24}") {
        let once = path::normalize(&raw);
        prop_assert_eq!(path::normalize(&once), once.clone());
        prop_assert_eq!(path::decode(&raw), path::decode(&once));
    }

    #[test]
    fn prop_every_node_resolves_from_its_path(forest in arb_forest()) {
        for (node, nested) in index::walk(&forest) {
            let found = index::find_by_path(&forest, path::decode(&nested).as_slice());
            prop_assert_eq!(found.map(|n| n.id), Some(node.id));
            prop_assert_eq!(index::path_of(&forest, node.id), Some(nested));
        }
    }

    #[test]
    fn prop_chain_and_breadcrumb_length_match_level(forest in arb_forest()) {
        for (node, _) in index::walk(&forest) {
            let chain = index::ancestors_of(&forest, node.id);
            prop_assert_eq!(chain.len(), node.level as usize + 1);
            prop_assert_eq!(chain.last().map(|n| n.id), Some(node.id));

            let crumbs = breadcrumb::from_category_id(&forest, node.id);
            prop_assert_eq!(crumbs.len(), chain.len());
            prop_assert!(crumbs.iter().rev().skip(1).all(|c| c.linkable));
            prop_assert!(crumbs.last().is_some_and(|c| !c.linkable));
        }
    }

    #[test]
    fn prop_auto_expand_is_monotonic_and_idempotent(
        forest in arb_forest(),
        seed in prop::collection::vec(0i64..64, 0..6),
        selected in prop::collection::vec(0i64..64, 0..4),
        pick in any::<Index>(),
    ) {
        let paths: Vec<String> = index::walk(&forest).map(|(_, p)| p).collect();
        let current = if paths.is_empty() {
            String::new()
        } else {
            paths[pick.index(paths.len())].clone()
        };
        let selected = ids(&selected);
        let initial: ExpansionSet = ids(&seed).into_iter().collect();

        let mut once = initial.clone();
        once.auto_expand(&forest, &current, &selected);
        for id in initial.ids() {
            prop_assert!(once.is_expanded(id));
        }
        for node in index::resolve_path(&forest, &current) {
            prop_assert!(once.is_expanded(node.id));
        }

        let mut twice = once.clone();
        prop_assert_eq!(twice.auto_expand(&forest, &current, &selected), 0);
        prop_assert_eq!(once, twice);
    }
}
