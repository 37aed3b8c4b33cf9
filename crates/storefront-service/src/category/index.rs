//! Lookups over a category forest.
//!
//! Every function here is total: a miss yields `None` or an empty chain,
//! never an error. Trees are shallow, so all lookups are plain recursive
//! depth-first descents without any index.

use storefront_core::types::CategoryId;
use storefront_entity::category::{CategoryForest, CategoryNode};

use super::path;

/// Find a node anywhere in the forest by id.
pub fn find_by_id(forest: &CategoryForest, id: CategoryId) -> Option<&CategoryNode> {
    forest.roots.iter().find_map(|root| find_in(root, id))
}

fn find_in(node: &CategoryNode, id: CategoryId) -> Option<&CategoryNode> {
    if node.id == id {
        return Some(node);
    }
    node.children.iter().find_map(|child| find_in(child, id))
}

/// Follow a slug chain from the forest roots.
///
/// An empty chain does not resolve; callers handle "browse all" themselves.
pub fn find_by_path<'a, S: AsRef<str>>(
    forest: &'a CategoryForest,
    slugs: &[S],
) -> Option<&'a CategoryNode> {
    chain_for_slugs(forest, slugs).pop()
}

/// The nodes matched by each slug of the chain, root-first.
///
/// Empty when any segment fails to match.
pub fn chain_for_slugs<'a, S: AsRef<str>>(
    forest: &'a CategoryForest,
    slugs: &[S],
) -> Vec<&'a CategoryNode> {
    let Some((first, rest)) = slugs.split_first() else {
        return Vec::new();
    };
    let Some(mut node) = forest.roots.iter().find(|r| r.slug == first.as_ref()) else {
        return Vec::new();
    };

    let mut chain = Vec::with_capacity(slugs.len());
    chain.push(node);
    for slug in rest {
        match node.child(slug.as_ref()) {
            Some(child) => {
                node = child;
                chain.push(node);
            }
            None => return Vec::new(),
        }
    }
    chain
}

/// Resolve a raw nested path to its ancestor chain (empty when unresolved).
pub fn resolve_path<'a>(forest: &'a CategoryForest, nested_path: &str) -> Vec<&'a CategoryNode> {
    chain_for_slugs(forest, path::decode(nested_path).as_slice())
}

/// Root-first chain from a root down to and including the node `id`.
pub fn ancestors_of(forest: &CategoryForest, id: CategoryId) -> Vec<&CategoryNode> {
    let mut trail = Vec::new();
    for root in &forest.roots {
        if descend(root, id, &mut trail) {
            return trail;
        }
    }
    Vec::new()
}

fn descend<'a>(node: &'a CategoryNode, id: CategoryId, trail: &mut Vec<&'a CategoryNode>) -> bool {
    trail.push(node);
    if node.id == id {
        return true;
    }
    for child in &node.children {
        if descend(child, id, trail) {
            return true;
        }
    }
    trail.pop();
    false
}

/// The nested path addressing node `id`, if it is in the forest.
pub fn path_of(forest: &CategoryForest, id: CategoryId) -> Option<String> {
    let chain = ancestors_of(forest, id);
    if chain.is_empty() {
        return None;
    }
    Some(path_of_chain(&chain))
}

/// Encode the slugs of an ancestor chain.
pub fn path_of_chain(chain: &[&CategoryNode]) -> String {
    let slugs: Vec<&str> = chain.iter().map(|n| n.slug.as_str()).collect();
    path::encode(slugs.as_slice())
}

/// Pre-order traversal yielding each node with its nested path.
pub fn walk(forest: &CategoryForest) -> Walk<'_> {
    Walk {
        stack: forest
            .roots
            .iter()
            .rev()
            .map(|root| (root, root.slug.clone()))
            .collect(),
    }
}

/// Iterator returned by [`walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(&'a CategoryNode, String)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a CategoryNode, String);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, node_path) = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push((child, path::join(&node_path, &child.slug)));
        }
        Some((node, node_path))
    }
}
