//! Expanded-node state of the category tree widget.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use storefront_core::types::CategoryId;
use storefront_entity::category::CategoryForest;

use super::index;

/// The set of category ids currently expanded in the tree widget.
///
/// Changes only through [`toggle`](Self::toggle) (user interaction) and
/// [`auto_expand`](Self::auto_expand), which only ever adds ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionSet {
    ids: BTreeSet<CategoryId>,
}

impl ExpansionSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns whether it is expanded afterwards.
    pub fn toggle(&mut self, id: CategoryId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Whether `id` is expanded.
    pub fn is_expanded(&self, id: CategoryId) -> bool {
        self.ids.contains(&id)
    }

    /// Expanded ids in ascending order.
    pub fn ids(&self) -> Vec<CategoryId> {
        self.ids.iter().copied().collect()
    }

    /// Add every id the current route and selection need to be visible.
    ///
    /// Ids already present are kept; this never collapses anything, and
    /// applying it twice with the same inputs changes nothing the second
    /// time. Returns the number of ids added.
    pub fn auto_expand(
        &mut self,
        forest: &CategoryForest,
        current_path: &str,
        selected: &BTreeSet<CategoryId>,
    ) -> usize {
        let before = self.ids.len();
        self.ids
            .extend(required_ids(forest, current_path, selected));
        self.ids.len() - before
    }

    /// Add those of `ids` that are loaded in `forest`.
    ///
    /// Used for a breadcrumb that came from the by-id query because its
    /// target sits below the loaded depth: the part of the chain the tree
    /// can show is opened. Returns the number of ids added.
    pub fn expand_loaded(
        &mut self,
        forest: &CategoryForest,
        ids: impl IntoIterator<Item = CategoryId>,
    ) -> usize {
        let before = self.ids.len();
        self.ids.extend(
            ids.into_iter()
                .filter(|id| index::find_by_id(forest, *id).is_some()),
        );
        self.ids.len() - before
    }
}

/// Ids that auto-expansion contributes for a route and selection.
///
/// Every node on the resolved chain of `current_path`, plus every strict
/// ancestor of each selected id. Unresolvable paths and unknown selected
/// ids contribute nothing.
pub fn required_ids(
    forest: &CategoryForest,
    current_path: &str,
    selected: &BTreeSet<CategoryId>,
) -> BTreeSet<CategoryId> {
    let mut required: BTreeSet<CategoryId> = index::resolve_path(forest, current_path)
        .into_iter()
        .map(|n| n.id)
        .collect();

    for id in selected {
        let chain = index::ancestors_of(forest, *id);
        if let Some((_, ancestors)) = chain.split_last() {
            required.extend(ancestors.iter().map(|n| n.id));
        }
    }

    required
}

impl FromIterator<CategoryId> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = CategoryId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
