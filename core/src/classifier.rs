//! Trait classification: which progression tier a trait belongs to.
//!
//! Pure lookups over the catalog's category sets. Independent of reward
//! resolution; UI code uses it to badge traits by tier.

use crate::catalog::{RewardCatalog, TraitCategory};

#[derive(Debug, Clone, Copy)]
pub struct TraitClassifier<'a> {
    catalog: &'a RewardCatalog,
}

impl<'a> TraitClassifier<'a> {
    pub fn new(catalog: &'a RewardCatalog) -> Self {
        Self { catalog }
    }

    /// Category name is case-insensitive; trait name is matched exactly.
    /// Unknown categories contain nothing.
    pub fn is_in_category(&self, trait_name: &str, category_name: &str) -> bool {
        self.catalog.category_members(category_name).contains(trait_name)
    }

    /// First tier (basic → elite) listing the trait. Categories may
    /// overlap, so this is the lowest tier, not the only one.
    pub fn category_of(&self, trait_name: &str) -> Option<TraitCategory> {
        TraitCategory::ALL
            .into_iter()
            .find(|c| self.catalog.categories().members(*c).contains(trait_name))
    }
}
