//! Reward catalog, the read-only table the resolver consults.
//!
//! RULE: A catalog is built once at startup and never mutated.
//! There are no setters. Share it across resolvers with `Arc`.
//!
//! Construction validates every entry; a catalog that exists is
//! internally consistent, so lookups never fail.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::{
    error::{RewardError, RewardResult},
    reward::RewardDefinition,
    trait_roster::TraitRoster,
    types::{Rarity, TraitName},
};

static EMPTY_CATEGORY: BTreeSet<TraitName> = BTreeSet::new();

/// One candidate trait boost at a given rarity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitOption {
    pub name:         TraitName,
    pub boost_amount: u32,
}

impl TraitOption {
    pub fn new(name: impl Into<TraitName>, boost_amount: u32) -> Self {
        Self { name: name.into(), boost_amount }
    }
}

/// What an achievement of a given rarity grants when no override applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityDefaults {
    /// 0 means no restart reward.
    pub game_restart_count: u32,
    /// Exactly one of these is picked per resolution.
    pub trait_options:      Vec<TraitOption>,
}

/// Progression tier used to group traits for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    Basic,
    Intermediate,
    Advanced,
    Elite,
}

impl TraitCategory {
    pub const ALL: [TraitCategory; 4] = [
        TraitCategory::Basic,
        TraitCategory::Intermediate,
        TraitCategory::Advanced,
        TraitCategory::Elite,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic        => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced     => "advanced",
            Self::Elite        => "elite",
        }
    }

    /// Case-insensitive. Returns `None` for names outside the four tiers.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

/// One bucket: the configured list order for display, plus a set for
/// membership lookups. Repeated names keep their first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMembers {
    listed:  Vec<TraitName>,
    members: BTreeSet<TraitName>,
}

impl CategoryMembers {
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TraitName>,
    {
        let mut bucket = Self::default();
        for name in names {
            let name = name.into();
            if bucket.members.insert(name.clone()) {
                bucket.listed.push(name);
            }
        }
        bucket
    }

    pub fn listed(&self) -> &[TraitName] {
        &self.listed
    }

    pub fn members(&self) -> &BTreeSet<TraitName> {
        &self.members
    }
}

/// The four trait buckets. Sets are configured independently; overlap
/// and gaps are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraitCategories {
    basic:        CategoryMembers,
    intermediate: CategoryMembers,
    advanced:     CategoryMembers,
    elite:        CategoryMembers,
}

impl TraitCategories {
    pub fn new(
        basic:        CategoryMembers,
        intermediate: CategoryMembers,
        advanced:     CategoryMembers,
        elite:        CategoryMembers,
    ) -> Self {
        Self { basic, intermediate, advanced, elite }
    }

    fn bucket(&self, category: TraitCategory) -> &CategoryMembers {
        match category {
            TraitCategory::Basic        => &self.basic,
            TraitCategory::Intermediate => &self.intermediate,
            TraitCategory::Advanced     => &self.advanced,
            TraitCategory::Elite        => &self.elite,
        }
    }

    pub fn members(&self, category: TraitCategory) -> &BTreeSet<TraitName> {
        self.bucket(category).members()
    }

    /// Members in configured order.
    pub fn listed(&self, category: TraitCategory) -> &[TraitName] {
        self.bucket(category).listed()
    }
}

/// Category lists plus the full attribute roster, for trait pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitOptions {
    pub basic:        Vec<TraitName>,
    pub intermediate: Vec<TraitName>,
    pub advanced:     Vec<TraitName>,
    pub elite:        Vec<TraitName>,
    pub all:          Vec<TraitName>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardCatalog {
    defaults:   HashMap<Rarity, RarityDefaults>,
    overrides:  HashMap<String, Vec<RewardDefinition>>,
    categories: TraitCategories,
}

impl RewardCatalog {
    /// Validate and freeze a catalog. Fails on the first bad entry.
    pub fn new(
        defaults:   HashMap<Rarity, RarityDefaults>,
        overrides:  HashMap<String, Vec<RewardDefinition>>,
        categories: TraitCategories,
    ) -> RewardResult<Self> {
        for rarity in Rarity::ALL {
            if let Some(tier) = defaults.get(&rarity) {
                validate_tier(rarity, tier)?;
            }
        }
        for (description, rewards) in &overrides {
            validate_override(description, rewards)?;
        }

        log::info!(
            "reward catalog: {} rarity tiers, {} overrides, {} categorised traits",
            defaults.len(),
            overrides.len(),
            TraitCategory::ALL
                .iter()
                .map(|c| categories.members(*c).len())
                .sum::<usize>(),
        );

        Ok(Self { defaults, overrides, categories })
    }

    /// Tier defaults, or `None` when the rarity is not configured.
    pub fn defaults_for(&self, rarity: Rarity) -> Option<&RarityDefaults> {
        self.defaults.get(&rarity)
    }

    /// Exact match on description text. No trimming, no case folding.
    pub fn override_for(&self, description: &str) -> Option<&[RewardDefinition]> {
        self.overrides.get(description).map(Vec::as_slice)
    }

    /// Members of the named category. Unknown names yield an empty set.
    pub fn category_members(&self, category_name: &str) -> &BTreeSet<TraitName> {
        match TraitCategory::from_name(category_name) {
            Some(category) => self.categories.members(category),
            None => &EMPTY_CATEGORY,
        }
    }

    pub fn categories(&self) -> &TraitCategories {
        &self.categories
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Configured rarities, lowest tier first.
    pub fn configured_rarities(&self) -> Vec<Rarity> {
        Rarity::ALL
            .into_iter()
            .filter(|r| self.defaults.contains_key(r))
            .collect()
    }

    pub fn trait_options(&self) -> TraitOptions {
        let list = |c: TraitCategory| self.categories.listed(c).to_vec();
        TraitOptions {
            basic:        list(TraitCategory::Basic),
            intermediate: list(TraitCategory::Intermediate),
            advanced:     list(TraitCategory::Advanced),
            elite:        list(TraitCategory::Elite),
            all:          TraitRoster::sorted(),
        }
    }
}

fn validate_tier(rarity: Rarity, tier: &RarityDefaults) -> RewardResult<()> {
    for (index, option) in tier.trait_options.iter().enumerate() {
        if option.name.is_empty() {
            return Err(RewardError::EmptyTraitName { rarity, index });
        }
        if option.boost_amount == 0 {
            return Err(RewardError::InvalidBoost {
                rarity,
                trait_name: option.name.clone(),
                boost: 0,
            });
        }
    }
    Ok(())
}

fn validate_override(description: &str, rewards: &[RewardDefinition]) -> RewardResult<()> {
    for (index, reward) in rewards.iter().enumerate() {
        if reward.amount() == 0 {
            return Err(RewardError::InvalidOverrideAmount {
                description: description.to_string(),
                index,
                amount: 0,
            });
        }
        if let Some(name) = reward.trait_name() {
            if name.is_empty() {
                return Err(RewardError::EmptyOverrideTraitName {
                    description: description.to_string(),
                    index,
                });
            }
        }
    }
    Ok(())
}
