//! Reward resolution: turns a completed achievement into rewards.
//!
//! ORDER OF PRECEDENCE (fixed):
//!   1. Description override, returned verbatim (an empty list grants nothing).
//!   2. Rarity defaults: optional GameRestart, then one randomly picked
//!      TraitBoost.
//!   3. Nothing, when the rarity has no configured defaults.
//!
//! RULES:
//!   - Overrides and rarity defaults are never merged.
//!   - Each resolution draws at most once from the RNG. No rotation,
//!     no exhaustion, no memory of earlier picks.
//!   - Resolution never fails. Unknown rarities resolve to nothing.

use std::sync::Arc;

use crate::{
    catalog::RewardCatalog,
    reward::RewardDefinition,
    rng::{RewardRng, SeededRewardRng},
    types::Achievement,
};

/// Resolve against a catalog with a caller-supplied RNG.
pub fn resolve_with<R: RewardRng + ?Sized>(
    catalog: &RewardCatalog,
    achievement: &Achievement,
    rng: &mut R,
) -> Vec<RewardDefinition> {
    if let Some(rewards) = catalog.override_for(&achievement.description) {
        log::debug!(
            "override: '{}' -> {} reward(s)",
            achievement.description,
            rewards.len()
        );
        return rewards.to_vec();
    }

    let Some(tier) = catalog.defaults_for(achievement.rarity) else {
        log::info!(
            "no reward defaults for rarity {} (achievement '{}')",
            achievement.rarity,
            achievement.description
        );
        return Vec::new();
    };

    let mut rewards = Vec::with_capacity(2);

    if tier.game_restart_count > 0 {
        rewards.push(RewardDefinition::GameRestart {
            amount: tier.game_restart_count,
        });
    }

    if !tier.trait_options.is_empty() {
        let option = &tier.trait_options[rng.pick_index(tier.trait_options.len())];
        rewards.push(RewardDefinition::TraitBoost {
            trait_name: option.name.clone(),
            amount:     option.boost_amount,
        });
    }

    rewards
}

/// Owns a shared catalog handle and its own randomness source.
///
/// The catalog is shared; the RNG is not. For parallel resolution give
/// each worker its own resolver, e.g. via [`RewardResolver::fork`].
pub struct RewardResolver<R: RewardRng = SeededRewardRng> {
    catalog: Arc<RewardCatalog>,
    rng:     R,
}

impl<R: RewardRng> RewardResolver<R> {
    pub fn new(catalog: Arc<RewardCatalog>, rng: R) -> Self {
        Self { catalog, rng }
    }

    pub fn catalog(&self) -> &RewardCatalog {
        &self.catalog
    }

    pub fn resolve(&mut self, achievement: &Achievement) -> Vec<RewardDefinition> {
        let rewards = resolve_with(&self.catalog, achievement, &mut self.rng);
        for reward in &rewards {
            match reward {
                RewardDefinition::TraitBoost { trait_name, amount } => log::info!(
                    "REWARD_RESOLVED: {trait_name} +{amount} from achievement '{}'",
                    achievement.description
                ),
                RewardDefinition::GameRestart { amount } => log::info!(
                    "REWARD_RESOLVED: +{amount} game restart(s) from achievement '{}'",
                    achievement.description
                ),
            }
        }
        rewards
    }

    /// Resolve a batch in order, one independent draw per achievement.
    pub fn resolve_all<'a, I>(&mut self, achievements: I) -> Vec<Vec<RewardDefinition>>
    where
        I: IntoIterator<Item = &'a Achievement>,
    {
        achievements.into_iter().map(|a| self.resolve(a)).collect()
    }
}

impl RewardResolver<SeededRewardRng> {
    /// Production resolver: PCG generator seeded from OS entropy, once.
    pub fn from_entropy(catalog: Arc<RewardCatalog>) -> Self {
        Self::new(catalog, SeededRewardRng::from_entropy())
    }

    pub fn seeded(catalog: Arc<RewardCatalog>, seed: u64) -> Self {
        Self::new(catalog, SeededRewardRng::new(seed))
    }

    /// A sibling resolver over the same catalog with an independent stream.
    pub fn fork(&mut self, stream: u64) -> Self {
        Self::new(Arc::clone(&self.catalog), self.rng.fork(stream))
    }
}
