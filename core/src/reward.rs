//! What a player receives for completing an achievement.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::TraitName;

/// A single resolved reward. Amounts are always positive once they have
/// passed catalog validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RewardDefinition {
    GameRestart {
        amount: u32,
    },
    TraitBoost {
        trait_name: TraitName,
        amount: u32,
    },
}

impl RewardDefinition {
    pub fn game_restart(amount: u32) -> Self {
        Self::GameRestart { amount }
    }

    pub fn trait_boost(trait_name: impl Into<TraitName>, amount: u32) -> Self {
        Self::TraitBoost { trait_name: trait_name.into(), amount }
    }

    pub fn amount(&self) -> u32 {
        match self {
            Self::GameRestart { amount } | Self::TraitBoost { amount, .. } => *amount,
        }
    }

    /// The boosted trait, or `None` for a game restart.
    pub fn trait_name(&self) -> Option<&str> {
        match self {
            Self::GameRestart { .. } => None,
            Self::TraitBoost { trait_name, .. } => Some(trait_name),
        }
    }
}

/// Aggregate view over a batch of resolved rewards, e.g. everything
/// granted during a season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSummary {
    pub total_rewards:        usize,
    pub trait_rewards:        usize,
    pub game_restart_rewards: usize,
    /// Sum of every GameRestart amount.
    pub total_game_restarts:  u64,
    /// Number of boosts granted per trait name.
    pub trait_distribution:   BTreeMap<TraitName, usize>,
}

impl RewardSummary {
    pub fn from_rewards(rewards: &[RewardDefinition]) -> Self {
        let mut summary = Self::default();
        for reward in rewards {
            summary.record(reward);
        }
        summary
    }

    pub fn record(&mut self, reward: &RewardDefinition) {
        self.total_rewards += 1;
        match reward {
            RewardDefinition::GameRestart { amount } => {
                self.game_restart_rewards += 1;
                self.total_game_restarts += u64::from(*amount);
            }
            RewardDefinition::TraitBoost { trait_name, .. } => {
                self.trait_rewards += 1;
                *self.trait_distribution.entry(trait_name.clone()).or_insert(0) += 1;
            }
        }
    }
}

impl<'a> Extend<&'a RewardDefinition> for RewardSummary {
    fn extend<I: IntoIterator<Item = &'a RewardDefinition>>(&mut self, iter: I) {
        for reward in iter {
            self.record(reward);
        }
    }
}
