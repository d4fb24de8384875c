//! Shared primitive types used across the reward engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RewardError;

/// A player attribute name, e.g. "Speed" or "Deep Route Running".
pub type TraitName = String;

/// Tier label on an achievement. Higher tiers grant better rewards by
/// configuration, not by anything the engine enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Common    => "COMMON",
            Self::Uncommon  => "UNCOMMON",
            Self::Rare      => "RARE",
            Self::Epic      => "EPIC",
            Self::Legendary => "LEGENDARY",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Config keys are the upper-case tier names. Anything else is a
/// malformed key and fails the catalog load.
impl FromStr for Rarity {
    type Err = RewardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| RewardError::UnknownRarityKey { key: s.to_string() })
    }
}

/// The slice of an achievement the resolver reads. Everything else about
/// an achievement (id, progress, completion) lives with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub description: String,
    pub rarity:      Rarity,
}

impl Achievement {
    pub fn new(description: impl Into<String>, rarity: Rarity) -> Self {
        Self { description: description.into(), rarity }
    }
}
