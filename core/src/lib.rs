//! Achievement reward resolution for the franchise backend.
//!
//! Build a [`RewardCatalog`] once at startup (from JSON or the built-in
//! table), share it behind an `Arc`, and hand it to a [`RewardResolver`]
//! together with a randomness source.

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod resolver;
pub mod reward;
pub mod rng;
pub mod trait_roster;
pub mod types;

pub use catalog::{CategoryMembers, RarityDefaults, RewardCatalog, TraitCategories, TraitCategory, TraitOption, TraitOptions};
pub use classifier::TraitClassifier;
pub use config::RewardConfig;
pub use error::{RewardError, RewardResult};
pub use resolver::{resolve_with, RewardResolver};
pub use reward::{RewardDefinition, RewardSummary};
pub use rng::{RewardRng, ScriptedRng, SeededRewardRng};
pub use types::{Achievement, Rarity, TraitName};
