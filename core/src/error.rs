use thiserror::Error;

use crate::types::Rarity;

#[derive(Error, Debug)]
pub enum RewardError {
    #[error("Cannot read {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown rarity key '{key}'")]
    UnknownRarityKey { key: String },

    #[error("Rarity {rarity}: game restart count must be >= 0, got {count}")]
    NegativeRestartCount { rarity: Rarity, count: i64 },

    #[error("Rarity {rarity}: trait option #{index} has an empty name")]
    EmptyTraitName { rarity: Rarity, index: usize },

    #[error("Rarity {rarity}: trait '{trait_name}' boost must be > 0, got {boost}")]
    InvalidBoost {
        rarity: Rarity,
        trait_name: String,
        boost: i64,
    },

    #[error("Override '{description}': reward #{index} amount must be > 0, got {amount}")]
    InvalidOverrideAmount {
        description: String,
        index: usize,
        amount: i64,
    },

    #[error("Override '{description}': reward #{index} has an empty trait name")]
    EmptyOverrideTraitName { description: String, index: usize },

    #[error("Amount {amount} is out of range")]
    AmountOutOfRange { amount: i64 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RewardResult<T> = Result<T, RewardError>;
