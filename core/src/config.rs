use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::{
    catalog::{CategoryMembers, RarityDefaults, RewardCatalog, TraitCategories, TraitOption},
    error::{RewardError, RewardResult},
    reward::RewardDefinition,
    types::Rarity,
};

// ── File shapes ────────────────────────────────────────────────────
//
// Amounts are read signed so a negative value surfaces as a validation
// error naming the offending entry, not as a generic parse failure.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitOptionFile {
    pub name: String,
    pub boost_amount: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RarityDefaultsFile {
    #[serde(default)]
    pub game_restart_count: i64,
    #[serde(default)]
    pub trait_options: Vec<TraitOptionFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RewardDefinitionFile {
    GameRestart {
        amount: i64,
    },
    TraitBoost {
        trait_name: String,
        amount: i64,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraitCategoriesFile {
    #[serde(default)]
    pub basic: Vec<String>,
    #[serde(default)]
    pub intermediate: Vec<String>,
    #[serde(default)]
    pub advanced: Vec<String>,
    #[serde(default)]
    pub elite: Vec<String>,
}

/// On-disk shape of `rewards/achievement_rewards.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewardConfigFile {
    /// Keyed by upper-case rarity name.
    #[serde(default)]
    pub defaults: BTreeMap<String, RarityDefaultsFile>,
    /// Keyed by achievement description text.
    #[serde(default)]
    pub overrides: BTreeMap<String, Vec<RewardDefinitionFile>>,
    #[serde(default)]
    pub traits: TraitCategoriesFile,
}

// ── Loader ─────────────────────────────────────────────────────────

pub struct RewardConfig;

impl RewardConfig {
    /// Load from the data/ directory.
    /// In tests, use RewardConfig::builtin() or from_json_str().
    pub fn load(data_dir: &str) -> RewardResult<RewardCatalog> {
        let path = format!("{data_dir}/rewards/achievement_rewards.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|source| RewardError::ConfigRead { path: path.clone(), source })?;
        log::info!("reward config: loading {path}");
        let file: RewardConfigFile = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        Self::from_file(file)
    }

    pub fn from_json_str(content: &str) -> RewardResult<RewardCatalog> {
        let file: RewardConfigFile = serde_json::from_str(content)?;
        Self::from_file(file)
    }

    /// Validate a parsed config file and freeze it into a catalog.
    pub fn from_file(file: RewardConfigFile) -> RewardResult<RewardCatalog> {
        let mut defaults = HashMap::with_capacity(file.defaults.len());
        for (key, tier) in file.defaults {
            let rarity: Rarity = key.parse()?;
            defaults.insert(rarity, convert_tier(rarity, tier)?);
        }

        let mut overrides = HashMap::with_capacity(file.overrides.len());
        for (description, rewards) in file.overrides {
            let converted = rewards
                .into_iter()
                .enumerate()
                .map(|(index, reward)| convert_reward(&description, index, reward))
                .collect::<RewardResult<Vec<_>>>()?;
            overrides.insert(description, converted);
        }

        let categories = TraitCategories::new(
            CategoryMembers::from_names(file.traits.basic),
            CategoryMembers::from_names(file.traits.intermediate),
            CategoryMembers::from_names(file.traits.advanced),
            CategoryMembers::from_names(file.traits.elite),
        );

        RewardCatalog::new(defaults, overrides, categories)
    }

    /// The shipped tier table. Mirrors data/rewards/achievement_rewards.json.
    pub fn builtin() -> RewardResult<RewardCatalog> {
        let tier = |restarts: u32, options: &[(&str, u32)]| RarityDefaults {
            game_restart_count: restarts,
            trait_options: options
                .iter()
                .map(|(name, boost)| TraitOption::new(*name, *boost))
                .collect(),
        };

        let defaults = HashMap::from([
            (
                Rarity::Common,
                tier(0, &[
                    ("Speed", 1),
                    ("Stamina", 1),
                    ("Carrying", 1),
                    ("Catching", 1),
                    ("Tackle", 1),
                ]),
            ),
            (
                Rarity::Uncommon,
                tier(0, &[
                    ("Strength", 2),
                    ("Agility", 2),
                    ("Short Route Running", 1),
                    ("Short Accuracy", 1),
                    ("Run Block", 1),
                    ("Man Coverage", 1),
                ]),
            ),
            (
                Rarity::Rare,
                tier(0, &[
                    ("Acceleration", 2),
                    ("Break Tackle", 2),
                    ("Medium Accuracy", 1),
                    ("Medium Route Running", 1),
                    ("Pass Block", 1),
                    ("Zone Coverage", 1),
                    ("Play Recognition", 1),
                ]),
            ),
            (
                Rarity::Epic,
                tier(1, &[
                    ("Awareness", 2),
                    ("Throw Power", 2),
                    ("Deep Route Running", 1),
                    ("Pass Rush Moves", 1),
                    ("Block Shedding", 1),
                    ("Kick Accuracy", 1),
                ]),
            ),
            (
                Rarity::Legendary,
                tier(2, &[
                    ("Deep Accuracy", 2),
                    ("Spectacular Catch", 1),
                    ("Catch in Traffic", 1),
                    ("Break Sack", 1),
                    ("Finesse Moves", 1),
                    ("Press Coverage", 1),
                    ("Return", 1),
                ]),
            ),
        ]);

        let bucket = |names: &[&str]| CategoryMembers::from_names(names.iter().copied());
        let categories = TraitCategories::new(
            bucket(&[
                "Speed", "Strength", "Agility", "Stamina", "Carrying", "Catching", "Tackle",
            ]),
            bucket(&[
                "Acceleration", "Awareness", "Break Tackle", "Short Accuracy",
                "Short Route Running", "Run Block", "Man Coverage", "Zone Coverage",
                "Toughness", "Jumping",
            ]),
            bucket(&[
                "Medium Accuracy", "Medium Route Running", "Pass Block", "Play Recognition",
                "Throw Power", "Throw Under Pressure", "Pass Rush Moves", "Block Shedding",
            ]),
            bucket(&[
                "Deep Accuracy", "Deep Route Running", "Break Sack", "Spectacular Catch",
                "Catch in Traffic", "Finesse Moves", "Press Coverage", "Return", "Kick Accuracy",
            ]),
        );

        RewardCatalog::new(defaults, HashMap::new(), categories)
    }
}

fn convert_tier(rarity: Rarity, tier: RarityDefaultsFile) -> RewardResult<RarityDefaults> {
    if tier.game_restart_count < 0 {
        return Err(RewardError::NegativeRestartCount {
            rarity,
            count: tier.game_restart_count,
        });
    }
    let game_restart_count = to_u32(tier.game_restart_count)?;

    let mut trait_options = Vec::with_capacity(tier.trait_options.len());
    for (index, option) in tier.trait_options.into_iter().enumerate() {
        if option.name.is_empty() {
            return Err(RewardError::EmptyTraitName { rarity, index });
        }
        if option.boost_amount <= 0 {
            return Err(RewardError::InvalidBoost {
                rarity,
                trait_name: option.name,
                boost: option.boost_amount,
            });
        }
        trait_options.push(TraitOption {
            boost_amount: to_u32(option.boost_amount)?,
            name: option.name,
        });
    }

    Ok(RarityDefaults { game_restart_count, trait_options })
}

fn convert_reward(
    description: &str,
    index: usize,
    reward: RewardDefinitionFile,
) -> RewardResult<RewardDefinition> {
    let amount = match &reward {
        RewardDefinitionFile::GameRestart { amount }
        | RewardDefinitionFile::TraitBoost { amount, .. } => *amount,
    };
    if amount <= 0 {
        return Err(RewardError::InvalidOverrideAmount {
            description: description.to_string(),
            index,
            amount,
        });
    }
    let amount = to_u32(amount)?;

    Ok(match reward {
        RewardDefinitionFile::GameRestart { .. } => RewardDefinition::GameRestart { amount },
        RewardDefinitionFile::TraitBoost { trait_name, .. } => {
            if trait_name.is_empty() {
                return Err(RewardError::EmptyOverrideTraitName {
                    description: description.to_string(),
                    index,
                });
            }
            RewardDefinition::TraitBoost { trait_name, amount }
        }
    })
}

fn to_u32(amount: i64) -> RewardResult<u32> {
    u32::try_from(amount).map_err(|_| RewardError::AmountOutOfRange { amount })
}
