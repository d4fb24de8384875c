//! Reward resolution tests.
//!
//! Tests cover: override precedence, rarity-default shape, uniform
//! trait selection, unknown rarities, and seeded determinism.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use dynasty_rewards::{
    resolve_with, Achievement, Rarity, RarityDefaults, RewardCatalog, RewardConfig,
    RewardDefinition, RewardResolver, ScriptedRng, SeededRewardRng, TraitCategories, TraitOption,
};

fn builtin() -> Arc<RewardCatalog> {
    let _ = env_logger::builder().is_test(true).try_init();
    Arc::new(RewardConfig::builtin().expect("built-in catalog"))
}

fn catalog_with(
    defaults: Vec<(Rarity, RarityDefaults)>,
    overrides: Vec<(&str, Vec<RewardDefinition>)>,
) -> Arc<RewardCatalog> {
    let catalog = RewardCatalog::new(
        defaults.into_iter().collect(),
        overrides.into_iter().map(|(d, r)| (d.to_string(), r)).collect(),
        TraitCategories::default(),
    )
    .expect("valid catalog");
    Arc::new(catalog)
}

fn epic_tier() -> RarityDefaults {
    RarityDefaults {
        game_restart_count: 1,
        trait_options: vec![
            TraitOption::new("Awareness", 2),
            TraitOption::new("Throw Power", 2),
            TraitOption::new("Kick Accuracy", 1),
        ],
    }
}

/// An override is returned verbatim and rarity defaults are ignored.
#[test]
fn override_replaces_rarity_defaults() {
    let fixed = vec![
        RewardDefinition::trait_boost("Speed", 5),
        RewardDefinition::game_restart(3),
    ];
    let catalog = catalog_with(
        vec![(Rarity::Epic, epic_tier())],
        vec![("Win the national title", fixed.clone())],
    );
    let mut resolver = RewardResolver::seeded(catalog, 1);

    let achievement = Achievement::new("Win the national title", Rarity::Epic);
    for _ in 0..50 {
        assert_eq!(resolver.resolve(&achievement), fixed);
    }
}

/// An empty override deliberately grants nothing, even at a rewarding tier.
#[test]
fn empty_override_grants_nothing() {
    let catalog = catalog_with(
        vec![(Rarity::Epic, epic_tier())],
        vec![("Lose to a rival", Vec::new())],
    );
    let mut resolver = RewardResolver::seeded(catalog, 2);

    let rewards = resolver.resolve(&Achievement::new("Lose to a rival", Rarity::Epic));
    assert!(rewards.is_empty(), "Empty override must not fall back: {rewards:?}");
}

/// Override lookup is exact: case and whitespace differences miss.
#[test]
fn override_match_is_exact() {
    let catalog = catalog_with(
        vec![(Rarity::Epic, epic_tier())],
        vec![("Win the national title", Vec::new())],
    );
    let mut resolver = RewardResolver::new(catalog, ScriptedRng::constant(0));

    for near_miss in ["win the national title", "Win the national title ", " Win the national title"] {
        let rewards = resolver.resolve(&Achievement::new(near_miss, Rarity::Epic));
        assert_eq!(
            rewards,
            vec![
                RewardDefinition::game_restart(1),
                RewardDefinition::trait_boost("Awareness", 2),
            ],
            "'{near_miss}' should not hit the override"
        );
    }
}

/// EPIC with one restart and options: always [GameRestart{1}, TraitBoost{..}].
#[test]
fn epic_grants_restart_then_one_trait() {
    let catalog = builtin();
    let epic_names: HashSet<String> = catalog
        .defaults_for(Rarity::Epic)
        .expect("epic configured")
        .trait_options
        .iter()
        .map(|o| o.name.clone())
        .collect();
    let mut resolver = RewardResolver::seeded(catalog, 0xE91C);

    let achievement = Achievement::new("Score 50 points in a game", Rarity::Epic);
    for _ in 0..500 {
        let rewards = resolver.resolve(&achievement);
        assert_eq!(rewards.len(), 2, "EPIC should grant exactly two rewards: {rewards:?}");
        assert_eq!(rewards[0], RewardDefinition::GameRestart { amount: 1 });
        match &rewards[1] {
            RewardDefinition::TraitBoost { trait_name, .. } => assert!(
                epic_names.contains(trait_name),
                "'{trait_name}' is not an EPIC option"
            ),
            other => panic!("Second reward should be a trait boost, got {other:?}"),
        }
    }
}

/// COMMON with zero restarts and five options: always exactly one TraitBoost.
#[test]
fn common_grants_single_trait_only() {
    let mut resolver = RewardResolver::seeded(builtin(), 0xC0);

    let achievement = Achievement::new("Win a game", Rarity::Common);
    for _ in 0..500 {
        let rewards = resolver.resolve(&achievement);
        assert_eq!(rewards.len(), 1, "COMMON should grant one reward: {rewards:?}");
        assert!(
            matches!(rewards[0], RewardDefinition::TraitBoost { amount: 1, .. }),
            "COMMON reward should be a +1 trait boost: {:?}",
            rewards[0]
        );
    }
}

/// The boost amount travels with the picked option.
#[test]
fn picked_option_carries_its_boost() {
    let catalog = catalog_with(vec![(Rarity::Epic, epic_tier())], Vec::new());
    let mut rng = ScriptedRng::new(vec![2, 1]);
    let achievement = Achievement::new("Block a field goal", Rarity::Epic);

    let first = resolve_with(&catalog, &achievement, &mut rng);
    let second = resolve_with(&catalog, &achievement, &mut rng);

    assert_eq!(first[1], RewardDefinition::trait_boost("Kick Accuracy", 1));
    assert_eq!(second[1], RewardDefinition::trait_boost("Throw Power", 2));
}

/// A tier with restarts but no options grants only the restart.
#[test]
fn restart_only_tier() {
    let catalog = catalog_with(
        vec![(Rarity::Legendary, RarityDefaults { game_restart_count: 2, trait_options: Vec::new() })],
        Vec::new(),
    );
    let mut resolver = RewardResolver::seeded(catalog, 3);

    let rewards = resolver.resolve(&Achievement::new("Undefeated season", Rarity::Legendary));
    assert_eq!(rewards, vec![RewardDefinition::game_restart(2)]);
}

/// A configured tier with nothing in it grants nothing.
#[test]
fn empty_tier_grants_nothing() {
    let catalog = catalog_with(vec![(Rarity::Rare, RarityDefaults::default())], Vec::new());
    let mut resolver = RewardResolver::seeded(catalog, 4);

    assert!(resolver.resolve(&Achievement::new("Shutout", Rarity::Rare)).is_empty());
}

/// Unknown rarity resolves to nothing instead of failing.
#[test]
fn unconfigured_rarity_is_empty() {
    let catalog = catalog_with(vec![(Rarity::Epic, epic_tier())], Vec::new());
    let mut resolver = RewardResolver::seeded(catalog, 5);

    for rarity in [Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Legendary] {
        let rewards = resolver.resolve(&Achievement::new("Anything", rarity));
        assert!(rewards.is_empty(), "{rarity} is unconfigured but got {rewards:?}");
    }
}

/// 10,000 draws over N options land within ±15% relative of 1/N each.
#[test]
fn trait_selection_is_uniform() {
    const DRAWS: usize = 10_000;

    let catalog = builtin();
    let options = catalog.defaults_for(Rarity::Legendary).expect("legendary").trait_options.clone();
    let expected = DRAWS as f64 / options.len() as f64;
    let mut resolver = RewardResolver::seeded(catalog, 0x5EED_1234);

    let mut counts: HashMap<String, usize> = HashMap::new();
    let achievement = Achievement::new("Win the championship", Rarity::Legendary);
    for _ in 0..DRAWS {
        for reward in resolver.resolve(&achievement) {
            if let RewardDefinition::TraitBoost { trait_name, .. } = reward {
                *counts.entry(trait_name).or_insert(0) += 1;
            }
        }
    }

    assert_eq!(counts.len(), options.len(), "Every option should be drawn at least once");
    for option in &options {
        let observed = counts[&option.name] as f64;
        let deviation = (observed - expected).abs() / expected;
        assert!(
            deviation <= 0.15,
            "'{}' drawn {observed} times, expected ~{expected:.0} ({:.1}% off)",
            option.name,
            deviation * 100.0
        );
    }
}

/// Same seed, same sequence of achievements → identical rewards.
#[test]
fn seeded_resolvers_are_reproducible() {
    let achievements: Vec<Achievement> = Rarity::ALL
        .iter()
        .cycle()
        .take(40)
        .enumerate()
        .map(|(i, r)| Achievement::new(format!("Achievement {i}"), *r))
        .collect();

    let mut a = RewardResolver::seeded(builtin(), 0xBEEF_CAFE);
    let mut b = RewardResolver::seeded(builtin(), 0xBEEF_CAFE);

    assert_eq!(a.resolve_all(&achievements), b.resolve_all(&achievements));
}

/// Forked resolvers share the catalog and resolve independently across threads.
#[test]
fn forked_resolvers_run_in_parallel() {
    let mut root = RewardResolver::seeded(builtin(), 77);
    let workers: Vec<_> = (0..4u64).map(|i| root.fork(i)).collect();

    let handles: Vec<_> = workers
        .into_iter()
        .map(|mut resolver| {
            std::thread::spawn(move || {
                let achievement = Achievement::new("Score 50 points in a game", Rarity::Epic);
                (0..250).map(|_| resolver.resolve(&achievement).len()).collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let lengths = handle.join().expect("worker thread");
        assert!(lengths.iter().all(|&n| n == 2));
    }
}

/// A boxed, type-erased RNG works as a resolver source.
#[test]
fn boxed_rng_is_accepted() {
    let rng: Box<dyn dynasty_rewards::RewardRng> = Box::new(SeededRewardRng::new(9));
    let mut resolver = RewardResolver::new(builtin(), rng);

    let rewards = resolver.resolve(&Achievement::new("Win a game", Rarity::Common));
    assert_eq!(rewards.len(), 1);
}
