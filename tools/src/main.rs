//! reward-runner: headless reward resolution for the franchise backend.
//!
//! Usage:
//!   reward-runner --rarity EPIC --description "Win the bowl game" --draws 20
//!   reward-runner --seed 12345 --data-dir ./data --ipc-mode

use anyhow::{Context, Result};
use dynasty_rewards::{
    Achievement, Rarity, RewardCatalog, RewardConfig, RewardDefinition, RewardResolver,
    RewardSummary, TraitClassifier,
    trait_roster::TraitRoster,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Resolve {
        description: String,
        rarity: Rarity,
    },
    Classify {
        trait_name: String,
        category: String,
    },
    TraitOptions,
    Quit,
}

#[derive(serde::Serialize)]
struct ResolveReply<'a> {
    description: &'a str,
    rarity: Rarity,
    rewards: Vec<RewardDefinition>,
}

#[derive(serde::Serialize)]
struct ClassifyReply<'a> {
    trait_name: &'a str,
    category: &'a str,
    member: bool,
    canonical: Option<&'static str>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed: Option<u64> = parse_flag(&args, "--seed")?;
    let draws: usize = parse_flag(&args, "--draws")?.unwrap_or(1);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let data_dir = flag_value(&args, "--data-dir");

    // Validation failures abort startup: never serve from a bad catalog.
    let catalog = match data_dir {
        Some(dir) => RewardConfig::load(dir)
            .with_context(|| format!("loading reward config from {dir}"))?,
        None => RewardConfig::builtin().context("building built-in reward table")?,
    };
    let catalog = Arc::new(catalog);

    let mut resolver = match seed {
        Some(seed) => RewardResolver::seeded(Arc::clone(&catalog), seed),
        None => RewardResolver::from_entropy(Arc::clone(&catalog)),
    };

    if ipc_mode {
        return run_ipc_loop(&mut resolver, &catalog);
    }

    let rarity: Rarity = flag_value(&args, "--rarity")
        .unwrap_or("COMMON")
        .parse()
        .context("--rarity")?;
    let description = flag_value(&args, "--description").unwrap_or("Unnamed achievement");

    println!("Football Dynasty - reward-runner");
    println!("  rarity:      {rarity}");
    println!("  description: {description}");
    println!("  draws:       {draws}");
    println!("  config:      {}", data_dir.unwrap_or("(built-in)"));
    println!();

    let achievement = Achievement::new(description, rarity);
    let mut summary = RewardSummary::default();
    for draw in 1..=draws {
        let rewards = resolver.resolve(&achievement);
        println!("  #{draw:<4} {}", format_rewards(&rewards));
        summary.extend(&rewards);
    }

    print_summary(&summary);
    Ok(())
}

fn run_ipc_loop(resolver: &mut RewardResolver, catalog: &RewardCatalog) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();
    let classifier = TraitClassifier::new(catalog);

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Resolve { description, rarity } => {
                let achievement = Achievement::new(description, rarity);
                let reply = ResolveReply {
                    description: &achievement.description,
                    rarity,
                    rewards: resolver.resolve(&achievement),
                };
                writeln!(stdout, "{}", serde_json::to_string(&reply)?)?;
            }
            IpcCommand::Classify { trait_name, category } => {
                let reply = ClassifyReply {
                    member: classifier.is_in_category(&trait_name, &category),
                    canonical: TraitRoster::canonical(&trait_name),
                    trait_name: &trait_name,
                    category: &category,
                };
                writeln!(stdout, "{}", serde_json::to_string(&reply)?)?;
            }
            IpcCommand::TraitOptions => {
                writeln!(stdout, "{}", serde_json::to_string(&catalog.trait_options())?)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn format_rewards(rewards: &[RewardDefinition]) -> String {
    if rewards.is_empty() {
        return "(nothing)".into();
    }
    rewards
        .iter()
        .map(|r| match r {
            RewardDefinition::GameRestart { amount } => format!("+{amount} game restart(s)"),
            RewardDefinition::TraitBoost { trait_name, amount } => format!("{trait_name} +{amount}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_summary(summary: &RewardSummary) {
    println!();
    println!("=== REWARD SUMMARY ===");
    println!("  total rewards:  {}", summary.total_rewards);
    println!("  trait boosts:   {}", summary.trait_rewards);
    println!("  restart grants: {}", summary.game_restart_rewards);
    println!("  total restarts: {}", summary.total_game_restarts);
    if !summary.trait_distribution.is_empty() {
        println!();
        println!("=== TRAIT DISTRIBUTION ===");
        for (name, count) in &summary.trait_distribution {
            println!("  {name:<24} {count}");
        }
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// Missing flag is `None`; a present but unparseable value is an error.
fn parse_flag<T>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    flag_value(args, flag)
        .map(str::parse::<T>)
        .transpose()
        .with_context(|| format!("invalid value for {flag}"))
}
