//! Command-line entry point for the Per Diem Calculation Engine.
//!
//! Generates a synthetic trip log, runs the per-diem calculation for the
//! requested tier, and reports the total and elapsed time.

use std::time::Instant;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use tracing::info;

use per_diem_engine::calculation::PerDiemEngine;
use per_diem_engine::config::ConfigLoader;
use per_diem_engine::error::EngineResult;
use per_diem_engine::generator::generate_trip_log;
use per_diem_engine::models::ItemCatalog;

#[derive(Parser, Debug)]
#[command(name = "per-diem", version, about = "Calculate per diem for a sales engineer based on item interactions")]
struct Cli {
    /// Number of item interactions in the log
    #[arg(long, default_value_t = 500)]
    interactions: usize,

    /// Employee tier
    #[arg(long, value_enum, default_value_t = TierArg::Principal)]
    tier: TierArg,

    /// Path to the configuration directory
    #[arg(long, default_value = "./config/per_diem")]
    config: String,

    /// Seed for the random source, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output machine-readable JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TierArg {
    #[value(name = "Junior")]
    Junior,
    #[value(name = "Senior")]
    Senior,
    #[value(name = "Principal")]
    Principal,
}

impl TierArg {
    fn as_str(self) -> &'static str {
        match self {
            TierArg::Junior => "Junior",
            TierArg::Senior => "Senior",
            TierArg::Principal => "Principal",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> EngineResult<()> {
    let loader = ConfigLoader::load(&cli.config)?;
    info!(path = %cli.config, "configuration loaded");

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let catalog = ItemCatalog::generate(loader.item_pool(), &mut rng)?;
    info!(
        items = catalog.items().len(),
        high_value = catalog.high_value_count(),
        "item catalog sampled"
    );

    let trip_log = generate_trip_log(cli.interactions, catalog.items(), &mut rng);

    let policy = loader.policy().clone();
    let engine = PerDiemEngine::new(loader.config().clone(), catalog);

    let start = Instant::now();
    let breakdown = engine.calculate_breakdown(&trip_log, cli.tier.as_str())?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if cli.json {
        let output = serde_json::json!({
            "policy": {
                "name": policy.name,
                "version": policy.version,
                "currency": policy.currency,
            },
            "breakdown": breakdown,
            "elapsed_ms": elapsed_ms,
        });
        println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        return Ok(());
    }

    println!();
    println!("Policy: {} ({})", policy.name, policy.version);
    println!(
        "Configuration: {} logged interactions, Tier: {}",
        cli.interactions,
        cli.tier.as_str()
    );
    println!(
        "Item pool: {} items, {} high-value",
        engine.catalog().items().len(),
        engine.catalog().high_value_count()
    );
    println!();
    println!("Total Per Diem: {}", format_currency(breakdown.total));
    println!(
        "  base pay {} | high-value bonus {} ({} hits) | engagement bonus {} ({} unique items)",
        format_currency(breakdown.base_total),
        format_currency(breakdown.high_value_bonus_total),
        breakdown.high_value_hits,
        format_currency(breakdown.engagement_bonus),
        breakdown.unique_items
    );
    println!();
    println!("Time taken: {:.2} ms", elapsed_ms);
    if elapsed_ms > 1000.0 {
        println!("Which is roughly: {:.2} seconds", elapsed_ms / 1000.0);
    }

    Ok(())
}

/// Formats an amount as currency with two decimal places and thousands
/// separators, e.g. `$31,234.50`.
fn format_currency(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{frac_part}")
}
