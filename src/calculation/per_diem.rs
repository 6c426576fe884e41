//! The per-diem engine: folds a trip log into a payment total.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{ItemCatalog, PerDiemBreakdown, TripLogEntry};

use super::engagement_bonus::calculate_engagement_bonus;
use super::interaction_value::interaction_value;
use super::tier_lookup::get_tier_rate;

/// Computes per-diem payments from trip logs.
///
/// The engine holds the immutable configuration (tier table, bonus rates)
/// and the item catalog (universe plus high-value subset) constructed at
/// process start. Calculation is a pure function of the engine state and
/// its inputs; the same log and tier always produce the same total.
///
/// # Example
///
/// ```
/// use per_diem_engine::calculation::PerDiemEngine;
/// use per_diem_engine::config::{BonusRates, EngineConfig, ItemPoolConfig, PolicyMetadata, TierRate};
/// use per_diem_engine::models::{ItemCatalog, TripLogEntry};
/// use rust_decimal::Decimal;
/// use std::collections::{HashMap, HashSet};
///
/// let metadata = PolicyMetadata {
///     name: "Sales Engineer Per Diem".to_string(),
///     version: "2025-07-01".to_string(),
///     currency: "USD".to_string(),
/// };
/// let mut tiers = HashMap::new();
/// tiers.insert(
///     "Senior".to_string(),
///     TierRate {
///         base_rate: Decimal::from(50),
///         bonus_multiplier: Decimal::new(12, 1),
///     },
/// );
/// let bonuses = BonusRates {
///     high_value_base: Decimal::from(10),
///     engagement_per_unique_item: Decimal::ONE,
/// };
/// let item_pool = ItemPoolConfig { total_items: 1, high_value_count: 1 };
/// let config = EngineConfig::new(metadata, tiers, bonuses, item_pool);
///
/// let items = vec!["ITEM_00000".to_string()];
/// let high_value: HashSet<String> = items.iter().cloned().collect();
/// let engine = PerDiemEngine::new(config, ItemCatalog::new(items, high_value));
///
/// let log = vec![TripLogEntry::new("ITEM_00000", Decimal::from(2))];
/// let total = engine.calculate(&log, "Senior").unwrap();
/// assert_eq!(total, Decimal::from(75));
/// ```
#[derive(Debug, Clone)]
pub struct PerDiemEngine {
    config: EngineConfig,
    catalog: ItemCatalog,
}

impl PerDiemEngine {
    /// Creates a new engine from configuration and an item catalog.
    pub fn new(config: EngineConfig, catalog: ItemCatalog) -> Self {
        Self { config, catalog }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the item catalog.
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// Calculates the total per diem for a trip log.
    ///
    /// Equivalent to [`PerDiemEngine::calculate_breakdown`] but returning
    /// only the grand total.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTier` when `tier` is not one of the configured tier
    /// names. All other inputs, including empty logs and duplicate items,
    /// produce a defined numeric result.
    pub fn calculate(&self, trip_log: &[TripLogEntry], tier: &str) -> EngineResult<Decimal> {
        Ok(self.calculate_breakdown(trip_log, tier)?.total)
    }

    /// Calculates the per diem for a trip log, with per-rule subtotals.
    ///
    /// Each interaction earns the tier base rate plus, for high-value
    /// items, the tier- and deal-scaled bonus. After the fold, a flat
    /// engagement bonus is added per distinct item encountered. Entry
    /// order never affects the result.
    pub fn calculate_breakdown(
        &self,
        trip_log: &[TripLogEntry],
        tier: &str,
    ) -> EngineResult<PerDiemBreakdown> {
        let rate = get_tier_rate(&self.config, tier)?;
        let bonuses = self.config.bonuses();

        let mut visited: HashSet<&str> = HashSet::new();
        let mut base_total = Decimal::ZERO;
        let mut high_value_bonus_total = Decimal::ZERO;
        let mut high_value_hits = 0usize;

        for entry in trip_log {
            visited.insert(entry.item_id.as_str());

            let is_high_value = self.catalog.is_high_value(&entry.item_id);
            if is_high_value {
                high_value_hits += 1;
            }

            let value = interaction_value(entry, rate, bonuses, is_high_value);
            base_total += value.base;
            high_value_bonus_total += value.high_value_bonus;
        }

        let engagement = calculate_engagement_bonus(visited.len(), bonuses);

        Ok(PerDiemBreakdown {
            tier: tier.to_string(),
            interactions: trip_log.len(),
            unique_items: engagement.unique_items,
            high_value_hits,
            base_total,
            high_value_bonus_total,
            engagement_bonus: engagement.amount,
            total: base_total + high_value_bonus_total + engagement.amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BonusRates, ItemPoolConfig, PolicyMetadata, TierRate};
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_config() -> EngineConfig {
        let metadata = PolicyMetadata {
            name: "Sales Engineer Per Diem".to_string(),
            version: "2025-07-01".to_string(),
            currency: "USD".to_string(),
        };

        let mut tiers = HashMap::new();
        tiers.insert(
            "Junior".to_string(),
            TierRate {
                base_rate: dec("40"),
                bonus_multiplier: dec("1.0"),
            },
        );
        tiers.insert(
            "Senior".to_string(),
            TierRate {
                base_rate: dec("50"),
                bonus_multiplier: dec("1.2"),
            },
        );
        tiers.insert(
            "Principal".to_string(),
            TierRate {
                base_rate: dec("60"),
                bonus_multiplier: dec("1.5"),
            },
        );

        let bonuses = BonusRates {
            high_value_base: dec("10"),
            engagement_per_unique_item: dec("1"),
        };

        let item_pool = ItemPoolConfig {
            total_items: 4,
            high_value_count: 2,
        };

        EngineConfig::new(metadata, tiers, bonuses, item_pool)
    }

    /// Catalog of four items where X and Y are high-value.
    fn create_test_catalog() -> ItemCatalog {
        let items: Vec<String> = ["X", "Y", "A", "B"].iter().map(|s| s.to_string()).collect();
        let high_value = ["X", "Y"].iter().map(|s| s.to_string()).collect();
        ItemCatalog::new(items, high_value)
    }

    fn create_test_engine() -> PerDiemEngine {
        PerDiemEngine::new(create_test_config(), create_test_catalog())
    }

    fn entry(item: &str, deal_potential: &str) -> TripLogEntry {
        TripLogEntry::new(item, dec(deal_potential))
    }

    /// PD-001: empty log yields zero for every tier
    #[test]
    fn test_empty_log_yields_zero() {
        let engine = create_test_engine();

        for tier in ["Junior", "Senior", "Principal"] {
            assert_eq!(engine.calculate(&[], tier).unwrap(), Decimal::ZERO);
        }
    }

    /// PD-002: single high-value interaction for Senior
    #[test]
    fn test_single_high_value_interaction_senior() {
        let engine = create_test_engine();
        let log = vec![entry("X", "2.0")];

        // 50 + 10 * 1.2 * 2.0 + 1
        assert_eq!(engine.calculate(&log, "Senior").unwrap(), dec("75.0"));
    }

    /// PD-003: duplicate non-high-value items for Junior
    #[test]
    fn test_duplicate_items_junior() {
        let engine = create_test_engine();
        let log = vec![entry("A", "1.0"), entry("A", "1.0"), entry("B", "1.0")];

        // 40 * 3 + 2 unique items
        assert_eq!(engine.calculate(&log, "Junior").unwrap(), dec("122.0"));
    }

    /// PD-004: unknown tier fails with InvalidTier
    #[test]
    fn test_unknown_tier_fails() {
        let engine = create_test_engine();
        let log = vec![entry("A", "1.0")];

        let result = engine.calculate(&log, "Bogus");
        match result {
            Err(crate::error::EngineError::InvalidTier { tier }) => {
                assert_eq!(tier, "Bogus");
            }
            other => panic!("Expected InvalidTier, got {:?}", other),
        }
    }

    /// PD-005: entry order never affects the total
    #[test]
    fn test_order_independence() {
        let engine = create_test_engine();
        let forward = vec![
            entry("X", "1.5"),
            entry("A", "2.0"),
            entry("Y", "3.0"),
            entry("A", "1.0"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            engine.calculate(&forward, "Principal").unwrap(),
            engine.calculate(&reversed, "Principal").unwrap()
        );
    }

    /// PD-006: repeated occurrences of one item follow the closed form
    #[test]
    fn test_repeated_single_item_closed_form() {
        let engine = create_test_engine();
        let log = vec![entry("B", "2.2"); 7];

        // 7 * 40 + 1 unique item
        assert_eq!(engine.calculate(&log, "Junior").unwrap(), dec("281"));
    }

    /// PD-007: Principal multiplier applied to high-value bonus
    #[test]
    fn test_principal_multiplier() {
        let engine = create_test_engine();
        let log = vec![entry("Y", "3.0")];

        // 60 + 10 * 1.5 * 3.0 + 1
        assert_eq!(engine.calculate(&log, "Principal").unwrap(), dec("106.0"));
    }

    #[test]
    fn test_breakdown_subtotals_sum_to_total() {
        let engine = create_test_engine();
        let log = vec![
            entry("X", "2.0"),
            entry("A", "1.0"),
            entry("X", "1.0"),
            entry("B", "3.0"),
        ];

        let breakdown = engine.calculate_breakdown(&log, "Senior").unwrap();

        assert_eq!(breakdown.tier, "Senior");
        assert_eq!(breakdown.interactions, 4);
        assert_eq!(breakdown.unique_items, 3);
        assert_eq!(breakdown.high_value_hits, 2);
        assert_eq!(breakdown.base_total, dec("200"));
        // 10 * 1.2 * 2.0 + 10 * 1.2 * 1.0
        assert_eq!(breakdown.high_value_bonus_total, dec("36.0"));
        assert_eq!(breakdown.engagement_bonus, dec("3"));
        assert_eq!(
            breakdown.total,
            breakdown.base_total + breakdown.high_value_bonus_total + breakdown.engagement_bonus
        );
    }

    #[test]
    fn test_breakdown_matches_calculate() {
        let engine = create_test_engine();
        let log = vec![entry("X", "1.1"), entry("B", "2.7")];

        let breakdown = engine.calculate_breakdown(&log, "Senior").unwrap();
        let total = engine.calculate(&log, "Senior").unwrap();

        assert_eq!(breakdown.total, total);
    }

    #[test]
    fn test_duplicate_high_value_items_earn_bonus_each_time() {
        let engine = create_test_engine();
        let log = vec![entry("X", "1.0"), entry("X", "1.0")];

        // Bonus applies per interaction; the engagement bonus collapses
        // duplicates.
        let breakdown = engine.calculate_breakdown(&log, "Junior").unwrap();
        assert_eq!(breakdown.high_value_hits, 2);
        assert_eq!(breakdown.high_value_bonus_total, dec("20.0"));
        assert_eq!(breakdown.unique_items, 1);
        assert_eq!(breakdown.total, dec("101.0"));
    }
}
