//! Configuration types for per-diem calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Metadata about the per-diem policy.
///
/// Contains identifying information about the policy a configuration
/// directory encodes, including its name, version, and payout currency.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// The ISO 4217 currency code payouts are denominated in.
    pub currency: String,
}

/// Rate information for a specific employee tier.
#[derive(Debug, Clone, Deserialize)]
pub struct TierRate {
    /// The base rate paid per logged interaction.
    pub base_rate: Decimal,
    /// The multiplier applied to the high-value item bonus.
    pub bonus_multiplier: Decimal,
}

/// Tiers configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TiersConfig {
    /// Map of tier name to rate details.
    pub tiers: HashMap<String, TierRate>,
}

/// Bonus rates applied on top of the tier base rate.
#[derive(Debug, Clone, Deserialize)]
pub struct BonusRates {
    /// The base bonus for an interaction with a high-value item,
    /// before tier and deal-potential scaling.
    pub high_value_base: Decimal,
    /// The flat engagement bonus per unique item encountered.
    pub engagement_per_unique_item: Decimal,
}

/// Bonuses configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct BonusesConfig {
    /// Bonus rates.
    pub bonuses: BonusRates,
}

/// Parameters describing the item universe and its high-value subset.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemPoolConfig {
    /// Total number of unique items an engineer might encounter.
    pub total_items: usize,
    /// Number of items sampled into the high-value subset.
    pub high_value_count: usize,
}

/// Item pool configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemPoolFile {
    /// Item pool parameters.
    pub item_pool: ItemPoolConfig,
}

/// The complete per-diem configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a policy configuration directory. It is immutable
/// once constructed.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Policy metadata.
    metadata: PolicyMetadata,
    /// Tier rates keyed by tier name.
    tiers: HashMap<String, TierRate>,
    /// Bonus rates.
    bonuses: BonusRates,
    /// Item pool parameters.
    item_pool: ItemPoolConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        metadata: PolicyMetadata,
        tiers: HashMap<String, TierRate>,
        bonuses: BonusRates,
        item_pool: ItemPoolConfig,
    ) -> Self {
        Self {
            metadata,
            tiers,
            bonuses,
            item_pool,
        }
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns all tier rates.
    pub fn tiers(&self) -> &HashMap<String, TierRate> {
        &self.tiers
    }

    /// Returns the bonus rates.
    pub fn bonuses(&self) -> &BonusRates {
        &self.bonuses
    }

    /// Returns the item pool parameters.
    pub fn item_pool(&self) -> &ItemPoolConfig {
        &self.item_pool
    }
}
