//! Tier rate lookup functionality.
//!
//! This module provides the lookup from an employee tier name to its
//! configured base rate and bonus multiplier.

use crate::config::{EngineConfig, TierRate};
use crate::error::{EngineError, EngineResult};

/// Looks up the rate details for a tier.
///
/// Tier names are matched exactly against the configured tier table;
/// lookups are case-sensitive.
///
/// # Arguments
///
/// * `config` - The engine configuration containing the tier table
/// * `tier` - The tier name to look up (e.g., "Senior")
///
/// # Errors
///
/// Returns `InvalidTier` when the tier is not one of the configured tier
/// names. This is a usage error, not a transient condition; callers are
/// expected to surface it rather than retry.
pub fn get_tier_rate<'a>(config: &'a EngineConfig, tier: &str) -> EngineResult<&'a TierRate> {
    config
        .tiers()
        .get(tier)
        .ok_or_else(|| EngineError::InvalidTier {
            tier: tier.to_string(),
        })
}
