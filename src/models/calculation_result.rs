//! Calculation result models for the Per Diem Calculation Engine.
//!
//! This module contains the [`PerDiemBreakdown`] type that captures all
//! outputs from a per-diem calculation: the subtotals per rule and the
//! grand total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The full breakdown of a per-diem calculation.
///
/// The grand total is the sum of the base-pay subtotal, the high-value
/// bonus subtotal, and the engagement bonus.
///
/// # Example
///
/// ```
/// use per_diem_engine::models::PerDiemBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PerDiemBreakdown {
///     tier: "Senior".to_string(),
///     interactions: 1,
///     unique_items: 1,
///     high_value_hits: 1,
///     base_total: Decimal::from(50),
///     high_value_bonus_total: Decimal::from(24),
///     engagement_bonus: Decimal::ONE,
///     total: Decimal::from(75),
/// };
/// assert_eq!(
///     breakdown.base_total + breakdown.high_value_bonus_total + breakdown.engagement_bonus,
///     breakdown.total
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerDiemBreakdown {
    /// The tier the calculation was performed for.
    pub tier: String,
    /// Number of entries in the trip log.
    pub interactions: usize,
    /// Number of distinct items encountered.
    pub unique_items: usize,
    /// Number of interactions that hit a high-value item.
    pub high_value_hits: usize,
    /// Subtotal of per-interaction base rates.
    pub base_total: Decimal,
    /// Subtotal of tier- and deal-scaled high-value bonuses.
    pub high_value_bonus_total: Decimal,
    /// Flat bonus for distinct items encountered.
    pub engagement_bonus: Decimal,
    /// The grand total per diem.
    pub total: Decimal,
}
