//! Engagement bonus calculation functionality.
//!
//! This module provides the flat bonus a sales engineer earns per distinct
//! item encountered during a trip, regardless of item value tier.

use rust_decimal::Decimal;

use crate::config::BonusRates;

/// The result of calculating the engagement bonus.
#[derive(Debug, Clone, PartialEq)]
pub struct EngagementBonusResult {
    /// The number of distinct items encountered.
    pub unique_items: usize,
    /// The total engagement bonus.
    pub amount: Decimal,
}

/// Calculates the engagement bonus for a trip.
///
/// The bonus is flat per distinct item: duplicate interactions with the
/// same item count once.
///
/// # Arguments
///
/// * `unique_items` - The number of distinct items encountered
/// * `bonuses` - The configured bonus rates
///
/// # Examples
///
/// ```
/// use per_diem_engine::calculation::calculate_engagement_bonus;
/// use per_diem_engine::config::BonusRates;
/// use rust_decimal::Decimal;
///
/// let bonuses = BonusRates {
///     high_value_base: Decimal::from(10),
///     engagement_per_unique_item: Decimal::ONE,
/// };
///
/// let result = calculate_engagement_bonus(7, &bonuses);
/// assert_eq!(result.amount, Decimal::from(7));
/// ```
pub fn calculate_engagement_bonus(
    unique_items: usize,
    bonuses: &BonusRates,
) -> EngagementBonusResult {
    let amount = Decimal::from(unique_items as u64) * bonuses.engagement_per_unique_item;

    EngagementBonusResult {
        unique_items,
        amount,
    }
}
