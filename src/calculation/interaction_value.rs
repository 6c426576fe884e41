//! Per-interaction value calculation.
//!
//! This module computes the value of a single logged interaction: the
//! tier base rate, plus a high-value bonus when the item is bonus-eligible.

use rust_decimal::Decimal;

use crate::config::{BonusRates, TierRate};
use crate::models::TripLogEntry;

/// The value of a single interaction, split into its components.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionValue {
    /// The tier base rate credited for the interaction.
    pub base: Decimal,
    /// The high-value bonus, zero when the item is not bonus-eligible.
    pub high_value_bonus: Decimal,
}

impl InteractionValue {
    /// Returns the combined value of the interaction.
    pub fn total(&self) -> Decimal {
        self.base + self.high_value_bonus
    }
}

/// Computes the value of a single logged interaction.
///
/// Every interaction earns the tier base rate. Interactions with a
/// high-value item additionally earn the base high-value bonus, scaled by
/// the tier's bonus multiplier and the interaction's deal-potential score.
///
/// # Arguments
///
/// * `entry` - The logged interaction
/// * `rate` - The tier rate details
/// * `bonuses` - The configured bonus rates
/// * `is_high_value` - Whether the item belongs to the high-value subset
///
/// # Examples
///
/// ```
/// use per_diem_engine::calculation::interaction_value;
/// use per_diem_engine::config::{BonusRates, TierRate};
/// use per_diem_engine::models::TripLogEntry;
/// use rust_decimal::Decimal;
///
/// let rate = TierRate {
///     base_rate: Decimal::from(50),
///     bonus_multiplier: Decimal::new(12, 1),
/// };
/// let bonuses = BonusRates {
///     high_value_base: Decimal::from(10),
///     engagement_per_unique_item: Decimal::ONE,
/// };
/// let entry = TripLogEntry::new("ITEM_00042", Decimal::from(2));
///
/// let value = interaction_value(&entry, &rate, &bonuses, true);
/// assert_eq!(value.base, Decimal::from(50));
/// assert_eq!(value.high_value_bonus, Decimal::from(24));
/// assert_eq!(value.total(), Decimal::from(74));
/// ```
pub fn interaction_value(
    entry: &TripLogEntry,
    rate: &TierRate,
    bonuses: &BonusRates,
    is_high_value: bool,
) -> InteractionValue {
    let high_value_bonus = if is_high_value {
        bonuses.high_value_base * rate.bonus_multiplier * entry.deal_potential
    } else {
        Decimal::ZERO
    };

    InteractionValue {
        base: rate.base_rate,
        high_value_bonus,
    }
}
