//! Trip log models.
//!
//! This module defines the entries that make up a sales engineer's trip
//! log: the ordered sequence of item interactions a per-diem calculation
//! consumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier for an item a sales engineer can interact with.
///
/// Item identifiers are opaque string tokens drawn from a fixed universe
/// of unique values (e.g., "ITEM_00042").
pub type ItemId = String;

/// A single logged interaction with an item.
///
/// A trip log is an ordered sequence of these entries. Entries may repeat
/// the same item; the order of entries does not affect the calculated
/// total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripLogEntry {
    /// The item that was interacted with.
    pub item_id: ItemId,
    /// The deal-potential score for this interaction, conventionally
    /// in [1.0, 3.0]. Scales the high-value bonus.
    pub deal_potential: Decimal,
}

impl TripLogEntry {
    /// Creates a new trip log entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use per_diem_engine::models::TripLogEntry;
    /// use rust_decimal::Decimal;
    ///
    /// let entry = TripLogEntry::new("ITEM_00042", Decimal::new(20, 1));
    /// assert_eq!(entry.item_id, "ITEM_00042");
    /// assert_eq!(entry.deal_potential, Decimal::new(20, 1));
    /// ```
    pub fn new(item_id: impl Into<ItemId>, deal_potential: Decimal) -> Self {
        Self {
            item_id: item_id.into(),
            deal_potential,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_entry() {
        let json = r#"{
            "item_id": "ITEM_00007",
            "deal_potential": "2.5"
        }"#;

        let entry: TripLogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.item_id, "ITEM_00007");
        assert_eq!(entry.deal_potential, Decimal::new(25, 1));
    }

    #[test]
    fn test_serialize_entry_round_trip() {
        let entry = TripLogEntry::new("ITEM_01234", Decimal::new(13, 1));
        let json = serde_json::to_string(&entry).unwrap();

        let deserialized: TripLogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }

    #[test]
    fn test_new_accepts_str_and_string() {
        let from_str = TripLogEntry::new("ITEM_00001", Decimal::ONE);
        let from_string = TripLogEntry::new(String::from("ITEM_00001"), Decimal::ONE);
        assert_eq!(from_str, from_string);
    }
}
