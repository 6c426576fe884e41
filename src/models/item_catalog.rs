//! The item universe and its high-value subset.
//!
//! This module defines the [`ItemCatalog`], the fixed set of items a sales
//! engineer might encounter, together with the subset of items that are
//! bonus-eligible. A catalog is constructed once per process and never
//! mutated afterwards.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::index;

use crate::config::ItemPoolConfig;
use crate::error::{EngineError, EngineResult};

use super::trip_log::ItemId;

/// The fixed universe of items and its high-value subset.
///
/// Membership in the high-value subset is the sole predicate driving
/// bonus eligibility, so lookups go through a `HashSet`.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    /// All item identifiers, in generation order.
    items: Vec<ItemId>,
    /// The bonus-eligible subset of `items`.
    high_value: HashSet<ItemId>,
}

impl ItemCatalog {
    /// Creates a catalog directly from its parts.
    ///
    /// The caller must ensure `high_value` is a subset of `items`;
    /// [`ItemCatalog::generate`] guarantees this.
    pub fn new(items: Vec<ItemId>, high_value: HashSet<ItemId>) -> Self {
        Self { items, high_value }
    }

    /// Generates a catalog from item pool parameters.
    ///
    /// Materializes `total_items` identifiers of the form `ITEM_00042`
    /// (zero-padded to five digits) and samples `high_value_count` of them
    /// uniformly without replacement into the high-value subset.
    ///
    /// The random source is supplied by the caller; pass a seeded
    /// [`rand::rngs::StdRng`] for reproducible catalogs.
    ///
    /// # Errors
    ///
    /// Returns `InvalidItemPool` if `high_value_count` exceeds
    /// `total_items`.
    ///
    /// # Examples
    ///
    /// ```
    /// use per_diem_engine::config::ItemPoolConfig;
    /// use per_diem_engine::models::ItemCatalog;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let pool = ItemPoolConfig { total_items: 100, high_value_count: 40 };
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let catalog = ItemCatalog::generate(&pool, &mut rng).unwrap();
    /// assert_eq!(catalog.items().len(), 100);
    /// assert_eq!(catalog.high_value_count(), 40);
    /// ```
    pub fn generate<R: Rng + ?Sized>(pool: &ItemPoolConfig, rng: &mut R) -> EngineResult<Self> {
        if pool.high_value_count > pool.total_items {
            return Err(EngineError::InvalidItemPool {
                requested: pool.high_value_count,
                available: pool.total_items,
            });
        }

        let items: Vec<ItemId> = (0..pool.total_items)
            .map(|i| format!("ITEM_{:05}", i))
            .collect();

        let high_value: HashSet<ItemId> = index::sample(rng, pool.total_items, pool.high_value_count)
            .into_iter()
            .map(|i| items[i].clone())
            .collect();

        Ok(Self { items, high_value })
    }

    /// Returns all item identifiers in the universe.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Returns the number of items in the high-value subset.
    pub fn high_value_count(&self) -> usize {
        self.high_value.len()
    }

    /// Returns true if the item belongs to the high-value subset.
    pub fn is_high_value(&self, item: &str) -> bool {
        self.high_value.contains(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(total: usize, high_value: usize) -> ItemPoolConfig {
        ItemPoolConfig {
            total_items: total,
            high_value_count: high_value,
        }
    }

    #[test]
    fn test_generate_produces_requested_counts() {
        let mut rng = StdRng::seed_from_u64(42);
        let catalog = ItemCatalog::generate(&pool(500, 200), &mut rng).unwrap();

        assert_eq!(catalog.items().len(), 500);
        assert_eq!(catalog.high_value_count(), 200);
    }

    #[test]
    fn test_generated_ids_are_zero_padded() {
        let mut rng = StdRng::seed_from_u64(42);
        let catalog = ItemCatalog::generate(&pool(3, 0), &mut rng).unwrap();

        assert_eq!(catalog.items(), ["ITEM_00000", "ITEM_00001", "ITEM_00002"]);
    }

    #[test]
    fn test_high_value_is_subset_of_items() {
        let mut rng = StdRng::seed_from_u64(42);
        let catalog = ItemCatalog::generate(&pool(100, 60), &mut rng).unwrap();

        // Every sampled high-value id must resolve back to a universe item.
        let hits = catalog
            .items()
            .iter()
            .filter(|item| catalog.is_high_value(item))
            .count();

        assert_eq!(hits, 60);
    }

    #[test]
    fn test_is_high_value_false_for_unknown_item() {
        let mut rng = StdRng::seed_from_u64(42);
        let catalog = ItemCatalog::generate(&pool(10, 10), &mut rng).unwrap();

        assert!(!catalog.is_high_value("WIDGET_99999"));
    }

    #[test]
    fn test_all_items_high_value_when_counts_equal() {
        let mut rng = StdRng::seed_from_u64(42);
        let catalog = ItemCatalog::generate(&pool(25, 25), &mut rng).unwrap();

        assert!(catalog.items().iter().all(|i| catalog.is_high_value(i)));
    }

    #[test]
    fn test_generate_rejects_oversized_high_value_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = ItemCatalog::generate(&pool(10, 11), &mut rng);

        match result {
            Err(EngineError::InvalidItemPool {
                requested,
                available,
            }) => {
                assert_eq!(requested, 11);
                assert_eq!(available, 10);
            }
            other => panic!("Expected InvalidItemPool, got {:?}", other),
        }
    }

    #[test]
    fn test_same_seed_produces_same_catalog() {
        let a = ItemCatalog::generate(&pool(200, 80), &mut StdRng::seed_from_u64(7)).unwrap();
        let b = ItemCatalog::generate(&pool(200, 80), &mut StdRng::seed_from_u64(7)).unwrap();

        for item in a.items() {
            assert_eq!(a.is_high_value(item), b.is_high_value(item));
        }
    }

    #[test]
    fn test_new_uses_supplied_parts() {
        let items = vec!["ITEM_00000".to_string(), "ITEM_00001".to_string()];
        let high_value: HashSet<ItemId> = [String::from("ITEM_00001")].into_iter().collect();
        let catalog = ItemCatalog::new(items, high_value);

        assert!(!catalog.is_high_value("ITEM_00000"));
        assert!(catalog.is_high_value("ITEM_00001"));
        assert_eq!(catalog.high_value_count(), 1);
    }
}
