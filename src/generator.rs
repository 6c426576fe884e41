//! Synthetic trip log generation.
//!
//! This module produces random trip logs for demonstration runs and
//! benchmarks. Generation is driven by a caller-supplied random source, so
//! reproducibility is the caller's choice: pass a seeded
//! [`rand::rngs::StdRng`] for repeatable logs, or an entropy-seeded one
//! otherwise.

use rand::Rng;
use rust_decimal::Decimal;

use crate::models::{ItemId, TripLogEntry};

/// Generates a random trip log.
///
/// Produces `count` entries. Each entry's item is drawn uniformly at
/// random, with replacement, from `item_pool`; its deal potential is drawn
/// uniformly from [1.0, 3.0] and rounded to one decimal place.
///
/// An empty `item_pool` yields an empty log.
///
/// # Examples
///
/// ```
/// use per_diem_engine::generator::generate_trip_log;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rust_decimal::Decimal;
///
/// let pool = vec!["ITEM_00000".to_string(), "ITEM_00001".to_string()];
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let log = generate_trip_log(10, &pool, &mut rng);
/// assert_eq!(log.len(), 10);
/// assert!(log.iter().all(|e| e.deal_potential >= Decimal::ONE));
/// ```
pub fn generate_trip_log<R: Rng + ?Sized>(
    count: usize,
    item_pool: &[ItemId],
    rng: &mut R,
) -> Vec<TripLogEntry> {
    if item_pool.is_empty() {
        return Vec::new();
    }

    (0..count)
        .map(|_| {
            let item = &item_pool[rng.gen_range(0..item_pool.len())];
            let raw: f64 = rng.gen_range(1.0..=3.0);
            // Round to one decimal place, kept exact as a scale-1 decimal.
            let deal_potential = Decimal::new((raw * 10.0).round() as i64, 1);
            TripLogEntry::new(item.clone(), deal_potential)
        })
        .collect()
}
