//! Configuration loading and management for the Per Diem Calculation Engine.
//!
//! This module provides functionality to load per-diem configurations from
//! YAML files, including policy metadata, tier rates, bonus rates, and item
//! pool parameters.
//!
//! # Example
//!
//! ```no_run
//! use per_diem_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/per_diem").unwrap();
//! println!("Loaded policy: {}", loader.policy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BonusRates, EngineConfig, ItemPoolConfig, PolicyMetadata, TierRate};
