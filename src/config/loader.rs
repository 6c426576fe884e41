//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading per-diem
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    BonusRates, BonusesConfig, EngineConfig, ItemPoolConfig, ItemPoolFile, PolicyMetadata,
    TierRate, TiersConfig,
};

/// Loads and provides access to per-diem configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query tier rates, bonus rates, and item pool
/// parameters.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/per_diem/
/// ├── policy.yaml     # Policy metadata
/// ├── tiers.yaml      # Tier base rates and bonus multipliers
/// ├── bonuses.yaml    # High-value and engagement bonus rates
/// └── item_pool.yaml  # Item universe parameters
/// ```
///
/// # Example
///
/// ```no_run
/// use per_diem_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/per_diem").unwrap();
///
/// // Get a tier rate
/// let senior = loader.get_tier("Senior").unwrap();
/// println!("Senior base rate: ${}", senior.base_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/per_diem")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use per_diem_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/per_diem")?;
    /// # Ok::<(), per_diem_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load policy.yaml
        let policy_path = path.join("policy.yaml");
        let metadata = Self::load_yaml::<PolicyMetadata>(&policy_path)?;

        // Load tiers.yaml
        let tiers_path = path.join("tiers.yaml");
        let tiers_config = Self::load_yaml::<TiersConfig>(&tiers_path)?;

        // Load bonuses.yaml
        let bonuses_path = path.join("bonuses.yaml");
        let bonuses_config = Self::load_yaml::<BonusesConfig>(&bonuses_path)?;

        // Load item_pool.yaml
        let item_pool_path = path.join("item_pool.yaml");
        let item_pool_file = Self::load_yaml::<ItemPoolFile>(&item_pool_path)?;

        let config = EngineConfig::new(
            metadata,
            tiers_config.tiers,
            bonuses_config.bonuses,
            item_pool_file.item_pool,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        self.config.policy()
    }

    /// Gets the rate details for a tier by name.
    ///
    /// # Arguments
    ///
    /// * `tier` - The tier name (e.g., "Senior")
    ///
    /// # Returns
    ///
    /// Returns the tier rate if found, or an `InvalidTier` error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use per_diem_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/per_diem")?;
    /// let senior = loader.get_tier("Senior")?;
    /// println!("Bonus multiplier: {}", senior.bonus_multiplier);
    /// # Ok::<(), per_diem_engine::error::EngineError>(())
    /// ```
    pub fn get_tier(&self, tier: &str) -> EngineResult<&TierRate> {
        self.config
            .tiers()
            .get(tier)
            .ok_or_else(|| EngineError::InvalidTier {
                tier: tier.to_string(),
            })
    }

    /// Returns the bonus rates.
    pub fn bonuses(&self) -> &BonusRates {
        self.config.bonuses()
    }

    /// Returns the item pool parameters.
    pub fn item_pool(&self) -> &ItemPoolConfig {
        self.config.item_pool()
    }
}
