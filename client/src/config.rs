//! Runtime configuration and loaders.
use std::env;
use std::ops::RangeInclusive;
use std::time::Duration;

use arena_battle::TEAM_SIZE;
use arena_battle::opponents::{DEFAULT_WILD_IDS, DEFAULT_WILD_WEIGHT};
use thiserror::Error;

/// Default base url of the creature catalog.
pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2";

/// Largest wild id range accepted; well above the size of any real catalog.
pub const MAX_WILD_IDS: u64 = 100_000;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Wild weight must be within 0..=1, got {0}")]
    WildWeight(f64),

    #[error("Wild id range {min}..={max} must hold at least {needed} ids")]
    WildRange { min: u32, max: u32, needed: usize },

    #[error("Wild id range {min}..={max} holds more than {limit} ids")]
    WildRangeTooLarge { min: u32, max: u32, limit: u64 },

    #[error("Max fetch attempts must be at least {needed}, got {got}")]
    FetchAttempts { got: usize, needed: usize },

    #[error("Catalog url cannot be empty")]
    CatalogUrl,
}

/// Configuration for the catalog client and opponent selection.
#[derive(Clone, Debug, Default)]
pub struct ArenaConfig {
    pub catalog: CatalogConfig,
    pub encounters: EncounterConfig,
}

impl ArenaConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `ARENA_CATALOG_URL`
    /// - `ARENA_CATALOG_TIMEOUT_SECS`
    /// - `ARENA_WILD_WEIGHT`
    /// - `ARENA_WILD_MIN_ID` / `ARENA_WILD_MAX_ID`
    /// - `ARENA_MAX_FETCH_ATTEMPTS`
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = read_env::<String>("ARENA_CATALOG_URL") {
            config.catalog.base_url = url;
        }

        if let Some(secs) = read_env::<u64>("ARENA_CATALOG_TIMEOUT_SECS") {
            config.catalog.timeout = Duration::from_secs(secs.max(1));
        }

        if let Some(weight) = read_env::<f64>("ARENA_WILD_WEIGHT") {
            config.encounters.wild_weight = weight;
        }

        if let Some(min) = read_env::<u32>("ARENA_WILD_MIN_ID") {
            config.encounters.wild_min_id = min;
        }

        if let Some(max) = read_env::<u32>("ARENA_WILD_MAX_ID") {
            config.encounters.wild_max_id = max;
        }

        if let Some(attempts) = read_env::<usize>("ARENA_MAX_FETCH_ATTEMPTS") {
            config.encounters.max_fetch_attempts = attempts;
        }

        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.base_url.trim().is_empty() {
            return Err(ConfigError::CatalogUrl);
        }
        self.encounters.validate()
    }
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Per-request timeout applied by the HTTP client.
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EncounterConfig {
    /// Chance of a wild encounter instead of a boss.
    pub wild_weight: f64,
    pub wild_min_id: u32,
    pub wild_max_id: u32,
    /// Catalog fetches allowed while filling one wild roster.
    pub max_fetch_attempts: usize,
}

impl EncounterConfig {
    pub fn wild_ids(&self) -> RangeInclusive<u32> {
        self.wild_min_id..=self.wild_max_id
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.wild_weight) {
            return Err(ConfigError::WildWeight(self.wild_weight));
        }

        let ids = if self.wild_max_id >= self.wild_min_id {
            u64::from(self.wild_max_id - self.wild_min_id) + 1
        } else {
            0
        };
        if ids < TEAM_SIZE as u64 {
            return Err(ConfigError::WildRange {
                min: self.wild_min_id,
                max: self.wild_max_id,
                needed: TEAM_SIZE,
            });
        }
        if ids > MAX_WILD_IDS {
            return Err(ConfigError::WildRangeTooLarge {
                min: self.wild_min_id,
                max: self.wild_max_id,
                limit: MAX_WILD_IDS,
            });
        }

        if self.max_fetch_attempts < TEAM_SIZE {
            return Err(ConfigError::FetchAttempts {
                got: self.max_fetch_attempts,
                needed: TEAM_SIZE,
            });
        }

        Ok(())
    }
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            wild_weight: DEFAULT_WILD_WEIGHT,
            wild_min_id: *DEFAULT_WILD_IDS.start(),
            wild_max_id: *DEFAULT_WILD_IDS.end(),
            max_fetch_attempts: 12,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
