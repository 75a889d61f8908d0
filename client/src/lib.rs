//! Async edge of the arena: creature catalog access, opponent selection
//! and user team management.
//!
//! ```ignore
//! use arena_client::{ArenaConfig, OpponentProvider, PokeApiCatalog};
//!
//! let config = ArenaConfig::from_env();
//! let catalog = PokeApiCatalog::from_config(&config.catalog);
//! let mut provider = OpponentProvider::new(catalog, &config.encounters)?;
//!
//! let encounter = provider.battle(&my_roster).await?;
//! println!("{} vs {}: {}", "me", encounter.opponent.name, encounter.result.verdict);
//! ```

mod catalog;
mod config;
mod provider;
pub mod team;

pub use arena_battle::{
    BattleResult, Category, Creature, EncounterKind, Opponent, OpponentPool, Outcome, Roster,
    Round, TEAM_SIZE,
};
pub use arena_protocol::CatalogEntry;

pub use catalog::{CatalogError, CreatureCatalog, PokeApiCatalog, creature_from_entry};
pub use config::{
    ArenaConfig, CatalogConfig, ConfigError, DEFAULT_CATALOG_URL, EncounterConfig,
    MAX_WILD_IDS,
};
pub use provider::{BattleError, Encounter, OpponentProvider, ProviderError, WILD_OPPONENT_NAME};
pub use team::{
    AuditEntry, MemoryRosterStore, Record, RosterStore, TeamAction, TeamError, TeamMember,
    TeamService, UserId, UserOwned,
};
