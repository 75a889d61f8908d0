//! Opponent data and the selection policy
//!
//! The asynchronous part of opponent selection (fetching wild creatures)
//! lives in `arena-client`; this module holds what can be decided without I/O.

mod policy;
mod pool;

pub use policy::{DEFAULT_WILD_IDS, DEFAULT_WILD_WEIGHT, EncounterPolicy, IdSampler};
pub use pool::{BOSSES, BossEntry, Opponent, OpponentPool, PoolError};

/// How an opponent was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterKind {
    /// Curated opponent with a fixed roster
    Boss,
    /// Roster sampled from the catalog at battle time
    Wild,
}
