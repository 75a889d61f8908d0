//! Battle resolution core for creature rosters.
//!
//! A user fields a roster of three creatures against a computer-controlled
//! roster. Slot `i` fights slot `i`, and each slot is decided purely by the
//! type-effectiveness chart. Nothing in this crate performs I/O.
//!
//! # Overview
//!
//! ```text
//! arena-protocol (catalog wire format)
//!        │
//!        ▼
//! arena-client (catalog, opponent provider, teams)
//!        │
//!        ▼
//! arena-battle (chart + validation + resolution) ← THIS CRATE
//! ```
//!
//! # Main Types
//!
//! - [`Category`] - Effectiveness categories with the multiplier chart
//! - [`Creature`], [`Roster`] - Battle lineups
//! - [`BattleResult`], [`Round`], [`Outcome`] - Resolution output
//! - [`Opponent`], [`OpponentPool`], [`EncounterPolicy`] - Opponent selection data
//!
//! # Example Usage
//!
//! ```
//! use arena_battle::{Creature, Outcome, OpponentPool, resolve};
//!
//! let user = vec![
//!     Creature::new("Squirtle", "water"),
//!     Creature::new("Psyduck", "water"),
//!     Creature::new("Staryu", "water"),
//! ];
//! let pool = OpponentPool::default();
//! let brock = pool.find("Brock").unwrap();
//!
//! let result = resolve(&user, &brock.roster).unwrap();
//! assert_eq!(result.verdict, Outcome::Win);
//! ```

pub mod opponents;
pub mod query;
pub mod resolve;
pub mod types;
pub mod validate;

pub use opponents::{
    BOSSES, BossEntry, EncounterKind, EncounterPolicy, IdSampler, Opponent, OpponentPool,
    PoolError,
};
pub use query::{effectiveness, is_strong_against};
pub use resolve::{BattleResult, NotBattleReady, Outcome, Round, Side, resolve, resolve_round};
pub use types::{Category, Creature, EFFECTIVENESS, Roster, TEAM_SIZE};
pub use validate::{ValidationError, validate_for_battle, validate_for_preview};
