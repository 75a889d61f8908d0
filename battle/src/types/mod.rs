//! Domain types shared by validation, resolution and opponent selection

mod category;
mod creature;

pub use category::{Category, EFFECTIVENESS};
pub use creature::{Creature, Roster, TEAM_SIZE};
