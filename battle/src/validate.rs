//! Roster checks run before a battle

use thiserror::Error;

use crate::types::{Creature, TEAM_SIZE};

/// Why a roster cannot battle
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Team must have exactly {expected} creatures to battle, it has {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("Team is empty, add creatures before battling")]
    Empty,
}

/// Check that a roster can start a battle.
///
/// Only the size is checked; names and categories are trusted.
pub fn validate_for_battle(roster: &[Creature]) -> Result<(), ValidationError> {
    if roster.len() != TEAM_SIZE {
        return Err(ValidationError::WrongSize {
            expected: TEAM_SIZE,
            actual: roster.len(),
        });
    }
    Ok(())
}

/// Same as [`validate_for_battle`], but reports an empty roster as
/// [`ValidationError::Empty`] for the pre-battle team view.
pub fn validate_for_preview(roster: &[Creature]) -> Result<(), ValidationError> {
    if roster.is_empty() {
        return Err(ValidationError::Empty);
    }
    validate_for_battle(roster)
}
