//! Creatures and rosters

use super::category::Category;

/// Number of creatures each side must field to start a battle
pub const TEAM_SIZE: usize = 3;

/// A named combatant with a single category
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creature {
    /// Display name (e.g., "Squirtle")
    pub name: String,

    /// Category name as supplied by the caller (e.g., "water").
    /// Unknown categories are allowed and fight as neutral.
    pub category: String,

    /// Sprite reference for display
    #[cfg_attr(feature = "serde", serde(default))]
    pub sprite: Option<String>,
}

impl Creature {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            sprite: None,
        }
    }

    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = Some(sprite.into());
        self
    }

    /// Resolved category, `None` when the chart does not know it
    pub fn kind(&self) -> Option<Category> {
        Category::parse(&self.category)
    }
}

impl std::fmt::Display for Creature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// Ordered battle lineup; slot i fights slot i
pub type Roster = Vec<Creature>;
