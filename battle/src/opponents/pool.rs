//! Curated boss opponents

use thiserror::Error;

use crate::types::{Creature, Roster, TEAM_SIZE};
use crate::validate::{ValidationError, validate_for_battle};

use super::EncounterKind;

const TRAINER_SPRITES: &str = "https://play.pokemonshowdown.com/sprites/trainers";

/// An adversary and the roster it fields
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opponent {
    pub name: String,
    pub sprite: Option<String>,
    pub roster: Roster,
    pub kind: EncounterKind,
}

impl Opponent {
    pub fn is_boss(&self) -> bool {
        self.kind == EncounterKind::Boss
    }
}

/// One row of the boss table: trainer name, sprite file, ordered roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossEntry {
    pub name: &'static str,
    pub sprite: &'static str,
    pub roster: [(&'static str, &'static str); TEAM_SIZE],
}

impl BossEntry {
    pub fn sprite_url(&self) -> String {
        format!("{}/{}", TRAINER_SPRITES, self.sprite)
    }

    pub fn to_opponent(&self) -> Opponent {
        Opponent {
            name: self.name.to_string(),
            sprite: Some(self.sprite_url()),
            roster: self
                .roster
                .iter()
                .map(|(name, category)| Creature::new(*name, *category))
                .collect(),
            kind: EncounterKind::Boss,
        }
    }
}

/// Gym leaders, Elite Four and champion
pub static BOSSES: [BossEntry; 12] = [
    BossEntry {
        name: "Brock",
        sprite: "brock.png",
        roster: [("Geodude", "rock"), ("Onix", "rock"), ("Kabuto", "rock")],
    },
    BossEntry {
        name: "Misty",
        sprite: "misty.png",
        roster: [("Staryu", "water"), ("Psyduck", "water"), ("Starmie", "water")],
    },
    BossEntry {
        name: "Lt. Surge",
        sprite: "ltsurge.png",
        roster: [
            ("Voltorb", "electric"),
            ("Pikachu", "electric"),
            ("Raichu", "electric"),
        ],
    },
    BossEntry {
        name: "Erika",
        sprite: "erika.png",
        roster: [
            ("Victreebel", "grass"),
            ("Tangela", "grass"),
            ("Vileplume", "grass"),
        ],
    },
    BossEntry {
        name: "Koga",
        sprite: "koga.png",
        roster: [("Koffing", "poison"), ("Muk", "poison"), ("Weezing", "poison")],
    },
    BossEntry {
        name: "Sabrina",
        sprite: "sabrina.png",
        roster: [
            ("Kadabra", "psychic"),
            ("Mr. Mime", "psychic"),
            ("Alakazam", "psychic"),
        ],
    },
    BossEntry {
        name: "Blaine",
        sprite: "blaine.png",
        roster: [("Growlithe", "fire"), ("Ponyta", "fire"), ("Arcanine", "fire")],
    },
    BossEntry {
        name: "Giovanni",
        sprite: "giovanni.png",
        roster: [("Rhyhorn", "ground"), ("Dugtrio", "ground"), ("Rhydon", "ground")],
    },
    BossEntry {
        name: "Lorelei",
        sprite: "lorelei.png",
        roster: [("Dewgong", "water"), ("Jynx", "ice"), ("Lapras", "water")],
    },
    BossEntry {
        name: "Bruno",
        sprite: "bruno.png",
        roster: [
            ("Hitmonchan", "fighting"),
            ("Hitmonlee", "fighting"),
            ("Machamp", "fighting"),
        ],
    },
    BossEntry {
        name: "Agatha",
        sprite: "agatha.png",
        roster: [("Haunter", "ghost"), ("Arbok", "poison"), ("Gengar", "ghost")],
    },
    BossEntry {
        name: "Lance",
        sprite: "lance.png",
        roster: [
            ("Gyarados", "water"),
            ("Dragonair", "dragon"),
            ("Dragonite", "dragon"),
        ],
    },
];

/// Errors building a custom pool
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Opponent pool is empty")]
    Empty,

    #[error("Opponent {name} has an invalid roster: {source}")]
    InvalidRoster {
        name: String,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid opponent table: {0}")]
    Json(String),
}

/// The set of boss opponents a provider picks from
#[derive(Debug, Clone)]
pub struct OpponentPool {
    opponents: Vec<Opponent>,
}

impl OpponentPool {
    /// Build a pool, rejecting empty pools and rosters that cannot battle.
    /// Every entry is marked as a boss.
    pub fn new(mut opponents: Vec<Opponent>) -> Result<Self, PoolError> {
        if opponents.is_empty() {
            return Err(PoolError::Empty);
        }

        for opponent in &mut opponents {
            validate_for_battle(&opponent.roster).map_err(|source| PoolError::InvalidRoster {
                name: opponent.name.clone(),
                source,
            })?;
            opponent.kind = EncounterKind::Boss;
        }

        Ok(Self { opponents })
    }

    /// Load a pool from a JSON table:
    /// `[{"name": .., "sprite": .., "roster": [{"name": .., "category": ..}, ..]}, ..]`
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, PoolError> {
        #[derive(serde::Deserialize)]
        struct Row {
            name: String,
            #[serde(default)]
            sprite: Option<String>,
            roster: Roster,
        }

        let rows: Vec<Row> =
            serde_json::from_str(json).map_err(|e| PoolError::Json(e.to_string()))?;
        Self::new(
            rows.into_iter()
                .map(|row| Opponent {
                    name: row.name,
                    sprite: row.sprite,
                    roster: row.roster,
                    kind: EncounterKind::Boss,
                })
                .collect(),
        )
    }

    pub fn opponents(&self) -> &[Opponent] {
        &self.opponents
    }

    pub fn len(&self) -> usize {
        self.opponents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opponents.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Opponent> {
        self.opponents.get(index)
    }

    /// Find an opponent by name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&Opponent> {
        self.opponents
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for OpponentPool {
    fn default() -> Self {
        Self {
            opponents: BOSSES.iter().map(BossEntry::to_opponent).collect(),
        }
    }
}
