//! Opponent selection: curated bosses or wild rosters from the catalog

use std::ops::RangeInclusive;

use arena_battle::{
    BattleResult, Creature, EncounterKind, EncounterPolicy, IdSampler, NotBattleReady, Opponent,
    OpponentPool, TEAM_SIZE, resolve,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::catalog::{CreatureCatalog, creature_from_entry};
use crate::config::{ConfigError, EncounterConfig};

/// Name given to generated opponents
pub const WILD_OPPONENT_NAME: &str = "Wild Encounter";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Creature catalog unavailable after {attempts} fetch attempts")]
    CatalogUnavailable { attempts: usize },

    #[error("No boss opponents to choose from")]
    EmptyPool,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BattleError {
    #[error(transparent)]
    NotReady(#[from] NotBattleReady),

    #[error(transparent)]
    Opponent(#[from] ProviderError),
}

/// An opponent together with the resolved battle against it
#[derive(Debug, Clone, PartialEq)]
pub struct Encounter {
    pub opponent: Opponent,
    pub result: BattleResult,
}

/// Picks opponents for battles.
///
/// Each selection rolls the [`EncounterPolicy`]: boss encounters are drawn
/// uniformly from the pool, wild encounters sample distinct catalog ids and
/// fetch them one by one. A failed fetch is skipped and replaced by a fresh
/// id until the roster is full or the attempt budget runs out.
pub struct OpponentProvider<C> {
    catalog: C,
    pool: OpponentPool,
    policy: EncounterPolicy,
    wild_ids: RangeInclusive<u32>,
    max_fetch_attempts: usize,
    rng: StdRng,
}

impl<C: CreatureCatalog> OpponentProvider<C> {
    pub fn new(catalog: C, config: &EncounterConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            catalog,
            pool: OpponentPool::default(),
            policy: EncounterPolicy::new(config.wild_weight),
            wild_ids: config.wild_ids(),
            max_fetch_attempts: config.max_fetch_attempts,
            rng: StdRng::from_entropy(),
        })
    }

    /// Replace the boss pool
    pub fn with_pool(mut self, pool: OpponentPool) -> Self {
        self.pool = pool;
        self
    }

    /// Use a fixed rng (reproducible selections)
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn pool(&self) -> &OpponentPool {
        &self.pool
    }

    pub fn policy(&self) -> EncounterPolicy {
        self.policy
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Select the opponent for the next battle
    pub async fn select_opponent(&mut self) -> Result<Opponent, ProviderError> {
        let kind = self.policy.roll(&mut self.rng);
        tracing::debug!(kind = ?kind, "Rolled encounter");

        match kind {
            EncounterKind::Boss => self.boss(),
            EncounterKind::Wild => self.wild().await,
        }
    }

    /// Pick a boss uniformly from the pool
    pub fn boss(&mut self) -> Result<Opponent, ProviderError> {
        let opponent = self
            .pool
            .opponents()
            .choose(&mut self.rng)
            .cloned()
            .ok_or(ProviderError::EmptyPool)?;

        tracing::debug!(boss = %opponent.name, "Selected boss opponent");
        Ok(opponent)
    }

    /// Build a wild opponent from the catalog.
    ///
    /// Never returns fewer than [`TEAM_SIZE`] creatures; fails with
    /// [`ProviderError::CatalogUnavailable`] once the attempt budget or the
    /// id range is exhausted.
    pub async fn wild(&mut self) -> Result<Opponent, ProviderError> {
        let mut sampler = IdSampler::new(self.wild_ids.clone());
        let mut roster: Vec<Creature> = Vec::with_capacity(TEAM_SIZE);
        let mut attempts = 0;

        while roster.len() < TEAM_SIZE {
            let id = match sampler.draw(&mut self.rng) {
                Some(id) if attempts < self.max_fetch_attempts => id,
                _ => {
                    tracing::error!(
                        attempts = attempts,
                        filled = roster.len(),
                        "Giving up on wild encounter"
                    );
                    return Err(ProviderError::CatalogUnavailable { attempts });
                }
            };
            attempts += 1;

            match self.catalog.fetch_by_id(id).await {
                Ok(entry) => roster.push(creature_from_entry(entry)),
                Err(e) => {
                    tracing::warn!(id = id, error = %e, "Skipping wild creature");
                }
            }
        }

        tracing::debug!(attempts = attempts, "Generated wild opponent");

        Ok(Opponent {
            name: WILD_OPPONENT_NAME.to_string(),
            sprite: roster.first().and_then(|c| c.sprite.clone()),
            roster,
            kind: EncounterKind::Wild,
        })
    }

    /// Check the user's roster, select an opponent and resolve the battle.
    ///
    /// The roster is checked before any catalog traffic happens.
    pub async fn battle(&mut self, roster: &[Creature]) -> Result<Encounter, BattleError> {
        arena_battle::validate_for_preview(roster).map_err(|reason| NotBattleReady {
            side: arena_battle::Side::User,
            reason,
        })?;

        let opponent = self.select_opponent().await?;
        let result = resolve(roster, &opponent.roster)?;

        tracing::debug!(
            opponent = %opponent.name,
            verdict = %result.verdict,
            score = result.score,
            "Battle resolved"
        );

        Ok(Encounter { opponent, result })
    }
}
