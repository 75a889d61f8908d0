//! Slot-by-slot battle resolution
//!
//! Slot `i` of the user's roster fights slot `i` of the opponent's. A slot is
//! won when the user's category is strong against the opponent's and the
//! reverse does not hold; it is lost in the mirrored case and tied otherwise.
//! The battle verdict is the sign of `wins - losses`.

use thiserror::Error;

use crate::query::is_strong_against;
use crate::types::Creature;
use crate::validate::{ValidationError, validate_for_battle};

/// Result of a round or battle, from the user's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// Verdict for a net score: positive wins, negative loses, zero ties
    pub fn from_score(score: i32) -> Self {
        match score.cmp(&0) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Lose,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// Contribution to the net score
    pub fn points(self) -> i32 {
        match self {
            Outcome::Win => 1,
            Outcome::Lose => -1,
            Outcome::Tie => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Tie => "Tie",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One slot-vs-slot matchup
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round {
    /// 0-indexed slot
    pub slot: usize,
    pub user: Creature,
    pub opponent: Creature,
    pub outcome: Outcome,
}

/// Resolved battle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    /// Rounds in slot order
    pub rounds: Vec<Round>,

    /// Wins minus losses
    pub score: i32,

    pub verdict: Outcome,
}

impl BattleResult {
    pub fn wins(&self) -> usize {
        self.count(Outcome::Win)
    }

    pub fn losses(&self) -> usize {
        self.count(Outcome::Lose)
    }

    pub fn ties(&self) -> usize {
        self.count(Outcome::Tie)
    }

    pub fn is_win(&self) -> bool {
        self.verdict == Outcome::Win
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.rounds.iter().filter(|r| r.outcome == outcome).count()
    }
}

/// Which roster failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    User,
    Opponent,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::User => write!(f, "Your"),
            Side::Opponent => write!(f, "Opponent's"),
        }
    }
}

/// A roster was not ready to battle; no scoring was done
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{side} team is not battle-ready: {reason}")]
pub struct NotBattleReady {
    pub side: Side,
    #[source]
    pub reason: ValidationError,
}

/// Resolve a single slot
pub fn resolve_round(slot: usize, user: &Creature, opponent: &Creature) -> Round {
    let user_strong = is_strong_against(&user.category, &opponent.category);
    let opponent_strong = is_strong_against(&opponent.category, &user.category);

    let outcome = match (user_strong, opponent_strong) {
        (true, false) => Outcome::Win,
        (false, true) => Outcome::Lose,
        _ => Outcome::Tie,
    };

    Round {
        slot,
        user: user.clone(),
        opponent: opponent.clone(),
        outcome,
    }
}

/// Resolve a battle between two full rosters
pub fn resolve(user: &[Creature], opponent: &[Creature]) -> Result<BattleResult, NotBattleReady> {
    validate_for_battle(user).map_err(|reason| NotBattleReady {
        side: Side::User,
        reason,
    })?;
    validate_for_battle(opponent).map_err(|reason| NotBattleReady {
        side: Side::Opponent,
        reason,
    })?;

    let rounds: Vec<Round> = user
        .iter()
        .zip(opponent)
        .enumerate()
        .map(|(slot, (u, o))| resolve_round(slot, u, o))
        .collect();

    let score = rounds.iter().map(|r| r.outcome.points()).sum();

    Ok(BattleResult {
        rounds,
        score,
        verdict: Outcome::from_score(score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(members: &[(&str, &str)]) -> Vec<Creature> {
        members
            .iter()
            .map(|(name, category)| Creature::new(*name, *category))
            .collect()
    }

    fn outcomes(result: &BattleResult) -> Vec<Outcome> {
        result.rounds.iter().map(|r| r.outcome).collect()
    }

    #[test]
    fn test_starters_vs_onix() {
        let user = team(&[
            ("Squirtle", "water"),
            ("Charmander", "fire"),
            ("Bulbasaur", "grass"),
        ]);
        let opponent = team(&[("Onix", "rock"), ("Onix", "rock"), ("Onix", "rock")]);

        let result = resolve(&user, &opponent).unwrap();

        assert_eq!(
            outcomes(&result),
            vec![Outcome::Win, Outcome::Lose, Outcome::Win]
        );
        assert_eq!(result.score, 1);
        assert_eq!(result.verdict, Outcome::Win);
    }

    #[test]
    fn test_water_sweeps_rock() {
        let user = team(&[
            ("Squirtle", "water"),
            ("Psyduck", "water"),
            ("Staryu", "water"),
        ]);
        let brock = team(&[("Geodude", "rock"), ("Onix", "rock"), ("Kabuto", "rock")]);

        let result = resolve(&user, &brock).unwrap();

        assert_eq!(result.wins(), 3);
        assert_eq!(result.score, 3);
        assert!(result.is_win());
    }

    #[test]
    fn test_round_order_matches_slots() {
        let user = team(&[("A", "water"), ("B", "fire"), ("C", "grass")]);
        let opponent = team(&[("X", "fire"), ("Y", "grass"), ("Z", "water")]);

        let result = resolve(&user, &opponent).unwrap();

        for (i, round) in result.rounds.iter().enumerate() {
            assert_eq!(round.slot, i);
            assert_eq!(round.user, user[i]);
            assert_eq!(round.opponent, opponent[i]);
        }
        assert_eq!(result.wins(), 3);
    }

    #[test]
    fn test_permuting_opponent_changes_result() {
        let user = team(&[("A", "water"), ("B", "fire"), ("C", "grass")]);
        let favourable = team(&[("X", "fire"), ("Y", "grass"), ("Z", "water")]);
        let unfavourable = team(&[("Z", "water"), ("X", "fire"), ("Y", "grass")]);

        let good = resolve(&user, &favourable).unwrap();
        let bad = resolve(&user, &unfavourable).unwrap();

        assert_eq!(good.verdict, Outcome::Win);
        // water vs water, fire vs fire, grass vs grass
        assert_eq!(bad.verdict, Outcome::Tie);
        assert_ne!(outcomes(&good), outcomes(&bad));
    }

    #[test]
    fn test_deterministic() {
        let user = team(&[("A", "electric"), ("B", "ghost"), ("C", "ice")]);
        let opponent = team(&[("X", "ground"), ("Y", "normal"), ("Z", "dragon")]);

        assert_eq!(resolve(&user, &opponent), resolve(&user, &opponent));
    }

    #[test]
    fn test_immunity_is_not_strong() {
        // ground is strong vs electric, electric cannot touch ground
        let round = resolve_round(
            0,
            &Creature::new("Pikachu", "electric"),
            &Creature::new("Diglett", "ground"),
        );
        assert_eq!(round.outcome, Outcome::Lose);
    }

    #[test]
    fn test_mirror_strong_pair_ties() {
        // dragon is strong against dragon in both directions
        let round = resolve_round(
            0,
            &Creature::new("Dratini", "dragon"),
            &Creature::new("Dragonair", "DRAGON"),
        );
        assert_eq!(round.outcome, Outcome::Tie);
    }

    #[test]
    fn test_unknown_categories_tie() {
        let round = resolve_round(
            2,
            &Creature::new("A", "plasma"),
            &Creature::new("B", "water"),
        );
        assert_eq!(round.outcome, Outcome::Tie);
        assert_eq!(round.slot, 2);
    }

    #[test]
    fn test_net_score_verdicts() {
        // one win, two ties
        let user = team(&[("A", "water"), ("B", "normal"), ("C", "normal")]);
        let opponent = team(&[("X", "fire"), ("Y", "normal"), ("Z", "normal")]);
        let result = resolve(&user, &opponent).unwrap();
        assert_eq!((result.wins(), result.ties()), (1, 2));
        assert_eq!(result.verdict, Outcome::Win);

        // one win, one loss, one tie
        let user = team(&[("A", "water"), ("B", "fire"), ("C", "normal")]);
        let opponent = team(&[("X", "fire"), ("Y", "water"), ("Z", "normal")]);
        let result = resolve(&user, &opponent).unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.verdict, Outcome::Tie);

        // two losses
        let user = team(&[("A", "fire"), ("B", "grass"), ("C", "normal")]);
        let opponent = team(&[("X", "water"), ("Y", "fire"), ("Z", "normal")]);
        let result = resolve(&user, &opponent).unwrap();
        assert_eq!(result.losses(), 2);
        assert_eq!(result.verdict, Outcome::Lose);
    }

    #[test]
    fn test_not_battle_ready() {
        let full = team(&[("A", "water"), ("B", "fire"), ("C", "grass")]);
        let short = team(&[("A", "water")]);

        assert_eq!(
            resolve(&short, &full),
            Err(NotBattleReady {
                side: Side::User,
                reason: ValidationError::WrongSize {
                    expected: 3,
                    actual: 1
                },
            })
        );

        let err = resolve(&full, &[]).unwrap_err();
        assert_eq!(err.side, Side::Opponent);
        assert_eq!(
            err.to_string(),
            "Opponent's team is not battle-ready: Team must have exactly 3 creatures to battle, it has 0"
        );
    }

    #[test]
    fn test_from_score() {
        assert_eq!(Outcome::from_score(2), Outcome::Win);
        assert_eq!(Outcome::from_score(-1), Outcome::Lose);
        assert_eq!(Outcome::from_score(0), Outcome::Tie);
    }
}
