//! Category matchup helpers

use crate::types::Category;

/// Multiplier for a matchup given by name. Unknown categories are neutral (1.0).
pub fn effectiveness(attacker: &str, defender: &str) -> f32 {
    match (Category::parse(attacker), Category::parse(defender)) {
        (Some(a), Some(d)) => a.effectiveness(d),
        _ => 1.0,
    }
}

/// Check if `attacker` is strong (>1x) against `defender`, by name.
///
/// Lookup is case-insensitive; unknown categories are never strong.
pub fn is_strong_against(attacker: &str, defender: &str) -> bool {
    effectiveness(attacker, defender) > 1.0
}

/// Get all defenders the attacker is strong against
pub fn strong_against(attacker: Category) -> Vec<Category> {
    Category::all()
        .iter()
        .copied()
        .filter(|d| attacker.effectiveness(*d) > 1.0)
        .collect()
}

/// Get all defenders that resist the attacker (0 < effectiveness < 1)
pub fn weak_against(attacker: Category) -> Vec<Category> {
    Category::all()
        .iter()
        .copied()
        .filter(|d| {
            let eff = attacker.effectiveness(*d);
            eff > 0.0 && eff < 1.0
        })
        .collect()
}

/// Get all defenders that are immune to the attacker
pub fn immune_defenders(attacker: Category) -> Vec<Category> {
    Category::all()
        .iter()
        .copied()
        .filter(|d| attacker.effectiveness(*d) == 0.0)
        .collect()
}

/// Get all attackers that are strong against the defender
pub fn threats_to(defender: Category) -> Vec<Category> {
    Category::all()
        .iter()
        .copied()
        .filter(|a| a.effectiveness(defender) > 1.0)
        .collect()
}
