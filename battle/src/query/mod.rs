//! Query helpers over the effectiveness chart
//!
//! String-based lookups used by the resolver, plus typed queries
//! useful for suggesting team members.

mod matchup;

pub use matchup::{
    effectiveness, immune_defenders, is_strong_against, strong_against, threats_to, weak_against,
};
