//! Gym Battle Example
//!
//! Builds a team from the creature catalog and battles a random opponent.
//!
//! ```text
//! cargo run --example gym_battle -- squirtle charmander bulbasaur
//! ```
//!
//! Logging is controlled with `RUST_LOG` (default `arena_client=info`).

use anyhow::Result;
use arena_client::{
    ArenaConfig, MemoryRosterStore, OpponentProvider, PokeApiCatalog, TeamMember, TeamService,
    UserId,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arena_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ArenaConfig::from_env();
    config.validate()?;

    let catalog = PokeApiCatalog::from_config(&config.catalog);
    let teams = TeamService::new(MemoryRosterStore::<TeamMember>::new());
    let me = UserId("trainer".to_string());

    let mut picks: Vec<String> = std::env::args().skip(1).collect();
    if picks.is_empty() {
        picks = vec!["squirtle".into(), "charmander".into(), "bulbasaur".into()];
    }

    for pick in &picks {
        match teams.add_from_catalog(&me, &catalog, pick).await {
            Ok(member) => println!("Added {} ({})", member.name, member.category),
            Err(e) => println!("Could not add {}: {}", pick, e),
        }
    }

    let roster = match teams.battle_roster(&me).await {
        Ok(roster) => roster,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let mut provider = OpponentProvider::new(catalog, &config.encounters)?;
    let encounter = provider.battle(&roster).await?;

    let kind = if encounter.opponent.is_boss() {
        "Boss"
    } else {
        "Wild"
    };
    println!();
    println!("{} battle against {}", kind, encounter.opponent.name);
    println!("==================");

    for round in &encounter.result.rounds {
        println!(
            "Round {}: {} vs {} -> {}",
            round.slot + 1,
            round.user,
            round.opponent,
            round.outcome
        );
    }

    println!(
        "Result: {} (score {:+})",
        encounter.result.verdict, encounter.result.score
    );

    Ok(())
}
