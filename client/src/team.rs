//! User teams: owner-scoped roster rows and the service that edits them

use std::sync::atomic::{AtomicU64, Ordering};

use arena_battle::{Category, Creature, Roster, TEAM_SIZE, ValidationError, validate_for_preview};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::catalog::{CatalogError, CreatureCatalog, creature_from_entry};

/// Identifier of the user owning a row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rows that belong to a single user
pub trait UserOwned {
    fn owner(&self) -> &UserId;
}

/// Stored rows with a store-assigned id
pub trait Record: UserOwned {
    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TeamError {
    #[error("Team already has {limit} creatures, remove one first")]
    TeamFull { limit: usize },

    #[error("No team member with id {id}")]
    NotFound { id: u64 },

    #[error("Invalid team member: {0}")]
    InvalidMember(String),

    #[error(transparent)]
    NotReady(#[from] ValidationError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Roster store failure: {0}")]
    Store(String),
}

/// One creature on a user's team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub id: u64,
    pub owner: UserId,
    pub name: String,
    pub category: String,
    pub sprite: Option<String>,
}

impl TeamMember {
    pub fn to_creature(&self) -> Creature {
        Creature {
            name: self.name.clone(),
            category: self.category.clone(),
            sprite: self.sprite.clone(),
        }
    }
}

impl UserOwned for TeamMember {
    fn owner(&self) -> &UserId {
        &self.owner
    }
}

impl Record for TeamMember {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// A change made to a user's team
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamAction {
    Added { id: u64, name: String },
    Removed { id: u64, name: String },
}

impl std::fmt::Display for TeamAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamAction::Added { id, name } => write!(f, "added {} (#{})", name, id),
            TeamAction::Removed { id, name } => write!(f, "removed {} (#{})", name, id),
        }
    }
}

/// Audit trail entry: who changed their team, how and when
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub user: UserId,
    pub action: TeamAction,
    pub at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn now(user: UserId, action: TeamAction) -> Self {
        Self {
            user,
            action,
            at: Utc::now(),
        }
    }
}

impl UserOwned for AuditEntry {
    fn owner(&self) -> &UserId {
        &self.user
    }
}

/// Storage for owner-scoped rows
#[async_trait]
pub trait RosterStore<T: Record + Send + Sync + 'static>: Send + Sync {
    /// All rows of `owner`, in insertion order
    async fn by_owner(&self, owner: &UserId) -> Result<Vec<T>, TeamError>;

    /// Insert a row, assigning its id. Fails with [`TeamError::TeamFull`]
    /// when the owner already holds `limit` rows.
    async fn insert(&self, row: T, limit: usize) -> Result<T, TeamError>;

    /// Remove a row of `owner`, returning it if it existed
    async fn remove(&self, owner: &UserId, id: u64) -> Result<Option<T>, TeamError>;

    /// Append to the audit trail
    async fn record(&self, entry: AuditEntry) -> Result<(), TeamError>;

    /// Audit trail of `owner`, oldest first
    async fn history(&self, owner: &UserId) -> Result<Vec<AuditEntry>, TeamError>;
}

/// In-memory [`RosterStore`]
pub struct MemoryRosterStore<T> {
    rows: RwLock<Vec<T>>,
    audit: RwLock<Vec<AuditEntry>>,
    next_id: AtomicU64,
}

impl<T> MemoryRosterStore<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            audit: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl<T> Default for MemoryRosterStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> RosterStore<T> for MemoryRosterStore<T>
where
    T: Record + Clone + Send + Sync + 'static,
{
    async fn by_owner(&self, owner: &UserId) -> Result<Vec<T>, TeamError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|r| r.owner() == owner).cloned().collect())
    }

    async fn insert(&self, mut row: T, limit: usize) -> Result<T, TeamError> {
        let mut rows = self.rows.write().await;

        let held = rows.iter().filter(|r| r.owner() == row.owner()).count();
        if held >= limit {
            return Err(TeamError::TeamFull { limit });
        }

        row.set_id(self.next_id.fetch_add(1, Ordering::Relaxed));
        rows.push(row.clone());
        Ok(row)
    }

    async fn remove(&self, owner: &UserId, id: u64) -> Result<Option<T>, TeamError> {
        let mut rows = self.rows.write().await;

        let position = rows
            .iter()
            .position(|r| r.id() == id && r.owner() == owner);
        Ok(position.map(|i| rows.remove(i)))
    }

    async fn record(&self, entry: AuditEntry) -> Result<(), TeamError> {
        self.audit.write().await.push(entry);
        Ok(())
    }

    async fn history(&self, owner: &UserId) -> Result<Vec<AuditEntry>, TeamError> {
        let audit = self.audit.read().await;
        Ok(audit.iter().filter(|e| e.owner() == owner).cloned().collect())
    }
}

/// Builds and edits user teams, enforcing the team size cap
pub struct TeamService<S> {
    store: S,
}

impl<S: RosterStore<TeamMember>> TeamService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add a creature to the user's team.
    ///
    /// Name must be non-empty and the category known to the chart.
    pub async fn add_member(
        &self,
        owner: &UserId,
        creature: Creature,
    ) -> Result<TeamMember, TeamError> {
        let name = creature.name.trim();
        if name.is_empty() {
            return Err(TeamError::InvalidMember("name cannot be empty".to_string()));
        }
        let category = Category::parse(&creature.category).ok_or_else(|| {
            TeamError::InvalidMember(format!("unknown category {}", creature.category))
        })?;

        let member = TeamMember {
            id: 0,
            owner: owner.clone(),
            name: name.to_string(),
            category: category.as_str().to_string(),
            sprite: creature.sprite,
        };

        let member = self.store.insert(member, TEAM_SIZE).await?;
        self.store
            .record(AuditEntry::now(
                owner.clone(),
                TeamAction::Added {
                    id: member.id,
                    name: member.name.clone(),
                },
            ))
            .await?;
        tracing::info!(
            user = %owner,
            id = member.id,
            name = %member.name,
            "Added team member"
        );
        Ok(member)
    }

    /// Look a creature up in the catalog and add it to the user's team
    pub async fn add_from_catalog<C: CreatureCatalog + ?Sized>(
        &self,
        owner: &UserId,
        catalog: &C,
        query: &str,
    ) -> Result<TeamMember, TeamError> {
        let entry = catalog.search(query).await?;
        self.add_member(owner, creature_from_entry(entry)).await
    }

    /// Remove a creature from the user's team
    pub async fn remove_member(&self, owner: &UserId, id: u64) -> Result<TeamMember, TeamError> {
        let member = self
            .store
            .remove(owner, id)
            .await?
            .ok_or(TeamError::NotFound { id })?;

        self.store
            .record(AuditEntry::now(
                owner.clone(),
                TeamAction::Removed {
                    id,
                    name: member.name.clone(),
                },
            ))
            .await?;
        tracing::info!(user = %owner, id = id, "Removed team member");
        Ok(member)
    }

    /// Changes the user made to their team, oldest first
    pub async fn history(&self, owner: &UserId) -> Result<Vec<AuditEntry>, TeamError> {
        self.store.history(owner).await
    }

    /// The user's team, in the order members were added
    pub async fn team(&self, owner: &UserId) -> Result<Vec<TeamMember>, TeamError> {
        self.store.by_owner(owner).await
    }

    /// The user's team as a battle roster, if it is ready to fight
    pub async fn battle_roster(&self, owner: &UserId) -> Result<Roster, TeamError> {
        let roster: Roster = self
            .team(owner)
            .await?
            .iter()
            .map(TeamMember::to_creature)
            .collect();

        validate_for_preview(&roster)?;
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use arena_protocol::CatalogEntry;

    use super::*;

    fn ash() -> UserId {
        UserId("ash".into())
    }

    fn gary() -> UserId {
        UserId("gary".into())
    }

    fn service() -> TeamService<MemoryRosterStore<TeamMember>> {
        TeamService::new(MemoryRosterStore::new())
    }

    struct OneCreatureCatalog;

    #[async_trait]
    impl CreatureCatalog for OneCreatureCatalog {
        async fn fetch_by_id(&self, id: u32) -> Result<CatalogEntry, CatalogError> {
            Err(CatalogError::NotFound(id.to_string()))
        }

        async fn search(&self, query: &str) -> Result<CatalogEntry, CatalogError> {
            if query.eq_ignore_ascii_case("pikachu") {
                Ok(CatalogEntry {
                    id: Some(25),
                    name: "pikachu".into(),
                    category: "electric".into(),
                    sprite_url: Some("25.png".into()),
                })
            } else {
                Err(CatalogError::NotFound(query.to_string()))
            }
        }
    }

    #[tokio::test]
    async fn test_add_until_full() {
        let teams = service();
        let owner = ash();

        let starters = [
            ("Squirtle", "water"),
            ("Charmander", "Fire"),
            ("Bulbasaur", "grass"),
        ];
        for (name, category) in starters {
            teams
                .add_member(&owner, Creature::new(name, category))
                .await
                .unwrap();
        }

        let result = teams
            .add_member(&owner, Creature::new("Pidgey", "flying"))
            .await;
        assert_eq!(result, Err(TeamError::TeamFull { limit: 3 }));

        let team = teams.team(&owner).await.unwrap();
        assert_eq!(team.len(), 3);
        assert_eq!(team[1].category, "fire");
    }

    #[tokio::test]
    async fn test_teams_are_scoped_by_owner() {
        let teams = service();

        teams
            .add_member(&ash(), Creature::new("Pikachu", "electric"))
            .await
            .unwrap();
        let eevee = teams
            .add_member(&gary(), Creature::new("Eevee", "normal"))
            .await
            .unwrap();

        assert_eq!(teams.team(&ash()).await.unwrap().len(), 1);
        assert_eq!(teams.team(&gary()).await.unwrap(), vec![eevee.clone()]);

        // another user cannot remove gary's member
        assert_eq!(
            teams.remove_member(&ash(), eevee.id).await,
            Err(TeamError::NotFound { id: eevee.id })
        );
        assert_eq!(teams.remove_member(&gary(), eevee.id).await, Ok(eevee));
        assert!(teams.team(&gary()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_invalid_members() {
        let teams = service();

        let blank = teams.add_member(&ash(), Creature::new("  ", "water")).await;
        assert!(matches!(blank, Err(TeamError::InvalidMember(_))));

        let unknown = teams.add_member(&ash(), Creature::new("Missingno", "bird")).await;
        assert!(matches!(unknown, Err(TeamError::InvalidMember(_))));

        assert!(teams.team(&ash()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_battle_roster() {
        let teams = service();
        let owner = ash();

        assert_eq!(
            teams.battle_roster(&owner).await,
            Err(TeamError::NotReady(ValidationError::Empty))
        );

        teams
            .add_member(&owner, Creature::new("Squirtle", "water"))
            .await
            .unwrap();
        assert!(matches!(
            teams.battle_roster(&owner).await,
            Err(TeamError::NotReady(ValidationError::WrongSize { actual: 1, .. }))
        ));

        teams
            .add_member(&owner, Creature::new("Charmander", "fire"))
            .await
            .unwrap();
        teams
            .add_member(&owner, Creature::new("Bulbasaur", "grass"))
            .await
            .unwrap();

        let roster = teams.battle_roster(&owner).await.unwrap();
        let names: Vec<&str> = roster.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Squirtle", "Charmander", "Bulbasaur"]);
    }

    #[tokio::test]
    async fn test_add_from_catalog() {
        let teams = service();

        let pikachu = teams
            .add_from_catalog(&ash(), &OneCreatureCatalog, "Pikachu")
            .await
            .unwrap();
        assert_eq!(pikachu.name, "Pikachu");
        assert_eq!(pikachu.category, "electric");
        assert_eq!(pikachu.sprite.as_deref(), Some("25.png"));

        let missing = teams
            .add_from_catalog(&ash(), &OneCreatureCatalog, "agumon")
            .await;
        assert_eq!(
            missing,
            Err(TeamError::Catalog(CatalogError::NotFound("agumon".into())))
        );
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = MemoryRosterStore::<TeamMember>::new();
        let a = store
            .insert(
                TeamMember {
                    id: 0,
                    owner: ash(),
                    name: "A".into(),
                    category: "fire".into(),
                    sprite: None,
                },
                TEAM_SIZE,
            )
            .await
            .unwrap();
        let b = store
            .insert(
                TeamMember {
                    id: 0,
                    owner: gary(),
                    name: "B".into(),
                    category: "fire".into(),
                    sprite: None,
                },
                TEAM_SIZE,
            )
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.remove(&ash(), b.id).await, Ok(None));
    }

    #[tokio::test]
    async fn test_history_records_changes() {
        let teams = service();
        let before = Utc::now();

        let onix = teams
            .add_member(&ash(), Creature::new("Onix", "rock"))
            .await
            .unwrap();
        teams
            .add_member(&gary(), Creature::new("Eevee", "normal"))
            .await
            .unwrap();
        teams.remove_member(&ash(), onix.id).await.unwrap();

        // failed changes leave no trace
        let _ = teams.remove_member(&ash(), onix.id).await;
        let _ = teams.add_member(&ash(), Creature::new("", "rock")).await;

        let history = teams.history(&ash()).await.unwrap();
        let actions: Vec<TeamAction> = history.iter().map(|e| e.action.clone()).collect();
        assert_eq!(
            actions,
            vec![
                TeamAction::Added {
                    id: onix.id,
                    name: "Onix".into()
                },
                TeamAction::Removed {
                    id: onix.id,
                    name: "Onix".into()
                },
            ]
        );
        assert!(history.iter().all(|e| e.user == ash() && e.at >= before));
        assert!(history[0].at <= history[1].at);
        assert_eq!(history[1].action.to_string(), format!("removed Onix (#{})", onix.id));

        assert_eq!(teams.history(&gary()).await.unwrap().len(), 1);
    }
}
