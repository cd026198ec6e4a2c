use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::game::{Game, RosterEntry, RosterStatus};
use crate::domain::player::Player;
use crate::domain::repositories::GameRepository;
use crate::domain::team::{TeamAssignment, TeamNumber};

#[derive(Debug, Clone)]
struct RosterRow {
    game_id: Uuid,
    player_id: Uuid,
    status: RosterStatus,
}

#[derive(Debug, Default)]
struct Store {
    games: HashMap<Uuid, Game>,
    profiles: HashMap<Uuid, Player>,
    roster: Vec<RosterRow>,
    assignments: Vec<TeamAssignment>,
    writes: usize,
}

/// In-process implementation of GameRepository
///
/// Keeps games, profiles, roster rows and assignments in memory for the
/// test suites.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    store: RwLock<Store>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_game(&self, game: Game) -> Result<(), String> {
        let mut store = self.store.write().map_err(|e| e.to_string())?;
        store.games.insert(game.id(), game);
        Ok(())
    }

    /// Adds a roster row and stores (or replaces) the player's profile
    pub fn add_roster_entry(
        &self,
        game_id: Uuid,
        status: RosterStatus,
        player: Player,
    ) -> Result<(), String> {
        let mut store = self.store.write().map_err(|e| e.to_string())?;
        store.roster.push(RosterRow {
            game_id,
            player_id: player.id,
            status,
        });
        store.profiles.insert(player.id, player);
        Ok(())
    }

    /// Adds a roster row whose profile does not resolve
    pub fn add_unresolved_roster_entry(
        &self,
        game_id: Uuid,
        player_id: Uuid,
        status: RosterStatus,
    ) -> Result<(), String> {
        let mut store = self.store.write().map_err(|e| e.to_string())?;
        store.roster.push(RosterRow {
            game_id,
            player_id,
            status,
        });
        Ok(())
    }

    /// Moves a player to a new roster status, e.g. on QR check-in
    pub fn set_roster_status(
        &self,
        game_id: Uuid,
        player_id: Uuid,
        status: RosterStatus,
    ) -> Result<(), String> {
        let mut store = self.store.write().map_err(|e| e.to_string())?;
        let row = store
            .roster
            .iter_mut()
            .find(|r| r.game_id == game_id && r.player_id == player_id)
            .ok_or_else(|| format!("Roster entry not found: {}/{}", game_id, player_id))?;
        row.status = status;
        Ok(())
    }

    pub fn game(&self, game_id: Uuid) -> Result<Option<Game>, String> {
        let store = self.store.read().map_err(|e| e.to_string())?;
        Ok(store.games.get(&game_id).cloned())
    }

    /// Stored assignment rows for a game, in insertion order
    pub fn assignments(&self, game_id: Uuid) -> Result<Vec<TeamAssignment>, String> {
        let store = self.store.read().map_err(|e| e.to_string())?;
        Ok(store
            .assignments
            .iter()
            .filter(|a| a.game_id == game_id)
            .cloned()
            .collect())
    }

    /// Number of write operations performed through GameRepository
    pub fn write_count(&self) -> Result<usize, String> {
        let store = self.store.read().map_err(|e| e.to_string())?;
        Ok(store.writes)
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn get_game(&self, game_id: Uuid) -> Result<Option<Game>, String> {
        self.game(game_id)
    }

    async fn get_checked_in_roster(&self, game_id: Uuid) -> Result<Vec<RosterEntry>, String> {
        let store = self.store.read().map_err(|e| e.to_string())?;
        Ok(store
            .roster
            .iter()
            .filter(|r| r.game_id == game_id && r.status == RosterStatus::CheckedIn)
            .map(|r| RosterEntry {
                game_id: r.game_id,
                player_id: r.player_id,
                status: r.status,
                profile: store.profiles.get(&r.player_id).cloned(),
            })
            .collect())
    }

    async fn delete_assignments(&self, game_id: Uuid) -> Result<(), String> {
        let mut store = self.store.write().map_err(|e| e.to_string())?;
        store.assignments.retain(|a| a.game_id != game_id);
        store.writes += 1;
        Ok(())
    }

    async fn insert_assignments(&self, assignments: &[TeamAssignment]) -> Result<(), String> {
        let mut store = self.store.write().map_err(|e| e.to_string())?;
        for assignment in assignments {
            let duplicate = store
                .assignments
                .iter()
                .any(|a| a.game_id == assignment.game_id && a.player_id == assignment.player_id);
            if duplicate {
                return Err(format!(
                    "Duplicate team assignment for player {} in game {}",
                    assignment.player_id, assignment.game_id
                ));
            }
        }
        store.assignments.extend_from_slice(assignments);
        store.writes += 1;
        Ok(())
    }

    async fn update_game_flags(
        &self,
        game_id: Uuid,
        teams_generated_at: DateTime<Utc>,
    ) -> Result<(), String> {
        let mut store = self.store.write().map_err(|e| e.to_string())?;
        let game = store
            .games
            .get_mut(&game_id)
            .ok_or_else(|| format!("Game not found: {}", game_id))?;
        *game = Game::from_persistence(game.id(), game.host_id(), true, Some(teams_generated_at));
        store.writes += 1;
        Ok(())
    }

    async fn publish_teams(
        &self,
        game_id: Uuid,
        assignments: &[TeamAssignment],
        teams_generated_at: DateTime<Utc>,
    ) -> Result<(), String> {
        let mut store = self.store.write().map_err(|e| e.to_string())?;
        let game = store
            .games
            .get(&game_id)
            .cloned()
            .ok_or_else(|| format!("Game not found: {}", game_id))?;

        let mut seen = HashSet::new();
        if let Some(duplicate) = assignments.iter().find(|a| !seen.insert(a.player_id)) {
            return Err(format!(
                "Duplicate team assignment for player {} in game {}",
                duplicate.player_id, game_id
            ));
        }

        store.assignments.retain(|a| a.game_id != game_id);
        store.assignments.extend_from_slice(assignments);
        store.games.insert(
            game_id,
            Game::from_persistence(game_id, game.host_id(), true, Some(teams_generated_at)),
        );
        store.writes += 1;
        Ok(())
    }

    async fn find_assignments(&self, game_id: Uuid) -> Result<Vec<(TeamNumber, Player)>, String> {
        let store = self.store.read().map_err(|e| e.to_string())?;
        let mut rows: Vec<(TeamNumber, Player)> = store
            .assignments
            .iter()
            .filter(|a| a.game_id == game_id)
            .filter_map(|a| {
                store
                    .profiles
                    .get(&a.player_id)
                    .map(|p| (a.team_number, p.clone()))
            })
            .collect();
        rows.sort_by_key(|(number, _)| *number);
        Ok(rows)
    }
}
