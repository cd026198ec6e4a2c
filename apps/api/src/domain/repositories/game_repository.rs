use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::game::{Game, RosterEntry};
use crate::domain::player::Player;
use crate::domain::team::{TeamAssignment, TeamNumber};

/// Repository trait for games, their rosters, and team assignments
///
/// Games, rosters, and profiles are read-only from this side. Team
/// assignment rows are written only through this trait.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Find a game by its ID
    async fn get_game(&self, game_id: Uuid) -> Result<Option<Game>, String>;

    /// Roster entries with status `checked_in`, in roster order, joined with
    /// each player's profile
    async fn get_checked_in_roster(&self, game_id: Uuid) -> Result<Vec<RosterEntry>, String>;

    /// Delete every team assignment of a game
    async fn delete_assignments(&self, game_id: Uuid) -> Result<(), String>;

    /// Insert assignment rows in bulk
    async fn insert_assignments(&self, assignments: &[TeamAssignment]) -> Result<(), String>;

    /// Set `teams_generated` and stamp `teams_generated_at`
    async fn update_game_flags(
        &self,
        game_id: Uuid,
        teams_generated_at: DateTime<Utc>,
    ) -> Result<(), String>;

    /// Replace a game's assignment set and flag the game as generated
    ///
    /// Defaults to delete, insert, then flag. Implementations with
    /// transactions should override this so a failure leaves both the
    /// previous rows and the previous flags untouched.
    async fn publish_teams(
        &self,
        game_id: Uuid,
        assignments: &[TeamAssignment],
        teams_generated_at: DateTime<Utc>,
    ) -> Result<(), String> {
        self.delete_assignments(game_id).await?;
        self.insert_assignments(assignments).await?;
        self.update_game_flags(game_id, teams_generated_at).await
    }

    /// Stored assignments joined with profiles, ordered by team number
    async fn find_assignments(&self, game_id: Uuid) -> Result<Vec<(TeamNumber, Player)>, String>;
}
