use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::value_objects::RosterStatus;
use crate::domain::errors::TeamGenerationError;
use crate::domain::player::Player;

/// Game aggregate, restricted to the state team balancing needs
///
/// Game records are owned by the external game store. The balancer reads
/// them and only ever flips the teams-generated flag.
///
/// # Invariants
/// - Only the host may generate teams
/// - `teams_generated` never goes back to `false` once set
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    id: Uuid,
    host_id: Uuid,
    teams_generated: bool,
    teams_generated_at: Option<DateTime<Utc>>,
}

impl Game {
    /// Creates a game with no teams generated yet
    pub fn new(id: Uuid, host_id: Uuid) -> Self {
        Self {
            id,
            host_id,
            teams_generated: false,
            teams_generated_at: None,
        }
    }

    /// Reconstructs a Game from persistence layer data
    pub fn from_persistence(
        id: Uuid,
        host_id: Uuid,
        teams_generated: bool,
        teams_generated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            host_id,
            teams_generated,
            teams_generated_at,
        }
    }

    /// Checks that `user_id` hosts this game
    ///
    /// # Example
    /// ```
    /// use opencourt_api::domain::game::Game;
    /// use uuid::Uuid;
    ///
    /// let host = Uuid::new_v4();
    /// let game = Game::new(Uuid::new_v4(), host);
    ///
    /// assert!(game.authorize_host(host).is_ok());
    /// assert!(game.authorize_host(Uuid::new_v4()).is_err());
    /// ```
    pub fn authorize_host(&self, user_id: Uuid) -> Result<(), TeamGenerationError> {
        if self.host_id != user_id {
            return Err(TeamGenerationError::not_host());
        }
        Ok(())
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn host_id(&self) -> Uuid {
        self.host_id
    }

    pub fn teams_generated(&self) -> bool {
        self.teams_generated
    }

    pub fn teams_generated_at(&self) -> Option<DateTime<Utc>> {
        self.teams_generated_at
    }
}

/// A (game, player) pairing on the roster
///
/// `profile` is `None` when the player's profile could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub game_id: Uuid,
    pub player_id: Uuid,
    pub status: RosterStatus,
    pub profile: Option<Player>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_no_teams() {
        let game = Game::new(Uuid::new_v4(), Uuid::new_v4());
        assert!(!game.teams_generated());
        assert!(game.teams_generated_at().is_none());
    }

    #[test]
    fn non_host_is_forbidden() {
        let game = Game::new(Uuid::new_v4(), Uuid::new_v4());
        let err = game.authorize_host(Uuid::new_v4()).unwrap_err();
        assert_eq!(err, TeamGenerationError::not_host());
    }

    #[test]
    fn restored_game_keeps_generation_state() {
        let at = Utc::now();
        let game = Game::from_persistence(Uuid::new_v4(), Uuid::new_v4(), true, Some(at));
        assert!(game.teams_generated());
        assert_eq!(game.teams_generated_at(), Some(at));
    }
}
