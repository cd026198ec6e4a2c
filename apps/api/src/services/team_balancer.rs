use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::game_locks::GameLocks;
use crate::domain::errors::{TeamGenerationError, TeamGenerationResult};
use crate::domain::game::RosterEntry;
use crate::domain::player::Player;
use crate::domain::repositories::GameRepository;
use crate::domain::team::{balance_teams, GeneratedTeams};

/// Minimum number of resolvable checked-in players needed for a matchup
pub const MIN_PLAYERS: usize = 2;

/// Tunables for the balancer
#[derive(Debug, Clone)]
pub struct BalancerSettings {
    /// Upper bound on each persistence round trip
    pub persistence_timeout: Duration,
}

impl Default for BalancerSettings {
    fn default() -> Self {
        Self {
            persistence_timeout: Duration::from_secs(10),
        }
    }
}

/// Stored matchup of a game as seen by viewers
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentTeams {
    pub teams_generated: bool,
    pub teams_generated_at: Option<DateTime<Utc>>,
    /// `None` until teams have been generated and stored
    pub teams: Option<GeneratedTeams>,
}

/// Builds and publishes balanced matchups for games
///
/// All storage access goes through the injected [`GameRepository`].
/// Generation for one game is serialized; different games run in parallel.
pub struct TeamBalancer {
    repository: Arc<dyn GameRepository>,
    locks: GameLocks,
    settings: BalancerSettings,
}

impl TeamBalancer {
    pub fn new(repository: Arc<dyn GameRepository>, settings: BalancerSettings) -> Self {
        Self {
            repository,
            locks: GameLocks::new(),
            settings,
        }
    }

    /// Generates two balanced teams from a game's checked-in players
    ///
    /// Validation order: the game must exist, `requesting_user_id` must be
    /// its host, and at least two checked-in players must have profiles.
    /// The matchup is computed before anything is written; on success the
    /// previous assignment set is replaced and the game is flagged in one
    /// repository call.
    ///
    /// # Errors
    /// * `NotFound` - no game with `game_id`
    /// * `Forbidden` - requester is not the host
    /// * `InsufficientPlayers` - fewer than two eligible players
    /// * `Persistence` - a storage call failed or timed out
    pub async fn generate_teams(
        &self,
        game_id: Uuid,
        requesting_user_id: Uuid,
    ) -> TeamGenerationResult<GeneratedTeams> {
        let _guard = self.locks.lock(game_id).await;

        let game = self
            .persist("load game", self.repository.get_game(game_id))
            .await?
            .ok_or_else(|| {
                tracing::warn!(%game_id, "Team generation requested for unknown game");
                TeamGenerationError::game_not_found()
            })?;

        game.authorize_host(requesting_user_id).map_err(|e| {
            tracing::warn!(%game_id, user_id = %requesting_user_id, "Non-host tried to generate teams");
            e
        })?;

        let roster = self
            .persist(
                "load checked-in roster",
                self.repository.get_checked_in_roster(game_id),
            )
            .await?;
        let players = eligible_players(roster).map_err(|e| {
            tracing::warn!(%game_id, reason = %e, "Not enough players to generate teams");
            e
        })?;

        let teams = balance_teams(&players);
        let assignments = teams.assignments(game_id, requesting_user_id);

        self.persist(
            "save team assignments",
            self.repository.publish_teams(game_id, &assignments, Utc::now()),
        )
        .await?;

        tracing::info!(
            %game_id,
            regenerated = game.teams_generated(),
            team1 = teams.team1.len(),
            team2 = teams.team2.len(),
            team1_avg_skill = teams.team1.avg_skill(),
            team2_avg_skill = teams.team2.avg_skill(),
            "Teams generated"
        );

        Ok(teams)
    }

    /// Reads the stored matchup of a game
    ///
    /// Anyone may read; no host check. Returns `teams: None` until teams
    /// have been generated.
    pub async fn current_teams(&self, game_id: Uuid) -> TeamGenerationResult<CurrentTeams> {
        let game = self
            .persist("load game", self.repository.get_game(game_id))
            .await?
            .ok_or_else(TeamGenerationError::game_not_found)?;

        if !game.teams_generated() {
            return Ok(CurrentTeams {
                teams_generated: false,
                teams_generated_at: None,
                teams: None,
            });
        }

        let rows = self
            .persist(
                "load team assignments",
                self.repository.find_assignments(game_id),
            )
            .await?;
        let teams = (!rows.is_empty()).then(|| GeneratedTeams::from_assignments(rows));

        Ok(CurrentTeams {
            teams_generated: true,
            teams_generated_at: game.teams_generated_at(),
            teams,
        })
    }

    /// Runs one storage call under the configured timeout
    async fn persist<T, F>(&self, operation: &'static str, call: F) -> TeamGenerationResult<T>
    where
        F: Future<Output = Result<T, String>>,
    {
        match tokio::time::timeout(self.settings.persistence_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::error!(operation, error = %e, "Persistence call failed");
                Err(TeamGenerationError::persistence(format!(
                    "Failed to {}: {}",
                    operation, e
                )))
            }
            Err(_) => {
                tracing::error!(
                    operation,
                    timeout_ms = self.settings.persistence_timeout.as_millis() as u64,
                    "Persistence call timed out"
                );
                Err(TeamGenerationError::persistence(format!(
                    "Failed to {}: timed out",
                    operation
                )))
            }
        }
    }
}

/// Distinct checked-in players with resolvable profiles, in roster order
fn eligible_players(roster: Vec<RosterEntry>) -> TeamGenerationResult<Vec<Player>> {
    if roster.is_empty() {
        return Err(TeamGenerationError::no_checked_in_players());
    }

    let mut seen = HashSet::new();
    let players: Vec<Player> = roster
        .into_iter()
        .filter(|entry| entry.status.is_eligible_for_teams())
        .filter_map(|entry| entry.profile)
        .filter(|player| seen.insert(player.id))
        .collect();

    if players.len() < MIN_PLAYERS {
        return Err(TeamGenerationError::too_few_players());
    }

    Ok(players)
}
