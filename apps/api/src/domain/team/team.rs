use uuid::Uuid;

use super::value_objects::TeamNumber;
use crate::domain::player::Player;

/// One side of a generated matchup
///
/// Computed from an assignment, never stored as a single row.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    team_number: TeamNumber,
    players: Vec<Player>,
    avg_skill: f64,
}

impl Team {
    /// Builds a team and computes its average skill
    ///
    /// # Example
    /// ```
    /// use opencourt_api::domain::player::{Player, SkillLevel};
    /// use opencourt_api::domain::team::{Team, TeamNumber};
    /// use uuid::Uuid;
    ///
    /// let elite = Player { skill_level: Some(SkillLevel::Elite), ..Player::new(Uuid::new_v4()) };
    /// let casual = Player { skill_level: Some(SkillLevel::Casual), ..Player::new(Uuid::new_v4()) };
    ///
    /// let team = Team::new(TeamNumber::One, vec![elite, casual]);
    /// assert_eq!(team.avg_skill(), 3.0);
    /// ```
    pub fn new(team_number: TeamNumber, players: Vec<Player>) -> Self {
        let avg_skill = average_skill(&players);
        Self {
            team_number,
            players,
            avg_skill,
        }
    }

    pub fn team_number(&self) -> TeamNumber {
        self.team_number
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn avg_skill(&self) -> f64 {
        self.avg_skill
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Mean skill ordinal, 0 for an empty team
fn average_skill(players: &[Player]) -> f64 {
    if players.is_empty() {
        return 0.0;
    }
    let total: u32 = players.iter().map(|p| u32::from(p.skill_value())).sum();
    f64::from(total) / players.len() as f64
}

/// Persisted link between one player and one side of a game's matchup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamAssignment {
    pub game_id: Uuid,
    pub player_id: Uuid,
    pub team_number: TeamNumber,
    pub assigned_by: Uuid,
}

/// Both sides of a matchup
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTeams {
    pub team1: Team,
    pub team2: Team,
}

impl GeneratedTeams {
    /// Rebuilds teams from stored (team, player) pairs, keeping their order
    pub fn from_assignments(rows: Vec<(TeamNumber, Player)>) -> Self {
        let (one, two): (Vec<_>, Vec<_>) = rows
            .into_iter()
            .partition(|(number, _)| *number == TeamNumber::One);

        Self {
            team1: Team::new(TeamNumber::One, one.into_iter().map(|(_, p)| p).collect()),
            team2: Team::new(TeamNumber::Two, two.into_iter().map(|(_, p)| p).collect()),
        }
    }

    pub fn teams(&self) -> [&Team; 2] {
        [&self.team1, &self.team2]
    }

    pub fn player_count(&self) -> usize {
        self.team1.len() + self.team2.len()
    }

    /// One assignment row per drafted player, team 1 first
    pub fn assignments(&self, game_id: Uuid, assigned_by: Uuid) -> Vec<TeamAssignment> {
        self.teams()
            .into_iter()
            .flat_map(|team| {
                team.players().iter().map(move |player| TeamAssignment {
                    game_id,
                    player_id: player.id,
                    team_number: team.team_number(),
                    assigned_by,
                })
            })
            .collect()
    }
}
