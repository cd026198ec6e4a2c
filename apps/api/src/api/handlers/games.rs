use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::domain::player::{Player, Position, SkillLevel};
use crate::domain::team::{GeneratedTeams, Team};

/// Player as shown in a team listing
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerResponse {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub position_group: Position,
    pub height_ft: Option<i32>,
    pub height_in: Option<i32>,
    pub skill_level: Option<SkillLevel>,
    pub reliability_score: i32,
    pub composite_score: f64,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            full_name: player.full_name.clone(),
            position: player.position.clone(),
            position_group: player.position_group(),
            height_ft: player.height_ft,
            height_in: player.height_in,
            skill_level: player.skill_level,
            reliability_score: player.effective_reliability(),
            composite_score: player.composite_score(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamResponse {
    pub team_number: i16,
    pub avg_skill: f64,
    pub players: Vec<PlayerResponse>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            team_number: team.team_number().as_i16(),
            avg_skill: team.avg_skill(),
            players: team.players().iter().map(PlayerResponse::from).collect(),
        }
    }
}

fn team_responses(teams: &GeneratedTeams) -> Vec<TeamResponse> {
    teams.teams().into_iter().map(TeamResponse::from).collect()
}

/// Response from team generation
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateTeamsResponse {
    pub success: bool,
    pub teams: Vec<TeamResponse>,
}

/// Stored matchup of a game
#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentTeamsResponse {
    pub teams_generated: bool,
    pub teams_generated_at: Option<DateTime<Utc>>,
    /// Empty until teams have been generated
    pub teams: Vec<TeamResponse>,
}

/// Generate balanced teams from the checked-in roster (host only)
///
/// POST /api/games/:id/generate-teams
pub async fn generate_teams(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GenerateTeamsResponse>, ApiError> {
    let teams = state.balancer.generate_teams(game_id, user_id).await?;

    Ok(Json(GenerateTeamsResponse {
        success: true,
        teams: team_responses(&teams),
    }))
}

/// Get the current matchup of a game
///
/// GET /api/games/:id/teams
pub async fn get_teams(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<CurrentTeamsResponse>, ApiError> {
    let current = state.balancer.current_teams(game_id).await?;

    Ok(Json(CurrentTeamsResponse {
        teams_generated: current.teams_generated,
        teams_generated_at: current.teams_generated_at,
        teams: current.teams.as_ref().map(team_responses).unwrap_or_default(),
    }))
}
