use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::game::{Game, RosterEntry, RosterStatus};
use crate::domain::player::{Player, SkillLevel};
use crate::domain::repositories::GameRepository;
use crate::domain::team::{TeamAssignment, TeamNumber};

/// PostgreSQL implementation of GameRepository
///
/// Reads `games`, `game_roster` and `profiles`, and owns the
/// `team_assignments` table. Schema lives in `migrations/`.
pub struct PostgresGameRepository {
    pool: PgPool,
}

impl PostgresGameRepository {
    /// Creates a new PostgresGameRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GameRow {
    id: Uuid,
    host_id: Uuid,
    teams_generated: bool,
    teams_generated_at: Option<DateTime<Utc>>,
}

#[derive(sqlx::FromRow)]
struct RosterRow {
    game_id: Uuid,
    player_id: Uuid,
    status: String,
    profile_id: Option<Uuid>,
    full_name: Option<String>,
    position: Option<String>,
    height_ft: Option<i32>,
    height_in: Option<i32>,
    skill_level: Option<String>,
    reliability_score: Option<i32>,
}

#[derive(sqlx::FromRow)]
struct AssignedPlayerRow {
    team_number: i16,
    id: Uuid,
    full_name: Option<String>,
    position: Option<String>,
    height_ft: Option<i32>,
    height_in: Option<i32>,
    skill_level: Option<String>,
    reliability_score: Option<i32>,
}

fn parse_skill_level(player_id: Uuid, value: Option<String>) -> Option<SkillLevel> {
    let value = value?;
    let parsed = SkillLevel::parse(&value);
    if parsed.is_none() {
        tracing::warn!(%player_id, skill_level = %value, "Unrecognized skill level, scoring as unset");
    }
    parsed
}

impl RosterRow {
    fn into_entry(self) -> Result<RosterEntry, String> {
        let status = RosterStatus::parse(&self.status)
            .ok_or_else(|| format!("Invalid roster status: {}", self.status))?;

        let profile = self.profile_id.map(|id| Player {
            id,
            full_name: self.full_name,
            position: self.position,
            height_ft: self.height_ft,
            height_in: self.height_in,
            skill_level: parse_skill_level(id, self.skill_level),
            reliability_score: self.reliability_score,
        });

        Ok(RosterEntry {
            game_id: self.game_id,
            player_id: self.player_id,
            status,
            profile,
        })
    }
}

impl AssignedPlayerRow {
    fn into_pair(self) -> Result<(TeamNumber, Player), String> {
        let team_number = TeamNumber::try_from(self.team_number)?;
        let player = Player {
            id: self.id,
            full_name: self.full_name,
            position: self.position,
            height_ft: self.height_ft,
            height_in: self.height_in,
            skill_level: parse_skill_level(self.id, self.skill_level),
            reliability_score: self.reliability_score,
        };
        Ok((team_number, player))
    }
}

async fn delete_rows<'e, E>(executor: E, game_id: Uuid) -> Result<(), String>
where
    E: PgExecutor<'e>,
{
    sqlx::query("DELETE FROM team_assignments WHERE game_id = $1")
        .bind(game_id)
        .execute(executor)
        .await
        .map_err(|e| format!("Failed to delete team assignments: {}", e))?;

    Ok(())
}

async fn insert_rows<'e, E>(executor: E, assignments: &[TeamAssignment]) -> Result<(), String>
where
    E: PgExecutor<'e>,
{
    if assignments.is_empty() {
        return Ok(());
    }

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
        "INSERT INTO team_assignments (game_id, player_id, team_number, assigned_by) ",
    );
    builder.push_values(assignments, |mut row, a| {
        row.push_bind(a.game_id)
            .push_bind(a.player_id)
            .push_bind(a.team_number.as_i16())
            .push_bind(a.assigned_by);
    });

    builder
        .build()
        .execute(executor)
        .await
        .map_err(|e| format!("Failed to save team assignments: {}", e))?;

    Ok(())
}

async fn flag_game<'e, E>(
    executor: E,
    game_id: Uuid,
    teams_generated_at: DateTime<Utc>,
) -> Result<(), String>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        UPDATE games
        SET teams_generated = TRUE, teams_generated_at = $2
        WHERE id = $1
        "#,
    )
    .bind(game_id)
    .bind(teams_generated_at)
    .execute(executor)
    .await
    .map_err(|e| format!("Failed to update game flags: {}", e))?;

    if result.rows_affected() == 0 {
        return Err(format!("Game not found: {}", game_id));
    }

    Ok(())
}

#[async_trait]
impl GameRepository for PostgresGameRepository {
    async fn get_game(&self, game_id: Uuid) -> Result<Option<Game>, String> {
        let row: Option<GameRow> = sqlx::query_as(
            r#"
            SELECT id, host_id, teams_generated, teams_generated_at
            FROM games
            WHERE id = $1
            "#,
        )
        .bind(game_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find game by id: {}", e))?;

        Ok(row.map(|r| Game::from_persistence(r.id, r.host_id, r.teams_generated, r.teams_generated_at)))
    }

    async fn get_checked_in_roster(&self, game_id: Uuid) -> Result<Vec<RosterEntry>, String> {
        let rows: Vec<RosterRow> = sqlx::query_as(
            r#"
            SELECT
                r.game_id, r.player_id, r.status,
                p.id AS profile_id, p.full_name, p.position,
                p.height_ft, p.height_in, p.skill_level, p.reliability_score
            FROM game_roster r
            LEFT JOIN profiles p ON p.id = r.player_id
            WHERE r.game_id = $1 AND r.status = $2
            ORDER BY r.joined_at, r.id
            "#,
        )
        .bind(game_id)
        .bind(RosterStatus::CheckedIn.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to load checked-in roster: {}", e))?;

        rows.into_iter().map(RosterRow::into_entry).collect()
    }

    async fn delete_assignments(&self, game_id: Uuid) -> Result<(), String> {
        delete_rows(&self.pool, game_id).await
    }

    async fn insert_assignments(&self, assignments: &[TeamAssignment]) -> Result<(), String> {
        insert_rows(&self.pool, assignments).await
    }

    async fn update_game_flags(
        &self,
        game_id: Uuid,
        teams_generated_at: DateTime<Utc>,
    ) -> Result<(), String> {
        flag_game(&self.pool, game_id, teams_generated_at).await
    }

    async fn publish_teams(
        &self,
        game_id: Uuid,
        assignments: &[TeamAssignment],
        teams_generated_at: DateTime<Utc>,
    ) -> Result<(), String> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| format!("Failed to begin transaction: {}", e))?;

        delete_rows(&mut *tx, game_id).await?;
        insert_rows(&mut *tx, assignments).await?;
        flag_game(&mut *tx, game_id, teams_generated_at).await?;

        tx.commit()
            .await
            .map_err(|e| format!("Failed to commit team assignments: {}", e))
    }

    async fn find_assignments(&self, game_id: Uuid) -> Result<Vec<(TeamNumber, Player)>, String> {
        let rows: Vec<AssignedPlayerRow> = sqlx::query_as(
            r#"
            SELECT
                a.team_number,
                p.id, p.full_name, p.position,
                p.height_ft, p.height_in, p.skill_level, p.reliability_score
            FROM team_assignments a
            JOIN profiles p ON p.id = a.player_id
            WHERE a.game_id = $1
            ORDER BY a.team_number, a.id
            "#,
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to load team assignments: {}", e))?;

        rows.into_iter().map(AssignedPlayerRow::into_pair).collect()
    }
}
