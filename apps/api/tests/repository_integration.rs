//! Integration tests for the PostgreSQL repository
//!
//! These need a disposable database:
//! `DATABASE_URL=postgres://... cargo test -- --ignored`
//! Migrations are applied on connect and every test uses fresh ids.

use chrono::Utc;
use opencourt_api::domain::game::RosterStatus;
use opencourt_api::domain::player::SkillLevel;
use opencourt_api::domain::repositories::GameRepository;
use opencourt_api::domain::team::{TeamAssignment, TeamNumber};
use opencourt_api::infrastructure::repositories::PostgresGameRepository;
use sqlx::PgPool;
use uuid::Uuid;

/// Set up test database connection pool
async fn setup_test_db() -> PgPool {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

async fn create_test_game(pool: &PgPool, host_id: Uuid) -> Uuid {
    let game_id = Uuid::new_v4();
    sqlx::query("INSERT INTO games (id, host_id) VALUES ($1, $2)")
        .bind(game_id)
        .bind(host_id)
        .execute(pool)
        .await
        .expect("Failed to create test game");

    game_id
}

async fn create_test_player(pool: &PgPool, game_id: Uuid, status: RosterStatus, skill: Option<&str>) -> Uuid {
    let player_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO profiles (id, full_name, position, height_ft, height_in, skill_level, reliability_score)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(player_id)
    .bind("Test Player")
    .bind("Point Guard")
    .bind(6_i32)
    .bind(2_i32)
    .bind(skill)
    .bind(None::<i32>)
    .execute(pool)
    .await
    .expect("Failed to create test profile");

    sqlx::query("INSERT INTO game_roster (game_id, player_id, status) VALUES ($1, $2, $3)")
        .bind(game_id)
        .bind(player_id)
        .bind(status.as_str())
        .execute(pool)
        .await
        .expect("Failed to add roster entry");

    player_id
}

/// Clean up test data
async fn cleanup_test_game(pool: &PgPool, game_id: Uuid) {
    // CASCADE DELETE removes roster rows and assignments
    sqlx::query("DELETE FROM games WHERE id = $1")
        .bind(game_id)
        .execute(pool)
        .await
        .expect("Failed to cleanup test game");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_get_game_and_missing_game() {
    let pool = setup_test_db().await;
    let host_id = Uuid::new_v4();
    let game_id = create_test_game(&pool, host_id).await;
    let repo = PostgresGameRepository::new(pool.clone());

    let game = repo.get_game(game_id).await.expect("query game").expect("game exists");
    assert_eq!(game.host_id(), host_id);
    assert!(!game.teams_generated());

    let missing = repo.get_game(Uuid::new_v4()).await.expect("query game");
    assert!(missing.is_none());

    cleanup_test_game(&pool, game_id).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_checked_in_roster_filters_status_and_maps_profile() {
    let pool = setup_test_db().await;
    let game_id = create_test_game(&pool, Uuid::new_v4()).await;
    let checked_in = create_test_player(&pool, game_id, RosterStatus::CheckedIn, Some("Elite")).await;
    create_test_player(&pool, game_id, RosterStatus::Waitlist, Some("Casual")).await;
    let unknown_skill = create_test_player(&pool, game_id, RosterStatus::CheckedIn, Some("Pro")).await;
    let repo = PostgresGameRepository::new(pool.clone());

    let roster = repo.get_checked_in_roster(game_id).await.expect("load roster");

    assert_eq!(roster.len(), 2);
    let first = roster[0].profile.as_ref().expect("profile resolved");
    assert_eq!(first.id, checked_in);
    assert_eq!(first.skill_level, Some(SkillLevel::Elite));
    assert_eq!(first.height_inches(), 74);
    assert_eq!(first.reliability_score, None);

    let second = roster[1].profile.as_ref().expect("profile resolved");
    assert_eq!(second.id, unknown_skill);
    assert_eq!(second.skill_level, None);

    cleanup_test_game(&pool, game_id).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_publish_teams_replaces_rows_and_flags_game() {
    let pool = setup_test_db().await;
    let host_id = Uuid::new_v4();
    let game_id = create_test_game(&pool, host_id).await;
    let a = create_test_player(&pool, game_id, RosterStatus::CheckedIn, Some("Elite")).await;
    let b = create_test_player(&pool, game_id, RosterStatus::CheckedIn, Some("Casual")).await;
    let repo = PostgresGameRepository::new(pool.clone());

    let row = |player_id, team_number| TeamAssignment {
        game_id,
        player_id,
        team_number,
        assigned_by: host_id,
    };

    repo.publish_teams(game_id, &[row(a, TeamNumber::One), row(b, TeamNumber::Two)], Utc::now())
        .await
        .expect("first publish");
    repo.publish_teams(game_id, &[row(a, TeamNumber::Two), row(b, TeamNumber::One)], Utc::now())
        .await
        .expect("second publish");

    let stored = repo.find_assignments(game_id).await.expect("load assignments");
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].0, TeamNumber::One);
    assert_eq!(stored[0].1.id, b);
    assert_eq!(stored[1].1.id, a);

    let game = repo.get_game(game_id).await.unwrap().unwrap();
    assert!(game.teams_generated());
    assert!(game.teams_generated_at().is_some());

    cleanup_test_game(&pool, game_id).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_failed_publish_rolls_back_rows_and_flags() {
    let pool = setup_test_db().await;
    let host_id = Uuid::new_v4();
    let game_id = create_test_game(&pool, host_id).await;
    let a = create_test_player(&pool, game_id, RosterStatus::CheckedIn, Some("Elite")).await;
    let b = create_test_player(&pool, game_id, RosterStatus::CheckedIn, Some("Casual")).await;
    let repo = PostgresGameRepository::new(pool.clone());

    let row = |player_id, team_number| TeamAssignment {
        game_id,
        player_id,
        team_number,
        assigned_by: host_id,
    };
    repo.insert_assignments(&[row(a, TeamNumber::One)])
        .await
        .expect("seed assignment");

    // Second row for `b` violates the (game_id, player_id) constraint
    let result = repo
        .publish_teams(
            game_id,
            &[row(b, TeamNumber::One), row(b, TeamNumber::Two)],
            Utc::now(),
        )
        .await;
    assert!(result.is_err());

    let stored = repo.find_assignments(game_id).await.expect("load assignments");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].1.id, a);

    let game = repo.get_game(game_id).await.unwrap().unwrap();
    assert!(!game.teams_generated());
    assert!(game.teams_generated_at().is_none());

    cleanup_test_game(&pool, game_id).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_insert_fails_on_unique_constraint() {
    let pool = setup_test_db().await;
    let host_id = Uuid::new_v4();
    let game_id = create_test_game(&pool, host_id).await;
    let a = create_test_player(&pool, game_id, RosterStatus::CheckedIn, None).await;
    let repo = PostgresGameRepository::new(pool.clone());

    let assignment = TeamAssignment {
        game_id,
        player_id: a,
        team_number: TeamNumber::One,
        assigned_by: host_id,
    };
    repo.insert_assignments(&[assignment.clone()]).await.expect("first insert");
    let result = repo.insert_assignments(&[assignment]).await;

    assert!(result.is_err());

    cleanup_test_game(&pool, game_id).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_flags_on_missing_game_fails() {
    let pool = setup_test_db().await;
    let repo = PostgresGameRepository::new(pool);

    let result = repo.update_game_flags(Uuid::new_v4(), Utc::now()).await;

    assert!(result.is_err());
}
