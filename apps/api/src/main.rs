use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use opencourt_api::api::{self, AppState};
use opencourt_api::config::Settings;
use opencourt_api::infrastructure::repositories::PostgresGameRepository;
use opencourt_api::services::TeamBalancer;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.persistence_timeout)
        .connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Database connected successfully");

    let repository = Arc::new(PostgresGameRepository::new(pool));
    let balancer = TeamBalancer::new(repository, settings.balancer());
    let app = api::router(AppState::new(balancer, settings.jwt_secret.as_str()));

    tracing::info!("Server listening on {}", settings.bind_addr);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
