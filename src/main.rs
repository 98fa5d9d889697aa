use std::sync::Arc;

use roster_api::api::{self, AppState};
use roster_api::config::{Config, StorageBackend};
use roster_api::domain::repositories::{TeamRepository, UserRepository};
use roster_api::infrastructure::repositories::{
    InMemoryTeamRepository, InMemoryUserRepository, PostgresTeamRepository,
    PostgresUserRepository,
};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration");

    let (teams, users) = match config.storage {
        StorageBackend::Postgres => postgres_stores(&config).await,
        StorageBackend::Memory => memory_stores(&config),
    };

    let state = AppState::new(teams, users, config.membership_failure_policy);

    tracing::info!(
        policy = %state.provisioner.membership_failure_policy(),
        "Membership failure policy configured"
    );

    let app = api::router(state);

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}

async fn postgres_stores(config: &Config) -> (Arc<dyn TeamRepository>, Arc<dyn UserRepository>) {
    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Database connected successfully");

    (
        Arc::new(PostgresTeamRepository::new(pool.clone())),
        Arc::new(PostgresUserRepository::new(pool)),
    )
}

fn memory_stores(config: &Config) -> (Arc<dyn TeamRepository>, Arc<dyn UserRepository>) {
    let users = match &config.users_file {
        Some(path) => {
            let json = std::fs::read_to_string(path).expect("Failed to read users file");
            InMemoryUserRepository::from_json(&json).expect("Failed to parse users file")
        }
        None => {
            tracing::warn!("ROSTER_USERS_FILE not set, starting with no users");
            InMemoryUserRepository::new()
        }
    };

    tracing::info!("Using in-memory storage");

    (Arc::new(InMemoryTeamRepository::new()), Arc::new(users))
}
