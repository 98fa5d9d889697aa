// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::repositories::{TeamRepository, UserRepository};
use crate::domain::team::{MembershipFailurePolicy, TeamProvisioner};
use handlers::{health, teams};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub provisioner: Arc<TeamProvisioner>,
    pub teams: Arc<dyn TeamRepository>,
}

impl AppState {
    /// Wires the provisioning workflow to the given stores
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        users: Arc<dyn UserRepository>,
        policy: MembershipFailurePolicy,
    ) -> Self {
        let provisioner =
            TeamProvisioner::new(teams.clone(), users).with_membership_failure_policy(policy);

        Self {
            provisioner: Arc::new(provisioner),
            teams,
        }
    }
}

/// Builds the service router
pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Team routes
        .route("/api/teams", post(teams::create_team))
        .route("/api/teams/:id", get(teams::get_team))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
