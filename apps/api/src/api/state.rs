use std::sync::Arc;

use crate::services::TeamBalancer;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub balancer: Arc<TeamBalancer>,
    /// HS256 secret used to verify bearer tokens
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(balancer: TeamBalancer, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            balancer: Arc::new(balancer),
            jwt_secret: jwt_secret.into(),
        }
    }
}
