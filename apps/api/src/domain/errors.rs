use thiserror::Error;

/// Failures reported by team generation
///
/// Every variant carries the message shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamGenerationError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    InsufficientPlayers(String),

    #[error("{0}")]
    Persistence(String),
}

impl TeamGenerationError {
    pub fn game_not_found() -> Self {
        Self::NotFound("Game not found".to_string())
    }

    pub fn not_host() -> Self {
        Self::Forbidden("Only the host can generate teams".to_string())
    }

    pub fn no_checked_in_players() -> Self {
        Self::InsufficientPlayers("No checked-in players found".to_string())
    }

    pub fn too_few_players() -> Self {
        Self::InsufficientPlayers("Need at least 2 players to generate teams".to_string())
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }
}

pub type TeamGenerationResult<T> = Result<T, TeamGenerationError>;
