// Application services
// Orchestrate domain logic over injected repository ports

pub mod game_locks;
pub mod team_balancer;

pub use game_locks::GameLocks;
pub use team_balancer::{BalancerSettings, CurrentTeams, TeamBalancer};
