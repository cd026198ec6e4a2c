// Team domain module
// Contains generated matchups, assignment records, and the draft that builds them

#![allow(clippy::module_inception)]

pub mod draft;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use draft::balance_teams;
pub use team::{GeneratedTeams, Team, TeamAssignment};
pub use value_objects::TeamNumber;
