// Player domain module
// Read-only player snapshots and the value objects used to score them

#![allow(clippy::module_inception)]

pub mod player;
pub mod value_objects;

pub use player::Player;
pub use value_objects::{Position, SkillLevel};
