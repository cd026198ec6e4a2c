// Game domain module
// Contains the game aggregate and roster value objects

#![allow(clippy::module_inception)]

pub mod game;
pub mod value_objects;

pub use game::{Game, RosterEntry};
pub use value_objects::RosterStatus;
