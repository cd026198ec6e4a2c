// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod game_repository;

pub use game_repository::GameRepository;
