// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_game_repository;
pub mod postgres_game_repository;

pub use in_memory_game_repository::InMemoryGameRepository;
pub use postgres_game_repository::PostgresGameRepository;
