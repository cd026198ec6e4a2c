use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use uuid::Uuid;

/// Async mutexes keyed by game id
///
/// Serializes work on one game while letting different games proceed in
/// parallel. Entries nobody holds or waits on are pruned on the next
/// `lock` call.
#[derive(Debug, Default)]
pub struct GameLocks {
    locks: Mutex<HashMap<Uuid, Arc<AsyncMutex<()>>>>,
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other caller holds the lock for `game_id`
    pub async fn lock(&self, game_id: Uuid) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry(game_id).or_default())
        };
        lock.lock_owned().await
    }

    /// Number of games with a live lock entry
    pub fn tracked(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
