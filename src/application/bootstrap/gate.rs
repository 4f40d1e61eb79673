//! Per-profile single-flight gate.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::ProfileId;

/// Serializes reconciliation passes of the same profile inside this process.
///
/// Passes of different profiles do not wait on each other. Holding the
/// returned guard keeps the profile locked.
#[derive(Default)]
pub struct ProfileGate {
    locks: DashMap<ProfileId, Arc<Mutex<()>>>,
}

impl ProfileGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no other pass holds `profile`, then take it.
    pub async fn acquire(&self, profile: ProfileId) -> OwnedMutexGuard<()> {
        // Clone out of the map before awaiting so no shard lock is held.
        let lock = self.locks.entry(profile).or_default().clone();
        lock.lock_owned().await
    }
}
