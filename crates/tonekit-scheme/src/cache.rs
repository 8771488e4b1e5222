//! Bounded, striped memo keyed by role identity.
//!
//! Resolving a role recursively resolves its backgrounds, so the same few
//! surface tones are asked for over and over. Each scheme keeps the answers
//! here, keyed by [`RoleId`] rather than by name, so two roles that share a
//! name never share an entry.
//!
//! Keys are spread over a fixed number of shards, each behind its own
//! `RwLock`, so concurrent readers on different roles rarely meet. A shard
//! that fills up is simply cleared; every value can be recomputed.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::RwLock;

/// Number of independent shards.
pub const SHARDS: usize = 8;

/// Entries a shard may hold before it is cleared.
pub const SHARD_CAPACITY: usize = 16;

/// Address of a `'static` role descriptor.
pub type RoleId = usize;

/// A small thread-safe memo from role identity to a `Copy` value.
pub struct StripedCache<V> {
    shards: [RwLock<HashMap<RoleId, V>>; SHARDS],
}

impl<V: Copy> StripedCache<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shards: std::array::from_fn(|_| RwLock::new(HashMap::new())),
        }
    }

    fn shard(&self, key: RoleId) -> &RwLock<HashMap<RoleId, V>> {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        #[allow(clippy::cast_possible_truncation)]
        let index = (hasher.finish() % SHARDS as u64) as usize;
        &self.shards[index]
    }

    #[must_use]
    pub fn get(&self, key: RoleId) -> Option<V> {
        self.shard(key).read().ok()?.get(&key).copied()
    }

    /// Store a value, clearing the shard first if it is full.
    ///
    /// A poisoned shard is skipped: the value is still returned to the
    /// caller, it just isn't remembered.
    pub fn insert(&self, key: RoleId, value: V) {
        let Ok(mut shard) = self.shard(key).write() else {
            return;
        };
        if shard.len() >= SHARD_CAPACITY && !shard.contains_key(&key) {
            #[cfg(feature = "tracing")]
            tracing::trace!(entries = shard.len(), "role cache shard cleared");
            shard.clear();
        }
        shard.insert(key, value);
    }

    /// Drop every entry.
    pub fn clear(&self) {
        for shard in &self.shards {
            if let Ok(mut shard) = shard.write() {
                shard.clear();
            }
        }
    }

    /// Entries currently held across all shards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|s| s.read().map_or(0, |s| s.len()))
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Copy> Default for StripedCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
