// ── Generic reactive entity collection ──
//
// Lock-free concurrent storage with O(1) lookups and push-based
// change notification via `watch` channels.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::watch;

/// A lock-free, reactive collection for a single entity type.
///
/// Uses `DashMap` for O(1) concurrent lookups and `watch` channels for
/// push-based change notification. Every mutation bumps a version
/// counter and republishes the snapshot that subscribers receive, so a
/// reader always observes a consistent copy — mutations are
/// copy-on-write at entity granularity.
pub(crate) struct EntityCollection<T: Clone + Send + Sync + 'static> {
    /// Primary storage: entity id -> entity.
    by_id: DashMap<String, Arc<T>>,

    /// Version counter, bumped on every mutation.
    version: watch::Sender<u64>,

    /// Full snapshot, rebuilt on mutation for efficient subscription.
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,
}

impl<T: Clone + Send + Sync + 'static> EntityCollection<T> {
    pub(crate) fn new() -> Self {
        let (version, _) = watch::channel(0u64);
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));

        Self {
            by_id: DashMap::new(),
            version,
            snapshot,
        }
    }

    /// Insert or replace an entity. Returns `true` if the id was new.
    pub(crate) fn upsert(&self, id: String, entity: T) -> bool {
        let is_new = !self.by_id.contains_key(&id);
        self.by_id.insert(id, Arc::new(entity));

        self.rebuild_snapshot();
        self.bump_version();

        is_new
    }

    /// Remove an entity by id. Returns the removed entity if it existed.
    pub(crate) fn remove(&self, id: &str) -> Option<Arc<T>> {
        let removed = self.by_id.remove(id).map(|(_, v)| v);
        if removed.is_some() {
            self.rebuild_snapshot();
            self.bump_version();
        }
        removed
    }

    /// Look up an entity by id.
    pub(crate) fn get(&self, id: &str) -> Option<Arc<T>> {
        self.by_id.get(id).map(|r| Arc::clone(r.value()))
    }

    /// Copy-on-write update of a single entity.
    ///
    /// Clones the current value, applies `f`, and republishes only if
    /// `f` returns `Ok`. A failing `f` leaves the collection untouched.
    /// Returns `Ok(None)` when the id is absent.
    pub(crate) fn try_update<E>(
        &self,
        id: &str,
        f: impl FnOnce(&mut T) -> Result<(), E>,
    ) -> Result<Option<Arc<T>>, E> {
        let updated = {
            let Some(mut entry) = self.by_id.get_mut(id) else {
                return Ok(None);
            };
            let mut value = T::clone(entry.value());
            f(&mut value)?;
            let value = Arc::new(value);
            *entry.value_mut() = Arc::clone(&value);
            value
            // Shard guard dropped here, before the snapshot rebuild
            // iterates the map.
        };

        self.rebuild_snapshot();
        self.bump_version();
        Ok(Some(updated))
    }

    /// Infallible counterpart of [`try_update`](Self::try_update).
    /// Returns the updated entity, or `None` when the id is absent.
    pub(crate) fn update(&self, id: &str, f: impl FnOnce(&mut T)) -> Option<Arc<T>> {
        let result: Result<Option<Arc<T>>, std::convert::Infallible> = self.try_update(id, |v| {
            f(v);
            Ok(())
        });
        match result {
            Ok(updated) => updated,
            Err(never) => match never {},
        }
    }

    /// Get the current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes via a `watch::Receiver`.
    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<T>>>> {
        self.snapshot.subscribe()
    }

    pub(crate) fn len(&self) -> usize {
        self.by_id.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    // ── Private helpers ──────────────────────────────────────────────

    /// Collect all values into a snapshot vec and broadcast to subscribers.
    fn rebuild_snapshot(&self) {
        let values: Vec<Arc<T>> = self.by_id.iter().map(|r| Arc::clone(r.value())).collect();
        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(values));
    }

    /// Increment the version counter.
    fn bump_version(&self) {
        self.version.send_modify(|v| *v += 1);
    }
}
