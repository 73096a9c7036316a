//! The partitioned store and its monotonic write rule.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use sward_codec::Decoder;
use sward_types::{GrassKey, GrassState, GrassStats, Position};
use tracing::debug;

use crate::error::DbResult;
use crate::observer::StatsObserver;

/// Store construction options.
#[derive(Clone, Copy, Debug, Default)]
pub struct DbConfig {
    /// When `true`, [`GrassDb::clear`] keeps the alias table; when `false`
    /// (the default) a cleared store returns to construction-time
    /// emptiness, aliases included.
    pub aliases_survive_clear: bool,
}

#[derive(Default)]
struct DbInner {
    /// Scene name → key → state. The split by scene exists only for query
    /// locality; a key's scene is already part of its identity.
    partitions: HashMap<String, HashMap<GrassKey, GrassState>>,
    /// Kept in lock-step with `partitions`: an entry exists here iff the
    /// scene has a partition.
    scene_stats: HashMap<String, GrassStats>,
    global: GrassStats,
    /// One-hop alias table. Targets must be registered already resolved
    /// to their ultimate canonical key; lookups never chain.
    aliases: HashMap<GrassKey, GrassKey>,
}

impl DbInner {
    fn resolve(&self, key: &GrassKey) -> GrassKey {
        self.aliases.get(key).cloned().unwrap_or_else(|| key.clone())
    }

    fn try_set(&mut self, key: &GrassKey, new_state: GrassState) -> bool {
        let key = self.resolve(key);
        let scene = key.scene().to_string();

        let partition = self.partitions.entry(scene.clone()).or_default();
        let stats = self.scene_stats.entry(scene).or_default();

        let old = partition.get(&key).copied();
        match old {
            Some(current) if new_state.rank() <= current.rank() => false,
            _ => {
                partition.insert(key, new_state);
                stats.apply_transition(old, new_state);
                self.global.apply_transition(old, new_state);
                true
            }
        }
    }
}

/// In-memory, scene-partitioned store of grass states.
///
/// All data lives behind a single `RwLock` so that reads observe a
/// consistent snapshot of the partition map and its aggregators. Mutation
/// is expected from one logical thread at a time (the write lock enforces
/// serialization either way); reads may proceed concurrently with each
/// other.
///
/// Per key, the visible state only ever moves forward through the lattice:
/// `Unknown → Uncut → ShouldBeCut → Cut`, skipping allowed, never
/// backward. [`try_set`](Self::try_set) is the only state-mutation path
/// besides [`clear`](Self::clear) and the bulk load (which itself routes
/// every entry through `try_set`).
pub struct GrassDb {
    inner: RwLock<DbInner>,
    observers: RwLock<Vec<Arc<dyn StatsObserver>>>,
    config: DbConfig,
}

impl GrassDb {
    /// Create an empty store with default configuration.
    pub fn new() -> Self {
        Self::with_config(DbConfig::default())
    }

    /// Create an empty store with explicit configuration.
    pub fn with_config(config: DbConfig) -> Self {
        Self {
            inner: RwLock::new(DbInner::default()),
            observers: RwLock::new(Vec::new()),
            config,
        }
    }

    /// Register a change-notification subscriber.
    pub fn subscribe(&self, observer: Arc<dyn StatsObserver>) {
        self.observers
            .write()
            .expect("lock poisoned")
            .push(observer);
    }

    fn notify(&self) {
        // Invoked outside the data lock: subscribers typically re-query
        // the store and must not deadlock against it.
        for observer in self.observers.read().expect("lock poisoned").iter() {
            observer.on_stats_changed();
        }
    }

    /// Apply the monotonic write rule for `key`.
    ///
    /// Resolves aliases, lazily creates the scene partition, and applies
    /// the write iff the key is unseen or `new_state` strictly increases
    /// its rank. Returns whether the write was applied; a rejected write
    /// has no observable effect.
    pub fn try_set(&self, key: &GrassKey, new_state: GrassState) -> bool {
        let applied = self
            .inner
            .write()
            .expect("lock poisoned")
            .try_set(key, new_state);
        if applied {
            debug!(%key, %new_state, "grass state advanced");
            self.notify();
        }
        applied
    }

    /// Whether the store has a state for `key` (alias-resolved).
    ///
    /// Never creates a partition as a side effect.
    pub fn contains(&self, key: &GrassKey) -> bool {
        let inner = self.inner.read().expect("lock poisoned");
        let key = inner.resolve(key);
        inner
            .partitions
            .get(key.scene())
            .is_some_and(|partition| partition.contains_key(&key))
    }

    /// Register a one-hop alias: subsequent reads and writes against
    /// `from` behave as if made against `to`.
    ///
    /// Resolution never chains, so `to` must itself be canonical; aliasing
    /// to an aliased key is documented one-hop behavior, not an error.
    pub fn add_alias(&self, from: GrassKey, to: GrassKey) {
        self.inner
            .write()
            .expect("lock poisoned")
            .aliases
            .insert(from, to);
    }

    /// The uncut key in `scene` nearest to `origin`, if any.
    ///
    /// Linear scan over the scene's live entries; ties go to the first
    /// entry encountered. Returns `None` for an unknown scene or a scene
    /// with no uncut grass.
    pub fn nearest_uncut(&self, origin: (f32, f32), scene: &str) -> Option<GrassKey> {
        let inner = self.inner.read().expect("lock poisoned");
        let partition = inner.partitions.get(scene)?;
        let origin = Position::new(origin.0, origin.1);

        let mut closest: Option<&GrassKey> = None;
        let mut best = f32::INFINITY;
        for (key, state) in partition {
            if *state != GrassState::Uncut {
                continue;
            }
            // Strict `<` against a +inf seed: a NaN distance compares false
            // and is never selected, regardless of iteration order.
            let distance = origin.distance(key.position());
            if distance < best {
                closest = Some(key);
                best = distance;
            }
        }
        closest.cloned()
    }

    /// Snapshot of the counters for `scene`.
    ///
    /// A never-written scene reads as all zeros; no partition is created.
    pub fn stats_for_scene(&self, scene: &str) -> GrassStats {
        self.inner
            .read()
            .expect("lock poisoned")
            .scene_stats
            .get(scene)
            .copied()
            .unwrap_or_default()
    }

    /// Snapshot of the store-wide counters.
    pub fn global_stats(&self) -> GrassStats {
        self.inner.read().expect("lock poisoned").global
    }

    /// Scene names with live partitions, sorted.
    pub fn scene_names(&self) -> Vec<String> {
        let inner = self.inner.read().expect("lock poisoned");
        let mut names: Vec<String> = inner.partitions.keys().cloned().collect();
        names.sort();
        names
    }

    /// Flattened snapshot of every `(key, state)` pair.
    pub fn entries(&self) -> Vec<(GrassKey, GrassState)> {
        let inner = self.inner.read().expect("lock poisoned");
        inner
            .partitions
            .values()
            .flat_map(|partition| partition.iter().map(|(k, s)| (k.clone(), *s)))
            .collect()
    }

    /// Discard all partitions and stats, returning the store to
    /// construction-time emptiness. The alias table survives only when
    /// [`DbConfig::aliases_survive_clear`] is set. Fires one notification.
    pub fn clear(&self) {
        {
            let mut inner = self.inner.write().expect("lock poisoned");
            inner.partitions.clear();
            inner.scene_stats.clear();
            inner.global = GrassStats::default();
            if !self.config.aliases_survive_clear {
                inner.aliases.clear();
            }
        }
        debug!("grass store cleared");
        self.notify();
    }

    /// Flatten the whole store into a single persistable blob.
    pub fn serialize(&self) -> String {
        let inner = self.inner.read().expect("lock poisoned");
        sward_codec::encode(
            inner
                .partitions
                .values()
                .flat_map(|partition| partition.iter().map(|(k, s)| (k, *s))),
        )
    }

    /// Additively load a serialized blob.
    ///
    /// Does not clear first. Every decoded entry runs through the
    /// monotonic [`try_set`](Self::try_set) rule, so loading an older blob
    /// over newer in-memory state is safe, and one notification fires per
    /// applied entry. Returns the number of applied entries.
    ///
    /// The version tag and token count are checked before any entry is
    /// applied. A decode failure partway through is not rolled back:
    /// entries applied before the failure remain. Callers needing
    /// atomicity should serialize a snapshot first and restore it on
    /// error.
    pub fn load_serialized(&self, blob: &str) -> DbResult<usize> {
        let decoder = Decoder::new(blob)?;
        let mut applied = 0;
        for entry in decoder {
            let (key, state) = entry?;
            if self.try_set(&key, state) {
                applied += 1;
            }
        }
        debug!(applied, "loaded persisted grass data");
        Ok(applied)
    }
}

impl Default for GrassDb {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GrassDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read().expect("lock poisoned");
        f.debug_struct("GrassDb")
            .field("scenes", &inner.partitions.len())
            .field("keys", &inner.global.total())
            .finish()
    }
}
