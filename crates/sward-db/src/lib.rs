//! The partitioned grass state store.
//!
//! [`GrassDb`] owns the mapping from [`GrassKey`](sward_types::GrassKey)
//! to [`GrassState`](sward_types::GrassState), partitioned by scene name
//! for query locality, together with per-scene and global
//! [`GrassStats`](sward_types::GrassStats) aggregators and a one-hop alias
//! table. All state mutation funnels through the monotonic
//! [`try_set`](GrassDb::try_set) rule: a write lands only if it strictly
//! increases the key's state rank.
//!
//! # Modules
//!
//! - [`db`] — The store itself and its [`DbConfig`]
//! - [`observer`] — The [`StatsObserver`] change-notification seam
//! - [`classify`] — The [`GrassClassifier`] strategy seam used by
//!   collaborators to decide which keys to feed into the store
//! - [`error`] — Error types for store operations

pub mod classify;
pub mod db;
pub mod error;
pub mod observer;

pub use classify::{CuratedClassifier, GrassClassifier, HeuristicClassifier};
pub use db::{DbConfig, GrassDb};
pub use error::{DbError, DbResult};
pub use observer::StatsObserver;
