//! Foundation types for sward.
//!
//! This crate provides the value types shared by every other sward crate:
//! the identity of a tracked grass object, its state lattice, and the
//! incremental counters kept alongside the store.
//!
//! # Key Types
//!
//! - [`GrassKey`] — Structural identity of a trackable object: scene name,
//!   object name, and 2D position
//! - [`Position`] — 2D coordinate with exact bit-pattern equality, so keys
//!   can live in hash maps
//! - [`GrassState`] — The totally ordered lattice `Uncut < ShouldBeCut <
//!   Cut` that drives monotonic writes
//! - [`GrassStats`] — Per-scope counters of keys by state

pub mod error;
pub mod key;
pub mod state;
pub mod stats;

pub use error::StateError;
pub use key::{GrassKey, Position};
pub use state::GrassState;
pub use stats::GrassStats;
