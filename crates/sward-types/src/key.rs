use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A 2D world position usable as part of a hash map key.
///
/// Equality and hashing go through the raw `f32` bit patterns rather than
/// float comparison. Keys are re-observed from the same coordinate source
/// each time, so exact bit equality is the right notion of "same place" —
/// and it lets non-finite coordinates (which the store accepts) behave
/// consistently as identities.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Position {
    x: f32,
    y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    fn bits(&self) -> (u32, u32) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identity of a trackable grass object.
///
/// A `GrassKey` is an immutable value: the scene it was observed in, the
/// object's name, and its 2D position. Equality and hashing are structural
/// over all three fields — two keys with equal fields name the same entity
/// no matter where they were constructed. Many transient keys may map to
/// one logical entity through the store's alias table.
///
/// Construction performs no validation: empty strings and non-finite
/// coordinates are accepted as-is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrassKey {
    scene: String,
    name: String,
    position: Position,
}

impl GrassKey {
    /// Create a key from an observation of a candidate object.
    pub fn new(
        scene: impl Into<String>,
        name: impl Into<String>,
        position: impl Into<Position>,
    ) -> Self {
        Self {
            scene: scene.into(),
            name: name.into(),
            position: position.into(),
        }
    }

    /// The scene (partition) this key belongs to.
    pub fn scene(&self) -> &str {
        &self.scene
    }

    /// The object name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The observed position.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl fmt::Display for GrassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.scene, self.name, self.position)
    }
}
