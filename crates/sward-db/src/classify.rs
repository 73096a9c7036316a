//! Strategy seam for deciding what counts as grass.
//!
//! The store itself is classifier-agnostic: it only ever receives
//! already-identified keys. Collaborators that observe candidate objects
//! (collision handlers, scene scans, scripted lists) hold a
//! [`GrassClassifier`] and consult it before feeding a key into the store.

use std::collections::HashSet;

use sward_types::GrassKey;

/// Decides whether an observed object is grass.
///
/// Implementations must be interchangeable behind `dyn GrassClassifier`;
/// collaborators receive one at construction time rather than reaching for
/// a global.
pub trait GrassClassifier: Send + Sync {
    /// Whether the object named `name` observed in `scene` is grass.
    fn is_grass(&self, scene: &str, name: &str) -> bool;

    /// Alias pairs this classifier knows about, `(from, to)` with `to`
    /// canonical. Callers register these with the store at startup.
    fn aliases(&self) -> Vec<(GrassKey, GrassKey)> {
        Vec::new()
    }
}

/// Name-based heuristic: anything whose name mentions grass.
///
/// Will not always be right, but does an OK job when no curated list is
/// available.
pub struct HeuristicClassifier;

impl GrassClassifier for HeuristicClassifier {
    fn is_grass(&self, _scene: &str, name: &str) -> bool {
        name.to_lowercase().contains("grass")
    }
}

/// Exact membership in a curated `(scene, name)` set, with an optional
/// curated alias list.
pub struct CuratedClassifier {
    known: HashSet<(String, String)>,
    aliases: Vec<(GrassKey, GrassKey)>,
}

impl CuratedClassifier {
    pub fn new(
        known: impl IntoIterator<Item = (String, String)>,
        aliases: Vec<(GrassKey, GrassKey)>,
    ) -> Self {
        Self {
            known: known.into_iter().collect(),
            aliases,
        }
    }
}

impl GrassClassifier for CuratedClassifier {
    fn is_grass(&self, scene: &str, name: &str) -> bool {
        self.known
            .contains(&(scene.to_string(), name.to_string()))
    }

    fn aliases(&self) -> Vec<(GrassKey, GrassKey)> {
        self.aliases.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::GrassDb;
    use sward_types::GrassState;

    #[test]
    fn heuristic_matches_grassy_names_case_insensitively() {
        let classifier = HeuristicClassifier;
        assert!(classifier.is_grass("Town", "Grass Tuft (3)"));
        assert!(classifier.is_grass("Town", "town_grass_02"));
        assert!(!classifier.is_grass("Town", "Rock Pile"));
    }

    #[test]
    fn heuristic_has_no_aliases() {
        assert!(HeuristicClassifier.aliases().is_empty());
    }

    #[test]
    fn curated_matches_exact_scene_and_name() {
        let classifier = CuratedClassifier::new(
            [("Town".to_string(), "tall weed".to_string())],
            vec![],
        );
        assert!(classifier.is_grass("Town", "tall weed"));
        assert!(!classifier.is_grass("Cliffs", "tall weed"));
        assert!(!classifier.is_grass("Town", "short weed"));
    }

    #[test]
    fn curated_aliases_register_with_the_store() {
        let duplicate = GrassKey::new("Town", "grass (clone)", (1.0, 1.0));
        let canonical = GrassKey::new("Town", "grass", (1.0, 1.0));
        let classifier = CuratedClassifier::new(
            [("Town".to_string(), "grass".to_string())],
            vec![(duplicate.clone(), canonical.clone())],
        );

        let db = GrassDb::new();
        for (from, to) in classifier.aliases() {
            db.add_alias(from, to);
        }
        db.try_set(&duplicate, GrassState::Cut);
        assert!(db.contains(&canonical));
        assert_eq!(db.global_stats().total(), 1);
    }

    #[test]
    fn classifiers_are_interchangeable_as_trait_objects() {
        let strategies: Vec<Box<dyn GrassClassifier>> = vec![
            Box::new(HeuristicClassifier),
            Box::new(CuratedClassifier::new([], vec![])),
        ];
        for strategy in &strategies {
            let _ = strategy.is_grass("Town", "grass");
        }
    }
}
