//! Immediate-supertype map

use crate::cycle::CycleDetector;
use crate::HierarchyError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Maps each marker type to its immediate marker supertypes.
///
/// Keys are exactly the marker type names. Values never mention names
/// outside the key set once [`SupertypeMap::validate_tree`] has passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupertypeMap {
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl SupertypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `(type, supertypes)` pairs
    pub fn from_edges<I, N, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let mut map = Self::new();
        for (name, supertypes) in edges {
            map.insert(name, supertypes.into_iter().map(Into::into).collect());
        }
        map
    }

    /// Record the immediate supertypes of `name`, replacing any previous entry
    pub fn insert(&mut self, name: impl Into<String>, supertypes: BTreeSet<String>) {
        self.edges.insert(name.into(), supertypes);
    }

    /// Immediate supertypes of `name`
    pub fn supertypes(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.edges.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    /// All type names, sorted
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.edges.keys()
    }

    /// All `(type, supertypes)` entries, sorted by type
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Check that the map describes a single tree rooted at `root`:
    /// the root has no supertype, every other type has exactly one, every
    /// edge points at a known type, and there are no cycles.
    pub fn validate_tree(&self, root: &str) -> Result<(), HierarchyError> {
        match self.edges.get(root) {
            None => {
                return Err(HierarchyError::MissingRoot {
                    root: root.to_string(),
                })
            }
            Some(supers) => {
                if let Some(supertype) = supers.iter().next() {
                    return Err(HierarchyError::RootHasSupertype {
                        root: root.to_string(),
                        supertype: supertype.clone(),
                    });
                }
            }
        }

        for (name, supers) in &self.edges {
            if name == root {
                continue;
            }
            match supers.len() {
                0 => {
                    return Err(HierarchyError::MissingSupertype {
                        ty: name.clone(),
                        root: root.to_string(),
                    })
                }
                1 => {}
                _ => {
                    return Err(HierarchyError::MultipleSupertypes {
                        ty: name.clone(),
                        supertypes: supers.iter().cloned().collect(),
                    })
                }
            }
            for supertype in supers {
                if !self.edges.contains_key(supertype) {
                    return Err(HierarchyError::UnknownSupertype {
                        ty: name.clone(),
                        supertype: supertype.clone(),
                    });
                }
            }
        }

        match CycleDetector::detect_cycle(self) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> SupertypeMap {
        SupertypeMap::from_edges([
            ("Root", vec![]),
            ("Mid", vec!["Root"]),
            ("LeafA", vec!["Mid"]),
            ("LeafB", vec!["Mid"]),
        ])
    }

    #[test]
    fn test_valid_tree() {
        assert!(tree().validate_tree("Root").is_ok());
    }

    #[test]
    fn test_names_sorted() {
        let names: Vec<_> = tree().names().cloned().collect();
        assert_eq!(names, vec!["LeafA", "LeafB", "Mid", "Root"]);
    }

    #[test]
    fn test_missing_root() {
        let err = tree().validate_tree("JSAny").unwrap_err();
        assert!(matches!(err, HierarchyError::MissingRoot { .. }));
    }

    #[test]
    fn test_wrong_root() {
        // Mid has a supertype, so it cannot be the root
        let err = tree().validate_tree("Mid").unwrap_err();
        assert!(matches!(err, HierarchyError::RootHasSupertype { ref supertype, .. } if supertype == "Root"));
    }

    #[test]
    fn test_second_parentless_type() {
        let mut map = tree();
        map.insert("Orphan", BTreeSet::new());
        let err = map.validate_tree("Root").unwrap_err();
        assert!(matches!(err, HierarchyError::MissingSupertype { ref ty, .. } if ty == "Orphan"));
    }

    #[test]
    fn test_multiple_supertypes() {
        let mut map = tree();
        map.insert("Diamond", ["LeafA", "LeafB"].into_iter().map(String::from).collect());
        let err = map.validate_tree("Root").unwrap_err();
        assert_eq!(err.code(), "E-HIER-003");
    }

    #[test]
    fn test_unknown_supertype() {
        let mut map = tree();
        map.insert("Stray", ["Elsewhere".to_string()].into_iter().collect());
        let err = map.validate_tree("Root").unwrap_err();
        assert!(matches!(err, HierarchyError::UnknownSupertype { .. }));
    }

    #[test]
    fn test_cycle_rejected() {
        let map = SupertypeMap::from_edges([
            ("Root", vec![]),
            ("A", vec!["B"]),
            ("B", vec!["A"]),
        ]);
        let err = map.validate_tree("Root").unwrap_err();
        assert!(matches!(err, HierarchyError::Cycle { .. }));
    }
}
