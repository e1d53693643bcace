//! Least-common-supertype computation
//!
//! For two types, the least common supertypes are the minimal elements of
//! the intersection of their ancestor closures. A shared ancestor is not
//! minimal when some other shared ancestor lists it as an immediate
//! supertype.
//!
//! [`LcsEngine::least_common_supertypes`] is written for a general DAG and
//! may return several names. [`LcsEngine::build_table`] only accepts tree
//! shaped input and rejects any pair without exactly one answer.

use crate::{HierarchyError, SupertypeMap};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Nested `type -> type -> least common supertypes` table.
///
/// Backed by ordered maps, so iteration and serialization are sorted at
/// every level regardless of how the input was enumerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LcsTable {
    entries: BTreeMap<String, BTreeMap<String, BTreeSet<String>>>,
}

impl LcsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Least common supertypes of `a` and `b`
    pub fn get(&self, a: &str, b: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(a).and_then(|row| row.get(b))
    }

    pub fn insert(&mut self, a: &str, b: &str, supertypes: BTreeSet<String>) {
        self.entries
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), supertypes);
    }

    /// Outer keys, sorted
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Rows in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, BTreeSet<String>>)> {
        self.entries.iter()
    }

    /// Number of stored pairs
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Computes closures and least common supertypes over a supertype map
pub struct LcsEngine<'a> {
    map: &'a SupertypeMap,
}

impl<'a> LcsEngine<'a> {
    pub fn new(map: &'a SupertypeMap) -> Self {
        Self { map }
    }

    /// All types reachable from `ty` through supertype edges, including `ty`
    pub fn ancestor_closure(&self, ty: &str) -> BTreeSet<String> {
        let mut closure = BTreeSet::new();
        let mut worklist = vec![ty.to_string()];

        while let Some(next) = worklist.pop() {
            if !closure.insert(next.clone()) {
                continue;
            }
            if let Some(supertypes) = self.map.supertypes(&next) {
                worklist.extend(
                    supertypes
                        .iter()
                        .filter(|s| !closure.contains(*s))
                        .cloned(),
                );
            }
        }

        closure
    }

    /// Minimal elements of the shared ancestors of `a` and `b`
    pub fn least_common_supertypes(&self, a: &str, b: &str) -> BTreeSet<String> {
        let closure_a = self.ancestor_closure(a);
        let closure_b = self.ancestor_closure(b);
        let shared: BTreeSet<String> = closure_a.intersection(&closure_b).cloned().collect();

        // Anything a shared ancestor points at is more general than it
        let dominated: BTreeSet<&String> = shared
            .iter()
            .filter_map(|s| self.map.supertypes(s))
            .flatten()
            .collect();

        shared
            .iter()
            .filter(|s| !dominated.contains(s))
            .cloned()
            .collect()
    }

    /// Least common supertypes for every ordered pair of types in the map
    pub fn build_table(&self) -> Result<LcsTable, HierarchyError> {
        let names: Vec<&String> = self.map.names().collect();
        let closures: BTreeMap<&str, BTreeSet<String>> = names
            .iter()
            .map(|name| (name.as_str(), self.ancestor_closure(name)))
            .collect();

        let mut table = LcsTable::new();
        for a in &names {
            for b in &names {
                let lcs = if a == b {
                    BTreeSet::from([a.to_string()])
                } else {
                    self.minimal_shared(&closures[a.as_str()], &closures[b.as_str()])
                };

                if lcs.len() != 1 {
                    return Err(HierarchyError::NotSingleton {
                        a: a.to_string(),
                        b: b.to_string(),
                        found: lcs.into_iter().collect(),
                    });
                }
                table.insert(a, b, lcs);
            }
        }

        tracing::info!(types = names.len(), pairs = table.len(), "built supertype table");
        Ok(table)
    }

    /// Same as `least_common_supertypes`, reusing precomputed closures
    fn minimal_shared(
        &self,
        closure_a: &BTreeSet<String>,
        closure_b: &BTreeSet<String>,
    ) -> BTreeSet<String> {
        let shared: BTreeSet<&String> = closure_a.intersection(closure_b).collect();
        let dominated: BTreeSet<&String> = shared
            .iter()
            .filter_map(|s| self.map.supertypes(s))
            .flatten()
            .collect();

        shared
            .difference(&dominated)
            .map(|s| s.to_string())
            .collect()
    }
}
