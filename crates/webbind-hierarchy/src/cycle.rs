//! Cycle detection for the supertype graph
//!
//! Ancestor closures are only finite when following supertype edges never
//! returns to a type already on the path.

use crate::{HierarchyError, SupertypeMap};
use std::collections::HashMap;

/// Visit state for DFS cycle detection
#[derive(Clone, Copy, PartialEq, Eq)]
enum VisitState {
    NotVisited,
    InProgress,
    Completed,
}

/// Detects cycles in the supertype graph
pub struct CycleDetector;

impl CycleDetector {
    /// Returns the first cycle found, walking types in sorted order
    pub fn detect_cycle(map: &SupertypeMap) -> Option<HierarchyError> {
        let mut state: HashMap<&str, VisitState> = map
            .names()
            .map(|name| (name.as_str(), VisitState::NotVisited))
            .collect();
        let mut path: Vec<&str> = Vec::new();

        for name in map.names() {
            if state[name.as_str()] == VisitState::NotVisited {
                if let Some(cycle) = Self::visit(map, name, &mut state, &mut path) {
                    return Some(cycle);
                }
            }
        }

        None
    }

    /// DFS visit, returns Some(error) if cycle detected
    fn visit<'a>(
        map: &'a SupertypeMap,
        node: &'a str,
        state: &mut HashMap<&'a str, VisitState>,
        path: &mut Vec<&'a str>,
    ) -> Option<HierarchyError> {
        state.insert(node, VisitState::InProgress);
        path.push(node);

        for supertype in map.supertypes(node).into_iter().flatten() {
            match state.get(supertype.as_str()) {
                Some(VisitState::InProgress) => {
                    let cycle_start = path.iter().position(|&n| n == supertype.as_str())?;
                    let cycle = format!("{} -> {}", path[cycle_start..].join(" -> "), supertype);
                    return Some(HierarchyError::Cycle { path: cycle });
                }
                Some(VisitState::NotVisited) => {
                    if let Some(err) = Self::visit(map, supertype, state, path) {
                        return Some(err);
                    }
                }
                // Completed, or an edge leaving the map
                _ => {}
            }
        }

        path.pop();
        state.insert(node, VisitState::Completed);
        None
    }
}
