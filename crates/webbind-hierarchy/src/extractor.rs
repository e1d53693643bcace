//! Marker-type hierarchy extraction
//!
//! Reduces a library namespace to the immediate-supertype map of its marker
//! types, validating the tree shape before anything downstream runs.

use crate::{HierarchyError, MarkerFilter, SupertypeMap};
use std::collections::{BTreeSet, HashSet};
use webbind_symbols::{SymbolTable, TypeRef};

/// Extracts the marker-type hierarchy from a symbol table
#[derive(Debug, Clone)]
pub struct SupertypeExtractor {
    filter: MarkerFilter,

    /// The one marker type allowed to have no supertype
    root: String,

    /// Top type implied by every declaration; never recorded as a supertype
    universal_root: Option<TypeRef>,
}

impl SupertypeExtractor {
    pub fn new(filter: MarkerFilter, root: impl Into<String>) -> Self {
        Self {
            filter,
            root: root.into(),
            universal_root: Some(TypeRef::new("dart:core", "Object")),
        }
    }

    /// Override the universal root type that is dropped from candidates
    pub fn with_universal_root(mut self, universal_root: Option<TypeRef>) -> Self {
        self.universal_root = universal_root;
        self
    }

    /// Build the immediate-supertype map of all marker types
    pub fn extract(&self, table: &SymbolTable) -> Result<SupertypeMap, HierarchyError> {
        let library = self.filter.namespace();
        let namespace = table
            .library(library)
            .ok_or_else(|| HierarchyError::LibraryNotFound {
                library: library.to_string(),
            })?;

        let markers: Vec<_> = namespace
            .iter()
            .filter(|s| self.filter.matches(s))
            .collect();
        if markers.is_empty() {
            return Err(HierarchyError::EmptyNamespace {
                library: library.to_string(),
            });
        }
        let marker_names: HashSet<&str> = markers.iter().map(|s| s.name.as_str()).collect();

        let mut map = SupertypeMap::new();
        for symbol in &markers {
            let mut supertypes = BTreeSet::new();
            for candidate in symbol.declared_supertypes() {
                if self.universal_root.as_ref() == Some(candidate) {
                    continue;
                }
                if !self.filter.matches_resolved(table, candidate) {
                    tracing::debug!(
                        ty = %symbol.name,
                        supertype = %candidate,
                        "dropped non-marker supertype"
                    );
                    continue;
                }
                if !marker_names.contains(candidate.name.as_str()) {
                    return Err(HierarchyError::UnknownSupertype {
                        ty: symbol.name.clone(),
                        supertype: candidate.to_string(),
                    });
                }
                supertypes.insert(candidate.name.clone());
            }

            if supertypes.len() > 1 {
                return Err(HierarchyError::MultipleSupertypes {
                    ty: symbol.name.clone(),
                    supertypes: supertypes.into_iter().collect(),
                });
            }

            tracing::debug!(ty = %symbol.name, ?supertypes, "extracted marker type");
            map.insert(symbol.name.clone(), supertypes);
        }

        map.validate_tree(&self.root)?;

        tracing::info!(
            library = %library,
            markers = map.len(),
            root = %self.root,
            "extracted marker hierarchy"
        );
        Ok(map)
    }
}
