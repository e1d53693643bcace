//! Error types for hierarchy extraction and table construction

use std::path::PathBuf;
use thiserror::Error;

/// Errors from hierarchy extraction and least-common-supertype computation.
///
/// Every variant except `Io` and `Serialize` is a broken tree invariant.
/// None of them are recoverable: generation must not proceed on a table
/// built from a hierarchy that failed validation.
#[derive(Debug, Error)]
pub enum HierarchyError {
    /// E-HIER-001: The marker library is not in the symbol table
    #[error("library `{library}` not found in symbol table")]
    LibraryNotFound { library: String },

    /// E-HIER-002: The filter selected no marker types
    #[error("no marker types found in library `{library}`")]
    EmptyNamespace { library: String },

    /// E-HIER-003: A marker type has more than one immediate marker supertype
    #[error("`{ty}` has multiple immediate supertypes: {}", supertypes.join(", "))]
    MultipleSupertypes { ty: String, supertypes: Vec<String> },

    /// E-HIER-004: A non-root marker type has no immediate marker supertype
    #[error("`{ty}` has no supertype but is not the root `{root}`")]
    MissingSupertype { ty: String, root: String },

    /// E-HIER-005: The designated root is not a marker type
    #[error("root type `{root}` not found among marker types")]
    MissingRoot { root: String },

    /// E-HIER-006: The designated root has a supertype
    #[error("root type `{root}` has supertype `{supertype}`")]
    RootHasSupertype { root: String, supertype: String },

    /// E-HIER-007: Following supertype edges leads back to the start
    #[error("supertype cycle detected: {path}")]
    Cycle {
        /// Full cycle path, e.g., "A -> B -> A"
        path: String,
    },

    /// E-HIER-008: A pair of types does not have exactly one least common supertype
    #[error("expected one least common supertype for ({a}, {b}), found {{{}}}", found.join(", "))]
    NotSingleton {
        a: String,
        b: String,
        found: Vec<String>,
    },

    /// E-HIER-009: A supertype edge points at a name with no entry in the map
    #[error("`{ty}` has unknown supertype `{supertype}`")]
    UnknownSupertype { ty: String, supertype: String },

    /// E-HIER-010: The artifact could not be written
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// E-HIER-011: The table could not be encoded
    #[error("failed to encode table: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl HierarchyError {
    /// Error code for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            HierarchyError::LibraryNotFound { .. } => "E-HIER-001",
            HierarchyError::EmptyNamespace { .. } => "E-HIER-002",
            HierarchyError::MultipleSupertypes { .. } => "E-HIER-003",
            HierarchyError::MissingSupertype { .. } => "E-HIER-004",
            HierarchyError::MissingRoot { .. } => "E-HIER-005",
            HierarchyError::RootHasSupertype { .. } => "E-HIER-006",
            HierarchyError::Cycle { .. } => "E-HIER-007",
            HierarchyError::NotSingleton { .. } => "E-HIER-008",
            HierarchyError::UnknownSupertype { .. } => "E-HIER-009",
            HierarchyError::Io { .. } => "E-HIER-010",
            HierarchyError::Serialize(_) => "E-HIER-011",
        }
    }

    /// Whether this error reports a malformed hierarchy (as opposed to I/O)
    pub fn is_invariant_violation(&self) -> bool {
        !matches!(self, HierarchyError::Io { .. } | HierarchyError::Serialize(_))
    }
}
