//! Marker-type selection

use serde::{Deserialize, Serialize};
use webbind_symbols::{LibraryId, SymbolInfo, SymbolTable, TypeRef};

/// Decides which symbols are marker types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerFilter {
    /// Every type declared in an internal sub-library.
    ///
    /// `namespace` names the library whose exports are scanned; when unset
    /// the declaring library's own namespace is used.
    DeclaringLibrary {
        library: LibraryId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        namespace: Option<LibraryId>,
    },

    /// Types in a top-level library whose names start with `prefix`
    NamePrefix { library: LibraryId, prefix: String },
}

impl Default for MarkerFilter {
    fn default() -> Self {
        MarkerFilter::DeclaringLibrary {
            library: LibraryId::from("dart:_js_types"),
            namespace: None,
        }
    }
}

impl MarkerFilter {
    /// The library marker types must be declared in
    pub fn library(&self) -> &LibraryId {
        match self {
            MarkerFilter::DeclaringLibrary { library, .. } => library,
            MarkerFilter::NamePrefix { library, .. } => library,
        }
    }

    /// The library whose exported namespace is scanned
    pub fn namespace(&self) -> &LibraryId {
        match self {
            MarkerFilter::DeclaringLibrary {
                namespace: Some(namespace),
                ..
            } => namespace,
            _ => self.library(),
        }
    }

    /// Check whether a declared symbol is a marker type
    pub fn matches(&self, symbol: &SymbolInfo) -> bool {
        symbol.is_type() && self.matches_name(&symbol.library, &symbol.name)
    }

    /// Check whether a reference could name a marker type, without resolving it
    pub fn matches_ref(&self, ty: &TypeRef) -> bool {
        self.matches_name(&ty.library, &ty.name)
    }

    /// Check a reference against the filter and, when it resolves, the
    /// referenced symbol's kind
    pub fn matches_resolved(&self, table: &SymbolTable, ty: &TypeRef) -> bool {
        match table.resolve(ty) {
            Some(symbol) => self.matches(symbol),
            None => self.matches_ref(ty),
        }
    }

    fn matches_name(&self, library: &LibraryId, name: &str) -> bool {
        match self {
            MarkerFilter::DeclaringLibrary {
                library: marker, ..
            } => library == marker,
            MarkerFilter::NamePrefix {
                library: marker,
                prefix,
            } => library == marker && name.starts_with(prefix.as_str()),
        }
    }
}
