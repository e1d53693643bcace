//! Symbol information and types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a library, e.g. `dart:_js_types`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryId(pub String);

impl LibraryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LibraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LibraryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A resolved reference to a declared type
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Library declaring the referenced type
    pub library: LibraryId,
    /// Name of the referenced type
    pub name: String,
}

impl TypeRef {
    pub fn new(library: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            library: LibraryId(library.into()),
            name: name.into(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.library, self.name)
    }
}

/// Kind of symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Class,
    ExtensionType,
    Mixin,
    /// A typedef; carries no hierarchy of its own
    Alias,
}

/// A declared symbol exported by a library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolInfo {
    /// Exported name, unique within its namespace
    pub name: String,

    pub kind: SymbolKind,

    /// Library that declares the symbol. May differ from the exporting
    /// library when the symbol is re-exported.
    pub library: LibraryId,

    /// Resolved superclass, if any
    #[serde(default)]
    pub supertype: Option<TypeRef>,

    /// Resolved implemented interfaces, in declaration order
    #[serde(default)]
    pub interfaces: Vec<TypeRef>,
}

impl SymbolInfo {
    /// Create a new symbol with no supertypes
    pub fn new(name: impl Into<String>, kind: SymbolKind, library: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            library: LibraryId(library.into()),
            supertype: None,
            interfaces: Vec::new(),
        }
    }

    /// Set the superclass
    pub fn with_supertype(mut self, supertype: TypeRef) -> Self {
        self.supertype = Some(supertype);
        self
    }

    /// Add an implemented interface
    pub fn with_interface(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Check if this symbol defines a type (as opposed to aliasing one)
    pub fn is_type(&self) -> bool {
        !matches!(self.kind, SymbolKind::Alias)
    }

    /// Superclass followed by interfaces
    pub fn declared_supertypes(&self) -> impl Iterator<Item = &TypeRef> {
        self.supertype.iter().chain(self.interfaces.iter())
    }
}
