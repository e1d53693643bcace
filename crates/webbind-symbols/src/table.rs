//! Namespaces and the symbol table

use crate::{LibraryId, SymbolError, SymbolInfo, TypeRef};
use std::collections::{BTreeMap, HashMap};

/// The exported namespace of a single library
#[derive(Debug, Clone)]
pub struct Namespace {
    library: LibraryId,

    /// Symbols in insertion order
    symbols: Vec<SymbolInfo>,

    /// Name to index mapping for lookup
    by_name: HashMap<String, usize>,
}

impl Namespace {
    /// Create a new empty namespace for `library`
    pub fn new(library: LibraryId) -> Self {
        Self {
            library,
            symbols: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// The library exporting this namespace
    pub fn library(&self) -> &LibraryId {
        &self.library
    }

    /// Insert a new symbol, returning error if the name is taken
    pub fn insert(&mut self, symbol: SymbolInfo) -> Result<(), SymbolError> {
        if self.by_name.contains_key(&symbol.name) {
            return Err(SymbolError::DuplicateSymbol {
                library: self.library.to_string(),
                name: symbol.name,
            });
        }

        self.by_name.insert(symbol.name.clone(), self.symbols.len());
        self.symbols.push(symbol);
        Ok(())
    }

    /// Get a symbol by name
    pub fn get(&self, name: &str) -> Option<&SymbolInfo> {
        self.by_name.get(name).map(|&idx| &self.symbols[idx])
    }

    /// Check if a symbol exists by name
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterate over all symbols in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SymbolInfo> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// All loaded namespaces, keyed by library
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    libraries: BTreeMap<LibraryId, Namespace>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the namespace exported by `library`
    pub fn library(&self, library: &LibraryId) -> Option<&Namespace> {
        self.libraries.get(library)
    }

    /// Get the namespace exported by `library`, creating it if missing
    pub fn library_mut(&mut self, library: &LibraryId) -> &mut Namespace {
        self.libraries
            .entry(library.clone())
            .or_insert_with(|| Namespace::new(library.clone()))
    }

    /// Insert a symbol into the namespace of `exporter`
    pub fn insert(&mut self, exporter: &LibraryId, symbol: SymbolInfo) -> Result<(), SymbolError> {
        self.library_mut(exporter).insert(symbol)
    }

    /// Resolve a type reference by looking in its declaring library first,
    /// then in every namespace that re-exports it
    pub fn resolve(&self, ty: &TypeRef) -> Option<&SymbolInfo> {
        if let Some(symbol) = self.library(&ty.library).and_then(|ns| ns.get(&ty.name)) {
            return Some(symbol);
        }
        self.libraries
            .values()
            .filter_map(|ns| ns.get(&ty.name))
            .find(|s| s.library == ty.library)
    }

    /// Iterate over all namespaces in library order
    pub fn libraries(&self) -> impl Iterator<Item = &Namespace> {
        self.libraries.values()
    }

    /// Total number of symbols across all namespaces
    pub fn symbol_count(&self) -> usize {
        self.libraries.values().map(Namespace::len).sum()
    }
}
