//! Symbol sources
//!
//! A source produces a plain [`SymbolTable`] from whatever analyzer output is
//! available. The JSON snapshot format is:
//!
//! ```json
//! {
//!   "libraries": {
//!     "dart:_js_types": [
//!       { "name": "JSAny", "kind": "extension_type" },
//!       { "name": "JSObject", "kind": "extension_type",
//!         "interfaces": [{ "library": "dart:_js_types", "name": "JSAny" }] }
//!     ]
//!   }
//! }
//! ```

use crate::{LibraryId, Result, SymbolError, SymbolInfo, SymbolKind, SymbolTable, TypeRef};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Anything that can produce a symbol table
pub trait SymbolSource {
    /// Load the full symbol table
    fn load(&self) -> Result<SymbolTable>;
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    libraries: BTreeMap<LibraryId, Vec<SnapshotSymbol>>,
}

#[derive(Debug, Deserialize)]
struct SnapshotSymbol {
    name: String,
    kind: SymbolKind,
    /// Declaring library; defaults to the exporting library
    #[serde(default)]
    library: Option<LibraryId>,
    #[serde(default)]
    supertype: Option<TypeRef>,
    #[serde(default)]
    interfaces: Vec<TypeRef>,
}

/// Loads a symbol table from a JSON snapshot file
#[derive(Debug, Clone)]
pub struct JsonSymbolSource {
    path: PathBuf,
}

impl JsonSymbolSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a snapshot from a string. `path` is only used for error messages.
    pub fn parse_str(path: &Path, json: &str) -> Result<SymbolTable> {
        let snapshot: Snapshot = serde_json::from_str(json).map_err(|source| SymbolError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut table = SymbolTable::new();

        for (exporter, symbols) in snapshot.libraries {
            // Keep empty libraries so lookups distinguish "empty" from "missing"
            table.library_mut(&exporter);
            for raw in symbols {
                let symbol = SymbolInfo {
                    name: raw.name,
                    kind: raw.kind,
                    library: raw.library.unwrap_or_else(|| exporter.clone()),
                    supertype: raw.supertype,
                    interfaces: raw.interfaces,
                };
                table.insert(&exporter, symbol)?;
            }
        }

        tracing::debug!(
            path = %path.display(),
            libraries = table.libraries().count(),
            symbols = table.symbol_count(),
            "loaded symbol snapshot"
        );
        Ok(table)
    }
}

impl SymbolSource for JsonSymbolSource {
    fn load(&self) -> Result<SymbolTable> {
        let json = fs::read_to_string(&self.path).map_err(|source| SymbolError::Io {
            path: self.path.clone(),
            source,
        })?;
        Self::parse_str(&self.path, &json)
    }
}
