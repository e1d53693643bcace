//! webbind-symbols: plain symbol tables for hierarchy extraction
//!
//! This crate replaces live analyzer introspection with an explicit loading
//! step. A [`SymbolSource`] produces a [`SymbolTable`]: for each library, its
//! exported namespace of [`SymbolInfo`]s with resolved supertype, interfaces
//! and declaring library.
//!
//! # Example
//!
//! ```ignore
//! use webbind_symbols::{JsonSymbolSource, LibraryId, SymbolSource};
//!
//! let table = JsonSymbolSource::new("tool/js_types.json").load()?;
//! let ns = table.library(&LibraryId::from("dart:_js_types")).unwrap();
//! assert!(ns.contains("JSAny"));
//! ```

mod error;
mod source;
mod symbol;
mod table;

pub use error::{Result, SymbolError};
pub use source::{JsonSymbolSource, SymbolSource};
pub use symbol::{LibraryId, SymbolInfo, SymbolKind, TypeRef};
pub use table::{Namespace, SymbolTable};
