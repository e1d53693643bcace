//! webbind-hierarchy: marker-type supertype tables
//!
//! This crate computes the table consumed by the bindings generator:
//! - Extract the immediate-supertype map of the marker types
//! - Validate that the map is a single tree
//! - Compute least common supertypes for every ordered pair of types
//! - Render the result as a deterministic artifact
//!
//! # Example
//!
//! ```ignore
//! use webbind_hierarchy::{build_supertype_table, MarkerFilter, SupertypeExtractor};
//!
//! let extractor = SupertypeExtractor::new(MarkerFilter::default(), "JSAny");
//! let table = build_supertype_table(&symbols, &extractor)?;
//! assert_eq!(table.get("JSArray", "JSString").unwrap().len(), 1);
//! ```

mod cycle;
mod emit;
mod error;
mod extractor;
mod lcs;
mod marker;
mod supertypes;

pub use emit::{render, render_source, write_artifact, ArtifactFormat, EmitOptions};
pub use error::HierarchyError;
pub use extractor::SupertypeExtractor;
pub use lcs::{LcsEngine, LcsTable};
pub use marker::MarkerFilter;
pub use supertypes::SupertypeMap;

use webbind_symbols::SymbolTable;

/// Extract the marker hierarchy from `symbols` and build its table.
///
/// Validation of the tree shape happens before any closure is computed.
pub fn build_supertype_table(
    symbols: &SymbolTable,
    extractor: &SupertypeExtractor,
) -> Result<LcsTable, HierarchyError> {
    let map = extractor.extract(symbols)?;
    LcsEngine::new(&map).build_table()
}
