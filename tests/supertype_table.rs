//! Integration tests for supertype table generation
//!
//! These tests go from a JSON symbol snapshot to the rendered artifact.

mod common;

use std::collections::BTreeSet;
use std::path::Path;

use common::{marker, snapshot, tree_symbols};
use webbind::hierarchy::{
    build_supertype_table, render, ArtifactFormat, EmitOptions, HierarchyError, LcsEngine,
    MarkerFilter, SupertypeExtractor,
};
use webbind::symbols::{JsonSymbolSource, LibraryId, SymbolTable};

fn load(json: &str) -> SymbolTable {
    JsonSymbolSource::parse_str(Path::new("snapshot.json"), json).expect("Snapshot should parse")
}

fn extractor(root: &str) -> SupertypeExtractor {
    SupertypeExtractor::new(MarkerFilter::default(), root)
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn e2e_tree_scenario() {
    let symbols = load(&snapshot(tree_symbols()));
    let table = build_supertype_table(&symbols, &extractor("Root")).unwrap();

    assert_eq!(table.get("LeafA", "LeafB"), Some(&set(&["Mid"])));
    assert_eq!(table.get("LeafA", "Root"), Some(&set(&["Root"])));
    assert_eq!(table.get("Mid", "Mid"), Some(&set(&["Mid"])));
    assert_eq!(table.names().count(), 4);
}

#[test]
fn e2e_chain_properties() {
    // A's supertype is B, B's is C, C's is D, D has none
    let symbols = load(&snapshot(vec![
        marker("A", Some("B")),
        marker("B", Some("C")),
        marker("C", Some("D")),
        marker("D", None),
    ]));
    let map = extractor("D").extract(&symbols).unwrap();
    let engine = LcsEngine::new(&map);

    assert_eq!(engine.ancestor_closure("A"), set(&["A", "B", "C", "D"]));
    assert_eq!(engine.least_common_supertypes("A", "C"), set(&["C"]));
    assert_eq!(engine.least_common_supertypes("A", "B"), set(&["B"]));

    let table = engine.build_table().unwrap();
    for a in map.names() {
        assert!(engine.ancestor_closure(a).contains(a));
        assert_eq!(table.get(a, a), Some(&set(&[a.as_str()])));
        for b in map.names() {
            assert_eq!(table.get(a, b), table.get(b, a), "({a}, {b}) not symmetric");
            assert_eq!(table.get(a, b).map(BTreeSet::len), Some(1));
        }
    }
}

#[test]
fn e2e_output_independent_of_enumeration_order() {
    let mut reversed = tree_symbols();
    reversed.reverse();

    let options = EmitOptions {
        language_version: Some("3.4".into()),
        ..EmitOptions::default()
    };
    let render_source = |json: String| {
        let table = build_supertype_table(&load(&json), &extractor("Root")).unwrap();
        render(&table, ArtifactFormat::Source, &options).unwrap()
    };

    let first = render_source(snapshot(tree_symbols()));
    let second = render_source(snapshot(reversed));
    assert_eq!(first, second);
    assert_eq!(first, render_source(snapshot(tree_symbols())));
}

#[test]
fn e2e_two_marker_parents_is_fatal() {
    let mut symbols = tree_symbols();
    symbols.push(serde_json::json!({
        "name": "Both",
        "kind": "extension_type",
        "interfaces": [
            { "library": common::JS_TYPES, "name": "LeafA" },
            { "library": common::JS_TYPES, "name": "LeafB" }
        ]
    }));

    let err = build_supertype_table(&load(&snapshot(symbols)), &extractor("Root")).unwrap_err();
    match err {
        HierarchyError::MultipleSupertypes { ty, supertypes } => {
            assert_eq!(ty, "Both");
            assert_eq!(supertypes, vec!["LeafA", "LeafB"]);
        }
        other => panic!("Expected MultipleSupertypes, got {:?}", other),
    }
}

#[test]
fn e2e_non_root_without_parent_is_fatal() {
    let mut symbols = tree_symbols();
    symbols.push(marker("Stray", None));

    let err = build_supertype_table(&load(&snapshot(symbols)), &extractor("Root")).unwrap_err();
    assert!(err.is_invariant_violation());
    assert_eq!(err.code(), "E-HIER-004");
}

#[test]
fn e2e_json_artifact_is_sorted() {
    let symbols = load(&snapshot(tree_symbols()));
    let table = build_supertype_table(&symbols, &extractor("Root")).unwrap();
    let json = render(&table, ArtifactFormat::Json, &EmitOptions::default()).unwrap();

    let keys: Vec<&str> = json
        .lines()
        .filter(|l| l.starts_with("  \"") && l.ends_with('{'))
        .map(|l| l.trim().trim_end_matches(": {").trim_matches('"'))
        .collect();
    assert_eq!(keys, vec!["LeafA", "LeafB", "Mid", "Root"]);
}

#[test]
fn e2e_markers_read_through_public_library() {
    // dart:js_interop re-exports the marker types declared in dart:_js_types
    let json = serde_json::json!({
        "libraries": {
            "dart:js_interop": [
                marker_in("JSAny", None),
                marker_in("JSObject", Some("JSAny")),
                marker_in("JSString", Some("JSAny")),
                { "name": "ExternalDartReference", "kind": "extension_type" }
            ]
        }
    })
    .to_string();
    let symbols = load(&json);

    let filter = MarkerFilter::DeclaringLibrary {
        library: LibraryId::from(common::JS_TYPES),
        namespace: Some(LibraryId::from("dart:js_interop")),
    };
    let table = build_supertype_table(&symbols, &SupertypeExtractor::new(filter, "JSAny")).unwrap();

    assert_eq!(table.names().count(), 3);
    assert_eq!(table.get("JSObject", "JSString"), Some(&set(&["JSAny"])));
    assert!(table.get("ExternalDartReference", "JSAny").is_none());
}

/// Marker entry listed under another library but declared in the marker library
fn marker_in(name: &str, parent: Option<&str>) -> serde_json::Value {
    let mut symbol = marker(name, parent);
    symbol["library"] = serde_json::json!(common::JS_TYPES);
    symbol
}
