//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

pub const JS_TYPES: &str = "dart:_js_types";

pub const README_START: &str =
    "<!-- START updated by tool/update_bindings.dart. Do not modify by hand -->";
pub const README_END: &str =
    "<!-- END updated by tool/update_bindings.dart. Do not modify by hand -->";

/// Snapshot entry for a marker type with an optional marker parent
pub fn marker(name: &str, parent: Option<&str>) -> Value {
    let mut symbol = json!({
        "name": name,
        "kind": "extension_type",
        "supertype": { "library": "dart:core", "name": "Object" },
    });
    if let Some(parent) = parent {
        symbol["interfaces"] = json!([{ "library": JS_TYPES, "name": parent }]);
    }
    symbol
}

/// Snapshot with the given symbols under the marker library
pub fn snapshot(symbols: Vec<Value>) -> String {
    let doc = json!({
        "libraries": { JS_TYPES: symbols },
    });
    serde_json::to_string_pretty(&doc).expect("snapshot serializes")
}

/// The small hierarchy used across tests: Root <- Mid <- {LeafA, LeafB}
pub fn tree_symbols() -> Vec<Value> {
    vec![
        marker("Root", None),
        marker("Mid", Some("Root")),
        marker("LeafA", Some("Mid")),
        marker("LeafB", Some("Mid")),
    ]
}

/// Lay out a package root with everything the pipeline reads
pub fn write_package(root: &Path, symbols: Vec<Value>) {
    write(root, "tool/js_types.json", &snapshot(symbols));
    write(
        root,
        ".dart_tool/package_config.json",
        r#"{ "configVersion": 2, "packages": [
            { "name": "web", "rootUri": "../", "packageUri": "lib/", "languageVersion": "3.4" }
        ] }"#,
    );
    write(
        root,
        "tool/generator/package-lock.json",
        r#"{ "lockfileVersion": 3, "packages": {
            "node_modules/@webref/idl": { "version": "3.43.1" }
        } }"#,
    );
    write(
        root,
        "README.md",
        &format!("# web\n\n{README_START}\nstale\n{README_END}\n\n## Usage\n"),
    );
}

pub fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(&path, contents).expect("write fixture");
}

pub fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative))
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
}
