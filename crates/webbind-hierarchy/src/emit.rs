//! Artifact rendering for the supertype table
//!
//! Both formats are sorted at every level so re-running with unchanged
//! input reproduces the file byte for byte.

use crate::{HierarchyError, LcsTable};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Encoding of the generated artifact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactFormat {
    /// A source file exporting the table as one constant
    #[default]
    Source,
    /// Pretty-printed JSON
    Json,
}

/// Header and naming details for the generated artifact
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Name of the exported constant
    pub const_name: String,

    /// Library the table was extracted from, named in the header
    pub source_library: String,

    /// Language version pinned in the header, if known
    pub language_version: Option<String>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            const_name: "jsTypeSupertypes".to_string(),
            source_library: "dart:_js_types".to_string(),
            language_version: None,
        }
    }
}

/// Render the table in the requested format
pub fn render(
    table: &LcsTable,
    format: ArtifactFormat,
    options: &EmitOptions,
) -> Result<String, HierarchyError> {
    match format {
        ArtifactFormat::Source => Ok(render_source(table, options)),
        ArtifactFormat::Json => {
            let mut json = serde_json::to_string_pretty(table)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Render the table as a source constant
pub fn render_source(table: &LcsTable, options: &EmitOptions) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "// Generated by webbind from `{}`. Do not edit by hand.",
        options.source_library
    );
    if let Some(version) = &options.language_version {
        let _ = writeln!(out, "// @dart={}", version);
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "const Map<String, Map<String, Set<String>>> {} = {{",
        options.const_name
    );
    for (a, row) in table.iter() {
        let _ = writeln!(out, "  {}: {{", quote(a));
        for (b, supertypes) in row {
            let members: Vec<String> = supertypes.iter().map(|s| quote(s)).collect();
            let _ = writeln!(out, "    {}: {{{}}},", quote(b), members.join(", "));
        }
        out.push_str("  },\n");
    }
    out.push_str("};\n");

    out
}

/// Single-quote a name for the source encoding
fn quote(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 2);
    result.push('\'');
    for c in name.chars() {
        match c {
            '\'' => result.push_str("\\'"),
            '\\' => result.push_str("\\\\"),
            '$' => result.push_str("\\$"),
            _ => result.push(c),
        }
    }
    result.push('\'');
    result
}

/// Write `contents` to `path`, creating parent directories.
///
/// Returns `true` when the file content changed.
pub fn write_artifact(path: &Path, contents: &str) -> Result<bool, HierarchyError> {
    let io_err = |source| HierarchyError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Ok(existing) = fs::read_to_string(path) {
        if existing == contents {
            tracing::info!(path = %path.display(), "supertype table unchanged");
            return Ok(false);
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote supertype table");
    Ok(true)
}
