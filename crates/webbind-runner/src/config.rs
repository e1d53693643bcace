//! Pipeline configuration
//!
//! Every field has a default matching the standard package layout, so an
//! absent config file is equivalent to `{}`. Relative paths are resolved
//! against the package root.

use crate::{Result, RunnerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use webbind_hierarchy::{ArtifactFormat, MarkerFilter};
use webbind_symbols::TypeRef;

/// An external program and its fixed arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Copy of this command with extra trailing arguments
    pub fn with_args<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut spec = self.clone();
        spec.args.extend(extra.into_iter().map(Into::into));
        spec
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Directory holding the generator and its npm dependencies
    pub generator_dir: PathBuf,

    /// Generator invocation, run inside `generator_dir`
    pub generator: CommandSpec,

    /// Directory the generator writes bindings into
    pub output_dir: PathBuf,

    /// Where the supertype table is written
    pub artifact_path: PathBuf,

    pub artifact_format: ArtifactFormat,

    /// Name of the constant exported by the artifact
    pub const_name: String,

    /// Symbol snapshot the hierarchy is extracted from
    pub symbols_path: PathBuf,

    pub marker: MarkerFilter,

    /// Marker type at the top of the hierarchy
    pub root_type: String,

    /// Top type dropped from every supertype list
    pub universal_root: Option<TypeRef>,

    pub readme_path: PathBuf,

    /// Path named in the README update markers
    pub tool_path: String,

    /// npm package whose locked version is recorded in the README
    pub lock_dependency: String,

    /// Package whose language version is stamped into the artifact
    pub package_name: String,

    pub package_config_path: PathBuf,

    pub install: CommandSpec,
    pub update: CommandSpec,
    pub compile: CommandSpec,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            generator_dir: PathBuf::from("tool/generator"),
            generator: CommandSpec::new("node", ["main.mjs"]),
            output_dir: PathBuf::from("lib/src"),
            artifact_path: PathBuf::from("tool/generator/js_type_supertypes.dart"),
            artifact_format: ArtifactFormat::Source,
            const_name: "jsTypeSupertypes".to_string(),
            symbols_path: PathBuf::from("tool/js_types.json"),
            marker: MarkerFilter::default(),
            root_type: "JSAny".to_string(),
            universal_root: Some(TypeRef::new("dart:core", "Object")),
            readme_path: PathBuf::from("README.md"),
            tool_path: "tool/update_bindings.dart".to_string(),
            lock_dependency: "@webref/idl".to_string(),
            package_name: "web".to_string(),
            package_config_path: PathBuf::from(".dart_tool/package_config.json"),
            install: CommandSpec::new("npm", ["install"]),
            update: CommandSpec::new("npm", ["update"]),
            compile: CommandSpec::new(
                "dart",
                [
                    "compile",
                    "js",
                    "--enable-asserts",
                    "--server-mode",
                    "-o",
                    "dart_main.js",
                    "../../lib/src/generator.dart",
                ],
            ),
        }
    }
}

impl RunnerConfig {
    /// Load a config file, falling back to defaults for missing fields
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| RunnerError::io(path, e))?;
        serde_json::from_str(&json).map_err(|e| RunnerError::json(path, e))
    }

    /// Resolve a configured path against the package root
    pub fn resolve(root: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }

    /// Marker lines bounding the README region this tool owns
    pub fn readme_markers(&self) -> (String, String) {
        (
            format!(
                "<!-- START updated by {}. Do not modify by hand -->",
                self.tool_path
            ),
            format!(
                "<!-- END updated by {}. Do not modify by hand -->",
                self.tool_path
            ),
        )
    }
}
