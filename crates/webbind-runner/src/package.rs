//! Package metadata lookups
//!
//! Two files are consulted: the language package config, for the language
//! version stamped into the generated artifact, and the npm lock file, for
//! the IDL version recorded in the README.

use crate::{Result, RunnerError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PackageConfig {
    packages: Vec<PackageEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageEntry {
    name: String,
    #[serde(default)]
    language_version: Option<String>,
}

/// Language version of `package` from a `package_config.json`
pub fn language_version(package_config: &Path, package: &str) -> Result<String> {
    let missing = || RunnerError::MissingPackageMetadata {
        package: package.to_string(),
        path: package_config.to_path_buf(),
    };

    let json = match fs::read_to_string(package_config) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(missing()),
        Err(e) => return Err(RunnerError::io(package_config, e)),
    };
    let config: PackageConfig =
        serde_json::from_str(&json).map_err(|e| RunnerError::json(package_config, e))?;

    config
        .packages
        .into_iter()
        .find(|p| p.name == package)
        .and_then(|p| p.language_version)
        .ok_or_else(missing)
}

/// Locked version of `dependency` from an npm `package-lock.json`
pub fn locked_version(lock_file: &Path, dependency: &str) -> Result<String> {
    let json = fs::read_to_string(lock_file).map_err(|e| RunnerError::io(lock_file, e))?;
    let lock: serde_json::Value =
        serde_json::from_str(&json).map_err(|e| RunnerError::json(lock_file, e))?;

    lock.get("packages")
        .and_then(|packages| packages.get(format!("node_modules/{}", dependency)))
        .and_then(|entry| entry.get("version"))
        .and_then(|version| version.as_str())
        .map(str::to_string)
        .ok_or_else(|| RunnerError::MissingDependency {
            dependency: dependency.to_string(),
            path: lock_file.to_path_buf(),
        })
}
