//! Error types for the generation pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use webbind_hierarchy::HierarchyError;
use webbind_symbols::SymbolError;

pub type Result<T> = std::result::Result<T, RunnerError>;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command} {}` failed with {}", args.join(" "), describe_exit(*code))]
    CommandFailed {
        command: String,
        args: Vec<String>,
        /// `None` when the process was killed by a signal
        code: Option<i32>,
    },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no package metadata for `{package}` in {}", path.display())]
    MissingPackageMetadata { package: String, path: PathBuf },

    #[error("no locked version of `{dependency}` in {}", path.display())]
    MissingDependency { dependency: String, path: PathBuf },

    #[error("update markers not found in {}", path.display())]
    MissingMarkers { path: PathBuf },

    #[error(transparent)]
    Symbols(#[from] SymbolError),

    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
}

impl RunnerError {
    /// Error code for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            RunnerError::Spawn { .. } => "E-RUN-001",
            RunnerError::CommandFailed { .. } => "E-RUN-002",
            RunnerError::Io { .. } => "E-RUN-003",
            RunnerError::Json { .. } => "E-RUN-004",
            RunnerError::MissingPackageMetadata { .. } => "E-RUN-005",
            RunnerError::MissingDependency { .. } => "E-RUN-006",
            RunnerError::MissingMarkers { .. } => "E-RUN-007",
            RunnerError::Symbols(e) => e.code(),
            RunnerError::Hierarchy(e) => e.code(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RunnerError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        RunnerError::Json {
            path: path.into(),
            source,
        }
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "termination by signal".to_string(),
    }
}
