//! Error types for symbol loading

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SymbolError>;

/// Errors from loading a symbol table
#[derive(Debug, Error)]
pub enum SymbolError {
    /// E-SYM-001: The snapshot file could not be read
    #[error("failed to read symbol snapshot {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// E-SYM-002: The snapshot is not valid JSON or has the wrong shape
    #[error("invalid symbol snapshot {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// E-SYM-003: Two symbols share a name within one namespace
    #[error("duplicate symbol `{name}` in library `{library}`")]
    DuplicateSymbol { library: String, name: String },
}

impl SymbolError {
    /// Error code for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            SymbolError::Io { .. } => "E-SYM-001",
            SymbolError::Parse { .. } => "E-SYM-002",
            SymbolError::DuplicateSymbol { .. } => "E-SYM-003",
        }
    }
}
