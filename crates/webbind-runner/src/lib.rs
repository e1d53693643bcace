//! webbind-runner: the bindings regeneration pipeline
//!
//! Drives the external tools around the supertype table: npm dependency
//! sync, generator compile and run, and README upkeep. All subprocesses run
//! sequentially and a non-zero exit aborts the run.

mod command;
mod config;
mod error;
mod package;
mod pipeline;
mod readme;

pub use command::run_command;
pub use config::{CommandSpec, RunnerConfig};
pub use error::{Result, RunnerError};
pub use package::{language_version, locked_version};
pub use pipeline::{Pipeline, PipelineOptions, PipelineReport};
pub use readme::{replace_region, sync_readme, version_reference};
