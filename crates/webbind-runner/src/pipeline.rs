//! The end-to-end regeneration pipeline
//!
//! Stages run strictly in order and any failure aborts the run:
//! dependency sync, supertype table, generator compile, generator run,
//! README sync.

use crate::command::run_command;
use crate::{package, readme, Result, RunnerConfig};
use std::path::{Path, PathBuf};
use webbind_hierarchy::{render, write_artifact, EmitOptions, LcsEngine, SupertypeExtractor};
use webbind_symbols::{JsonSymbolSource, SymbolSource};

/// Per-run switches, usually taken from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Update dependencies instead of installing the locked versions
    pub update: bool,
    /// Recompile the generator before running it
    pub compile: bool,
    /// Ask the generator to include experimental APIs
    pub generate_all: bool,
    /// Stop after writing the supertype table
    pub table_only: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            update: false,
            compile: true,
            generate_all: false,
            table_only: false,
        }
    }
}

/// What a completed run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Number of marker types in the table
    pub types: usize,
    /// Whether the artifact content changed
    pub table_changed: bool,
    /// Whether the README changed; `None` when the stage was skipped
    pub readme_changed: Option<bool>,
}

pub struct Pipeline {
    root: PathBuf,
    config: RunnerConfig,
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(root: impl Into<PathBuf>, config: RunnerConfig, options: PipelineOptions) -> Self {
        Self {
            root: root.into(),
            config,
            options,
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    fn path(&self, path: &Path) -> PathBuf {
        RunnerConfig::resolve(&self.root, path)
    }

    /// Run every stage in order
    pub fn run(&self) -> Result<PipelineReport> {
        let mut report = PipelineReport::default();

        if !self.options.table_only {
            self.sync_dependencies()?;
        }

        let (types, changed) = self.write_supertype_table()?;
        report.types = types;
        report.table_changed = changed;

        if self.options.table_only {
            return Ok(report);
        }

        if self.options.compile {
            self.compile_generator()?;
        }
        self.run_generator()?;
        report.readme_changed = Some(self.sync_readme()?);

        Ok(report)
    }

    /// Install or update the generator's npm dependencies
    pub fn sync_dependencies(&self) -> Result<()> {
        let spec = if self.options.update {
            &self.config.update
        } else {
            &self.config.install
        };
        run_command(spec, &self.path(&self.config.generator_dir))
    }

    /// Extract the marker hierarchy, build its table and write the artifact.
    ///
    /// Returns the number of types and whether the artifact changed.
    pub fn write_supertype_table(&self) -> Result<(usize, bool)> {
        let symbols = JsonSymbolSource::new(self.path(&self.config.symbols_path)).load()?;
        let extractor =
            SupertypeExtractor::new(self.config.marker.clone(), self.config.root_type.clone())
                .with_universal_root(self.config.universal_root.clone());

        let map = extractor.extract(&symbols)?;
        let table = LcsEngine::new(&map).build_table()?;

        let language_version = package::language_version(
            &self.path(&self.config.package_config_path),
            &self.config.package_name,
        )?;
        let options = EmitOptions {
            const_name: self.config.const_name.clone(),
            source_library: self.config.marker.library().to_string(),
            language_version: Some(language_version),
        };

        let contents = render(&table, self.config.artifact_format, &options)?;
        let changed = write_artifact(&self.path(&self.config.artifact_path), &contents)?;
        Ok((map.len(), changed))
    }

    /// Bundle the generator
    pub fn compile_generator(&self) -> Result<()> {
        run_command(&self.config.compile, &self.path(&self.config.generator_dir))
    }

    /// Run the generator, writing bindings into the output directory
    pub fn run_generator(&self) -> Result<()> {
        let output_dir = self.path(&self.config.output_dir);
        let mut extra = vec![format!("--output-directory={}", output_dir.display())];
        if self.options.generate_all {
            extra.push("--generate-all".to_string());
        }

        let spec = self.config.generator.with_args(extra);
        run_command(&spec, &self.path(&self.config.generator_dir))
    }

    /// Record the locked IDL version in the README
    pub fn sync_readme(&self) -> Result<bool> {
        let lock_file = self.path(&self.config.generator_dir).join("package-lock.json");
        let version = package::locked_version(&lock_file, &self.config.lock_dependency)?;
        let body = readme::version_reference(&self.config.lock_dependency, &version);

        readme::sync_readme(
            &self.path(&self.config.readme_path),
            &self.config.readme_markers(),
            &body,
        )
    }
}
