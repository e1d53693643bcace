//! webbind CLI - regenerate Web API bindings and the JS type supertype table

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use webbind_hierarchy::ArtifactFormat;
use webbind_runner::{Pipeline, PipelineOptions, RunnerConfig};

#[derive(Parser, Debug)]
#[command(name = "webbind")]
#[command(about = "Regenerate Web API bindings and the JS type supertype table", long_about = None)]
#[command(version)]
struct Cli {
    /// Update npm dependencies instead of installing the locked versions
    #[arg(short, long)]
    update: bool,

    /// Recompile the generator before running it (default)
    #[arg(long, overrides_with = "no_compile")]
    compile: bool,

    /// Run the previously compiled generator as is
    #[arg(long, overrides_with = "compile")]
    no_compile: bool,

    /// Generate bindings for all APIs, including experimental ones
    #[arg(long)]
    generate_all: bool,

    /// Package root; relative config paths resolve against it
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// JSON config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Symbol snapshot to extract the JS type hierarchy from
    #[arg(long, value_name = "FILE")]
    symbols: Option<PathBuf>,

    /// Only compute and write the supertype table
    #[arg(long)]
    table_only: bool,

    /// Encoding of the supertype table
    #[arg(long, value_enum)]
    format: Option<Format>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Source,
    Json,
}

impl From<Format> for ArtifactFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Source => ArtifactFormat::Source,
            Format::Json => ArtifactFormat::Json,
        }
    }
}

impl Cli {
    fn options(&self) -> PipelineOptions {
        PipelineOptions {
            update: self.update,
            compile: self.compile || !self.no_compile,
            generate_all: self.generate_all,
            table_only: self.table_only,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => match RunnerConfig::load(&RunnerConfig::resolve(&cli.root, path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error[{}]: {}", e.code(), e);
                return ExitCode::FAILURE;
            }
        },
        None => RunnerConfig::default(),
    };
    if let Some(symbols) = &cli.symbols {
        config.symbols_path = symbols.clone();
    }
    if let Some(format) = cli.format {
        config.artifact_format = format.into();
    }

    let pipeline = Pipeline::new(cli.root.clone(), config, cli.options());
    match pipeline.run() {
        Ok(report) => {
            println!(
                "✓ supertype table: {} types ({})",
                report.types,
                if report.table_changed { "updated" } else { "unchanged" }
            );
            if report.readme_changed == Some(false) {
                let readme = RunnerConfig::resolve(&cli.root, &pipeline.config().readme_path);
                println!("No update for {}.", readme.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error[{}]: {}", e.code(), e);
            tracing::error!(error = %e, "generation failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["webbind"]).unwrap();
        assert_eq!(cli.options(), PipelineOptions::default());
        assert_eq!(cli.root, PathBuf::from("."));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["webbind", "-u", "--no-compile", "--generate-all"]).unwrap();
        let options = cli.options();
        assert!(options.update);
        assert!(!options.compile);
        assert!(options.generate_all);
    }

    #[test]
    fn test_last_compile_flag_wins() {
        let cli = Cli::try_parse_from(["webbind", "--no-compile", "--compile"]).unwrap();
        assert!(cli.options().compile);
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let err = Cli::try_parse_from(["webbind", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_unknown_argument_fails() {
        let err = Cli::try_parse_from(["webbind", "--frobnicate"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_format_value() {
        let cli = Cli::try_parse_from(["webbind", "--table-only", "--format", "json"]).unwrap();
        assert!(cli.table_only);
        assert_eq!(cli.format.map(ArtifactFormat::from), Some(ArtifactFormat::Json));
    }
}
