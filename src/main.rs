//! MSBuild analysis settings
//!
//! Builds analysis settings from a log file or inline content and prints a
//! JSON summary of them.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::path::PathBuf;

use clap::Parser;
use msbuild_analysis::observability::{init_tracing, spans, TracingConfig};
use msbuild_analysis::{Config, Error, FormatRegistry, LogSource, Result, XmlFileLoggerFormat};

/// Build settings for code analysis of an MSBuild log
#[derive(Parser, Debug)]
#[command(name = "msbuild-analysis")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// MSBuild log file to read, `-` for standard input
    #[arg(
        short = 'f',
        long,
        conflicts_with = "content",
        required_unless_present_any = ["content", "list_formats"]
    )]
    log_file: Option<PathBuf>,

    /// MSBuild log content
    #[arg(short, long)]
    content: Option<String>,

    /// Format of the log
    #[arg(long, env = "MSBUILD_ANALYSIS_FORMAT", default_value = XmlFileLoggerFormat::NAME)]
    format: String,

    /// Root directory of the repository the log belongs to
    #[arg(
        short,
        long,
        env = "MSBUILD_ANALYSIS_REPOSITORY_ROOT",
        required_unless_present = "list_formats"
    )]
    repository_root: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "MSBUILD_ANALYSIS_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging output
    #[arg(long, env = "MSBUILD_ANALYSIS_LOG_JSON")]
    log_json: bool,

    /// Print the known log formats and exit
    #[arg(long)]
    list_formats: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&TracingConfig {
        level: cli.log_level.clone(),
        json: cli.log_json,
    });

    let registry = FormatRegistry::with_builtin();
    if cli.list_formats {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let log_source = LogSource::from_args(cli.log_file, cli.content, std::io::stdin().lock())?;
    let repository_root = cli
        .repository_root
        .ok_or_else(|| Error::config("--repository-root is required"))?;

    let config = Config {
        log_source,
        format: cli.format,
        repository_root,
        log_level: cli.log_level,
        log_json: cli.log_json,
    };
    config.validate()?;

    let source = match config.log_source {
        LogSource::File(_) => "file",
        LogSource::Content(_) => "content",
    };
    let span = spans::settings_span(source, &config.format);
    let _guard = span.enter();

    let settings = config.to_settings(&registry)?;
    tracing::info!(
        format = settings.format().name(),
        repository_root = %settings.repository_root().display(),
        "Analysis settings ready"
    );

    println!("{}", serde_json::to_string_pretty(&settings.summary())?);
    Ok(())
}
