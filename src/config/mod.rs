//! Runtime configuration for the `msbuild-analysis` binary.
//!
//! Values come from command-line arguments, which fall back to environment
//! variables where clap is told to read them.

mod settings;

pub use settings::{Config, LogSource};
