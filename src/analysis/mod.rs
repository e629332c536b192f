//! Settings for analysing MSBuild build logs.
//!
//! Provides:
//! - [`AnalysisSettings`], created from a log file or from log content
//! - [`AnalysisSettingsBuilder`] for callers holding optional inputs
//! - [`LogFileFormat`] descriptors and a [`FormatRegistry`] to look them up

mod builder;
mod decode;
mod format;
mod settings;

pub use builder::AnalysisSettingsBuilder;
pub(crate) use decode::decode_log_bytes;
pub use format::{FormatRegistry, LogFileFormat, XmlFileLoggerFormat};
pub use settings::{AnalysisSettings, SettingsSummary};
