//! Settings for code analysis of MSBuild build logs.
//!
//! An [`AnalysisSettings`] value bundles the full text of a build log, the
//! [`LogFileFormat`] describing its syntax and the root of the repository
//! the log refers to. It is validated on creation and immutable afterwards.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod observability;

pub use analysis::{
    AnalysisSettings, AnalysisSettingsBuilder, FormatRegistry, LogFileFormat, SettingsSummary,
    XmlFileLoggerFormat,
};
pub use config::{Config, LogSource};
pub use error::{Error, Result};
