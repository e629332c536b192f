//! Builder for [`AnalysisSettings`] when inputs are collected piecemeal.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::format::LogFileFormat;
use super::settings::AnalysisSettings;
use crate::{Error, Result};

/// Collects the format and repository root, then creates settings from
/// either a file or in-memory content.
#[derive(Debug, Default, Clone)]
pub struct AnalysisSettingsBuilder {
    format: Option<Arc<dyn LogFileFormat>>,
    repository_root: Option<PathBuf>,
}

impl AnalysisSettingsBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log format.
    #[must_use]
    pub fn format(mut self, format: Arc<dyn LogFileFormat>) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the repository root.
    #[must_use]
    pub fn repository_root(mut self, repository_root: impl Into<PathBuf>) -> Self {
        self.repository_root = Some(repository_root.into());
        self
    }

    /// Read the log at `log_file_path` into new settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the format or repository root
    /// was never set, otherwise whatever [`AnalysisSettings::from_file_path`]
    /// returns.
    pub fn build_from_file(self, log_file_path: impl AsRef<Path>) -> Result<AnalysisSettings> {
        let (format, repository_root) = self.into_parts()?;
        AnalysisSettings::from_file_path(log_file_path, format, repository_root)
    }

    /// Create settings from in-memory log content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the format or repository root
    /// was never set, or if the content is blank.
    pub fn build_from_content(
        self,
        log_file_content: impl Into<String>,
    ) -> Result<AnalysisSettings> {
        let (format, repository_root) = self.into_parts()?;
        AnalysisSettings::from_content(log_file_content, format, repository_root)
    }

    fn into_parts(self) -> Result<(Arc<dyn LogFileFormat>, PathBuf)> {
        let format = self
            .format
            .ok_or_else(|| Error::invalid_argument("format", "format is not set"))?;
        let repository_root = self.repository_root.ok_or_else(|| {
            Error::invalid_argument("repository_root", "repository root is not set")
        })?;
        Ok((format, repository_root))
    }
}
