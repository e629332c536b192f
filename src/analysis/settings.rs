//! Validated, immutable settings for MSBuild log analysis.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use super::decode::decode_log_bytes;
use super::format::LogFileFormat;
use crate::{Error, Result};

/// Settings handed to a code analysis provider that reads MSBuild logs.
///
/// The log content is always held in memory. When created from a file the
/// file is read once, during construction; later changes on disk are not
/// picked up.
#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    format: Arc<dyn LogFileFormat>,
    log_file_content: String,
    repository_root: PathBuf,
}

impl AnalysisSettings {
    fn new(
        log_file_content: String,
        format: Arc<dyn LogFileFormat>,
        repository_root: PathBuf,
    ) -> Self {
        tracing::debug!(
            format = format.name(),
            repository_root = %repository_root.display(),
            bytes = log_file_content.len(),
            "Created analysis settings"
        );

        Self {
            format,
            log_file_content,
            repository_root,
        }
    }

    /// Create settings from a log file on disk.
    ///
    /// The file is read completely before this returns. Files starting with
    /// a UTF-8, UTF-16 or UTF-32 byte order mark are decoded accordingly,
    /// anything else is read as UTF-8. Undecodable bytes become U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `log_file_path` or
    /// `repository_root` is empty, and [`Error::Io`] if the file cannot be
    /// opened or read.
    pub fn from_file_path(
        log_file_path: impl AsRef<Path>,
        format: Arc<dyn LogFileFormat>,
        repository_root: impl Into<PathBuf>,
    ) -> Result<Self> {
        let log_file_path = log_file_path.as_ref();
        let repository_root = repository_root.into();
        ensure_path("log_file_path", log_file_path)?;
        ensure_path("repository_root", &repository_root)?;

        tracing::debug!(path = %log_file_path.display(), "Reading MSBuild log file");
        let log_file_content = read_log_file(log_file_path)?;

        Ok(Self::new(log_file_content, format, repository_root))
    }

    /// Create settings from the content of a log file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the content is empty or only
    /// whitespace, or if `repository_root` is empty.
    pub fn from_content(
        log_file_content: impl Into<String>,
        format: Arc<dyn LogFileFormat>,
        repository_root: impl Into<PathBuf>,
    ) -> Result<Self> {
        let log_file_content = log_file_content.into();
        let repository_root = repository_root.into();
        if log_file_content.trim().is_empty() {
            return Err(Error::invalid_argument(
                "log_file_content",
                "content is empty or whitespace",
            ));
        }
        ensure_path("repository_root", &repository_root)?;

        Ok(Self::new(log_file_content, format, repository_root))
    }

    /// Format of the log.
    #[must_use]
    pub const fn format(&self) -> &Arc<dyn LogFileFormat> {
        &self.format
    }

    /// Full text of the log.
    #[must_use]
    pub fn log_file_content(&self) -> &str {
        &self.log_file_content
    }

    /// Root directory of the repository the log belongs to.
    #[must_use]
    pub fn repository_root(&self) -> &Path {
        &self.repository_root
    }

    /// Serializable overview of these settings.
    #[must_use]
    pub fn summary(&self) -> SettingsSummary {
        SettingsSummary {
            format: self.format.name().to_string(),
            repository_root: self.repository_root.clone(),
            content_bytes: self.log_file_content.len(),
            line_count: self.log_file_content.lines().count(),
        }
    }
}

/// Overview of [`AnalysisSettings`] without the log content itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSummary {
    pub format: String,
    pub repository_root: PathBuf,
    pub content_bytes: usize,
    pub line_count: usize,
}

fn ensure_path(param: &'static str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::invalid_argument(param, "path is empty"));
    }
    Ok(())
}

fn read_log_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_log_bytes(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MockFormat;

    impl LogFileFormat for MockFormat {
        fn name(&self) -> &str {
            "mock"
        }
    }

    fn mock_format() -> Arc<dyn LogFileFormat> {
        Arc::new(MockFormat)
    }

    #[test]
    fn test_from_content() {
        let format = mock_format();
        let settings =
            AnalysisSettings::from_content("error CS0001: test", Arc::clone(&format), "/repo")
                .unwrap();

        assert_eq!(settings.log_file_content(), "error CS0001: test");
        assert!(Arc::ptr_eq(settings.format(), &format));
        assert_eq!(settings.repository_root(), Path::new("/repo"));
    }

    #[test]
    fn test_from_content_keeps_surrounding_whitespace() {
        let content = "\n  warning MSB3277: conflict  \r\n";
        let settings = AnalysisSettings::from_content(content, mock_format(), "/repo").unwrap();
        assert_eq!(settings.log_file_content(), content);
    }

    #[test]
    fn test_from_content_empty() {
        let err = AnalysisSettings::from_content("", mock_format(), "/repo").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("log_file_content"));
    }

    #[test]
    fn test_from_content_whitespace_only() {
        for content in ["   ", "\t", "\r\n \n"] {
            let err = AnalysisSettings::from_content(content, mock_format(), "/repo").unwrap_err();
            assert!(
                err.is_invalid_argument(),
                "content {content:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_content_empty_repository_root() {
        let err = AnalysisSettings::from_content("x", mock_format(), "").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("repository_root"));
    }

    #[test]
    fn test_from_file_path_empty_path_is_invalid_argument() {
        let err = AnalysisSettings::from_file_path("", mock_format(), "/repo").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("log_file_path"));
    }

    #[test]
    fn test_from_file_path_checks_arguments_before_io() {
        let err = AnalysisSettings::from_file_path("/does/not/exist.log", mock_format(), "")
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_summary() {
        let settings =
            AnalysisSettings::from_content("line one\nline two\n", mock_format(), "/repo").unwrap();
        let summary = settings.summary();
        assert_eq!(summary.format, "mock");
        assert_eq!(summary.repository_root, PathBuf::from("/repo"));
        assert_eq!(summary.content_bytes, 18);
        assert_eq!(summary.line_count, 2);
    }

    #[test]
    fn test_clone_shares_format() {
        let settings = AnalysisSettings::from_content("x", mock_format(), "/repo").unwrap();
        let cloned = settings.clone();
        assert!(Arc::ptr_eq(settings.format(), cloned.format()));
        assert_eq!(cloned.log_file_content(), "x");
    }
}
