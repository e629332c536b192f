//! Configuration settings and validation.

use std::io::Read;
use std::path::PathBuf;

use crate::analysis::{
    decode_log_bytes, AnalysisSettings, AnalysisSettingsBuilder, FormatRegistry,
    XmlFileLoggerFormat,
};
use crate::{Error, Result};

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Where the MSBuild log comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    /// Log file on disk.
    File(PathBuf),
    /// Log content supplied directly.
    Content(String),
}

impl LogSource {
    /// Pick the log source from command-line values.
    ///
    /// A `log_file` of `-` reads all of `stdin` and decodes it the same way
    /// a file on disk is decoded. The result is in-memory content, so a
    /// blank log on stdin is later rejected where a blank file is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if neither a file nor content is given, and
    /// [`Error::Io`] if reading `stdin` fails.
    pub fn from_args(
        log_file: Option<PathBuf>,
        content: Option<String>,
        mut stdin: impl Read,
    ) -> Result<Self> {
        match (log_file, content) {
            (Some(path), _) if path.as_os_str() == "-" => {
                let mut bytes = Vec::new();
                stdin.read_to_end(&mut bytes)?;
                Ok(Self::Content(decode_log_bytes(&bytes)))
            }
            (Some(path), _) => Ok(Self::File(path)),
            (None, Some(content)) => Ok(Self::Content(content)),
            (None, None) => Err(Error::config("either --log-file or --content is required")),
        }
    }
}

/// Main configuration for a settings run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source of the log.
    pub log_source: LogSource,

    /// Name of the log file format.
    pub format: String,

    /// Root directory of the repository the log belongs to.
    pub repository_root: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON.
    pub log_json: bool,
}

impl Config {
    /// Create a configuration with default format and logging.
    #[must_use]
    pub fn new(log_source: LogSource, repository_root: impl Into<PathBuf>) -> Self {
        Self {
            log_source,
            format: XmlFileLoggerFormat::NAME.to_string(),
            repository_root: repository_root.into(),
            log_level: "info".to_string(),
            log_json: false,
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::config(format!(
                "invalid log level '{}', must be one of: {}",
                self.log_level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        if self.format.trim().is_empty() {
            return Err(Error::config("format cannot be empty"));
        }

        if self.repository_root.as_os_str().is_empty() {
            return Err(Error::config("repository root cannot be empty"));
        }

        if let LogSource::File(path) = &self.log_source {
            if path.as_os_str().is_empty() {
                return Err(Error::config("log file path cannot be empty"));
            }
        }

        Ok(())
    }

    /// Resolve the format in `registry` and build analysis settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFormat`] if the format is not registered, or
    /// any error from building the settings.
    pub fn to_settings(&self, registry: &FormatRegistry) -> Result<AnalysisSettings> {
        let builder = AnalysisSettingsBuilder::new()
            .format(registry.get(&self.format)?)
            .repository_root(self.repository_root.clone());

        match &self.log_source {
            LogSource::File(path) => builder.build_from_file(path),
            LogSource::Content(content) => builder.build_from_content(content.clone()),
        }
    }
}
