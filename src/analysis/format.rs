//! Log file format descriptors and their registry.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::{Error, Result};

/// Describes the syntax of an MSBuild log.
///
/// Settings only store a descriptor and hand it on to whatever consumes
/// them; nothing in this crate interprets the log content.
pub trait LogFileFormat: fmt::Debug + Send + Sync {
    /// Stable, human-readable name of the format.
    fn name(&self) -> &str;
}

/// Log written by the MSBuild XML file logger.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct XmlFileLoggerFormat;

impl XmlFileLoggerFormat {
    /// Registry name of this format.
    pub const NAME: &'static str = "xml-file-logger";
}

impl LogFileFormat for XmlFileLoggerFormat {
    fn name(&self) -> &str {
        Self::NAME
    }
}

/// Lookup of format descriptors by name. Names are case-insensitive.
#[derive(Debug, Default, Clone)]
pub struct FormatRegistry {
    formats: BTreeMap<String, Arc<dyn LogFileFormat>>,
}

impl FormatRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the formats shipped with this crate.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry
            .formats
            .insert(XmlFileLoggerFormat::NAME.to_string(), Arc::new(XmlFileLoggerFormat));
        registry
    }

    /// Register a format under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the name is blank or already taken.
    pub fn register(&mut self, format: Arc<dyn LogFileFormat>) -> Result<()> {
        let key = format.name().trim().to_lowercase();
        if key.is_empty() {
            return Err(Error::invalid_argument("format", "format name is empty"));
        }
        if self.formats.contains_key(&key) {
            return Err(Error::invalid_argument(
                "format",
                format!("format '{key}' is already registered"),
            ));
        }

        tracing::debug!(format = %key, "Registered log file format");
        self.formats.insert(key, format);
        Ok(())
    }

    /// Look up a format by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFormat`] if nothing is registered under `name`.
    pub fn get(&self, name: &str) -> Result<Arc<dyn LogFileFormat>> {
        self.formats
            .get(&name.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| Error::UnknownFormat(name.to_string()))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formats.keys().map(String::as_str)
    }

    /// Number of registered formats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}
