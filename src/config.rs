//! Formatter configuration.
//!
//! A [`FormatterConfig`] is built once and applies to every report the
//! formatter renders afterwards. Options arrive from a host tool as loosely
//! typed data, so construction is lenient: a key is honoured only when its
//! value has the expected kind, otherwise the default is used. Nothing in
//! this module rejects a malformed option.
//!
//! # Configuration file
//!
//! The CLI reads `stylelint-junit.toml` from the current working directory
//! when present:
//!
//! ```toml
//! hidePassed = true
//! hidePath = false
//! output = "reports/stylelint.xml"
//! ```

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default config file name looked up by [`FormatterConfig::load`].
pub const DEFAULT_CONFIG_FILE: &str = "stylelint-junit.toml";

/// Display and output options for the JUnit formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Omit suites for files that passed linting.
    pub hide_passed: bool,
    /// Name suites after the final path segment only.
    pub hide_path: bool,
    /// Also write the rendered XML to this file.
    pub output: Option<PathBuf>,
}

/// Uniform read access over the two loosely typed sources (JSON, TOML).
trait OptionSource {
    fn bool_option(&self, key: &str) -> Option<bool>;
    fn str_option(&self, key: &str) -> Option<&str>;
}

impl OptionSource for serde_json::Value {
    fn bool_option(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(serde_json::Value::as_bool)
    }

    fn str_option(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(serde_json::Value::as_str)
    }
}

impl OptionSource for toml::Value {
    fn bool_option(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(toml::Value::as_bool)
    }

    fn str_option(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(toml::Value::as_str)
    }
}

impl FormatterConfig {
    /// Reads `hidePassed`, `hidePath` and `output` from a JSON value.
    ///
    /// Keys with the wrong kind, missing keys, and non-object roots all fall
    /// back to defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use stylelint_junit::config::FormatterConfig;
    ///
    /// let config = FormatterConfig::from_json(&json!({ "hidePassed": "yes", "hidePath": true }));
    /// assert!(!config.hide_passed);
    /// assert!(config.hide_path);
    /// assert!(config.output.is_none());
    /// ```
    pub fn from_json(value: &serde_json::Value) -> Self {
        Self::from_source(value)
    }

    /// Same as [`from_json`](Self::from_json) for a parsed TOML table.
    pub fn from_toml(value: &toml::Value) -> Self {
        Self::from_source(value)
    }

    fn from_source(source: &impl OptionSource) -> Self {
        FormatterConfig {
            hide_passed: source.bool_option("hidePassed").unwrap_or(false),
            hide_path: source.bool_option("hidePath").unwrap_or(false),
            output: source
                .str_option("output")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try [`DEFAULT_CONFIG_FILE`] in the current directory.
    /// 3. If that file does not exist either, return [`FormatterConfig::default()`].
    ///
    /// # Errors
    ///
    /// Returns an error when the explicit path does not exist, the file
    /// cannot be read, or its content is not valid TOML. Values of the wrong
    /// kind inside a valid file are ignored rather than reported.
    pub fn load(path: Option<&Path>) -> Result<FormatterConfig> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => {
                return Err(Error::InvalidConfig {
                    path: p.to_path_buf(),
                    message: "file not found".to_string(),
                })
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        let Some(path) = config_path else {
            log::debug!("no config file found, using defaults");
            return Ok(FormatterConfig::default());
        };

        let content = std::fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let table: toml::Table = toml::from_str(&content).map_err(|e| Error::InvalidConfig {
            path: path.clone(),
            message: e.to_string(),
        })?;

        log::debug!("loaded config from {}", path.display());
        Ok(FormatterConfig::from_toml(&toml::Value::Table(table)))
    }

    pub fn with_hide_passed(mut self, hide_passed: bool) -> Self {
        self.hide_passed = hide_passed;
        self
    }

    pub fn with_hide_path(mut self, hide_path: bool) -> Self {
        self.hide_path = hide_path;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }
}
