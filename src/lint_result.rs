//! Input data model.
//!
//! These types mirror the JSON report written by stylelint's `json`
//! formatter: an array with one [`LintFileResult`] per linted file. Fields
//! the JUnit report has no use for (`deprecations`, `invalidOptionWarnings`,
//! `ignored`, ...) are accepted and dropped during decoding.

use crate::error::Result;

/// A single rule violation at one location in a source file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Warning {
    /// Rule identifier, e.g. `color-no-invalid-hex`.
    pub rule: String,
    /// Severity as reported by the linter (`"error"`, `"warning"`, ...).
    pub severity: String,
    /// Human-readable message.
    pub text: String,
    pub line: u64,
    pub column: u64,
}

/// Lint outcome for one source file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LintFileResult {
    /// Path of the linted file, as reported by the linter.
    pub source: String,
    /// Whether the file failed linting. stylelint omits the key for clean files.
    #[serde(default)]
    pub errored: bool,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

impl Warning {
    pub fn new(rule: &str, severity: &str, text: &str, line: u64, column: u64) -> Self {
        Warning {
            rule: rule.to_string(),
            severity: severity.to_string(),
            text: text.to_string(),
            line,
            column,
        }
    }
}

impl LintFileResult {
    /// A clean file with no warnings.
    pub fn passed(source: &str) -> Self {
        LintFileResult {
            source: source.to_string(),
            errored: false,
            warnings: vec![],
        }
    }

    /// A file that failed linting with the given warnings.
    pub fn failed(source: &str, warnings: Vec<Warning>) -> Self {
        LintFileResult {
            source: source.to_string(),
            errored: true,
            warnings,
        }
    }
}

/// Decodes a stylelint JSON report (an array of per-file results).
///
/// # Errors
///
/// Returns [`Error::InvalidReport`](crate::error::Error::InvalidReport) when
/// the input is not JSON, is not an array, or a result lacks `source` or a
/// warning lacks one of its fields.
///
/// # Examples
///
/// ```
/// use stylelint_junit::lint_result::parse_results;
///
/// let results = parse_results(r#"[{"source": "a.css", "warnings": []}]"#).unwrap();
/// assert_eq!(results[0].source, "a.css");
/// assert!(!results[0].errored);
/// ```
pub fn parse_results(json: &str) -> Result<Vec<LintFileResult>> {
    let results: Vec<LintFileResult> = serde_json::from_str(json)?;
    log::debug!("decoded {} lint results", results.len());
    Ok(results)
}
