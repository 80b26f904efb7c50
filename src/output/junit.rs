//! JUnit XML report transformer.
//!
//! Maps stylelint results onto the JUnit schema:
//!
//! - `<testsuites package="stylelint.rules">` - document root
//! - `<testsuite>` - one per linted file
//! - `<testcase>` - one per warning, or a single `stylelint.passed` marker
//! - `<failure>` - rule severity, message and location of a warning

use crate::config::FormatterConfig;
use crate::error::{Error, Result};
use crate::lint_result::{LintFileResult, Warning};
use crate::output::xml::{Document, Element};

/// Value of the root `package` attribute.
pub const PACKAGE: &str = "stylelint.rules";
/// Name of the testcase emitted for files that passed linting.
pub const PASSED_CASE: &str = "stylelint.passed";

/// Shape of a suite, decided once from the result's `errored` flag.
///
/// `errored` is authoritative: a clean result carrying warnings still
/// renders as passed, and an errored result without warnings still renders
/// as failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteOutcome<'a> {
    /// Rendered as a single `stylelint.passed` testcase.
    Passed,
    /// Rendered as one failing testcase per warning, in input order.
    Failed(&'a [Warning]),
}

impl<'a> SuiteOutcome<'a> {
    /// Resolves the outcome of `result` from its `errored` flag alone.
    pub fn of(result: &'a LintFileResult) -> Self {
        if result.errored {
            SuiteOutcome::Failed(&result.warnings)
        } else {
            SuiteOutcome::Passed
        }
    }
}

/// Renders lint results as JUnit XML using a fixed [`FormatterConfig`].
///
/// # Examples
///
/// ```
/// use stylelint_junit::config::FormatterConfig;
/// use stylelint_junit::lint_result::LintFileResult;
/// use stylelint_junit::output::junit::JunitFormatter;
///
/// let formatter = JunitFormatter::new(FormatterConfig::default().with_hide_path(true));
/// let xml = formatter.render(&[LintFileResult::passed("src/a.css")]);
/// assert!(xml.contains(r#"<testsuite name="a.css" failures="0" errors="0" tests="1">"#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JunitFormatter {
    config: FormatterConfig,
}

impl JunitFormatter {
    /// Creates a formatter; `config` applies to every later call.
    pub fn new(config: FormatterConfig) -> Self {
        JunitFormatter { config }
    }

    /// Returns the configuration this formatter was built with.
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Renders `results` and, when an output path is configured, overwrites
    /// that file with the same XML before returning it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the output file cannot be written. No other
    /// step can fail.
    pub fn format(&self, results: &[LintFileResult]) -> Result<String> {
        let xml = self.render(results);

        if let Some(path) = &self.config.output {
            std::fs::write(path, &xml).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            log::info!("JUnit report written to {}", path.display());
        }

        Ok(xml)
    }

    /// Renders `results` to an XML string without touching the filesystem.
    pub fn render(&self, results: &[LintFileResult]) -> String {
        self.build_document(results).to_pretty_string()
    }

    /// Builds the in-memory document tree for `results`.
    pub fn build_document(&self, results: &[LintFileResult]) -> Document {
        let suites: Vec<Element> = results
            .iter()
            .filter(|r| self.is_visible(r))
            .map(|r| self.build_suite(r))
            .collect();

        log::debug!(
            "{} of {} results rendered as test suites",
            suites.len(),
            results.len()
        );

        Document::new(Element::new("testsuites").attr("package", PACKAGE).children(suites))
    }

    fn is_visible(&self, result: &LintFileResult) -> bool {
        !(self.config.hide_passed && !result.errored)
    }

    fn build_suite(&self, result: &LintFileResult) -> Element {
        let name = suite_name(&result.source, self.config.hide_path);
        let suite = Element::new("testsuite").attr("name", name);

        match SuiteOutcome::of(result) {
            SuiteOutcome::Passed => suite
                .attr("failures", 0)
                .attr("errors", 0)
                .attr("tests", 1)
                .child(Element::new("testcase").attr("name", PASSED_CASE)),
            SuiteOutcome::Failed(warnings) => {
                let count = warnings.len();
                // An errored file with nothing reported still counts as one test.
                let tests = if count == 0 { 1 } else { count };
                suite
                    .attr("failures", count)
                    .attr("errors", count)
                    .attr("tests", tests)
                    .children(warnings.iter().map(|w| failed_case(w, name)))
            }
        }
    }
}

/// Returns the suite name for `source`.
///
/// With `hide_path`, everything up to and including the last `/` is
/// dropped. The separator is matched literally on every platform.
///
/// ```
/// use stylelint_junit::output::junit::suite_name;
///
/// assert_eq!(suite_name("path/to/fileB.css", true), "fileB.css");
/// assert_eq!(suite_name("fileB.css", true), "fileB.css");
/// assert_eq!(suite_name("path/to/fileB.css", false), "path/to/fileB.css");
/// ```
pub fn suite_name(source: &str, hide_path: bool) -> &str {
    if hide_path {
        source.rsplit('/').next().unwrap_or(source)
    } else {
        source
    }
}

fn failed_case(warning: &Warning, suite_name: &str) -> Element {
    Element::new("testcase").attr("name", &warning.rule).child(
        Element::new("failure")
            .attr("type", &warning.severity)
            .attr("message", &warning.text)
            .text(format!(
                "On line {}, column {} in {}",
                warning.line, warning.column, suite_name
            )),
    )
}

/// Configures a formatter once and returns a closure that renders (and
/// optionally writes) any number of result sets with it.
///
/// ```
/// use stylelint_junit::config::FormatterConfig;
/// use stylelint_junit::lint_result::LintFileResult;
/// use stylelint_junit::output::junit::formatter;
///
/// let format = formatter(FormatterConfig::default().with_hide_passed(true));
/// let xml = format(&[LintFileResult::passed("a.css")]).unwrap();
/// assert!(xml.ends_with(r#"<testsuites package="stylelint.rules"/>"#));
/// ```
pub fn formatter(config: FormatterConfig) -> impl Fn(&[LintFileResult]) -> Result<String> {
    let formatter = JunitFormatter::new(config);
    move |results: &[LintFileResult]| formatter.format(results)
}
