//! # stylelint-junit
//!
//! Converts [stylelint] lint results into a JUnit XML report for CI systems
//! that understand JUnit test output.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use stylelint_junit::{config::FormatterConfig, lint_result, output::JunitFormatter};
//!
//! let json = std::fs::read_to_string("stylelint-report.json").unwrap();
//! let results = lint_result::parse_results(&json).unwrap();
//!
//! let config = FormatterConfig::default()
//!     .with_hide_passed(true)
//!     .with_output("stylelint-junit.xml");
//! let xml = JunitFormatter::new(config).format(&results).unwrap();
//! print!("{xml}");
//! ```
//!
//! ## Architecture
//!
//! 1. **[`lint_result`]** — input types decoded from stylelint's JSON report.
//! 2. **[`config`]** — lenient [`config::FormatterConfig`] construction.
//! 3. **[`output`]** — result-to-suite mapping ([`output::junit`]) and the
//!    XML tree/pretty printer ([`output::xml`]).
//! 4. **[`error`]** — the crate [`error::Error`] type.
//!
//! Each suite corresponds to one linted file. Passing files get a single
//! `stylelint.passed` testcase; failing files get one testcase per warning.
//!
//! [stylelint]: https://stylelint.io/

pub mod config;
pub mod error;
pub mod lint_result;
pub mod output;

pub use error::{Error, Result};
