//! JUnit report output.
//!
//! | Module | Role |
//! |--------|------|
//! | [`junit`] | Maps lint results onto `testsuites`/`testsuite`/`testcase`/`failure` |
//! | [`xml`]   | Document tree and pretty printer used by [`junit`] |
//!
//! Most callers only need [`JunitFormatter`] or the two-stage [`formatter`]
//! function.

pub mod junit;
pub mod xml;

pub use junit::{formatter, JunitFormatter};
