//! Table-driven test framework
//!
//! A [`TestSuite`] runs a table of [`DefTest`] entries. Each entry may
//! override the suite's prep, check and report functions; the suite keeps
//! every failure report and [`TestSuite::finish`] panics with all of them.
//!
//! ```
//! use platutils_testutils::{DefTest, TestSuite};
//!
//! let tests = [
//!     DefTest::new(1, "empty", "", 0),
//!     DefTest::new(2, "word", "four", 4),
//! ];
//!
//! let mut suite = TestSuite::new();
//! for test in &tests {
//!     suite.prep_test(test);
//!     let actual = test.input.len();
//!     suite.post_test_actions(&actual, test);
//! }
//! # if !platutils_testutils::fail_tests() {
//! suite.finish();
//! # }
//! ```

use std::fmt::Debug;
use std::sync::OnceLock;

/// Environment variable forcing every test to report
pub const FAILED_OUTPUT_TEST: &str = "FAILED_OUTPUT_TEST";

pub type PrepFn<I, E> = fn(&DefTest<I, E>);
pub type CheckFn<I, E> = fn(&E, &DefTest<I, E>) -> bool;
pub type ReportFn<I, E> = fn(&E, &DefTest<I, E>) -> String;

/// Whether tests are forced to fail so their reports are emitted
pub fn fail_tests() -> bool {
    static FAIL_TESTS: OnceLock<bool> = OnceLock::new();
    *FAIL_TESTS.get_or_init(|| std::env::var_os(FAILED_OUTPUT_TEST).is_some())
}

/// One entry of a test table
#[derive(Debug, Clone)]
pub struct DefTest<I, E> {
    pub number: usize,
    pub description: String,
    pub input: I,
    pub expected: E,
    /// Overrides the suite's prep function
    pub prep: Option<PrepFn<I, E>>,
    /// Overrides the suite's check function
    pub check: Option<CheckFn<I, E>>,
    /// Overrides the suite's report function
    pub report: Option<ReportFn<I, E>>,
}

impl<I, E> DefTest<I, E> {
    pub fn new(number: usize, description: impl Into<String>, input: I, expected: E) -> Self {
        Self {
            number,
            description: description.into(),
            input,
            expected,
            prep: None,
            check: None,
            report: None,
        }
    }

    pub fn with_prep(mut self, prep: PrepFn<I, E>) -> Self {
        self.prep = Some(prep);
        self
    }

    pub fn with_check(mut self, check: CheckFn<I, E>) -> Self {
        self.check = Some(check);
        self
    }

    pub fn with_report(mut self, report: ReportFn<I, E>) -> Self {
        self.report = Some(report);
        self
    }
}

/// Logs the test number and description
pub fn default_prep<I, E>(test: &DefTest<I, E>) {
    tracing::info!(test = test.number, "Test: {}, {}", test.number, test.description);
}

/// Equality of actual and expected, false when tests are forced to fail
pub fn default_check<I, E: PartialEq>(actual: &E, test: &DefTest<I, E>) -> bool {
    *actual == test.expected && !fail_tests()
}

/// Input, actual and expected values as pretty debug dumps
pub fn default_report<I: Debug, E: Debug>(actual: &E, test: &DefTest<I, E>) -> String {
    format!(
        "\nTest: {}, {}\nInput...: {:#?}\nGot.....: {:#?}\nExpected: {:#?}",
        test.number, test.description, test.input, actual, test.expected
    )
}

/// Runs test tables and collects failure reports
pub struct TestSuite<I, E> {
    prep: PrepFn<I, E>,
    check: CheckFn<I, E>,
    report: ReportFn<I, E>,
    failures: Vec<String>,
}

impl<I: Debug, E: Debug + PartialEq> Default for TestSuite<I, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Debug, E: Debug + PartialEq> TestSuite<I, E> {
    pub fn new() -> Self {
        Self {
            prep: default_prep,
            check: default_check,
            report: default_report,
            failures: Vec::new(),
        }
    }

    /// Put back the default prep, check and report functions
    pub fn restore_defaults(&mut self) {
        self.prep = default_prep;
        self.check = default_check;
        self.report = default_report;
    }
}

impl<I, E> TestSuite<I, E> {
    pub fn set_prep(&mut self, prep: PrepFn<I, E>) {
        self.prep = prep;
    }

    pub fn set_check(&mut self, check: CheckFn<I, E>) {
        self.check = check;
    }

    pub fn set_report(&mut self, report: ReportFn<I, E>) {
        self.report = report;
    }

    pub fn prep_test(&self, test: &DefTest<I, E>) {
        test.prep.unwrap_or(self.prep)(test);
    }

    /// Check the result and record a report when the check fails
    ///
    /// Returns whether the check passed.
    pub fn post_test_actions(&mut self, actual: &E, test: &DefTest<I, E>) -> bool {
        if test.check.unwrap_or(self.check)(actual, test) {
            return true;
        }
        tracing::info!(test = test.number, "Test failed");
        let report = test.report.unwrap_or(self.report)(actual, test);
        self.failures.push(report);
        false
    }

    /// Reports recorded so far
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Panic with every recorded report, if any
    ///
    /// # Panics
    ///
    /// Panics when at least one test failed its check.
    pub fn finish(self) {
        if !self.failures.is_empty() {
            panic!(
                "{} test(s) failed:{}",
                self.failures.len(),
                self.failures.concat()
            );
        }
    }
}
