/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::io::Write as _;
use std::panic::AssertUnwindSafe;
use std::time::{Duration, Instant};

use super::TestCase;

/// Runs test suites in order and keeps the statistics.
pub struct TestRunner {
    filters: Vec<String>,
    total: usize,
    passed: usize,
    skipped: usize,
    failed_list: Vec<String>,
    elapsed: Duration,
    last_file: Option<String>,
}

impl TestRunner {
    pub fn new(filters: Vec<String>) -> Self {
        if !filters.is_empty() {
            println!("  {FMT_CYAN}Focused run{FMT_END} -- execute only tests matching {filters:?}.");
        }

        Self {
            filters,
            total: 0,
            passed: 0,
            skipped: 0,
            failed_list: Vec::new(),
            elapsed: Duration::ZERO,
            last_file: None,
        }
    }

    pub fn is_focused(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Runs all tests of the given files, in order.
    pub fn run_suite(&mut self, title: &str, files: &[&[TestCase]]) {
        let tests: Vec<TestCase> = files
            .iter()
            .flat_map(|tests| tests.iter().copied())
            .filter(|test| test.passes_filter(&self.filters))
            .collect();

        println!("\n{FMT_CYAN_BOLD}Run{FMT_END} {title} ({} tests)...", tests.len());

        let start = Instant::now();
        for test in tests {
            print_test_pre(test.name, test.file, &mut self.last_file);
            let outcome = run_rust_test(&test);

            self.update_stats(&outcome, test.file, test.name);
            print_test_post(test.name, outcome);
        }
        self.elapsed += start.elapsed();
    }

    /// Counts the tests of a suite that cannot run, e.g. because the engine failed to start.
    pub fn skip_suite(&mut self, title: &str, files: &[&[TestCase]], reason: &str) {
        let count = files.iter().map(|tests| tests.len()).sum::<usize>();
        println!("\n{FMT_YELLOW}Skip{FMT_END} {title} ({count} tests): {reason}");

        self.total += count;
        self.skipped += count;
    }

    /// Prints the summary; returns whether all tests passed.
    pub fn conclude(&self) -> bool {
        let Self {
            total,
            passed,
            skipped,
            ..
        } = *self;

        // Consider 0 tests run as a failure too, because it's probably a problem with the run itself.
        let failed = total - passed - skipped;
        let all_passed = failed == 0 && total != 0 && skipped == 0;

        let outcome = TestOutcome::from_bool(all_passed);
        let extra = if skipped > 0 {
            format!(", {skipped} skipped")
        } else if self.is_focused() {
            " (focused run)".to_string()
        } else {
            String::new()
        };

        println!("\nTest result: {outcome}. {passed} passed; {failed} failed{extra}.");
        println!("  Time: {:.2}s.", self.elapsed.as_secs_f32());

        if !all_passed && !self.failed_list.is_empty() {
            println!("\n  Failed tests:");
            let max = 10;
            for test in self.failed_list.iter().take(max) {
                println!("  * {test}");
            }

            if self.failed_list.len() > max {
                println!("  * ... and {} more.", self.failed_list.len() - max);
            }

            println!();
        }

        all_passed
    }

    fn update_stats(&mut self, outcome: &TestOutcome, test_file: &str, test_name: &str) {
        self.total += 1;
        match outcome {
            TestOutcome::Passed => self.passed += 1,
            TestOutcome::Failed => self
                .failed_list
                .push(format!("{} > {}", extract_file_subtitle(test_file), test_name)),
        }
    }
}

// For more colors, see https://stackoverflow.com/a/54062826
const FMT_CYAN_BOLD: &str = "\x1b[36;1;1m";
const FMT_CYAN: &str = "\x1b[36m";
const FMT_GREEN: &str = "\x1b[32m";
const FMT_YELLOW: &str = "\x1b[33m";
const FMT_RED: &str = "\x1b[31m";
const FMT_END: &str = "\x1b[0m";

fn run_rust_test(test: &TestCase) -> TestOutcome {
    let err_context = || format!("itest `{}` failed", test.name);
    let success = gdbind::private::handle_panic(err_context, AssertUnwindSafe(test.function));

    TestOutcome::from_bool(success.is_ok())
}

fn print_test_pre(test_case: &str, test_file: &str, last_file: &mut Option<String>) {
    print_file_header(test_file, last_file);

    print!("   -- {test_case} ... ");
    // Engine output goes to stderr; keep the order readable.
    let _ = std::io::stdout().flush();
}

fn print_file_header(file: &str, last_file: &mut Option<String>) {
    if last_file.as_deref() != Some(file) {
        println!("\n   {}:", extract_file_subtitle(file));
    }

    *last_file = Some(file.to_string());
}

fn extract_file_subtitle(file: &str) -> &str {
    if let Some(sep_pos) = file.rfind(['/', '\\']) {
        &file[sep_pos + 1..]
    } else {
        file
    }
}

/// Prints the outcome after the test ran.
///
/// Output printed during the test lands between name and outcome, so failed tests repeat their name.
fn print_test_post(test_case: &str, outcome: TestOutcome) {
    if matches!(outcome, TestOutcome::Failed) {
        println!("   -- {test_case} ... {outcome}");
    } else {
        println!("{outcome}");
    }
}

#[must_use]
enum TestOutcome {
    Passed,
    Failed,
}

impl TestOutcome {
    fn from_bool(success: bool) -> Self {
        if success {
            Self::Passed
        } else {
            Self::Failed
        }
    }
}

impl std::fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let end = FMT_END;
        let (col, outcome) = match self {
            TestOutcome::Passed => (FMT_GREEN, "ok"),
            TestOutcome::Failed => (FMT_RED, "FAILED"),
        };

        write!(f, "{col}{outcome}{end}")
    }
}
