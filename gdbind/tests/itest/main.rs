/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Integration tests: the test library is loaded into the mock engine, then every test runs against it on this thread.
//!
//! Pass substrings of test names as arguments to run only matching tests.

use gdbind::init::{gdextension, ExtensionLibrary, InitLevel};

#[macro_use]
mod framework;

mod builtin_tests;
mod engine_tests;
mod object_tests;
mod register_tests;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Entry point

struct IntegrationTests;

unsafe impl ExtensionLibrary for IntegrationTests {
    // Servers, so that classes of that level can be tested from inside the hook.
    fn min_level() -> InitLevel {
        InitLevel::Servers
    }

    fn on_level_init(level: InitLevel) {
        object_tests::on_level_init(level);
    }

    fn on_level_deinit(level: InitLevel) {
        object_tests::on_level_deinit(level);
    }
}

gdextension!(IntegrationTests, entry_symbol = itest_init);

// ----------------------------------------------------------------------------------------------------------------------------------------------

fn main() {
    // Arguments starting with `--` come from cargo (e.g. `--nocapture`) and are not filters.
    let filters: Vec<String> = std::env::args()
        .skip(1)
        .filter(|arg| !arg.starts_with("--"))
        .collect();

    let mut runner = framework::TestRunner::new(filters);

    runner.run_suite("load tests", &[object_tests::LOAD_TESTS]);

    let engine_suites = [
        builtin_tests::TESTS,
        object_tests::TESTS,
        engine_tests::TESTS,
        register_tests::TESTS,
    ]
    .concat();

    match framework::start_engine(itest_init) {
        Ok(()) => {
            runner.run_suite("integration tests", &engine_suites);

            framework::stop_engine();
            runner.run_suite("shutdown tests", &[object_tests::SHUTDOWN_TESTS]);
        }
        Err(err) => {
            let reason = format!("engine failed to load the library: {err}");
            runner.skip_suite("integration tests", &engine_suites, &reason);
        }
    }

    let success = runner.conclude();
    std::process::exit(if success { 0 } else { 1 });
}
