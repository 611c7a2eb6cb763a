/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Minimal test framework: test registration, the engine instance shared by all tests, and panic helpers.

use std::cell::RefCell;
use std::panic::AssertUnwindSafe;

use gdbind::init::InitLevel;
use gdbind_mock::{LoadError, Message, MessageKind, MockEngine};

mod runner;

pub use runner::TestRunner;

/// One integration test, registered through [`itests!`].
#[derive(Copy, Clone)]
pub struct TestCase {
    pub name: &'static str,
    pub file: &'static str,
    pub function: fn(),
}

impl TestCase {
    /// Whether the test should run, given the command-line filters. No filters means all tests run.
    pub fn passes_filter(&self, filters: &[String]) -> bool {
        filters.is_empty() || filters.iter().any(|x| self.name.contains(x))
    }
}

/// Declares the tests of one file, as `pub(crate) const TESTS: &[TestCase]`.
macro_rules! itests {
    ( $( $test:ident ),* $(,)? ) => {
        pub(crate) const TESTS: &[$crate::framework::TestCase] = &[
            $(
                $crate::framework::TestCase {
                    name: stringify!($test),
                    file: file!(),
                    function: $test,
                },
            )*
        ];
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Engine instance

thread_local! {
    static ENGINE: RefCell<Option<MockEngine>> = const { RefCell::new(None) };
}

/// Loads the test library into the mock engine and initializes all levels.
pub fn start_engine(entry: gdbind_mock::EntryPoint) -> Result<(), LoadError> {
    let mut engine = MockEngine::load(entry)?;
    engine.initialize_up_to(InitLevel::Editor);

    ENGINE.with_borrow_mut(|slot| *slot = Some(engine));
    Ok(())
}

/// Deinitializes all levels and unloads the library.
pub fn stop_engine() {
    // Take the engine out first; deinit hooks may call back into the framework.
    let engine = ENGINE.with_borrow_mut(Option::take);
    if let Some(mut engine) = engine {
        engine.deinitialize_all();
    }
}

/// Runs `f` with the running engine.
///
/// # Panics
/// If the engine has not been started.
pub fn with_engine<R>(f: impl FnOnce(&mut MockEngine) -> R) -> R {
    ENGINE.with_borrow_mut(|slot| {
        let engine = slot.as_mut().expect("engine not started");
        f(engine)
    })
}

/// Ends the current frame; returns the number of objects freed by `queue_free()`.
pub fn process_frame() -> usize {
    with_engine(MockEngine::process_frame)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Engine output

/// Runs `code` and returns its result together with everything the engine printed meanwhile.
pub fn capture_messages<R>(code: impl FnOnce() -> R) -> (R, Vec<Message>) {
    drop(gdbind_mock::take_messages());
    let result = code();
    (result, gdbind_mock::take_messages())
}

/// Runs `code`, which must make the engine report at least one error. Returns the error texts.
pub fn expect_engine_error<R>(context: &str, code: impl FnOnce() -> R) -> (R, Vec<String>) {
    let (result, messages) = capture_messages(code);
    let errors: Vec<String> = messages
        .into_iter()
        .filter(|message| message.kind == MessageKind::Error)
        .map(|message| message.text)
        .collect();

    assert!(!errors.is_empty(), "engine should have reported an error: {context}");
    (result, errors)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Panics

pub fn expect_panic(context: &str, code: impl FnOnce()) {
    let panic = suppress_panic_log(|| std::panic::catch_unwind(AssertUnwindSafe(code)));

    assert!(panic.is_err(), "code should have panicked but did not: {context}");
}

/// Disable printing of panics and errors, while `callback` runs.
pub fn suppress_panic_log<R>(callback: impl FnOnce() -> R) -> R {
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_panic_info| {}));

    let prev_print_level = gdbind::private::set_error_print_level(0);
    let res = callback();

    gdbind::private::set_error_print_level(prev_print_level);
    std::panic::set_hook(prev_hook);
    res
}
