/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::framework::TestCase;

mod dynamic_call_test;
mod init_level_test;
mod load_test;
mod object_test;
mod refcount_test;
mod shutdown_test;
mod singleton_test;

pub(crate) use init_level_test::{on_level_deinit, on_level_init};

/// Run before the engine is started.
pub(crate) const LOAD_TESTS: &[TestCase] = load_test::TESTS;

/// Run after the engine has been shut down.
pub(crate) const SHUTDOWN_TESTS: &[TestCase] = shutdown_test::TESTS;

pub(crate) const TESTS: &[&[TestCase]] = &[
    init_level_test::TESTS,
    object_test::TESTS,
    refcount_test::TESTS,
    dynamic_call_test::TESTS,
    singleton_test::TESTS,
];
