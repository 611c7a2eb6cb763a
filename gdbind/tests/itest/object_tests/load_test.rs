/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// These tests run before the engine is started; every load attempt here must fail and leave no trace.

use gdbind_mock::{EngineVersion, LoadError, MockEngine};

use super::init_level_test::LEVELS_SEEN;
use crate::itest_init;

fn load_nothing_initialized_yet() {
    assert!(!gdbind::sys::is_initialized());
    assert!(LEVELS_SEEN.lock().is_empty());
}

fn load_rejects_outdated_engine() {
    let version = EngineVersion {
        major: 4,
        minor: 1,
        patch: 3,
    };

    let result = MockEngine::load_as(itest_init, version);
    assert!(matches!(result, Err(LoadError::EntryFailed)));
    assert!(!gdbind::sys::is_initialized());
}

fn load_rejects_other_major_version() {
    let version = EngineVersion {
        major: 5,
        minor: 0,
        patch: 0,
    };

    let result = MockEngine::load_as(itest_init, version);
    assert!(matches!(result, Err(LoadError::EntryFailed)));
    assert!(!gdbind::sys::is_initialized());
    assert!(LEVELS_SEEN.lock().is_empty());
}

itests![
    load_nothing_initialized_yet,
    load_rejects_outdated_engine,
    load_rejects_other_major_version,
];
