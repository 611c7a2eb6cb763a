/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// These tests run after the engine has deinitialized all levels.

use gdbind::init::InitLevel;
use gdbind_mock::{LoadError, MockEngine};

use super::init_level_test::LEVELS_DEINIT;
use crate::itest_init;

fn shutdown_deinit_in_reverse_order() {
    let levels = LEVELS_DEINIT.lock().clone();
    assert_eq!(levels, [InitLevel::Editor, InitLevel::Scene, InitLevel::Servers]);
}

fn shutdown_binding_released() {
    assert!(!gdbind::sys::is_initialized());
}

fn shutdown_reload_rejected() {
    // The binding can only be set up once per process.
    let result = MockEngine::load(itest_init);
    assert!(matches!(result, Err(LoadError::EntryFailed)));
    assert!(!gdbind::sys::is_initialized());
}

itests![
    shutdown_deinit_in_reverse_order,
    shutdown_binding_released,
    shutdown_reload_rejected,
];
