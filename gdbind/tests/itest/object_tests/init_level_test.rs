/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::classes::TextLine;
use gdbind::init::InitLevel;
use gdbind::obj::NewGd;
use gdbind::sys::Global;

use crate::framework::with_engine;

pub(super) static LEVELS_SEEN: Global<Vec<InitLevel>> = Global::default();
pub(super) static LEVELS_DEINIT: Global<Vec<InitLevel>> = Global::default();

/// Width of a `TextLine` created during the `Servers` level.
static SERVERS_TEXT_LINE_WIDTH: Global<Option<f32>> = Global::default();

pub(crate) fn on_level_init(level: InitLevel) {
    LEVELS_SEEN.lock().push(level);

    // Server classes must be usable during their own level already.
    if level == InitLevel::Servers {
        let line = TextLine::new_gd();
        *SERVERS_TEXT_LINE_WIDTH.lock() = Some(line.get_width());
    }
}

pub(crate) fn on_level_deinit(level: InitLevel) {
    LEVELS_DEINIT.lock().push(level);
}

fn init_level_observed_all() {
    let levels_seen = LEVELS_SEEN.lock().clone();

    // Core is below the library's minimum level, so the hooks never see it.
    assert_eq!(levels_seen, [InitLevel::Servers, InitLevel::Scene, InitLevel::Editor]);
    assert!(LEVELS_DEINIT.lock().is_empty());
}

fn init_level_engine_loads_from_core() {
    let (minimum, active) = with_engine(|engine| (engine.minimum_level(), engine.active_levels().to_vec()));

    assert_eq!(minimum, InitLevel::Core);
    assert_eq!(active, InitLevel::ALL);
}

fn init_level_server_classes_available() {
    let width = *SERVERS_TEXT_LINE_WIDTH.lock();
    assert_eq!(width, Some(-1.0), "TextLine was not usable during Servers level");
}

fn init_level_runtime_version() {
    assert!(gdbind::sys::is_initialized());

    let version = gdbind::sys::runtime_version();
    assert_eq!((version.major, version.minor, version.patch), (4, 3, 0));
    assert_eq!(version.string, "v4.3.stable.mock");
}

itests![
    init_level_observed_all,
    init_level_engine_loads_from_core,
    init_level_server_classes_available,
    init_level_runtime_version,
];
