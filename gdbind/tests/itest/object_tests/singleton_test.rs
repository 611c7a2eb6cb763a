/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::GString;
use gdbind::classes::Engine;
use gdbind::obj::Singleton;

use crate::framework::process_frame;

fn singleton_is_unique() {
    let a = Engine::singleton();
    let b = Engine::singleton();

    assert_eq!(a, b);
    assert_eq!(a.get_class(), GString::from("Engine"));
    assert!(!a.instance_id().is_ref_counted());
}

fn singleton_survives_handle_drop() {
    let engine = Engine::singleton();
    let id = engine.instance_id();

    drop(engine);
    assert!(gdbind_mock::is_instance_alive(id.to_u64()));
}

fn singleton_time_scale() {
    let mut engine = Engine::singleton();
    assert_eq!(engine.get_time_scale(), 1.0);

    engine.set_time_scale(0.5);
    assert_eq!(Engine::singleton().get_time_scale(), 0.5);

    engine.set_time_scale(1.0);
}

fn singleton_physics_ticks() {
    let mut engine = Engine::singleton();
    assert_eq!(engine.get_physics_ticks_per_second(), 60);

    engine.set_physics_ticks_per_second(120);
    assert_eq!(engine.get_physics_ticks_per_second(), 120);

    engine.set_physics_ticks_per_second(60);
}

fn singleton_frames_drawn() {
    let mut engine = Engine::singleton();
    let before = engine.get_frames_drawn();

    process_frame();
    process_frame();
    assert_eq!(engine.get_frames_drawn(), before + 2);
}

fn singleton_not_in_editor() {
    assert!(!Engine::singleton().is_editor_hint());
}

fn singleton_version_info() {
    let info = Engine::singleton().get_version_info();
    let int = |key: &str| info.get(key).map(|value| value.to::<i64>());

    assert_eq!(info.len(), 7);
    assert_eq!(int("major"), Some(4));
    assert_eq!(int("minor"), Some(3));
    assert_eq!(int("patch"), Some(0));
    assert_eq!(int("hex"), Some(0x040300));
    assert_eq!(
        info.get("string").map(|value| value.to::<String>()),
        Some("4.3-stable (mock)".to_string())
    );
    assert!(info.get("codename").is_none());
}

itests![
    singleton_is_unique,
    singleton_survives_handle_drop,
    singleton_time_scale,
    singleton_physics_ticks,
    singleton_frames_drawn,
    singleton_not_in_editor,
    singleton_version_info,
];
