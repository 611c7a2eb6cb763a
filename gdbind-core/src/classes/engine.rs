/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Dictionary;

crate::engine_class! {
    /// Access to engine properties such as the frame counter and time scale.
    pub struct Engine: Object {
        level: Core,
        memory: MemManual,
        construct: singleton,
    }
}

crate::engine_methods! {
    impl Engine {
        fn get_frames_drawn(&mut self) -> i32 = 2455072627;

        /// Speed multiplier of game time; `1.0` is real time.
        fn set_time_scale(&mut self, time_scale: f64) = 373806689;
        fn get_time_scale(&mut self) -> f64 = 191475506;
        fn set_physics_ticks_per_second(&mut self, physics_ticks_per_second: i32) = 1286410249;
        fn get_physics_ticks_per_second(&self) -> i32 = 3905245786;
        fn is_editor_hint(&self) -> bool = 36873697;

        /// Version information as a dictionary with keys such as `major`, `minor` and `string`.
        fn get_version_info(&self) -> Dictionary = 3102165223;
    }
}
