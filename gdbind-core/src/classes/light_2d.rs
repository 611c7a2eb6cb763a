/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Color;

crate::engine_class! {
    /// Casts light in a 2D environment.
    pub struct Light2D: Node2D: CanvasItem: Node: Object {
        level: Scene,
        memory: MemManual,
        construct: alloc,
    }
}

crate::engine_methods! {
    impl Light2D {
        fn set_enabled(&mut self, enabled: bool) = 2586408642;
        fn is_enabled(&self) -> bool = 36873697;

        /// Multiplier of the light's intensity.
        fn set_energy(&mut self, energy: f32) = 373806689;
        fn get_energy(&self) -> f32 = 1740695150;
        fn set_color(&mut self, color: Color) = 2920490490;
        fn get_color(&self) -> Color = 3444240500;
    }
}
