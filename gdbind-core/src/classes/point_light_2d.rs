/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

crate::engine_class! {
    /// Positional 2D light source, shaped by a texture.
    pub struct PointLight2D: Light2D: Node2D: CanvasItem: Node: Object {
        level: Scene,
        memory: MemManual,
        construct: alloc,
    }
}

crate::engine_methods! {
    impl PointLight2D {
        fn set_texture_scale(&mut self, texture_scale: f32) = 373806689;
        fn get_texture_scale(&self) -> f32 = 1740695150;
    }
}
