/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Vector2;

crate::engine_class! {
    /// A 2D game object, with a transform (position, rotation and scale).
    pub struct Node2D: CanvasItem: Node: Object {
        level: Scene,
        memory: MemManual,
        construct: alloc,
    }
}

crate::engine_methods! {
    impl Node2D {
        fn set_position(&mut self, position: Vector2) = 743155724;
        fn get_position(&self) -> Vector2 = 3341600327;

        /// Rotation in radians.
        fn set_rotation(&mut self, radians: f32) = 373806689;
        fn get_rotation(&self) -> f32 = 1740695150;
        fn translate(&mut self, offset: Vector2) = 743155724;
    }
}
