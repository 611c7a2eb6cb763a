/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Vector2;

crate::engine_class! {
    /// A 2D rectangle shape used for physics collision.
    pub struct RectangleShape2D: Shape2D: Resource: RefCounted: Object {
        level: Scene,
        memory: MemRefCounted,
        construct: gd,
    }
}

crate::engine_methods! {
    impl RectangleShape2D {
        fn set_size(&mut self, size: Vector2) = 743155724;
        fn get_size(&self) -> Vector2 = 3341600327;
    }
}
