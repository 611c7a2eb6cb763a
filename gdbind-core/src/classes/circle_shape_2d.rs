/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

crate::engine_class! {
    /// A 2D circle shape used for physics collision.
    pub struct CircleShape2D: Shape2D: Resource: RefCounted: Object {
        level: Scene,
        memory: MemRefCounted,
        construct: gd,
    }
}

crate::engine_methods! {
    impl CircleShape2D {
        fn set_radius(&mut self, radius: f32) = 373806689;
        fn get_radius(&self) -> f32 = 1740695150;
    }
}
