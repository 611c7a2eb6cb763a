/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

crate::engine_class! {
    /// Abstract base class of all 2D collision shapes.
    pub struct Shape2D: Resource: RefCounted: Object {
        level: Scene,
        memory: MemRefCounted,
        construct: none,
    }
}

crate::engine_methods! {
    impl Shape2D {
        fn set_custom_solver_bias(&mut self, bias: f32) = 373806689;
        fn get_custom_solver_bias(&self) -> f32 = 1740695150;
    }
}
