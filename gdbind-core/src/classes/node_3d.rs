/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Vector3;

crate::engine_class! {
    /// Most basic 3D game object, with a transform and visibility settings.
    pub struct Node3D: Node: Object {
        level: Scene,
        memory: MemManual,
        construct: alloc,
    }
}

crate::engine_methods! {
    impl Node3D {
        fn set_position(&mut self, position: Vector3) = 3460891852;
        fn get_position(&self) -> Vector3 = 3360562783;
        fn set_visible(&mut self, visible: bool) = 2586408642;
        fn is_visible(&self) -> bool = 36873697;
    }
}
