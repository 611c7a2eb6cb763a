/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

crate::engine_class! {
    /// Abstract base class of all 3D physics joints.
    pub struct Joint3D: Node3D: Node: Object {
        level: Scene,
        memory: MemManual,
        construct: none,
    }
}

crate::engine_methods! {
    impl Joint3D {
        fn set_exclude_nodes_from_collision(&mut self, enable: bool) = 2586408642;
        fn get_exclude_nodes_from_collision(&self) -> bool = 36873697;
        fn set_solver_priority(&mut self, priority: i32) = 1286410249;
        fn get_solver_priority(&self) -> i32 = 3905245786;
    }
}
