/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Vector3;

crate::engine_class! {
    /// A ray in 3D space, used to find the first collision object it intersects.
    pub struct RayCast3D: Node3D: Node: Object {
        level: Scene,
        memory: MemManual,
        construct: alloc,
    }
}

crate::engine_methods! {
    impl RayCast3D {
        fn set_enabled(&mut self, enabled: bool) = 2586408642;
        fn is_enabled(&self) -> bool = 36873697;

        /// Target point, relative to the ray's position.
        fn set_target_position(&mut self, local_point: Vector3) = 3460891852;
        fn get_target_position(&self) -> Vector3 = 3360562783;

        /// Updates the collision information immediately, without waiting for the next physics frame.
        fn force_raycast_update(&mut self) = 3218959716;
        fn is_colliding(&self) -> bool = 36873697;
        fn get_collision_point(&self) -> Vector3 = 3360562783;
        fn get_collision_normal(&self) -> Vector3 = 3360562783;
    }
}
