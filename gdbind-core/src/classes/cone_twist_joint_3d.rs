/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

crate::engine_class! {
    /// A joint that restricts rotation to a cone around an axis, like a ball-and-socket joint.
    pub struct ConeTwistJoint3D: Joint3D: Node3D: Node: Object {
        level: Scene,
        memory: MemManual,
        construct: alloc,
    }
}

crate::engine_methods! {
    impl ConeTwistJoint3D {
        fn set_param(&mut self, param: Param, value: f32) = 1062470226;
        fn get_param(&self, param: Param) -> f32 = 2928790850;
    }
}

crate::engine_enum! {
    pub enum Param {
        /// Swing is rotation from side to side, around the axis perpendicular to the twist axis. In radians.
        SWING_SPAN = 0,
        /// Twist is the rotation around the twist axis. In radians.
        TWIST_SPAN = 1,
        /// The speed with which the swing or twist will take place.
        BIAS = 2,
        /// The ease with which the joint starts to twist.
        SOFTNESS = 3,
        /// Defines how fast the swing or twist speed-difference on both sides gets synced.
        RELAXATION = 4,
        /// Represents the size of the [`Param`] enum.
        MAX = 5,
    }
}
