/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::vector_macros::is_equal_approx;
use crate::builtin::Vector3i;

/// Vector used for 3D math using floating point coordinates.
///
/// The engine's 3D space is right-handed with +Y up and -Z forward.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3 {
    /// The vector's X component.
    pub x: f32,

    /// The vector's Y component.
    pub y: f32,

    /// The vector's Z component.
    pub z: f32,
}

/// # Constants
impl Vector3 {
    /// Unit vector in -X direction.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);

    /// Unit vector in +X direction.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector in +Y direction.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector in -Y direction.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);

    /// Unit vector in -Z direction.
    pub const FORWARD: Self = Self::new(0.0, 0.0, -1.0);

    /// Unit vector in +Z direction.
    pub const BACK: Self = Self::new(0.0, 0.0, 1.0);
}

impl_vector_fns!(Vector3, glam::Vec3, f32, (x, y, z), Vector3);
impl_float_vector_fns!(Vector3, (x, y, z));
impl_vector_operators!(Vector3, f32, (x, y, z));

impl Vector3 {
    /// Cross product of `self` and `with`.
    pub fn cross(self, with: Self) -> Self {
        Self::from_glam(self.to_glam().cross(with.to_glam()))
    }

    /// Projection of `self` onto `onto`.
    pub fn project(self, onto: Self) -> Self {
        Self::from_glam(self.to_glam().project_onto(onto.to_glam()))
    }

    /// Truncates the components towards zero.
    pub fn cast_int(self) -> Vector3i {
        Vector3i::new(self.x as i32, self.y as i32, self.z as i32)
    }
}
