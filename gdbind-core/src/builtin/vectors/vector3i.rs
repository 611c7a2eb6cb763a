/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Vector3;

/// Vector used for 3D math using integer coordinates, e.g. voxel positions.
#[derive(Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3i {
    /// The vector's X component.
    pub x: i32,

    /// The vector's Y component.
    pub y: i32,

    /// The vector's Z component.
    pub z: i32,
}

/// # Constants
impl Vector3i {
    pub const LEFT: Self = Self::new(-1, 0, 0);
    pub const RIGHT: Self = Self::new(1, 0, 0);
    pub const UP: Self = Self::new(0, 1, 0);
    pub const DOWN: Self = Self::new(0, -1, 0);
    pub const FORWARD: Self = Self::new(0, 0, -1);
    pub const BACK: Self = Self::new(0, 0, 1);
}

impl_vector_fns!(Vector3i, glam::IVec3, i32, (x, y, z), Vector3i);
impl_vector_operators!(Vector3i, i32, (x, y, z));

impl Vector3i {
    /// Length as float.
    pub fn length(self) -> f32 {
        self.cast_float().length()
    }

    pub fn cast_float(self) -> Vector3 {
        Vector3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}
