/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::vector_macros::is_equal_approx;
use crate::builtin::Vector2i;

/// Vector used for 2D math using floating point coordinates.
///
/// Components are 32-bit floats, matching single-precision builds of the engine.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2 {
    /// The vector's X component.
    pub x: f32,

    /// The vector's Y component.
    pub y: f32,
}

/// # Constants
impl Vector2 {
    /// Unit vector in -X direction (left in 2D coordinate system).
    pub const LEFT: Self = Self::new(-1.0, 0.0);

    /// Unit vector in +X direction (right in 2D coordinate system).
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    /// Unit vector in -Y direction (up in 2D coordinate system).
    pub const UP: Self = Self::new(0.0, -1.0);

    /// Unit vector in +Y direction (down in 2D coordinate system).
    pub const DOWN: Self = Self::new(0.0, 1.0);
}

impl_vector_fns!(Vector2, glam::Vec2, f32, (x, y), Vector2);
impl_float_vector_fns!(Vector2, (x, y));
impl_vector_operators!(Vector2, f32, (x, y));

impl Vector2 {
    /// Creates a unit vector rotated by `angle` radians from [`RIGHT`](Self::RIGHT).
    pub fn from_angle(angle: f32) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Angle of this vector relative to the positive X axis, in radians.
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Rotates the vector by `angle` radians.
    pub fn rotated(self, angle: f32) -> Self {
        Self::from_glam(glam::Vec2::from_angle(angle).rotate(self.to_glam()))
    }

    /// Truncates the components towards zero.
    pub fn cast_int(self) -> Vector2i {
        Vector2i::new(self.x as i32, self.y as i32)
    }
}
