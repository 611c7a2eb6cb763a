/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Vector2;

/// Vector used for 2D math using integer coordinates, e.g. grid positions or pixel sizes.
#[derive(Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2i {
    /// The vector's X component.
    pub x: i32,

    /// The vector's Y component.
    pub y: i32,
}

/// # Constants
impl Vector2i {
    pub const LEFT: Self = Self::new(-1, 0);
    pub const RIGHT: Self = Self::new(1, 0);
    pub const UP: Self = Self::new(0, -1);
    pub const DOWN: Self = Self::new(0, 1);
}

impl_vector_fns!(Vector2i, glam::IVec2, i32, (x, y), Vector2i);
impl_vector_operators!(Vector2i, i32, (x, y));

impl Vector2i {
    /// Length as float.
    pub fn length(self) -> f32 {
        self.cast_float().length()
    }

    pub fn cast_float(self) -> Vector2 {
        Vector2::new(self.x as f32, self.y as f32)
    }
}
