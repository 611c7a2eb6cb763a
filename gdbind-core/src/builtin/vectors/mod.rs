/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! 2D and 3D vectors with float and integer components. The math is delegated to [`glam`].

#[macro_use]
mod vector_macros;

mod vector2;
mod vector2i;
mod vector3;
mod vector3i;

pub use vector2::*;
pub use vector2i::*;
pub use vector3::*;
pub use vector3i::*;
