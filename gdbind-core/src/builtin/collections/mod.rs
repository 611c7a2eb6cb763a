/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Reference-counted containers of the engine.
//!
//! `Clone` on these types shares the underlying storage, as assignment does in GDScript.

mod array;
mod dictionary;
mod packed_byte_array;

pub use array::*;
pub use dictionary::*;
pub use packed_byte_array::*;
