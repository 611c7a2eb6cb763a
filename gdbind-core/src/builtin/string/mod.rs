/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! String types of the engine: the general-purpose [`GString`] and the interned [`StringName`].

mod gstring;
mod string_name;

pub use gstring::*;
pub use string_name::*;

use crate::meta::{GodotConvert, ToGodot};

impl GodotConvert for &str {
    type Via = GString;
}

impl ToGodot for &str {
    fn to_godot(&self) -> Self::Via {
        GString::from(*self)
    }
}
