/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::builtin::{GString, StringName};
use crate::sys;

/// Name of a class registered with the engine.
///
/// Cheap to copy. The engine-side `StringName` is created on first use and cached until the library is unloaded.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ClassName {
    name: &'static str,
}

impl ClassName {
    pub const fn new_static(name: &'static str) -> Self {
        Self { name }
    }

    pub fn as_str(&self) -> &'static str {
        self.name
    }

    pub fn to_string_name(&self) -> StringName {
        StringName::from(self.name)
    }

    pub fn to_gstring(&self) -> GString {
        GString::from(self.name)
    }

    /// Pointer to the cached engine `StringName`.
    #[doc(hidden)]
    pub fn string_sys(&self) -> sys::GDExtensionConstStringNamePtr {
        sys::cached_string_name(self.name)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Debug for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassName({:?})", self.name)
    }
}
