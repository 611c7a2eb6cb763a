/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ffi::c_char;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::builtin::{call_builtin, GString, VariantType};
use crate::sys::{self, ffi_methods, GodotFfi};

/// An interned string of the engine, used for class, method, signal and property names.
///
/// Comparing two `StringName`s is cheap in the engine. Creating one from a Rust string is not, so avoid it in hot paths.
#[repr(transparent)]
pub struct StringName {
    opaque: sys::types::OpaqueStringName,
}

impl StringName {
    /// Construct a new empty `StringName`.
    pub fn new() -> Self {
        let ctor = sys::builtin_lifecycle_api().string_name_construct_default;

        // SAFETY: the default constructor takes no arguments and initializes the storage.
        unsafe {
            Self::new_with_uninit(|self_ptr| {
                ctor(self_ptr, std::ptr::null());
            })
        }
    }

    /// Number of characters in the name.
    pub fn len(&self) -> usize {
        // SAFETY: `length` belongs to `StringName`, takes no arguments and returns an int.
        let len: i64 =
            unsafe { call_builtin(VariantType::StringName, "length", sys::force_mut_ptr(self.sys()), ()) };

        len as usize
    }

    pub fn is_empty(&self) -> bool {
        // SAFETY: `is_empty` belongs to `StringName`, takes no arguments and returns a bool.
        unsafe { call_builtin(VariantType::StringName, "is_empty", sys::force_mut_ptr(self.sys()), ()) }
    }

    fn from_opaque(opaque: sys::types::OpaqueStringName) -> Self {
        Self { opaque }
    }

    #[doc(hidden)]
    pub fn string_sys(&self) -> sys::GDExtensionConstStringNamePtr {
        self.sys()
    }

    #[doc(hidden)]
    pub fn string_sys_mut(&mut self) -> sys::GDExtensionStringNamePtr {
        self.sys_mut()
    }

    /// # Safety
    /// `init_fn` must initialize the name behind the pointer.
    #[doc(hidden)]
    pub unsafe fn new_with_string_uninit(init_fn: impl FnOnce(sys::GDExtensionUninitializedStringNamePtr)) -> Self {
        Self::new_with_uninit(init_fn)
    }
}

// SAFETY: `StringName` is a transparent wrapper of the engine's string name storage.
unsafe impl GodotFfi for StringName {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::StringName
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; }
}

impl Default for StringName {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for StringName {
    fn clone(&self) -> Self {
        let ctor = sys::builtin_lifecycle_api().string_name_construct_copy;
        let args = [self.sys()];

        // SAFETY: the copy constructor takes one `StringName` argument.
        unsafe {
            Self::new_with_uninit(|self_ptr| {
                ctor(self_ptr, args.as_ptr());
            })
        }
    }
}

impl Drop for StringName {
    fn drop(&mut self) {
        let dtor = sys::builtin_lifecycle_api().string_name_destroy;

        // SAFETY: the storage is a valid name that is not used afterwards.
        unsafe { dtor(self.sys_mut()) }
    }
}

impl PartialEq for StringName {
    fn eq(&self, other: &Self) -> bool {
        let op = sys::builtin_lifecycle_api().string_name_operator_equal;
        let mut result = false;

        // SAFETY: both operands are valid names; the evaluator writes a bool.
        unsafe {
            op(self.sys(), other.sys(), std::ptr::addr_of_mut!(result) as sys::GDExtensionTypePtr);
        }

        result
    }
}

impl Eq for StringName {}

impl Hash for StringName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state)
    }
}

impl fmt::Display for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = GString::from(self);
        write!(f, "{s}")
    }
}

/// Uses literal syntax with an `&` prefix, as GDScript does, e.g. `&"name"`.
impl fmt::Debug for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{:?}", self.to_string())
    }
}

impl From<&str> for StringName {
    fn from(s: &str) -> Self {
        let ctor = sys::interface_fn!(string_name_new_with_utf8_chars_and_len);

        // SAFETY: the engine copies exactly `s.len()` bytes of valid UTF-8.
        unsafe {
            Self::new_with_string_uninit(|string_ptr| {
                ctor(string_ptr, s.as_ptr() as *const c_char, s.len() as sys::GDExtensionInt);
            })
        }
    }
}

impl From<String> for StringName {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<&GString> for StringName {
    fn from(string: &GString) -> Self {
        let ctor = sys::builtin_lifecycle_api().string_name_from_string;
        let args = [string.sys()];

        // SAFETY: constructor #2 of `StringName` takes one `String` argument.
        unsafe {
            Self::new_with_uninit(|self_ptr| {
                ctor(self_ptr, args.as_ptr());
            })
        }
    }
}

impl From<&StringName> for String {
    fn from(name: &StringName) -> Self {
        name.to_string()
    }
}

#[cfg(feature = "serde")]
mod serialize {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::StringName;

    impl Serialize for StringName {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for StringName {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Ok(StringName::from(s))
        }
    }
}
