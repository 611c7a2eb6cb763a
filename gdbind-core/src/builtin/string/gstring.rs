/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::convert::Infallible;
use std::ffi::c_char;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::builtin::{call_builtin, StringName, VariantType};
use crate::sys::{self, ffi_methods, GodotFfi};

/// The engine's reference-counted, copy-on-write string type.
///
/// Named `GString` so it is not confused with Rust's `String`; convert with `From`/`to_string()`.
#[repr(transparent)]
pub struct GString {
    opaque: sys::types::OpaqueString,
}

impl GString {
    /// Construct a new empty `GString`.
    pub fn new() -> Self {
        let ctor = sys::builtin_lifecycle_api().string_construct_default;

        // SAFETY: the default constructor takes no arguments and initializes the storage.
        unsafe {
            Self::new_with_uninit(|self_ptr| {
                ctor(self_ptr, std::ptr::null());
            })
        }
    }

    /// Number of characters (Unicode code points) in the string.
    pub fn len(&self) -> usize {
        let len: i64 = self.call0("length");
        len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.call0("is_empty")
    }

    fn call0<R: crate::meta::FromGodot>(&self, method_name: &'static str) -> R {
        // SAFETY: the method belongs to `String`, takes no arguments and returns `R`.
        unsafe { call_builtin(VariantType::String, method_name, sys::force_mut_ptr(self.sys()), ()) }
    }

    fn from_opaque(opaque: sys::types::OpaqueString) -> Self {
        Self { opaque }
    }

    #[doc(hidden)]
    pub fn string_sys(&self) -> sys::GDExtensionConstStringPtr {
        self.sys()
    }

    #[doc(hidden)]
    pub fn string_sys_mut(&mut self) -> sys::GDExtensionStringPtr {
        self.sys_mut()
    }

    /// # Safety
    /// `init_fn` must initialize the string behind the pointer.
    #[doc(hidden)]
    pub unsafe fn new_with_string_uninit(init_fn: impl FnOnce(sys::GDExtensionUninitializedStringPtr)) -> Self {
        Self::new_with_uninit(init_fn)
    }

    fn to_rust_string(&self) -> String {
        let to_utf8 = sys::interface_fn!(string_to_utf8_chars);

        // SAFETY: a null buffer with zero length only queries the length; the second call writes at most `len` bytes.
        let bytes = unsafe {
            let len = to_utf8(self.string_sys(), std::ptr::null_mut(), 0);
            let mut buf = vec![0u8; len as usize];
            to_utf8(self.string_sys(), buf.as_mut_ptr() as *mut c_char, len);
            buf
        };

        String::from_utf8(bytes).unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
    }
}

// SAFETY: `GString` is a transparent wrapper of the engine's string storage.
unsafe impl GodotFfi for GString {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::String
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; }
}

impl Default for GString {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for GString {
    fn clone(&self) -> Self {
        let ctor = sys::builtin_lifecycle_api().string_construct_copy;
        let args = [self.sys()];

        // SAFETY: the copy constructor takes one string argument and initializes the storage.
        unsafe {
            Self::new_with_uninit(|self_ptr| {
                ctor(self_ptr, args.as_ptr());
            })
        }
    }
}

impl Drop for GString {
    fn drop(&mut self) {
        let dtor = sys::builtin_lifecycle_api().string_destroy;

        // SAFETY: the storage is a valid string that is not used afterwards.
        unsafe { dtor(self.sys_mut()) }
    }
}

impl PartialEq for GString {
    fn eq(&self, other: &Self) -> bool {
        let op = sys::builtin_lifecycle_api().string_operator_equal;
        let mut result = false;

        // SAFETY: both operands are valid strings; the evaluator writes a bool.
        unsafe {
            op(self.sys(), other.sys(), std::ptr::addr_of_mut!(result) as sys::GDExtensionTypePtr);
        }

        result
    }
}

impl Eq for GString {}

impl Hash for GString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_rust_string().hash(state)
    }
}

impl fmt::Display for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rust_string())
    }
}

/// Uses literal syntax, e.g. `"Hello"`.
impl fmt::Debug for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_rust_string())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversion from/into Rust string types

impl From<&str> for GString {
    fn from(s: &str) -> Self {
        let ctor = sys::interface_fn!(string_new_with_utf8_chars_and_len);

        // SAFETY: the engine copies exactly `s.len()` bytes of valid UTF-8.
        unsafe {
            Self::new_with_string_uninit(|string_ptr| {
                ctor(string_ptr, s.as_ptr() as *const c_char, s.len() as sys::GDExtensionInt);
            })
        }
    }
}

impl From<String> for GString {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<&String> for GString {
    fn from(value: &String) -> Self {
        value.as_str().into()
    }
}

impl From<&GString> for String {
    fn from(string: &GString) -> Self {
        string.to_rust_string()
    }
}

impl From<GString> for String {
    fn from(string: GString) -> Self {
        string.to_rust_string()
    }
}

impl From<&StringName> for GString {
    fn from(string: &StringName) -> Self {
        let ctor = sys::builtin_lifecycle_api().string_from_string_name;
        let args = [string.sys()];

        // SAFETY: constructor #2 of `String` takes one `StringName` argument.
        unsafe {
            Self::new_with_uninit(|self_ptr| {
                ctor(self_ptr, args.as_ptr());
            })
        }
    }
}

impl FromStr for GString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(feature = "serde")]
mod serialize {
    use std::fmt::Formatter;

    use serde::de::{Error, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::GString;

    impl Serialize for GString {
        #[inline]
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for GString {
        #[inline]
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct GStringVisitor;

            impl Visitor<'_> for GStringVisitor {
                type Value = GString;

                fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                    formatter.write_str("a GString")
                }

                fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
                where
                    E: Error,
                {
                    Ok(GString::from(s))
                }
            }

            deserializer.deserialize_str(GStringVisitor)
        }
    }
}
