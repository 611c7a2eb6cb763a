/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::builtin::{call_builtin, VariantType};
use crate::meta::{FromGodot, ParamTuple};
use crate::sys::{self, ffi_methods, GodotFfi};

/// Contiguous, copy-on-write byte buffer of the engine.
///
/// Unlike [`Array`](crate::builtin::Array), [`Clone`] yields a logically separate buffer: the engine copies the data on
/// the next write to either side.
#[repr(transparent)]
pub struct PackedByteArray {
    opaque: sys::types::OpaquePackedByteArray,
}

impl PackedByteArray {
    /// Constructs an empty buffer.
    pub fn new() -> Self {
        let ctor = sys::builtin_lifecycle_api().packed_byte_array_construct_default;

        // SAFETY: the default constructor takes no arguments.
        unsafe {
            Self::new_with_uninit(|self_ptr| {
                ctor(self_ptr, std::ptr::null());
            })
        }
    }

    pub fn len(&self) -> usize {
        let len: i64 = self.call_const("size", ());
        len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.call_const("is_empty", ())
    }

    /// Returns the byte at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.as_slice().get(index).copied()
    }

    /// ⚠️ Overwrites the byte at `index`.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: u8) {
        let len = self.len();
        assert!(index < len, "PackedByteArray index {index} is out of bounds: length is {len}");

        self.as_mut_slice()[index] = value;
    }

    /// Appends a byte.
    pub fn push(&mut self, value: u8) {
        let _ok: bool = self.call_mut("push_back", (value,));
    }

    /// Changes the length; new bytes are zero.
    pub fn resize(&mut self, new_size: usize) {
        let _error: i64 = self.call_mut("resize", (new_size as i64,));
    }

    pub fn clear(&mut self) {
        self.call_mut::<()>("clear", ());
    }

    /// Borrows the contents.
    pub fn as_slice(&self) -> &[u8] {
        let len = self.len();
        if len == 0 {
            return &[];
        }

        // SAFETY: the buffer is contiguous with `len` bytes starting at index 0; it cannot change while `self` is borrowed.
        unsafe { std::slice::from_raw_parts(self.ptr_at(0), len) }
    }

    /// Mutably borrows the contents. Triggers the engine's copy-on-write if the buffer is shared.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        let len = self.len();
        if len == 0 {
            return &mut [];
        }

        // SAFETY: see `as_slice`; `&mut self` guarantees exclusive access on the Rust side.
        unsafe { std::slice::from_raw_parts_mut(self.ptr_at(0), len) }
    }

    /// Copies the contents into a `Vec`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// # Safety
    /// `index` must be in bounds.
    unsafe fn ptr_at(&self, index: usize) -> *mut u8 {
        sys::interface_fn!(packed_byte_array_operator_index)(
            sys::force_mut_ptr(self.sys()),
            index as sys::GDExtensionInt,
        )
    }

    fn call_const<R: FromGodot>(&self, method_name: &'static str, args: impl ParamTuple) -> R {
        // SAFETY: all methods called through here belong to `PackedByteArray` and have the given signature.
        unsafe { call_builtin(VariantType::PackedByteArray, method_name, sys::force_mut_ptr(self.sys()), args) }
    }

    fn call_mut<R: FromGodot>(&mut self, method_name: &'static str, args: impl ParamTuple) -> R {
        // SAFETY: see `call_const`.
        unsafe { call_builtin(VariantType::PackedByteArray, method_name, self.sys_mut(), args) }
    }

    fn from_opaque(opaque: sys::types::OpaquePackedByteArray) -> Self {
        Self { opaque }
    }
}

// SAFETY: transparent wrapper of the engine's packed array storage.
unsafe impl GodotFfi for PackedByteArray {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::PackedByteArray
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; }
}

impl Default for PackedByteArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PackedByteArray {
    fn clone(&self) -> Self {
        let ctor = sys::builtin_lifecycle_api().packed_byte_array_construct_copy;
        let args = [self.sys()];

        // SAFETY: the copy constructor takes one packed array argument.
        unsafe {
            Self::new_with_uninit(|self_ptr| {
                ctor(self_ptr, args.as_ptr());
            })
        }
    }
}

impl Drop for PackedByteArray {
    fn drop(&mut self) {
        let dtor = sys::builtin_lifecycle_api().packed_byte_array_destroy;

        // SAFETY: the storage is valid and not used afterwards.
        unsafe { dtor(self.sys_mut()) }
    }
}

impl PartialEq for PackedByteArray {
    fn eq(&self, other: &Self) -> bool {
        let op = sys::builtin_lifecycle_api().packed_byte_array_operator_equal;
        let mut result = false;

        // SAFETY: both operands are valid packed arrays; the evaluator writes a bool.
        unsafe {
            op(self.sys(), other.sys(), std::ptr::addr_of_mut!(result) as sys::GDExtensionTypePtr);
        }

        result
    }
}

impl Eq for PackedByteArray {}

impl fmt::Debug for PackedByteArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedByteArray({:?})", self.as_slice())
    }
}

impl From<&[u8]> for PackedByteArray {
    fn from(bytes: &[u8]) -> Self {
        let mut array = Self::new();
        array.resize(bytes.len());
        array.as_mut_slice().copy_from_slice(bytes);
        array
    }
}

impl From<Vec<u8>> for PackedByteArray {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from(bytes.as_slice())
    }
}

impl<const N: usize> From<&[u8; N]> for PackedByteArray {
    fn from(bytes: &[u8; N]) -> Self {
        Self::from(&bytes[..])
    }
}

impl FromIterator<u8> for PackedByteArray {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let bytes: Vec<u8> = iter.into_iter().collect();
        Self::from(bytes)
    }
}
