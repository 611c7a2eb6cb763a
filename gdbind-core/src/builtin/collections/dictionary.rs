/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::builtin::{call_builtin, Variant, VariantArray, VariantType};
use crate::meta::{FromGodot, ParamTuple, ToGodot};
use crate::sys::{self, ffi_methods, GodotFfi};

/// The engine's `Dictionary` type: an ordered map from `Variant` keys to `Variant` values.
///
/// Dictionaries are reference-counted; [`Clone`] shares the storage. Insertion order is preserved by the engine.
#[repr(transparent)]
pub struct Dictionary {
    opaque: sys::types::OpaqueDictionary,
}

impl Dictionary {
    /// Constructs an empty dictionary.
    pub fn new() -> Self {
        let ctor = sys::builtin_lifecycle_api().dictionary_construct_default;

        // SAFETY: the default constructor takes no arguments.
        unsafe {
            Self::new_with_uninit(|self_ptr| {
                ctor(self_ptr, std::ptr::null());
            })
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        let len: i64 = self.call_const("size", ());
        len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.call_const("is_empty", ())
    }

    /// Returns the value stored for `key`, or `None` if the key is absent.
    pub fn get<K: ToGodot>(&self, key: K) -> Option<Variant> {
        let key = key.to_variant();
        if !self.contains_variant(&key) {
            return None;
        }

        // SAFETY: the key exists, so indexing does not insert; the returned reference is copied immediately.
        let value = unsafe { Variant::borrow_var_sys(self.entry_ptr(&key)) };
        Some(value.clone())
    }

    /// Returns the value for `key`, or nil if the key is absent.
    pub fn get_or_nil<K: ToGodot>(&self, key: K) -> Variant {
        self.get(key).unwrap_or_default()
    }

    /// Returns `true` if the dictionary contains `key`.
    pub fn contains_key<K: ToGodot>(&self, key: K) -> bool {
        self.contains_variant(&key.to_variant())
    }

    /// Inserts or overwrites the value for `key`.
    pub fn set<K: ToGodot, V: ToGodot>(&mut self, key: K, value: V) {
        let key = key.to_variant();

        // SAFETY: indexing creates the entry if absent; the pointer is valid until the next mutation.
        unsafe {
            *Variant::borrow_var_sys_mut(self.entry_ptr(&key)) = value.to_variant();
        }
    }

    /// Inserts `value` for `key`, returning the previous value if there was one.
    pub fn insert<K: ToGodot, V: ToGodot>(&mut self, key: K, value: V) -> Option<Variant> {
        let key = key.to_variant();
        let old_value = self.get(&key);
        self.set(key, value);
        old_value
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove<K: ToGodot>(&mut self, key: K) -> Option<Variant> {
        let key = key.to_variant();
        let old_value = self.get(&key)?;

        let _erased: bool = self.call_mut("erase", (key,));
        Some(old_value)
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.call_mut::<()>("clear", ());
    }

    /// All keys, in insertion order.
    pub fn keys_array(&self) -> VariantArray {
        self.call_const("keys", ())
    }

    /// All values, in insertion order.
    pub fn values_array(&self) -> VariantArray {
        self.call_const("values", ())
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    ///
    /// The keys are snapshotted when the iterator is created.
    pub fn iter_shared(&self) -> DictionaryIter<'_> {
        DictionaryIter {
            dictionary: self,
            keys: self.keys_array(),
            next_idx: 0,
        }
    }

    fn contains_variant(&self, key: &Variant) -> bool {
        self.call_const("has", (key.clone(),))
    }

    /// # Safety
    /// Inserts a nil entry if `key` is absent, even through `&self`; callers must check presence first or hold `&mut self`.
    unsafe fn entry_ptr(&self, key: &Variant) -> sys::GDExtensionVariantPtr {
        sys::interface_fn!(dictionary_operator_index)(sys::force_mut_ptr(self.sys()), key.var_sys())
    }

    fn call_const<R: FromGodot>(&self, method_name: &'static str, args: impl ParamTuple) -> R {
        // SAFETY: all methods called through here belong to `Dictionary` and have the given signature.
        unsafe { call_builtin(VariantType::Dictionary, method_name, sys::force_mut_ptr(self.sys()), args) }
    }

    fn call_mut<R: FromGodot>(&mut self, method_name: &'static str, args: impl ParamTuple) -> R {
        // SAFETY: see `call_const`.
        unsafe { call_builtin(VariantType::Dictionary, method_name, self.sys_mut(), args) }
    }

    fn from_opaque(opaque: sys::types::OpaqueDictionary) -> Self {
        Self { opaque }
    }
}

// SAFETY: transparent wrapper of the engine's dictionary storage.
unsafe impl GodotFfi for Dictionary {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Dictionary
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Dictionary {
    /// Shares the storage with `self`.
    fn clone(&self) -> Self {
        let ctor = sys::builtin_lifecycle_api().dictionary_construct_copy;
        let args = [self.sys()];

        // SAFETY: the copy constructor takes one dictionary argument.
        unsafe {
            Self::new_with_uninit(|self_ptr| {
                ctor(self_ptr, args.as_ptr());
            })
        }
    }
}

impl Drop for Dictionary {
    fn drop(&mut self) {
        let dtor = sys::builtin_lifecycle_api().dictionary_destroy;

        // SAFETY: the storage is valid and not used afterwards.
        unsafe { dtor(self.sys_mut()) }
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        let op = sys::builtin_lifecycle_api().dictionary_operator_equal;
        let mut result = false;

        // SAFETY: both operands are valid dictionaries; the evaluator writes a bool.
        unsafe {
            op(self.sys(), other.sys(), std::ptr::addr_of_mut!(result) as sys::GDExtensionTypePtr);
        }

        result
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_variant().stringify())
    }
}

impl<K: ToGodot, V: ToGodot> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for (key, value) in iter {
            dictionary.set(key, value);
        }
        dictionary
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Iterator over the entries of a [`Dictionary`], see [`Dictionary::iter_shared()`].
pub struct DictionaryIter<'a> {
    dictionary: &'a Dictionary,
    keys: VariantArray,
    next_idx: usize,
}

impl Iterator for DictionaryIter<'_> {
    type Item = (Variant, Variant);

    fn next(&mut self) -> Option<Self::Item> {
        // Entries removed after the snapshot are skipped.
        loop {
            let key = self.keys.get(self.next_idx)?;
            self.next_idx += 1;

            if let Some(value) = self.dictionary.get(&key) {
                return Some((key, value));
            }
        }
    }
}

/// Creates a [`Dictionary`] from `key => value` pairs.
///
/// ```no_run
/// # use gdbind_core::dict;
/// let d = dict! { "name": "Light2D", "energy": 1.5 };
/// ```
#[macro_export]
macro_rules! dict {
    ($($key:tt: $value:expr),* $(,)?) => {
        {
            let mut d = $crate::builtin::Dictionary::new();
            $(
                d.set($key, $value);
            )*
            d
        }
    };
}
