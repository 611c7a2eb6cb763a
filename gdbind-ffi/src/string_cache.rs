/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;
use std::mem::MaybeUninit;

use crate as sys;

/// Engine `StringName`s for class and method names, created on first use and kept until [`StringCache::clear`].
///
/// Boxes keep every entry at a stable address, so returned pointers remain valid while other names are inserted.
#[derive(Default)]
pub struct StringCache {
    instances_by_str: HashMap<&'static str, Box<sys::types::OpaqueStringName>>,
}

// SAFETY: the cache is only reachable through the binding's mutex; the contained engine strings are never shared by value.
unsafe impl Send for StringCache {}

impl StringCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer to the `StringName` for `key`. Reuses cached instances.
    ///
    /// # Safety
    /// The binding must be initialized.
    pub unsafe fn fetch(&mut self, key: &'static str) -> sys::GDExtensionConstStringNamePtr {
        if let Some(opaque_box) = self.instances_by_str.get(key) {
            return box_to_sname_ptr(opaque_box);
        }

        let mut sname = MaybeUninit::<sys::types::OpaqueStringName>::uninit();
        sys::interface_fn!(string_name_new_with_utf8_chars_and_len)(
            sname.as_mut_ptr() as sys::GDExtensionUninitializedStringNamePtr,
            key.as_ptr() as *const std::ffi::c_char,
            key.len() as sys::GDExtensionInt,
        );

        let opaque_box = Box::new(sname.assume_init());
        let sname_ptr = box_to_sname_ptr(&opaque_box);

        sys::out!("StringCache: cached `{key}`");
        self.instances_by_str.insert(key, opaque_box);
        sname_ptr
    }

    pub fn len(&self) -> usize {
        self.instances_by_str.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances_by_str.is_empty()
    }

    /// Destroys all cached names through the engine.
    ///
    /// # Safety
    /// The binding must still be initialized, and no pointer handed out by [`fetch`](Self::fetch) may be used afterwards.
    pub unsafe fn clear(&mut self) {
        let string_name_destroy = sys::builtin_lifecycle_api().string_name_destroy;

        for (_, mut opaque_box) in self.instances_by_str.drain() {
            let opaque_ptr: *mut sys::types::OpaqueStringName = &mut *opaque_box;
            string_name_destroy(opaque_ptr as sys::GDExtensionTypePtr);
        }
    }
}

fn box_to_sname_ptr(boxed: &sys::types::OpaqueStringName) -> sys::GDExtensionConstStringNamePtr {
    boxed as *const sys::types::OpaqueStringName as sys::GDExtensionConstStringNamePtr
}
