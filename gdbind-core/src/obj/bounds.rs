/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Memory strategies of a `GodotClass`.
//!
//! 1. [`Memory`] is the memory strategy of the **static** type, used for associated functions such as construction.
//!    - [`MemRefCounted`] for `RefCounted` and all classes derived from it.
//!    - [`MemManual`] for `Object` and every class that is not `RefCounted` (e.g. `Node`).
//!
//! 2. [`DynMemory`] is the memory strategy of the **dynamic** type, used when operating on instances.
//!    - [`MemRefCounted`] for `RefCounted` and derived classes; these are always reference-counted.
//!    - [`MemManual`] for non-`RefCounted` classes except `Object`; these are always manually managed.
//!    - [`MemDynamic`] for `Object`, since a `Gd<Object>` may point to an instance of any class. Whether it is
//!      reference-counted is read from its instance ID at runtime.
//!
//! ```
//! use gdbind_core::obj::{bounds, Bounds, Gd, GodotClass};
//!
//! // Smart pointer that only accepts manually managed objects.
//! struct Owned<T>
//! where
//!     T: GodotClass + Bounds<Memory = bounds::MemManual>,
//! {
//!     inner: Gd<T>,
//! }
//! ```

use crate::obj::{GodotClass, RawGd};
use crate::out;
use private::Sealed;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Sealed trait

pub(super) mod private {
    use super::{DynMemory, Memory};

    /// Library-implemented trait to check bounds on `GodotClass` types.
    ///
    /// See also the [`bounds`](crate::obj::bounds) module documentation.
    ///
    /// # Safety
    /// Internal. Only implemented by the class declarations of this library.
    pub unsafe trait Bounds {
        /// Memory strategy of the static type.
        type Memory: Memory;

        /// Memory strategy of the instance at runtime.
        type DynMemory: DynMemory;
    }

    pub trait Sealed {}
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Memory bounds

/// Specifies the memory strategy of the static type.
pub trait Memory: Sealed {}

/// Specifies the memory strategy of the dynamic type.
pub trait DynMemory: Sealed {
    /// Initializes the reference count of an object that may not have been referenced from Rust before.
    #[doc(hidden)]
    fn maybe_init_ref<T: GodotClass>(obj: &RawGd<T>);

    /// If ref-counted, increments the count.
    #[doc(hidden)]
    fn maybe_inc_ref<T: GodotClass>(obj: &RawGd<T>);

    /// If ref-counted, decrements the count. Returns `true` if the count hit 0 and the object must be destroyed.
    ///
    /// # Safety
    /// Each call must balance a previous increment owned by the caller.
    #[doc(hidden)]
    unsafe fn maybe_dec_ref<T: GodotClass>(obj: &RawGd<T>) -> bool;

    /// Whether the instance is ref-counted; `None` if that cannot be determined (null object of dynamic type).
    #[doc(hidden)]
    fn is_ref_counted<T: GodotClass>(obj: &RawGd<T>) -> Option<bool>;
}

/// Memory managed through the engine's reference counter, always present.
/// This is used for `RefCounted` classes and derived.
pub struct MemRefCounted {}
impl Sealed for MemRefCounted {}
impl Memory for MemRefCounted {}
impl DynMemory for MemRefCounted {
    fn maybe_init_ref<T: GodotClass>(obj: &RawGd<T>) {
        out!("  Stat::init  <{}>", std::any::type_name::<T>());
        if obj.is_null() {
            return;
        }
        obj.with_ref_counted(|refc| {
            let success = refc.init_ref();
            assert!(success, "init_ref() failed");
        });
    }

    fn maybe_inc_ref<T: GodotClass>(obj: &RawGd<T>) {
        out!("  Stat::inc   <{}>", std::any::type_name::<T>());
        if obj.is_null() {
            return;
        }
        obj.with_ref_counted(|refc| {
            let success = refc.reference();
            assert!(success, "reference() failed");
        });
    }

    unsafe fn maybe_dec_ref<T: GodotClass>(obj: &RawGd<T>) -> bool {
        out!("  Stat::dec   <{}>", std::any::type_name::<T>());
        if obj.is_null() {
            return false;
        }
        obj.with_ref_counted(|refc| {
            let is_last = refc.unreference();
            out!("  +-- was last={is_last}");
            is_last
        })
    }

    fn is_ref_counted<T: GodotClass>(_obj: &RawGd<T>) -> Option<bool> {
        Some(true)
    }
}

/// Memory managed through the reference counter if the instance has one; otherwise manual.
/// This is used only for `Object`.
pub struct MemDynamic {}
impl Sealed for MemDynamic {}
impl DynMemory for MemDynamic {
    fn maybe_init_ref<T: GodotClass>(obj: &RawGd<T>) {
        out!("  Dyn::init  <{}>", std::any::type_name::<T>());
        if Self::is_ref_counted(obj) == Some(true) {
            MemRefCounted::maybe_init_ref(obj)
        }
    }

    fn maybe_inc_ref<T: GodotClass>(obj: &RawGd<T>) {
        out!("  Dyn::inc   <{}>", std::any::type_name::<T>());
        if Self::is_ref_counted(obj) == Some(true) {
            MemRefCounted::maybe_inc_ref(obj)
        }
    }

    unsafe fn maybe_dec_ref<T: GodotClass>(obj: &RawGd<T>) -> bool {
        out!("  Dyn::dec   <{}>", std::any::type_name::<T>());
        if Self::is_ref_counted(obj) == Some(true) {
            MemRefCounted::maybe_dec_ref(obj)
        } else {
            false
        }
    }

    fn is_ref_counted<T: GodotClass>(obj: &RawGd<T>) -> Option<bool> {
        // The engine encodes ref-countedness in the instance ID.
        obj.instance_id_unchecked().map(|id| id.is_ref_counted())
    }
}

/// No memory management, user responsible for not leaking.
/// This is used for all `Object` derivates which are not `RefCounted`. `Object` itself is excluded.
pub struct MemManual {}
impl Sealed for MemManual {}
impl Memory for MemManual {}
impl DynMemory for MemManual {
    fn maybe_init_ref<T: GodotClass>(_obj: &RawGd<T>) {}
    fn maybe_inc_ref<T: GodotClass>(_obj: &RawGd<T>) {}
    unsafe fn maybe_dec_ref<T: GodotClass>(_obj: &RawGd<T>) -> bool {
        false
    }
    fn is_ref_counted<T: GodotClass>(_obj: &RawGd<T>) -> Option<bool> {
        Some(false)
    }
}
