/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate as sys;

/// Types that can directly and fully represent some engine type in a call frame.
///
/// Ptrcall encoding of the implementors:
/// - `bool` is one byte.
/// - All integers are `i64`, all floats are `f64`; narrower Rust types convert through those.
/// - Value types (vectors, colors) are passed by value in their `repr(C)` layout.
/// - Builtins with engine-side storage (strings, containers, variants) are passed as pointers to their opaque storage.
/// - Objects are passed as a pointer to the object pointer.
///
/// See [`ffi_methods!`][crate::ffi_methods] for implementing this trait.
///
/// # Safety
/// [`sys()`](GodotFfi::sys) must return a pointer to storage laid out as the engine expects for [`variant_type()`](GodotFfi::variant_type),
/// and the constructors must only produce values from storage the engine initialized.
#[doc(hidden)] // shows up in implementors otherwise
pub unsafe trait GodotFfi {
    fn variant_type() -> sys::VariantType;

    /// Construct uninitialized storage, then let `init_fn` write a value into it.
    ///
    /// # Safety
    /// `init_fn` must fully initialize the storage behind the pointer.
    unsafe fn new_with_uninit(init_fn: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self
    where
        Self: Sized;

    /// Like [`new_with_uninit`](Self::new_with_uninit), but the storage already holds a default value.
    ///
    /// Needed for engine functions that assign to their destination rather than constructing into it, e.g. `variant_stringify`.
    ///
    /// # Safety
    /// `init_fn` must leave a valid value behind the pointer.
    unsafe fn new_with_init(init_fn: impl FnOnce(sys::GDExtensionTypePtr)) -> Self
    where
        Self: Sized;

    /// Pointer to the storage, for read-only use by the engine.
    fn sys(&self) -> sys::GDExtensionConstTypePtr;

    /// Pointer to the storage, for engine operations that may modify the value.
    fn sys_mut(&mut self) -> sys::GDExtensionTypePtr;

    /// Pointer passed as argument in a ptrcall frame.
    fn as_arg_ptr(&self) -> sys::GDExtensionConstTypePtr {
        self.sys()
    }
}

/// Types that can represent null values; used for `Option<Gd<T>>`.
pub trait GodotNullableFfi: Sized + GodotFfi {
    fn null() -> Self;
    fn is_null(&self) -> bool;

    fn flatten_option(opt: Option<Self>) -> Self {
        opt.unwrap_or_else(Self::null)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macro implementing `GodotFfi` for the two storage strategies

/// Implements the storage-related methods of [`GodotFfi`].
///
/// Two forms are supported:
///
/// * `type GDExtensionTypePtr = *mut Opaque;`
///   For builtins that hold engine-owned storage in an `opaque` field and offer `fn from_opaque(opaque) -> Self`.
///   They must implement `Default`, which is used by `new_with_init`.
///
/// * `type GDExtensionTypePtr = *mut Self;`
///   For plain `Copy` data that the engine reads and writes in place, such as `bool`, `i64` or `Vector3`.
#[macro_export]
#[doc(hidden)]
macro_rules! ffi_methods {
    (type $Ptr:ty = *mut Opaque;) => {
        unsafe fn new_with_uninit(init: impl FnOnce($crate::GDExtensionUninitializedTypePtr)) -> Self {
            let mut raw = std::mem::MaybeUninit::uninit();
            init(raw.as_mut_ptr() as $crate::GDExtensionUninitializedTypePtr);

            Self::from_opaque(raw.assume_init())
        }

        unsafe fn new_with_init(init: impl FnOnce($crate::GDExtensionTypePtr)) -> Self {
            let mut value = <Self as Default>::default();
            init(std::ptr::addr_of_mut!(value.opaque) as $crate::GDExtensionTypePtr);

            value
        }

        fn sys(&self) -> $crate::GDExtensionConstTypePtr {
            std::ptr::addr_of!(self.opaque) as $crate::GDExtensionConstTypePtr
        }

        fn sys_mut(&mut self) -> $crate::GDExtensionTypePtr {
            std::ptr::addr_of_mut!(self.opaque) as $crate::GDExtensionTypePtr
        }
    };

    (type $Ptr:ty = *mut Self;) => {
        unsafe fn new_with_uninit(init: impl FnOnce($crate::GDExtensionUninitializedTypePtr)) -> Self {
            let mut raw = std::mem::MaybeUninit::<Self>::zeroed();
            init(raw.as_mut_ptr() as $crate::GDExtensionUninitializedTypePtr);

            raw.assume_init()
        }

        unsafe fn new_with_init(init: impl FnOnce($crate::GDExtensionTypePtr)) -> Self {
            // Plain data has no destructor, so zeroed storage is as good as a default value.
            Self::new_with_uninit(init)
        }

        fn sys(&self) -> $crate::GDExtensionConstTypePtr {
            self as *const Self as $crate::GDExtensionConstTypePtr
        }

        fn sys_mut(&mut self) -> $crate::GDExtensionTypePtr {
            self as *mut Self as $crate::GDExtensionTypePtr
        }
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementations for primitive types

macro_rules! impl_godot_ffi_as_self {
    ($T:ty, $variant_type:ident) => {
        // SAFETY: primitives are encoded by value.
        unsafe impl GodotFfi for $T {
            fn variant_type() -> sys::VariantType {
                sys::VariantType::$variant_type
            }

            ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; }
        }
    };
}

impl_godot_ffi_as_self!(bool, Bool);
impl_godot_ffi_as_self!(i64, Int);
impl_godot_ffi_as_self!(f64, Float);

// SAFETY: `()` has no storage; `void` methods are called with a null return pointer.
unsafe impl GodotFfi for () {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Nil
    }

    unsafe fn new_with_uninit(init_fn: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self {
        init_fn(std::ptr::null_mut());
    }

    unsafe fn new_with_init(init_fn: impl FnOnce(sys::GDExtensionTypePtr)) -> Self {
        init_fn(std::ptr::null_mut());
    }

    fn sys(&self) -> sys::GDExtensionConstTypePtr {
        std::ptr::null()
    }

    fn sys_mut(&mut self) -> sys::GDExtensionTypePtr {
        std::ptr::null_mut()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
