/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::builtin::{GString, VariantOperator, VariantType};
use crate::meta::error::ConvertError;
use crate::meta::{FromGodot, ToGodot};
use crate::sys::{self, ffi_methods, GodotFfi};

mod impls;

/// Dynamically typed value of the engine: any builtin or an object.
///
/// Created, copied and destroyed through the engine; `Clone` copies the value the way the engine copies variants
/// (objects are shared, `RefCounted` ones gain a reference).
#[repr(transparent)]
pub struct Variant {
    opaque: sys::types::OpaqueVariant,
}

impl Variant {
    /// Create an empty variant (`null` value in GDScript).
    pub fn nil() -> Self {
        // SAFETY: `variant_new_nil` initializes the storage.
        unsafe {
            Self::new_with_var_uninit(|variant_ptr| {
                sys::interface_fn!(variant_new_nil)(variant_ptr);
            })
        }
    }

    /// Create a variant holding a non-nil value.
    ///
    /// Equivalent to [`value.to_variant()`][ToGodot::to_variant], but consumes the argument.
    #[allow(clippy::should_implement_trait)]
    pub fn from<T: ToGodot>(value: T) -> Self {
        value.to_variant()
    }

    /// ⚠️ Convert to type `T`, panicking on failure.
    ///
    /// # Panics
    /// When this variant holds a different type.
    pub fn to<T: FromGodot>(&self) -> T {
        T::from_variant(self)
    }

    /// Convert to type `T`, returning `Err` on failure.
    pub fn try_to<T: FromGodot>(&self) -> Result<T, ConvertError> {
        T::try_from_variant(self)
    }

    /// Checks whether the variant is empty (`null` value in GDScript).
    pub fn is_nil(&self) -> bool {
        self.get_type() == VariantType::Nil
    }

    /// Returns the type that is currently held by this variant.
    pub fn get_type(&self) -> VariantType {
        // SAFETY: `self` is a valid variant.
        let raw = unsafe { sys::interface_fn!(variant_get_type)(self.var_sys()) };
        VariantType::from_sys(raw)
    }

    /// Return the string representation of the stored value, as the engine's `str()` would.
    pub fn stringify(&self) -> GString {
        let mut result = GString::new();

        // SAFETY: `result` is an initialized string that the engine assigns to.
        unsafe {
            sys::interface_fn!(variant_stringify)(self.var_sys(), result.string_sys_mut());
        }

        result
    }

    /// Truthiness as the engine defines it: `false` for nil, zero, empty strings and containers and so on.
    pub fn booleanize(&self) -> bool {
        // SAFETY: `self` is a valid variant.
        let raw = unsafe { sys::interface_fn!(variant_booleanize)(self.var_sys()) };
        raw != sys::SYS_FALSE
    }

    /// Evaluates `self op rhs` with the engine's operator rules. Returns `None` if the operation is not valid for the types.
    pub fn evaluate(&self, rhs: &Variant, op: VariantOperator) -> Option<Variant> {
        let mut is_valid = sys::SYS_FALSE;

        // SAFETY: the engine writes a valid variant, also when the operation is invalid.
        let result = unsafe {
            Variant::new_with_var_uninit(|variant_ptr| {
                sys::interface_fn!(variant_evaluate)(
                    op.sys(),
                    self.var_sys(),
                    rhs.var_sys(),
                    variant_ptr,
                    std::ptr::addr_of_mut!(is_valid),
                );
            })
        };

        (is_valid != sys::SYS_FALSE).then_some(result)
    }

    fn from_opaque(opaque: sys::types::OpaqueVariant) -> Self {
        Self { opaque }
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Low-level access

    #[doc(hidden)]
    pub fn var_sys(&self) -> sys::GDExtensionConstVariantPtr {
        self.sys()
    }

    #[doc(hidden)]
    pub fn var_sys_mut(&mut self) -> sys::GDExtensionVariantPtr {
        self.sys_mut()
    }

    /// # Safety
    /// `init_fn` must initialize the variant behind the pointer.
    #[doc(hidden)]
    pub unsafe fn new_with_var_uninit(init_fn: impl FnOnce(sys::GDExtensionUninitializedVariantPtr)) -> Self {
        Self::new_with_uninit(init_fn)
    }

    /// Reinterprets an engine-owned variant as a reference.
    ///
    /// # Safety
    /// `variant_ptr` must point to a live variant that outlives `'a` and is not mutated during `'a`.
    #[doc(hidden)]
    pub unsafe fn borrow_var_sys<'a>(variant_ptr: sys::GDExtensionConstVariantPtr) -> &'a Variant {
        &*(variant_ptr as *const Variant)
    }

    /// Reinterprets an engine-owned variant as a mutable reference.
    ///
    /// # Safety
    /// `variant_ptr` must point to a live variant that outlives `'a` and is not accessed otherwise during `'a`.
    #[doc(hidden)]
    pub unsafe fn borrow_var_sys_mut<'a>(variant_ptr: sys::GDExtensionVariantPtr) -> &'a mut Variant {
        &mut *(variant_ptr as *mut Variant)
    }
}

// SAFETY: `Variant` is a transparent wrapper of the engine's 24-byte variant storage.
unsafe impl GodotFfi for Variant {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Nil
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; }
}

impl Clone for Variant {
    fn clone(&self) -> Self {
        // SAFETY: `variant_new_copy` initializes the destination.
        unsafe {
            Self::new_with_var_uninit(|variant_ptr| {
                sys::interface_fn!(variant_new_copy)(variant_ptr, self.var_sys());
            })
        }
    }
}

impl Drop for Variant {
    fn drop(&mut self) {
        // SAFETY: the storage is a valid variant that is not used afterwards.
        unsafe {
            sys::interface_fn!(variant_destroy)(self.var_sys_mut());
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::nil()
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        self.evaluate(other, VariantOperator::Equal)
            .is_some_and(|result| result.booleanize())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stringify();
        write!(f, "{s}")
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get_type() {
            VariantType::Nil => write!(f, "Variant(Nil)"),
            VariantType::String | VariantType::StringName => {
                write!(f, "Variant({:?}: {:?})", self.get_type(), self.stringify().to_string())
            }
            ty => write!(f, "Variant({ty:?}: {})", self.stringify()),
        }
    }
}
