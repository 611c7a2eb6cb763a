/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ptr;

use crate::builtin::{StringName, Variant, VariantType};
use crate::classes;
use crate::meta::error::{ConvertError, ErrorKind};
use crate::meta::GodotFfiVariant;
use crate::obj::bounds::DynMemory as _;
use crate::obj::{Bounds, GodotClass, InstanceId};
use crate::sys::{self, interface_fn, GodotFfi, GodotNullableFfi};

/// Low-level object pointer, possibly null.
///
/// Shares its layout with every engine class: the object pointer, followed by the instance ID cached at adoption.
/// This is what lets [`Gd<T>`](crate::obj::Gd) dereference to `T` without a separate allocation.
#[repr(C)]
#[doc(hidden)]
pub struct RawGd<T: GodotClass> {
    pub(super) obj: *mut T,
    cached_id: Option<InstanceId>,
}

impl<T: GodotClass> RawGd<T> {
    /// Initializes this `RawGd<T>` from the object pointer as a **weak ref**, meaning it does not
    /// initialize/increment the reference counter.
    ///
    /// # Safety
    /// `obj` must be a valid object pointer or a null pointer.
    pub(crate) unsafe fn from_obj_sys_weak(obj: sys::GDExtensionObjectPtr) -> Self {
        if obj.is_null() {
            return Self::null();
        }

        let raw_id = interface_fn!(object_get_instance_id)(obj);
        let cached_id = InstanceId::try_from_u64(raw_id);

        Self {
            obj: obj.cast::<T>(),
            cached_id,
        }
    }

    /// Initializes this `RawGd<T>` from the object pointer as a **strong ref**, meaning it initializes
    /// and/or increments the reference counter.
    ///
    /// # Safety
    /// `obj` must be a valid object pointer or a null pointer.
    pub(crate) unsafe fn from_obj_sys(obj: sys::GDExtensionObjectPtr) -> Self {
        Self::from_obj_sys_weak(obj).with_inc_refcount()
    }

    /// Returns `self` but with initialized ref-count.
    pub(crate) fn with_inc_refcount(self) -> Self {
        // init_ref rather than reference: this may be the very first reference of a fresh object.
        if !self.is_null() {
            <T as Bounds>::DynMemory::maybe_init_ref(&self);
        }
        self
    }

    pub(crate) fn null() -> Self {
        Self {
            obj: ptr::null_mut(),
            cached_id: None,
        }
    }

    /// Returns `true` if the object is null.
    ///
    /// This does not check if the object is dead, for that use [`is_instance_valid()`](Self::is_instance_valid).
    pub(crate) fn is_null(&self) -> bool {
        self.obj.is_null() || self.cached_id.is_none()
    }

    /// Instance ID cached at adoption. Stays valid after the object died; `None` if null.
    pub(crate) fn instance_id_unchecked(&self) -> Option<InstanceId> {
        self.cached_id
    }

    /// Whether the object is non-null and still alive in the engine.
    pub(crate) fn is_instance_valid(&self) -> bool {
        match self.cached_id {
            // SAFETY: lookup by ID is valid for any ID, including ones of destroyed objects.
            Some(id) => unsafe { !interface_fn!(object_get_instance_from_id)(id.to_u64()).is_null() },
            None => false,
        }
    }

    /// # Panics
    /// If the object is null or was destroyed.
    pub(crate) fn check_alive(&self, method_name: &str) {
        assert!(!self.is_null(), "{method_name}(): object is null");
        assert!(
            self.is_instance_valid(),
            "{method_name}(): instance of Gd<{class}> (ID {id:?}) has been freed",
            class = T::class_name(),
            id = self.cached_id,
        );
    }

    pub(crate) fn obj_sys(&self) -> sys::GDExtensionObjectPtr {
        self.obj.cast()
    }

    /// Reinterprets the handle as the engine class it refers to.
    pub(crate) fn as_target(&self) -> &T {
        // SAFETY: engine classes are laid out exactly like `RawGd<T>` (asserted on declaration).
        unsafe { &*(self as *const Self).cast::<T>() }
    }

    pub(crate) fn as_target_mut(&mut self) -> &mut T {
        // SAFETY: see `as_target()`.
        unsafe { &mut *(self as *mut Self).cast::<T>() }
    }

    /// Reinterprets the same object as a base class. Ownership of the reference moves along.
    pub(crate) fn into_base<Base: GodotClass>(self) -> RawGd<Base> {
        let base = RawGd {
            obj: self.obj.cast::<Base>(),
            cached_id: self.cached_id,
        };
        std::mem::forget(self);
        base
    }

    /// Checks the dynamic class of the object and converts the handle, keeping its reference.
    ///
    /// Returns `Err(self)` if the object is not an instance of `U`.
    pub(crate) fn owned_cast<U: GodotClass>(self) -> Result<RawGd<U>, Self> {
        if self.is_null() {
            std::mem::forget(self);
            return Ok(RawGd::null());
        }

        // SAFETY: `self` is a non-null object pointer; the class tag is looked up by name.
        let cast_ptr = unsafe {
            let class_tag = interface_fn!(classdb_get_class_tag)(U::class_name().string_sys());
            interface_fn!(object_cast_to)(self.obj_sys(), class_tag)
        };

        if cast_ptr.is_null() {
            return Err(self);
        }

        let cast = RawGd {
            obj: cast_ptr.cast::<U>(),
            cached_id: self.cached_id,
        };
        std::mem::forget(self);
        Ok(cast)
    }

    /// Runs `apply` on the object viewed as `RefCounted`.
    ///
    /// Must only be called on non-null objects that inherit `RefCounted`.
    pub(crate) fn with_ref_counted<R>(&self, apply: impl FnOnce(&mut classes::RefCounted) -> R) -> R {
        debug_assert!(!self.is_null(), "with_ref_counted() on null object");

        // SAFETY: the caller guarantees a live `RefCounted` instance.
        let mut ref_counted = unsafe { classes::RefCounted::__from_object_ptr(self.obj_sys(), self.cached_id) };
        apply(&mut ref_counted)
    }

    /// Class name of the instance at runtime, e.g. `PointLight2D` for a `Gd<Node>`.
    pub(crate) fn dynamic_class_string(&self) -> String {
        if !self.is_instance_valid() {
            return "(freed object)".to_string();
        }

        let get_class_name = interface_fn!(object_get_class_name);
        let mut success = sys::SYS_FALSE;

        // SAFETY: valid object; on success the engine constructs the name into the storage.
        let class_name = unsafe {
            StringName::new_with_string_uninit(|name_ptr| {
                success = get_class_name(self.obj_sys(), sys::get_library(), name_ptr);
            })
        };

        if success == sys::SYS_FALSE {
            // Storage was never initialized; must not run the destructor.
            std::mem::forget(class_name);
            return "(unknown class)".to_string();
        }

        class_name.to_string()
    }
}

// SAFETY: the engine passes objects as pointers to the object pointer, and the storage is exactly that pointer.
unsafe impl<T: GodotClass> GodotFfi for RawGd<T> {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Object
    }

    unsafe fn new_with_uninit(init_fn: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self {
        let mut obj_ptr: sys::GDExtensionObjectPtr = ptr::null_mut();
        init_fn(ptr::addr_of_mut!(obj_ptr).cast());

        // Objects returned from the engine already carry the reference handed to the caller.
        Self::from_obj_sys_weak(obj_ptr)
    }

    unsafe fn new_with_init(init_fn: impl FnOnce(sys::GDExtensionTypePtr)) -> Self {
        Self::new_with_uninit(init_fn)
    }

    fn sys(&self) -> sys::GDExtensionConstTypePtr {
        self.obj.cast()
    }

    fn sys_mut(&mut self) -> sys::GDExtensionTypePtr {
        self.obj.cast()
    }

    fn as_arg_ptr(&self) -> sys::GDExtensionConstTypePtr {
        ptr::addr_of!(self.obj).cast()
    }
}

impl<T: GodotClass> GodotNullableFfi for RawGd<T> {
    fn null() -> Self {
        RawGd::null()
    }

    fn is_null(&self) -> bool {
        RawGd::is_null(self)
    }
}

impl<T: GodotClass> GodotFfiVariant for RawGd<T> {
    fn ffi_to_variant(&self) -> Variant {
        if self.is_null() {
            return Variant::nil();
        }

        let converter = sys::builtin_lifecycle_api().object_to_variant;

        // SAFETY: the converter reads the object pointer behind the type pointer and takes its own reference.
        unsafe {
            Variant::new_with_var_uninit(|variant_ptr| {
                let mut obj_ptr = self.obj_sys();
                converter(variant_ptr, ptr::addr_of_mut!(obj_ptr).cast());
            })
        }
    }

    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        match variant.get_type() {
            VariantType::Nil => return Ok(Self::null()),
            VariantType::Object => {}
            actual => {
                let kind = ErrorKind::BadType {
                    expected: VariantType::Object,
                    actual,
                };
                return Err(ConvertError::with_kind_value(kind, variant.clone()));
            }
        }

        let converter = sys::builtin_lifecycle_api().object_from_variant;

        // SAFETY: the variant holds an object; the converter writes its pointer (null if the object is gone).
        let raw: RawGd<classes::Object> = unsafe {
            RawGd::new_with_uninit(|self_ptr| {
                converter(self_ptr, sys::force_mut_ptr(variant.var_sys()));
            })
        };

        if raw.is_null() {
            return Ok(Self::null());
        }

        // The variant keeps its own reference; this handle takes another one.
        raw.with_inc_refcount().owned_cast::<T>().map_err(|raw| {
            let kind = ErrorKind::WrongClass {
                expected: T::class_name(),
                actual: raw.dynamic_class_string(),
            };
            ConvertError::with_kind_value(kind, variant.clone())
        })
    }
}

impl<T: GodotClass> Clone for RawGd<T> {
    fn clone(&self) -> Self {
        if !self.is_null() {
            <T as Bounds>::DynMemory::maybe_inc_ref(self);
        }

        Self {
            obj: self.obj,
            cached_id: self.cached_id,
        }
    }
}

impl<T: GodotClass> Drop for RawGd<T> {
    fn drop(&mut self) {
        if self.is_null() {
            return;
        }

        // SAFETY: this handle owns one reference (for ref-counted objects), released exactly here.
        let is_last = unsafe { <T as Bounds>::DynMemory::maybe_dec_ref(self) };
        if is_last {
            sys::out!("  RawGd::drop: destroy <{}> {:?}", T::class_name(), self.cached_id);

            // SAFETY: the last reference is gone, nobody else can observe the object.
            unsafe { interface_fn!(object_destroy)(self.obj_sys()) };
        }
    }
}

impl<T: GodotClass> fmt::Debug for RawGd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "{} {{ null obj }}", std::any::type_name::<T>());
        }

        f.debug_struct("RawGd")
            .field("class", &T::class_name())
            .field("id", &self.cached_id)
            .finish()
    }
}
