/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

use crate::classes;
use crate::meta::error::{ConvertError, ErrorKind};
use crate::meta::{ArrayElement, ClassName, FromGodot, GodotConvert, GodotType, ToGodot};
use crate::obj::bounds::{DynMemory as _, MemManual};
use crate::obj::{Bounds, GodotClass, Inherits, InstanceId, RawGd};
use crate::sys::{self, interface_fn};

/// Smart pointer to objects owned by the engine.
///
/// This smart pointer can only hold objects in the engine's class hierarchy, i.e. `T: GodotClass`.
/// The memory strategy depends on `T`:
///
/// - **Reference-counted** objects (`RefCounted` and derived): every `Gd` holds one reference. The object is destroyed
///   when the last reference (in Rust or in the engine) is released.
/// - **Manually managed** objects (everything else, e.g. `Node`): `Gd` is a plain handle. Destroy the object with
///   [`free()`](Self::free), or let its owner (e.g. the scene tree) do it.
/// - `Object` may be either of the above; the strategy is decided at runtime.
///
/// `Gd<T>` dereferences to `T`, whose methods call into the engine. Methods of base classes are reachable through
/// further dereferencing, e.g. a `Gd<PointLight2D>` can call `Light2D`, `Node2D`, `CanvasItem`, `Node` and `Object` methods.
///
/// Dereferencing a handle to a destroyed object panics.
#[repr(C)]
pub struct Gd<T: GodotClass> {
    pub(crate) raw: RawGd<T>,
}

impl<T: GodotClass> Gd<T> {
    /// Wraps a non-null raw handle.
    pub(crate) fn from_raw(raw: RawGd<T>) -> Self {
        debug_assert!(!raw.is_null(), "Gd::from_raw() with null handle");
        Self { raw }
    }

    /// Adopts an object pointer and takes a reference to it.
    ///
    /// # Safety
    /// `ptr` must be a valid, non-null object pointer of class `T` (or derived).
    pub(crate) unsafe fn from_obj_sys(ptr: sys::GDExtensionObjectPtr) -> Self {
        Self::from_raw(RawGd::from_obj_sys(ptr))
    }

    /// Looks up an object by its instance ID.
    ///
    /// Returns an error if the ID does not refer to a live object, or if that object is not an instance of `T`.
    pub fn try_from_instance_id(instance_id: InstanceId) -> Result<Self, ConvertError> {
        // SAFETY: any ID can be looked up; destroyed objects yield null.
        let ptr = unsafe { interface_fn!(object_get_instance_from_id)(instance_id.to_u64()) };
        if ptr.is_null() {
            return Err(ConvertError::with_kind_value(ErrorKind::DeadObject, instance_id.to_i64()));
        }

        // SAFETY: `ptr` is a live object.
        let raw = unsafe { RawGd::<classes::Object>::from_obj_sys(ptr) };

        raw.owned_cast::<T>().map(Self::from_raw).map_err(|raw| {
            let kind = ErrorKind::WrongClass {
                expected: T::class_name(),
                actual: raw.dynamic_class_string(),
            };
            ConvertError::with_kind_value(kind, instance_id.to_i64())
        })
    }

    /// ⚠️ Looks up an object by its instance ID.
    ///
    /// # Panics
    /// If the ID does not refer to a live object of class `T` (or derived).
    pub fn from_instance_id(instance_id: InstanceId) -> Self {
        Self::try_from_instance_id(instance_id)
            .unwrap_or_else(|err| panic!("Gd::from_instance_id({instance_id}) failed: {err}"))
    }

    /// ⚠️ Returns the instance ID of this object.
    ///
    /// # Panics
    /// If the object has been destroyed. Use [`instance_id_unchecked()`](Self::instance_id_unchecked) to get the ID
    /// regardless.
    pub fn instance_id(&self) -> InstanceId {
        self.raw.check_alive("instance_id");
        self.instance_id_unchecked()
    }

    /// Returns the last known instance ID, even if the object has been destroyed since.
    ///
    /// IDs are never reused while the engine runs, so this cannot refer to a different object.
    pub fn instance_id_unchecked(&self) -> InstanceId {
        self.raw
            .instance_id_unchecked()
            .unwrap_or_else(|| panic!("Gd<{}> without instance ID", T::class_name()))
    }

    /// Checks if this smart pointer points to a live object.
    ///
    /// Reference-counted objects are always live while a `Gd` to them exists; manually managed ones may have been freed
    /// elsewhere.
    pub fn is_instance_valid(&self) -> bool {
        self.raw.is_instance_valid()
    }

    /// Converts this handle to a handle of a base class. Never fails, and keeps the reference.
    pub fn upcast<Base>(self) -> Gd<Base>
    where
        Base: GodotClass,
        T: Inherits<Base>,
    {
        Gd::from_raw(self.raw.into_base())
    }

    /// Views the object as a base class, without touching reference counts.
    pub fn upcast_ref<Base>(&self) -> &Base
    where
        Base: GodotClass,
        T: Inherits<Base>,
    {
        let target: &T = self;

        // SAFETY: `Inherits` guarantees a valid `Base` pointer, and all engine classes share one layout.
        unsafe { &*(target as *const T).cast::<Base>() }
    }

    /// Mutable variant of [`upcast_ref()`](Self::upcast_ref).
    pub fn upcast_mut<Base>(&mut self) -> &mut Base
    where
        Base: GodotClass,
        T: Inherits<Base>,
    {
        let target: &mut T = self;

        // SAFETY: see `upcast_ref()`.
        unsafe { &mut *(target as *mut T).cast::<Base>() }
    }

    /// Converts to a derived class, if the object is an instance of it.
    ///
    /// On failure, the original handle is returned unchanged.
    pub fn try_cast<Derived>(self) -> Result<Gd<Derived>, Self>
    where
        Derived: GodotClass + Inherits<T>,
    {
        self.raw.owned_cast().map(Gd::from_raw).map_err(Self::from_raw)
    }

    /// ⚠️ Converts to a derived class.
    ///
    /// # Panics
    /// If the object is not an instance of `Derived`.
    pub fn cast<Derived>(self) -> Gd<Derived>
    where
        Derived: GodotClass + Inherits<T>,
    {
        self.try_cast().unwrap_or_else(|from| {
            panic!(
                "downcast from {from} to {to} failed; instance {from:?}",
                from = T::class_name(),
                to = Derived::class_name(),
            )
        })
    }

    /// Class of the object at runtime, which may be more derived than `T`.
    pub fn dynamic_class_name(&self) -> String {
        self.raw.dynamic_class_string()
    }
}

impl<T> Gd<T>
where
    T: GodotClass + Bounds<Memory = MemManual>,
{
    /// Destroys the manually managed object.
    ///
    /// Other handles to the same object become dangling; using them afterwards panics.
    ///
    /// # Panics
    /// - If the object has already been destroyed.
    /// - If called on a `Gd<Object>` whose instance is reference-counted.
    pub fn free(self) {
        let is_ref_counted = <T as Bounds>::DynMemory::is_ref_counted(&self.raw);
        assert_ne!(
            is_ref_counted,
            Some(true),
            "called free() on Gd<Object> which points to a RefCounted instance; these are freed automatically"
        );
        assert!(self.is_instance_valid(), "called free() on already destroyed object");

        sys::out!("Gd::free: destroy <{}> {:?}", T::class_name(), self.raw.instance_id_unchecked());

        // SAFETY: live, manually managed object.
        unsafe { interface_fn!(object_destroy)(self.raw.obj_sys()) };
        std::mem::forget(self);
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Trait impls

impl<T: GodotClass> Deref for Gd<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.raw.check_alive("deref");
        self.raw.as_target()
    }
}

impl<T: GodotClass> DerefMut for Gd<T> {
    fn deref_mut(&mut self) -> &mut T {
        self.raw.check_alive("deref_mut");
        self.raw.as_target_mut()
    }
}

impl<T: GodotClass> Clone for Gd<T> {
    fn clone(&self) -> Self {
        Self { raw: self.raw.clone() }
    }
}

/// Two handles are equal if they refer to the same object.
impl<T: GodotClass> PartialEq for Gd<T> {
    fn eq(&self, other: &Self) -> bool {
        self.instance_id_unchecked() == other.instance_id_unchecked()
    }
}

impl<T: GodotClass> Eq for Gd<T> {}

impl<T: GodotClass> Hash for Gd<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instance_id_unchecked().hash(state);
    }
}

impl<T: GodotClass> fmt::Debug for Gd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_instance_valid() {
            return write!(f, "Gd {{ id: {}, freed }}", self.instance_id_unchecked());
        }

        f.debug_struct("Gd")
            .field("id", &self.instance_id_unchecked().to_i64())
            .field("class", &format_args!("{}", self.dynamic_class_name()))
            .finish()
    }
}

impl<T: GodotClass> fmt::Display for Gd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_instance_valid() {
            return write!(f, "<Freed Object>");
        }

        write!(f, "<{}#{}>", self.dynamic_class_name(), self.instance_id_unchecked())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversions

impl<T: GodotClass> GodotConvert for Gd<T> {
    type Via = Gd<T>;
}

impl<T: GodotClass> ToGodot for Gd<T> {
    fn to_godot(&self) -> Self::Via {
        self.clone()
    }
}

impl<T: GodotClass> FromGodot for Gd<T> {
    fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
        Ok(via)
    }
}

impl<T: GodotClass> GodotType for Gd<T> {
    type Ffi = RawGd<T>;

    fn to_ffi(&self) -> Self::Ffi {
        self.raw.clone()
    }

    fn into_ffi(self) -> Self::Ffi {
        self.raw
    }

    fn try_from_ffi(raw: Self::Ffi) -> Result<Self, ConvertError> {
        if raw.is_null() {
            Err(ConvertError::with_kind(ErrorKind::NullObject))
        } else {
            Ok(Self { raw })
        }
    }

    fn class_name() -> Option<ClassName> {
        Some(T::class_name())
    }

    fn godot_type_name() -> String {
        T::class_name().to_string()
    }
}

impl<T: GodotClass> ArrayElement for Gd<T> {}
