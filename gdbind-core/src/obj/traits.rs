/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::meta::ClassName;
use crate::obj::{bounds, Bounds, Gd};
use crate::sys;
use crate::sys::InitLevel;

/// Makes `T` eligible to be managed by the engine and stored in [`Gd<T>`][crate::obj::Gd] pointers.
///
/// Implemented for every engine class exposed by this library. The class hierarchy is encoded in [`Base`](Self::Base),
/// and the memory strategy in the [`Bounds`] super-trait.
pub trait GodotClass: Bounds + 'static
where
    Self: Sized,
{
    /// The immediate superclass of `T`. This is always a Godot engine class.
    type Base: GodotClass;

    /// Initialization level, during which this class becomes available.
    const INIT_LEVEL: InitLevel;

    /// The name of the class, under which it is registered in the engine.
    fn class_name() -> ClassName;

    /// Returns whether `Self` inherits from `U`.
    ///
    /// This is reflexive, i.e `Self` inherits from itself.
    ///
    /// See also [`Inherits`] for a trait bound.
    fn inherits<U: GodotClass>() -> bool {
        if Self::class_name() == U::class_name() {
            true
        } else if Self::Base::class_name() == <NoBase>::class_name() {
            false
        } else {
            Self::Base::inherits::<U>()
        }
    }
}

/// Type representing the absence of a base class, at the root of the hierarchy.
///
/// `NoBase` is used as the base class for exactly one class: `Object`.
///
/// This is an enum without any variants, as we should never construct an instance of this class.
pub enum NoBase {}

// SAFETY: never instantiated.
unsafe impl Bounds for NoBase {
    type Memory = bounds::MemManual;
    type DynMemory = bounds::MemManual;
}

impl GodotClass for NoBase {
    type Base = NoBase;

    const INIT_LEVEL: InitLevel = InitLevel::Core;

    fn class_name() -> ClassName {
        ClassName::new_static("")
    }
}

/// Non-strict inheritance relationship in the Godot class hierarchy.
///
/// `Derived: Inherits<Base>` means that either `Derived` is a subclass of `Base`, or the class `Base` itself (hence "non-strict").
///
/// This trait is automatically implemented for all engine classes.
///
/// # Safety
///
/// This trait must only be implemented for subclasses of `Base`. The object pointer of an instance of `Self` must be a valid
/// object pointer for `Base` as well.
pub unsafe trait Inherits<Base: GodotClass>: GodotClass {}

// SAFETY: every class is a subclass of itself.
unsafe impl<T: GodotClass> Inherits<T> for T {}

/// Implemented for all engine classes.
pub trait EngineClass: GodotClass {
    fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr;
    fn as_type_ptr(&self) -> sys::GDExtensionTypePtr;
}

/// Auto-implemented for all engine-provided enums.
///
/// Enumerators are wrapped in a struct around the engine's ordinal, so that values unknown at compile time
/// (e.g. from a newer engine) can still be represented.
pub trait EngineEnum: Copy {
    fn try_from_ord(ord: i32) -> Option<Self>;

    /// Ordinal value of the enumerator, as specified in the engine.
    fn ord(self) -> i32;

    /// # Panics
    /// If the ordinal does not map to any enumerator.
    fn from_ord(ord: i32) -> Self {
        Self::try_from_ord(ord).unwrap_or_else(|| panic!("ordinal {ord} does not map to any enumerator"))
    }

    /// The name of the enumerator, as it appears in the engine (e.g. `SWING_SPAN`); empty if unknown.
    fn as_str(&self) -> &'static str;

    /// All enumerators in declaration order.
    fn values() -> &'static [Self];
}

/// Trait for engine classes that are reference-counted and can be instantiated.
pub trait NewGd: GodotClass {
    /// Creates a new instance; the returned handle holds the only reference.
    fn new_gd() -> Gd<Self>;
}

/// Trait for engine classes that are manually managed and can be instantiated.
pub trait NewAlloc: GodotClass {
    /// Creates a new instance, which must be destroyed with [`Gd::free()`] (or by its owner, e.g. the scene tree).
    #[must_use]
    fn new_alloc() -> Gd<Self>;
}

/// Trait for engine classes that exist exactly once and are owned by the engine.
pub trait Singleton: GodotClass {
    fn singleton() -> Gd<Self>;
}
