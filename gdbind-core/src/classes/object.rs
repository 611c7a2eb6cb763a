/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::builtin::{GString, StringName, Variant};
use crate::meta::error::CallError;
use crate::meta::{CallContext, CallFrame, ClassName};
use crate::obj::{bounds, Bounds, EngineClass, GodotClass, InstanceId, NewAlloc, NoBase};
use crate::sys;

/// Root of the engine's class hierarchy.
///
/// A `Gd<Object>` may refer to an instance of any class. Whether it is reference-counted is decided at runtime from its
/// instance ID, see [`bounds::MemDynamic`].
#[repr(C)]
pub struct Object {
    object_ptr: sys::GDExtensionObjectPtr,
    instance_id: Option<InstanceId>,
}

sys::static_assert_eq_size!(Object, crate::obj::RawGd<Object>);

const CALL_KEY: sys::ClassMethodKey = sys::ClassMethodKey {
    class_name: "Object",
    method_name: "call",
    hash: 3400424181,
};

impl Object {
    /// Keys of vararg methods, which are not part of [`METHOD_KEYS`](Self::METHOD_KEYS).
    pub(crate) const VARCALL_KEYS: &'static [sys::ClassMethodKey] = &[CALL_KEY];

    /// # Safety
    /// `object_ptr` must point to a live object, identified by `instance_id`.
    #[doc(hidden)]
    pub unsafe fn __from_object_ptr(object_ptr: sys::GDExtensionObjectPtr, instance_id: Option<InstanceId>) -> Self {
        Self { object_ptr, instance_id }
    }

    /// Calls a method by name, with dynamically typed arguments.
    ///
    /// The engine checks argument count and types; mismatches and unknown methods are reported as [`CallError`].
    pub fn try_call(&mut self, method: impl Into<StringName>, varargs: &[Variant]) -> Result<Variant, CallError> {
        let method = method.into();
        let method_bind = sys::class_method(&CALL_KEY);

        let mut frame = CallFrame::with_capacity(CallContext::dynamic("Object", method.to_string()), varargs.len() + 1);
        frame.arg(&method);
        for arg in varargs {
            frame.arg(arg);
        }

        // SAFETY: `call` is a vararg method of `Object`; the engine checks all arguments.
        unsafe { frame.varcall(method_bind, self.object_ptr) }
    }

    /// ⚠️ Calls a method by name, with dynamically typed arguments.
    ///
    /// # Panics
    /// If the call fails, see [`try_call()`](Self::try_call).
    pub fn call(&mut self, method: impl Into<StringName>, varargs: &[Variant]) -> Variant {
        self.try_call(method, varargs).unwrap_or_else(|err| panic!("{err}"))
    }
}

crate::engine_methods! {
    impl Object {
        /// Name of the object's class at runtime.
        fn get_class(&self) -> GString = 201670096;

        /// Whether the object is an instance of `class`, or a class derived from it.
        fn is_class(&self, class: GString) -> bool = 3927539163;

        fn get_instance_id(&self) -> i64 = 3905245786;

        fn has_method(&self, method: StringName) -> bool = 2619796661;
    }
}

impl GodotClass for Object {
    type Base = NoBase;

    const INIT_LEVEL: sys::InitLevel = sys::InitLevel::Core;

    fn class_name() -> ClassName {
        ClassName::new_static("Object")
    }
}

// SAFETY: `Object` itself is manually managed, but instances behind a `Gd<Object>` may be ref-counted.
unsafe impl Bounds for Object {
    type Memory = bounds::MemManual;
    type DynMemory = bounds::MemDynamic;
}

impl EngineClass for Object {
    fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr {
        self.object_ptr
    }

    fn as_type_ptr(&self) -> sys::GDExtensionTypePtr {
        std::ptr::addr_of!(self.object_ptr) as sys::GDExtensionTypePtr
    }
}

impl NewAlloc for Object {
    fn new_alloc() -> crate::obj::Gd<Self> {
        super::construct_engine_object::<Self>()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object").field("instance_id", &self.instance_id).finish()
    }
}
