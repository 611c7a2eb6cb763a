/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Process-wide table from class name to the factory that wraps objects of that class.
//!
//! When the engine hands back an object whose static type is only `Object`, [`wrap_polymorphic()`] looks up the object's
//! runtime class and wraps it in the matching `Gd<T>`. Classes without a factory fall back to `Gd<Object>`.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Once;

use crate::classes::{self, Object};
use crate::meta::ClassName;
use crate::obj::{Gd, GodotClass, Inherits, InstanceId};
use crate::sys::{self, Global};

/// Wraps an object handle in the Rust type registered for its class.
pub type ClassFactory = fn(Gd<Object>) -> Box<dyn ErasedGd>;

static CLASS_FACTORIES: Global<HashMap<String, ClassFactory>> = Global::default();
static ENGINE_CLASSES_REGISTERED: Once = Once::new();

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Type-erased handles

/// A `Gd<T>` whose class is only known at runtime.
pub trait ErasedGd: Any + fmt::Debug {
    /// Class of the Rust wrapper; may be a base class of the object's runtime class.
    fn class_name(&self) -> ClassName;

    fn instance_id(&self) -> InstanceId;

    /// Another handle to the same object, typed as `Object`.
    fn to_object(&self) -> Gd<Object>;

    #[doc(hidden)]
    fn as_any(&self) -> &dyn Any;

    #[doc(hidden)]
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> ErasedGd for Gd<T>
where
    T: GodotClass + Inherits<Object>,
{
    fn class_name(&self) -> ClassName {
        T::class_name()
    }

    fn instance_id(&self) -> InstanceId {
        self.instance_id_unchecked()
    }

    fn to_object(&self) -> Gd<Object> {
        self.clone().upcast()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl dyn ErasedGd {
    /// Returns the handle if it was wrapped as exactly `Gd<T>`.
    pub fn downcast_ref<T: GodotClass>(&self) -> Option<&Gd<T>> {
        self.as_any().downcast_ref::<Gd<T>>()
    }

    /// Converts back to the concrete handle if it was wrapped as exactly `Gd<T>`; otherwise returns `self` unchanged.
    pub fn downcast<T: GodotClass>(self: Box<Self>) -> Result<Gd<T>, Box<dyn ErasedGd>> {
        if self.as_any().is::<Gd<T>>() {
            match self.into_any().downcast::<Gd<T>>() {
                Ok(gd) => Ok(*gd),
                Err(_) => unreachable!("type checked above"),
            }
        } else {
            Err(self)
        }
    }
}

/// Factory for class `T`: wraps as `Gd<T>`, or as `Gd<Object>` if the object turns out not to be a `T`.
pub fn wrap_as<T>(object: Gd<Object>) -> Box<dyn ErasedGd>
where
    T: GodotClass + Inherits<Object>,
{
    match object.try_cast::<T>() {
        Ok(gd) => Box::new(gd),
        Err(object) => Box::new(object),
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Table operations

/// Registers `factory` for objects whose runtime class is `class_name`.
///
/// A later registration for the same name replaces the earlier one, which is returned.
pub fn register_class_factory(class_name: &str, factory: ClassFactory) -> Option<ClassFactory> {
    let previous = CLASS_FACTORIES.lock().insert(class_name.to_string(), factory);

    if previous.is_some() {
        sys::out!("register_class_factory: replaced factory for `{class_name}`");
    }

    previous
}

/// Removes the factory for `class_name`, returning it.
pub fn unregister_class_factory(class_name: &str) -> Option<ClassFactory> {
    CLASS_FACTORIES.lock().remove(class_name)
}

/// Factory currently registered for `class_name`.
pub fn class_factory(class_name: &str) -> Option<ClassFactory> {
    CLASS_FACTORIES.lock().get(class_name).copied()
}

/// Names of all classes with a factory, sorted.
pub fn registered_class_names() -> Vec<String> {
    let mut names: Vec<String> = CLASS_FACTORIES.lock().keys().cloned().collect();
    names.sort();
    names
}

/// Wraps `object` in the Rust type registered for its runtime class.
///
/// Classes without a registered factory are wrapped as `Gd<Object>`.
pub fn wrap_polymorphic(object: Gd<Object>) -> Box<dyn ErasedGd> {
    let class_name = object.dynamic_class_name();

    // Copy the factory out, so the table is not locked while it runs.
    match class_factory(&class_name) {
        Some(factory) => factory(object),
        None => {
            sys::out!("wrap_polymorphic: no factory for `{class_name}`, falling back to Object");
            Box::new(object)
        }
    }
}

/// Registers factories for all engine classes. Runs once per process; user factories registered earlier are kept.
pub(crate) fn register_engine_classes() {
    ENGINE_CLASSES_REGISTERED.call_once(|| {
        let mut table = CLASS_FACTORIES.lock();

        for class in classes::ENGINE_CLASSES {
            table.entry(class.class_name.to_string()).or_insert(class.factory);
        }

        sys::out!("register_engine_classes: {} classes", table.len());
    });
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
