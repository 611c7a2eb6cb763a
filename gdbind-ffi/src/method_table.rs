/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Tables mapping method identities to the function pointers the engine resolves for them.
//!
//! Tables are filled once (class methods: once per init level) and are read-only afterwards. A method that the engine could not
//! resolve is stored as missing; calling it panics with the full method identity.

use std::collections::HashMap;

use crate as sys;
use crate::{InitLevel, StringCache, VariantType};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Class methods

/// Identity of a method on an engine class.
///
/// The hash is the engine's hash of the method signature; it lets the engine pick a compatible overload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClassMethodKey {
    pub class_name: &'static str,
    pub method_name: &'static str,
    pub hash: i64,
}

impl std::fmt::Display for ClassMethodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{} (hash {})", self.class_name, self.method_name, self.hash)
    }
}

/// Method bind resolved by the engine, passed to `object_method_bind_ptrcall` and `object_method_bind_call`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ClassMethodBind(pub sys::GDExtensionMethodBindPtr);

// SAFETY: a method bind is an immutable engine-side descriptor; sharing the pointer between threads is harmless.
unsafe impl Sync for ClassMethodBind {}
// SAFETY: see `Sync` impl.
unsafe impl Send for ClassMethodBind {}

/// Method binds of all classes that become available at one init level.
pub struct ClassMethodTable {
    level: InitLevel,
    binds: HashMap<(&'static str, &'static str), Option<ClassMethodBind>>,
}

impl ClassMethodTable {
    /// # Safety
    /// The binding must be initialized, and `level` must be active in the engine.
    pub(crate) unsafe fn load(level: InitLevel, keys: &[ClassMethodKey], string_cache: &mut StringCache) -> Self {
        let get_method_bind = sys::interface_fn!(classdb_get_method_bind);

        let mut binds = HashMap::with_capacity(keys.len());
        for key in keys {
            let class_sname = string_cache.fetch(key.class_name);
            let method_sname = string_cache.fetch(key.method_name);

            let raw = get_method_bind(class_sname, method_sname, key.hash);
            let bind = sys::ptr_then(sys::force_mut_ptr(raw), |ptr| ClassMethodBind(ptr as sys::GDExtensionMethodBindPtr));

            if bind.is_none() {
                sys::out!("ClassMethodTable: engine has no method {key}");
            }

            binds.insert((key.class_name, key.method_name), bind);
        }

        sys::out!("ClassMethodTable: loaded {} methods for {level:?}", binds.len());
        Self { level, binds }
    }

    pub fn level(&self) -> InitLevel {
        self.level
    }

    pub fn len(&self) -> usize {
        self.binds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }

    /// Looks up a method. Outer `None`: not part of this table. Inner `None`: the engine could not resolve it.
    pub fn lookup(&self, class_name: &'static str, method_name: &'static str) -> Option<Option<ClassMethodBind>> {
        self.binds.get(&(class_name, method_name)).copied()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Builtin methods

/// Identity of a method on a builtin type such as `String` or `Array`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BuiltinMethodKey {
    pub variant_type: VariantType,
    pub method_name: &'static str,
    pub hash: i64,
}

pub type BuiltinMethodBind = unsafe extern "C" fn(
    p_base: sys::GDExtensionTypePtr,
    p_args: *const sys::GDExtensionConstTypePtr,
    r_return: sys::GDExtensionTypePtr,
    p_argument_count: std::ffi::c_int,
);

pub struct BuiltinMethodTable {
    binds: HashMap<(VariantType, &'static str), Option<BuiltinMethodBind>>,
}

impl BuiltinMethodTable {
    /// # Safety
    /// The binding must be initialized.
    pub(crate) unsafe fn load(keys: &[BuiltinMethodKey], string_cache: &mut StringCache) -> Self {
        let get_builtin_method = sys::interface_fn!(variant_get_ptr_builtin_method);

        let binds = keys
            .iter()
            .map(|key| {
                let method_sname = string_cache.fetch(key.method_name);
                let bind = get_builtin_method(key.variant_type.sys(), method_sname, key.hash);

                ((key.variant_type, key.method_name), bind)
            })
            .collect();

        Self { binds }
    }

    pub fn lookup(&self, variant_type: VariantType, method_name: &'static str) -> Option<Option<BuiltinMethodBind>> {
        self.binds.get(&(variant_type, method_name)).copied()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Utility functions

/// Identity of a global utility function such as `print`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct UtilityFunctionKey {
    pub function_name: &'static str,
    pub hash: i64,
}

pub type UtilityFunctionBind = unsafe extern "C" fn(
    r_return: sys::GDExtensionTypePtr,
    p_args: *const sys::GDExtensionConstTypePtr,
    p_argument_count: std::ffi::c_int,
);

pub struct UtilityFunctionTable {
    binds: HashMap<&'static str, Option<UtilityFunctionBind>>,
}

impl UtilityFunctionTable {
    /// # Safety
    /// The binding must be initialized.
    pub(crate) unsafe fn load(keys: &[UtilityFunctionKey], string_cache: &mut StringCache) -> Self {
        let get_utility_function = sys::interface_fn!(variant_get_ptr_utility_function);

        let binds = keys
            .iter()
            .map(|key| {
                let function_sname = string_cache.fetch(key.function_name);
                (key.function_name, get_utility_function(function_sname, key.hash))
            })
            .collect();

        Self { binds }
    }

    pub fn lookup(&self, function_name: &'static str) -> Option<Option<UtilityFunctionBind>> {
        self.binds.get(&function_name).copied()
    }
}
