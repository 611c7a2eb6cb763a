/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # Internal crate of [**gdbind**](https://docs.rs/gdbind)
//!
//! Low-level bindings to the GDExtension C interface: ABI declarations, interface loading, the method-bind tables,
//! and the `GodotFfi` encoding of values in call frames.
//!
//! Do not depend on this crate directly, instead use the `gdbind` crate.
//! No SemVer or other guarantees are provided.

#![cfg_attr(test, allow(unused))]

#[allow(non_camel_case_types, non_upper_case_globals)]
mod gdextension_interface;

mod binding;
mod builtin_lifecycle;
mod central;
mod global;
mod godot_ffi;
mod init_level;
mod interface_init;
mod method_table;
mod opaque;
mod string_cache;
mod toolbox;

pub use binding::*;
pub use builtin_lifecycle::*;
pub use central::*;
pub use gdextension_interface::*;
pub use global::*;
pub use godot_ffi::{GodotFfi, GodotNullableFfi};
pub use init_level::*;
pub use interface_init::{GDExtensionInterface, MIN_RUNTIME_VERSION};
pub use method_table::*;
pub use opaque::Opaque;
pub use string_cache::StringCache;
pub use toolbox::*;

// Layouts shared with the engine.
static_assert_eq_size!(GDExtensionCallError, [i32; 3]);
static_assert_eq_size!(GDExtensionBool, u8);

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Errors that can occur while loading the binding.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum InitError {
    /// [`initialize()`] already succeeded in this process.
    AlreadyInitialized,

    /// The entry point received a null `get_proc_address`.
    NullGetProcAddress,

    /// An interface function required at startup is not provided by the engine.
    MissingFunction(&'static str),

    /// A builtin constructor, destructor, conversion or operator could not be resolved.
    MissingBuiltin(&'static str),

    /// The engine is older than [`MIN_RUNTIME_VERSION`].
    IncompatibleVersion { found: String },
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "GDExtension binding is already initialized"),
            Self::NullGetProcAddress => write!(f, "get_proc_address is null"),
            Self::MissingFunction(name) => write!(f, "engine does not provide interface function `{name}`"),
            Self::MissingBuiltin(name) => write!(f, "engine does not provide builtin function `{name}`"),
            Self::IncompatibleVersion { found } => {
                let (major, minor) = MIN_RUNTIME_VERSION;
                write!(f, "engine version {found} is not supported; need {major}.{minor} or newer")
            }
        }
    }
}

impl std::error::Error for InitError {}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Returns the interface function `$name`, panicking if the engine does not provide it.
#[macro_export]
#[doc(hidden)]
macro_rules! interface_fn {
    ($name:ident) => {{
        match $crate::get_interface().$name {
            Some(function) => function,
            None => $crate::missing_interface_fn(stringify!($name)),
        }
    }};
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
