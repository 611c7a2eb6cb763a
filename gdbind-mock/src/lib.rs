/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! In-process stand-in for the engine side of the GDExtension interface.
//!
//! Implements `get_proc_address` and the interface functions the binding resolves, backed by a small set of engine
//! classes with observable behavior. Tests load an extension entry point with [`MockEngine::load()`], walk it through
//! the init levels and then call into the binding as a real engine would host it.
//!
//! Engine state is thread-local. Load and use the extension on one thread.

mod builtins;
mod classdb;
mod classes;
mod interface;
mod objects;
mod value;
mod xml;

use std::ffi::c_void;
use std::fmt;

use gdbind_ffi as sys;
use sys::InitLevel;

pub use interface::{take_messages, EngineVersion, Message, MessageKind};

/// Signature of the C entry symbol emitted by `gdextension!`.
pub type EntryPoint = unsafe extern "C" fn(
    p_get_proc_address: sys::GDExtensionInterfaceGetProcAddress,
    p_library: sys::GDExtensionClassLibraryPtr,
    r_initialization: *mut sys::GDExtensionInitialization,
) -> sys::GDExtensionBool;

/// Token handed to the extension as its library pointer.
static LIBRARY: u8 = 0;

/// A loaded extension, driven through the init levels like the engine would.
pub struct MockEngine {
    initialization: sys::GDExtensionInitialization,
    active_levels: Vec<InitLevel>,
}

impl MockEngine {
    /// Calls `entry` against an engine reporting [`EngineVersion::DEFAULT`].
    pub fn load(entry: EntryPoint) -> Result<Self, LoadError> {
        Self::load_as(entry, EngineVersion::DEFAULT)
    }

    /// Calls `entry` against an engine reporting `version`.
    pub fn load_as(entry: EntryPoint, version: EngineVersion) -> Result<Self, LoadError> {
        interface::set_version(version);

        let mut initialization = sys::GDExtensionInitialization {
            minimum_initialization_level: sys::GDEXTENSION_INITIALIZATION_CORE,
            userdata: std::ptr::null_mut(),
            initialize: None,
            deinitialize: None,
        };

        let library = std::ptr::addr_of!(LIBRARY) as *mut c_void;

        // SAFETY: `get_proc_address` and `initialization` outlive the call; the library token is never dereferenced.
        let success = unsafe { entry(Some(interface::get_proc_address), library, &mut initialization) };
        if success == 0 {
            return Err(LoadError::EntryFailed);
        }

        if initialization.initialize.is_none() || initialization.deinitialize.is_none() {
            return Err(LoadError::MissingCallbacks);
        }

        Ok(Self {
            initialization,
            active_levels: Vec::new(),
        })
    }

    /// Lowest level the extension asked to be initialized at.
    pub fn minimum_level(&self) -> InitLevel {
        InitLevel::from_sys(self.initialization.minimum_initialization_level)
    }

    /// Initializes every level from the extension's minimum up to and including `level`, skipping active ones.
    pub fn initialize_up_to(&mut self, level: InitLevel) {
        let minimum = self.minimum_level();

        for next in InitLevel::ALL {
            if next > level {
                break;
            }
            if next < minimum || self.active_levels.contains(&next) {
                continue;
            }

            if let Some(initialize) = self.initialization.initialize {
                // SAFETY: callback and userdata come from the extension's entry point.
                unsafe { initialize(self.initialization.userdata, next.to_sys()) };
            }
            self.active_levels.push(next);
        }
    }

    /// Deinitializes all active levels, highest first.
    pub fn deinitialize_all(&mut self) {
        while let Some(level) = self.active_levels.pop() {
            if let Some(deinitialize) = self.initialization.deinitialize {
                // SAFETY: see `initialize_up_to`.
                unsafe { deinitialize(self.initialization.userdata, level.to_sys()) };
            }
        }
    }

    /// Levels currently initialized, in ascending order.
    pub fn active_levels(&self) -> &[InitLevel] {
        &self.active_levels
    }

    /// Runs the end of one frame: objects queued with `queue_free()` are freed, enabled raycasts are updated.
    ///
    /// Returns the number of freed objects.
    pub fn process_frame(&mut self) -> usize {
        classes::physics_frame();
        objects::end_frame()
    }
}

impl Drop for MockEngine {
    fn drop(&mut self) {
        self.deinitialize_all();
    }
}

/// Why an extension could not be loaded.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LoadError {
    /// The entry point returned false.
    EntryFailed,

    /// The entry point succeeded, but did not fill in the init callbacks.
    MissingCallbacks,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntryFailed => write!(f, "extension entry point reported failure"),
            Self::MissingCallbacks => write!(f, "extension entry point did not provide init callbacks"),
        }
    }
}

impl std::error::Error for LoadError {}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Inspection

/// Number of objects alive on this thread, singletons included.
pub fn live_object_count() -> usize {
    objects::live_count()
}

/// Whether the object with this instance ID is alive.
pub fn is_instance_alive(instance_id: u64) -> bool {
    objects::address_of(instance_id) != 0
}

/// Reference count of a live object, or 0 if it is dead or not reference-counted.
pub fn reference_count(instance_id: u64) -> i64 {
    objects::reference_count(objects::address_of(instance_id))
}

/// Number of live instances of `class` or derived classes.
pub fn instance_count(class: &str) -> usize {
    objects::instances_of(class).len()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
