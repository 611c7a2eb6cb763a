/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Entry point of the extension and the per-level initialization callbacks.

use crate::sys;

/// Stage of the engine's initialization process.
///
/// Initialization happens level by level, like a stack; deinitialization in reverse order.
/// See [`ExtensionLibrary::on_level_init()`] and [`ExtensionLibrary::on_level_deinit()`].
pub type InitLevel = sys::InitLevel;

#[doc(hidden)]
pub unsafe fn __gdext_load_library<E: ExtensionLibrary>(
    get_proc_address: sys::GDExtensionInterfaceGetProcAddress,
    library: sys::GDExtensionClassLibraryPtr,
    init: *mut sys::GDExtensionInitialization,
) -> sys::GDExtensionBool {
    let init_code = || {
        // SAFETY: arguments are the ones the engine passed to the entry point.
        if let Err(err) = unsafe { sys::initialize(get_proc_address, library) } {
            eprintln!("ERROR: failed to load GDExtension library: {err}");
            return 0;
        }

        // Engine tables are always needed, independent of the user's level. User hooks are filtered later.
        let godot_init_params = sys::GDExtensionInitialization {
            minimum_initialization_level: InitLevel::Core.to_sys(),
            userdata: std::ptr::null_mut(),
            initialize: Some(ffi_initialize_layer::<E>),
            deinitialize: Some(ffi_deinitialize_layer::<E>),
        };

        // SAFETY: the engine passes a valid output parameter.
        unsafe { *init = godot_init_params };

        1
    };

    let ctx = || "error when loading GDExtension library";
    let is_success = crate::private::handle_panic(ctx, init_code);

    is_success.unwrap_or(0)
}

unsafe extern "C" fn ffi_initialize_layer<E: ExtensionLibrary>(
    _userdata: *mut std::ffi::c_void,
    init_level: sys::GDExtensionInitializationLevel,
) {
    let level = InitLevel::from_sys(init_level);
    let ctx = || format!("failed to initialize GDExtension level `{level:?}`");

    // Swallow panics; they are reported by `handle_panic`.
    let _ = crate::private::handle_panic(ctx, || {
        // SAFETY: the engine calls this on the main thread, after `__gdext_load_library`.
        unsafe { gdext_on_level_init(level) };

        if level >= E::min_level() {
            E::on_level_init(level);
        }
    });
}

unsafe extern "C" fn ffi_deinitialize_layer<E: ExtensionLibrary>(
    _userdata: *mut std::ffi::c_void,
    init_level: sys::GDExtensionInitializationLevel,
) {
    let level = InitLevel::from_sys(init_level);
    let ctx = || format!("failed to deinitialize GDExtension level `{level:?}`");

    let _ = crate::private::handle_panic(ctx, || {
        if level >= E::min_level() {
            E::on_level_deinit(level);
        }

        gdext_on_level_deinit(level);
    });
}

/// Tasks done internally upon loading an initialization level. Called before user code.
///
/// # Safety
/// - Must be called from the main thread.
/// - The interface must have been initialized.
#[deny(unsafe_op_in_unsafe_fn)]
unsafe fn gdext_on_level_init(level: InitLevel) {
    if level == InitLevel::Core {
        // SAFETY: binding is initialized; both loaders ignore repeated calls.
        unsafe {
            sys::load_builtin_method_table(crate::builtin::BUILTIN_METHOD_KEYS);
            sys::load_utility_function_table(crate::global::UTILITY_FUNCTION_KEYS);
        }
    }

    let keys = crate::classes::method_keys_for_level(level);

    // SAFETY: binding is initialized and `level` is being loaded by the engine.
    let loaded = unsafe { sys::load_class_method_table(level, &keys) };
    if !loaded {
        crate::out!("gdext_on_level_init: method table for {level:?} was already loaded");
    }

    if level == InitLevel::Core {
        crate::registry::class::register_engine_classes();
    }
}

/// Tasks done internally upon unloading an initialization level. Called after user code.
fn gdext_on_level_deinit(level: InitLevel) {
    if level == InitLevel::Core {
        // SAFETY: called after all other logic of the lowest level.
        unsafe { sys::deinitialize() };
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Defines the entry point for a GDExtension Rust library.
///
/// Every library should have exactly one implementation of this trait, passed to the
/// [`gdextension!`](../../gdbind/macro.gdextension.html) macro which emits the C entry symbol.
///
/// ```no_run
/// # use gdbind_core::init::*;
/// // Type tag without any functionality; its name is irrelevant.
/// struct MyExtension;
///
/// unsafe impl ExtensionLibrary for MyExtension {}
/// ```
///
/// # Safety
/// The library cannot enforce safety guarantees outside Rust code. Other bindings and scripts that touch the same
/// objects must uphold them.
pub unsafe trait ExtensionLibrary {
    /// Lowest level at which the user hooks are invoked (`Scene` by default).
    ///
    /// Engine tables are loaded from `Core` upward regardless.
    fn min_level() -> InitLevel {
        InitLevel::Scene
    }

    /// Custom logic when a certain init level is loaded.
    ///
    /// Only invoked for levels >= [`Self::min_level()`], in ascending order.
    #[allow(unused_variables)]
    fn on_level_init(level: InitLevel) {
        // Nothing by default.
    }

    /// Custom logic when a certain init level is unloaded.
    ///
    /// Only invoked for levels >= [`Self::min_level()`], in descending order.
    #[allow(unused_variables)]
    fn on_level_deinit(level: InitLevel) {
        // Nothing by default.
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
