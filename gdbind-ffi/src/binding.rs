/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Process-wide storage of everything the engine hands out at load time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate as sys;
use crate::{
    BuiltinLifecycleTable, BuiltinMethodBind, BuiltinMethodKey, BuiltinMethodTable, ClassMethodBind, ClassMethodKey,
    ClassMethodTable, GDExtensionInterface, InitError, InitLevel, StringCache, UtilityFunctionBind, UtilityFunctionKey,
    UtilityFunctionTable, VariantType,
};

pub(crate) struct GodotBinding {
    interface: GDExtensionInterface,
    library: ClassLibraryPtr,
    version: GodotVersion,
    builtin_lifecycle: BuiltinLifecycleTable,
    builtin_methods: OnceLock<BuiltinMethodTable>,
    utility_functions: OnceLock<UtilityFunctionTable>,
    class_methods: [OnceLock<ClassMethodTable>; 4],
    string_cache: Mutex<StringCache>,
}

/// Newtype around `GDExtensionClassLibraryPtr` so it can be stored in a `static`.
struct ClassLibraryPtr(sys::GDExtensionClassLibraryPtr);

// SAFETY: the library pointer is an opaque token that is only passed back to the engine, never dereferenced in Rust.
unsafe impl Sync for ClassLibraryPtr {}
// SAFETY: see `Sync` impl.
unsafe impl Send for ClassLibraryPtr {}

static BINDING: OnceLock<GodotBinding> = OnceLock::new();
static ACTIVE: AtomicBool = AtomicBool::new(false);

/// Version of the running engine.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct GodotVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Human-readable version, e.g. `v4.3.stable.official`.
    pub string: String,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Lifecycle

/// Loads the GDExtension interface and all tables that do not depend on an init level.
///
/// Can only succeed once per process; later calls return [`InitError::AlreadyInitialized`] and leave the binding untouched.
///
/// # Safety
/// - `get_proc_address` must be the function pointer handed to the extension entry point.
/// - `library` must be the library pointer handed to the extension entry point.
pub unsafe fn initialize(
    get_proc_address: sys::GDExtensionInterfaceGetProcAddress,
    library: sys::GDExtensionClassLibraryPtr,
) -> Result<(), InitError> {
    if BINDING.get().is_some() {
        return Err(InitError::AlreadyInitialized);
    }

    let get_proc_address = get_proc_address.ok_or(InitError::NullGetProcAddress)?;

    let raw_version = sys::interface_init::runtime_version(get_proc_address)?;
    sys::interface_init::ensure_runtime_compatibility(&raw_version)?;
    let version = GodotVersion {
        major: raw_version.major,
        minor: raw_version.minor,
        patch: raw_version.patch,
        string: sys::read_version_string(&raw_version),
    };

    let interface = GDExtensionInterface::load(get_proc_address);
    let missing = interface.missing_functions();
    if !missing.is_empty() {
        sys::out!("Engine does not provide: {missing:?}");
    }

    let builtin_lifecycle = BuiltinLifecycleTable::load(&interface)?;

    let binding = GodotBinding {
        interface,
        library: ClassLibraryPtr(library),
        version,
        builtin_lifecycle,
        builtin_methods: OnceLock::new(),
        utility_functions: OnceLock::new(),
        class_methods: Default::default(),
        string_cache: Mutex::new(StringCache::new()),
    };

    // Two concurrent entry points may both get here; only one wins.
    BINDING.set(binding).map_err(|_| InitError::AlreadyInitialized)?;
    ACTIVE.store(true, Ordering::Release);

    sys::out!("Initialized GDExtension binding for engine {}", runtime_version().string);
    Ok(())
}

/// Whether [`initialize`] succeeded and [`deinitialize`] has not run yet.
pub fn is_initialized() -> bool {
    ACTIVE.load(Ordering::Acquire)
}

/// Releases engine-owned resources held by the binding. Function pointers stay loaded.
///
/// # Safety
/// Must be called at most once, after all other engine usage, while the engine is still alive.
pub unsafe fn deinitialize() {
    if !ACTIVE.swap(false, Ordering::AcqRel) {
        return;
    }

    lock_string_cache().clear();
    sys::out!("Deinitialized GDExtension binding");
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Tables that are loaded later

/// Resolves the method binds of all classes available at `level`.
///
/// Returns `false` if the table for this level was already loaded; the existing table stays in place.
///
/// # Safety
/// The binding must be initialized, and `level` must be active in the engine.
pub unsafe fn load_class_method_table(level: InitLevel, keys: &[ClassMethodKey]) -> bool {
    let slot = &get_binding().class_methods[level.index()];
    if slot.get().is_some() {
        return false;
    }

    let table = ClassMethodTable::load(level, keys, &mut lock_string_cache());
    slot.set(table).is_ok()
}

/// Resolves the builtin methods used by the builtin types. Only the first call has an effect.
///
/// # Safety
/// The binding must be initialized.
pub unsafe fn load_builtin_method_table(keys: &[BuiltinMethodKey]) {
    get_binding()
        .builtin_methods
        .get_or_init(|| BuiltinMethodTable::load(keys, &mut lock_string_cache()));
}

/// Resolves the utility functions. Only the first call has an effect.
///
/// # Safety
/// The binding must be initialized.
pub unsafe fn load_utility_function_table(keys: &[UtilityFunctionKey]) {
    get_binding()
        .utility_functions
        .get_or_init(|| UtilityFunctionTable::load(keys, &mut lock_string_cache()));
}

/// Whether the method binds for `level` have been loaded.
pub fn is_class_method_table_loaded(level: InitLevel) -> bool {
    BINDING
        .get()
        .is_some_and(|binding| binding.class_methods[level.index()].get().is_some())
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Accessors

fn get_binding() -> &'static GodotBinding {
    match BINDING.get() {
        Some(binding) => binding,
        None => panic!("Godot engine not available; make sure you are not calling it from unit/doc tests"),
    }
}

fn lock_string_cache() -> MutexGuard<'static, StringCache> {
    get_binding()
        .string_cache
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// All interface functions. Panics if the binding is not initialized.
#[inline]
pub fn get_interface() -> &'static GDExtensionInterface {
    &get_binding().interface
}

/// The library pointer passed to the entry point.
#[inline]
pub fn get_library() -> sys::GDExtensionClassLibraryPtr {
    get_binding().library.0
}

#[inline]
pub fn builtin_lifecycle_api() -> &'static BuiltinLifecycleTable {
    &get_binding().builtin_lifecycle
}

/// Version of the engine that loaded this library.
pub fn runtime_version() -> &'static GodotVersion {
    &get_binding().version
}

/// Pointer to an engine `StringName` for a static name; lives until [`deinitialize`].
pub fn cached_string_name(name: &'static str) -> sys::GDExtensionConstStringNamePtr {
    // SAFETY: `get_binding()` inside the lock ensures initialization.
    unsafe { lock_string_cache().fetch(name) }
}

/// Looks up a class method bind in the tables of all loaded levels.
///
/// # Panics
/// If the method was never requested from the engine, or the engine could not resolve it.
pub fn class_method(key: &ClassMethodKey) -> ClassMethodBind {
    let binding = get_binding();

    for table in binding.class_methods.iter().filter_map(OnceLock::get) {
        match table.lookup(key.class_name, key.method_name) {
            Some(Some(bind)) => return bind,
            Some(None) => panic!("failed to load class method {key}; engine does not provide it"),
            None => continue,
        }
    }

    panic!("class method {key} is not loaded; is its init level active?")
}

/// Looks up a builtin method.
///
/// # Panics
/// If the method is unknown or was not resolved by the engine.
pub fn builtin_method(variant_type: VariantType, method_name: &'static str) -> BuiltinMethodBind {
    let table = get_binding()
        .builtin_methods
        .get()
        .unwrap_or_else(|| panic!("builtin method table not loaded"));

    match table.lookup(variant_type, method_name) {
        Some(Some(bind)) => bind,
        _ => panic!("failed to load builtin method {variant_type:?}::{method_name}"),
    }
}

/// Looks up a utility function.
///
/// # Panics
/// If the function is unknown or was not resolved by the engine.
pub fn utility_function(function_name: &'static str) -> UtilityFunctionBind {
    let table = get_binding()
        .utility_functions
        .get()
        .unwrap_or_else(|| panic!("utility function table not loaded"));

    match table.lookup(function_name) {
        Some(Some(bind)) => bind,
        _ => panic!("failed to load utility function {function_name}"),
    }
}

#[doc(hidden)]
#[cold]
pub fn missing_interface_fn(name: &'static str) -> ! {
    panic!("GDExtension interface function `{name}` is not provided by the running engine")
}
