/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # Rust bindings for Godot 4 engine classes
//!
//! This crate exposes a set of Godot engine classes to Rust through the GDExtension C interface. Every class has a
//! handle type whose methods marshal their arguments into a call frame, invoke the engine's method bind and convert the
//! result back to Rust.
//!
//! ## Getting started
//!
//! An extension library implements [`ExtensionLibrary`](init::ExtensionLibrary) and emits its entry symbol with
//! [`gdextension!`]:
//!
//! ```no_run
//! use gdbind::prelude::*;
//!
//! struct MyExtension;
//!
//! unsafe impl ExtensionLibrary for MyExtension {
//!     fn on_level_init(level: InitLevel) {
//!         if level == InitLevel::Scene {
//!             let mut light = Light2D::new_alloc();
//!             light.set_energy(2.0);
//!             godot_print!("light energy: {}", light.get_energy());
//!             light.free();
//!         }
//!     }
//! }
//!
//! gdextension!(MyExtension);
//! ```
//!
//! ## Memory management
//!
//! Objects are held through [`Gd<T>`](obj::Gd). Classes deriving from `RefCounted` are freed when the last handle is
//! dropped; all others are managed manually with [`Gd::free()`](obj::Gd::free) or by their owner, e.g. the parent
//! node. Handles to destroyed objects are detected and panic on use instead of touching freed memory.
//!
//! ## Cargo features
//!
//! * **`serde`**
//!
//!   Implements `Serialize` and `Deserialize` for value types such as [`Vector2`](builtin::Vector2),
//!   [`Color`](builtin::Color) and [`GString`](builtin::GString).

#[doc(inline)]
pub use gdbind_core::{builtin, classes, global, meta, obj, registry};

#[doc(hidden)]
pub use gdbind_core::sys;

#[doc(hidden)]
pub use gdbind_core::private;

/// Entry point and initialization levels.
pub mod init {
    pub use gdbind_core::init::*;

    // Re-exports
    pub use crate::gdextension;
}

pub mod prelude;

/// Emits the C entry symbol through which the engine loads the extension.
///
/// The first argument is the type implementing [`ExtensionLibrary`](init::ExtensionLibrary). The symbol is named
/// `gdext_rust_init` unless given with `entry_symbol`; it must match the `entry_symbol` key in the `.gdextension` file.
///
/// ```no_run
/// # use gdbind::prelude::*;
/// struct MyExtension;
/// unsafe impl ExtensionLibrary for MyExtension {}
///
/// gdextension!(MyExtension, entry_symbol = my_extension_init);
/// ```
#[macro_export]
macro_rules! gdextension {
    ($Library:ty) => {
        $crate::gdextension!($Library, entry_symbol = gdext_rust_init);
    };

    ($Library:ty, entry_symbol = $entry_symbol:ident) => {
        /// Entry point of the extension, called by the engine when loading the library.
        ///
        /// # Safety
        /// Must only be called by the engine, with the arguments of the GDExtension initialization function.
        #[no_mangle]
        pub unsafe extern "C" fn $entry_symbol(
            get_proc_address: $crate::sys::GDExtensionInterfaceGetProcAddress,
            library: $crate::sys::GDExtensionClassLibraryPtr,
            init: *mut $crate::sys::GDExtensionInitialization,
        ) -> $crate::sys::GDExtensionBool {
            $crate::init::__gdext_load_library::<$Library>(get_proc_address, library, init)
        }
    };
}
