/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Global enums and utility functions of the engine, as well as the logging macros.
//!
//! Errors and warnings are routed through the engine's `print_error`/`print_warning` so they show up in the debugger
//! with file and line. Before the engine is loaded (e.g. in unit tests), they go to stderr instead.

mod enums;
mod print;

pub use crate::{godot_error, godot_print, godot_script_error, godot_warn};
pub use enums::*;
pub use print::print;

use crate::sys;

/// Utility functions used by this crate, resolved once the core level is initialized.
pub(crate) const UTILITY_FUNCTION_KEYS: &[sys::UtilityFunctionKey] = &[sys::UtilityFunctionKey {
    function_name: "print",
    hash: 2648703342,
}];
