/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Internals used by the public macros and by the entry point. Not part of the public API.

use std::sync::atomic;

use crate::global::godot_error;

pub use crate::sys::out;

/// Level:
/// - 0: no error printing (during expected panics in tests)
/// - 1: print panics caught at the FFI boundary
static ERROR_PRINT_LEVEL: atomic::AtomicU8 = atomic::AtomicU8::new(1);

pub fn set_error_print_level(level: u8) -> u8 {
    assert!(level <= 1);
    ERROR_PRINT_LEVEL.swap(level, atomic::Ordering::Relaxed)
}

fn has_error_print_level(level: u8) -> bool {
    ERROR_PRINT_LEVEL.load(atomic::Ordering::Relaxed) >= level
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Panic handling

pub fn extract_panic_message(err: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = err.downcast_ref::<&'static str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        format!("(panic of type ID {:?})", err.type_id())
    }
}

fn format_panic_message(msg: &str) -> String {
    // Continuation lines are indented below the first.
    let lbegin = "\n  ";
    let indented = msg.replace('\n', lbegin);

    if indented.len() != msg.len() {
        format!("[panic]{lbegin}{indented}")
    } else {
        format!("[panic]  {msg}")
    }
}

/// Executes `code`. If it panics, the panic is caught and reported to the engine instead of unwinding into C.
///
/// Returns `Err(message)` if a panic occurred, and `Ok(result)` with the result of `code` otherwise.
pub fn handle_panic<E, F, R, S>(error_context: E, code: F) -> Result<R, String>
where
    E: FnOnce() -> S,
    F: FnOnce() -> R + std::panic::UnwindSafe,
    S: std::fmt::Display,
{
    match std::panic::catch_unwind(code) {
        Ok(result) => Ok(result),
        Err(err) => {
            let msg = format_panic_message(&extract_panic_message(err));

            if has_error_print_level(1) {
                godot_error!("Rust function panicked.\n  Context: {}\n{}", error_context(), msg);
            }

            Err(msg)
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
