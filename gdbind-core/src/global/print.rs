/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Variant;
use crate::meta::{CallContext, CallFrame};
use crate::sys;

// https://stackoverflow.com/a/40234666
#[macro_export]
#[doc(hidden)]
macro_rules! inner_function {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! inner_godot_msg {
    ($godot_fn:ident; $fmt:literal $(, $args:expr)* $(,)?) => {{
        let msg = format!("{}\0", format_args!($fmt $(, $args)*));

        if $crate::sys::is_initialized() {
            let function = format!("{}\0", $crate::inner_function!());

            // SAFETY: all strings are null-terminated and outlive the call.
            unsafe {
                $crate::sys::interface_fn!($godot_fn)(
                    $crate::sys::c_str_from_str(&msg),
                    $crate::sys::c_str_from_str(&function),
                    $crate::sys::c_str_from_str(concat!(file!(), "\0")),
                    line!() as i32,
                    $crate::sys::SYS_FALSE, // no editor toast
                );
            }
        } else {
            eprintln!("[{}] {}", stringify!($godot_fn), &msg[..msg.len() - 1]);
        }
    }};
}

/// Pushes a warning message to the engine's debugger and to the OS terminal.
#[macro_export]
macro_rules! godot_warn {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::inner_godot_msg!(print_warning; $fmt $(, $args)*)
    };
}

/// Pushes an error message to the engine's debugger and to the OS terminal.
#[macro_export]
macro_rules! godot_error {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::inner_godot_msg!(print_error; $fmt $(, $args)*)
    };
}

/// Logs a script error to the engine's debugger and to the OS terminal.
#[macro_export]
macro_rules! godot_script_error {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::inner_godot_msg!(print_script_error; $fmt $(, $args)*)
    };
}

/// Prints to the engine console, through the `print` utility function.
#[macro_export]
macro_rules! godot_print {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::global::print(&[
            $crate::builtin::Variant::from(
                format!($fmt $(, $args)*)
            )
        ])
    };
}

/// Prints all arguments, stringified and concatenated, to the engine console.
///
/// Requires a loaded engine; use [`godot_print!`][crate::godot_print] for formatted output.
pub fn print(args: &[Variant]) {
    let function = sys::utility_function("print");

    let mut frame = CallFrame::with_capacity(CallContext::utility("print"), args.len());
    for arg in args {
        frame.arg(arg);
    }

    // SAFETY: `print` is a vararg utility taking `Variant` arguments and returning nothing.
    unsafe { frame.utility_ptrcall::<()>(function) }
}
