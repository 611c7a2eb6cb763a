/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Entry side of the interface: `get_proc_address`, the engine version and the message log.

use std::cell::RefCell;
use std::ffi::{c_char, CStr, CString};

use gdbind_ffi as sys;

use crate::{builtins, classdb};

/// Version the mock reports to the extension.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct EngineVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl EngineVersion {
    pub const DEFAULT: EngineVersion = EngineVersion {
        major: 4,
        minor: 3,
        patch: 0,
    };

    /// Human-readable form, as in `get_godot_version`.
    pub fn to_display_string(self) -> String {
        let Self { major, minor, patch } = self;
        if patch == 0 {
            format!("Godot Engine v{major}.{minor}.stable.mock")
        } else {
            format!("Godot Engine v{major}.{minor}.{patch}.stable.mock")
        }
    }

    pub(crate) fn hex(self) -> i64 {
        i64::from((self.major << 16) | (self.minor << 8) | self.patch)
    }
}

/// Severity of a captured message.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MessageKind {
    /// Output of the `print` utility function.
    Print,
    Warning,
    Error,
    ScriptError,
}

/// A line the engine would have written to its output.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
    /// Source location for warnings and errors; empty for prints and the mock's own errors.
    pub function: String,
    pub file: String,
    pub line: i32,
}

thread_local! {
    static VERSION: RefCell<(EngineVersion, CString)> = RefCell::new((EngineVersion::DEFAULT, version_c_string(EngineVersion::DEFAULT)));
    static MESSAGES: RefCell<Vec<Message>> = const { RefCell::new(Vec::new()) };
}

fn version_c_string(version: EngineVersion) -> CString {
    // Formatted numbers never contain NUL.
    CString::new(version.to_display_string()).unwrap_or_default()
}

pub(crate) fn set_version(version: EngineVersion) {
    VERSION.with_borrow_mut(|stored| *stored = (version, version_c_string(version)));
}

pub(crate) fn version() -> EngineVersion {
    VERSION.with_borrow(|(version, _)| *version)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Messages

/// Removes and returns all messages captured on this thread.
pub fn take_messages() -> Vec<Message> {
    MESSAGES.with_borrow_mut(std::mem::take)
}

pub(crate) fn emit(kind: MessageKind, text: String, function: String, file: String, line: i32) {
    match kind {
        MessageKind::Print => println!("{text}"),
        MessageKind::Warning => eprintln!("WARNING: {text}\n   at: {function} ({file}:{line})"),
        MessageKind::Error => eprintln!("ERROR: {text}\n   at: {function} ({file}:{line})"),
        MessageKind::ScriptError => eprintln!("SCRIPT ERROR: {text}\n   at: {function} ({file}:{line})"),
    }

    MESSAGES.with_borrow_mut(|messages| {
        messages.push(Message {
            kind,
            text,
            function,
            file,
            line,
        })
    });
}

/// Reports an error detected by the engine itself, e.g. an invalid argument.
pub(crate) fn report_error(text: impl Into<String>) {
    emit(MessageKind::Error, text.into(), String::new(), String::new(), 0);
}

unsafe fn lossy(text: *const c_char) -> String {
    if text.is_null() {
        String::new()
    } else {
        CStr::from_ptr(text).to_string_lossy().into_owned()
    }
}

unsafe fn print_with(
    kind: MessageKind,
    description: *const c_char,
    function: *const c_char,
    file: *const c_char,
    line: i32,
) {
    emit(kind, lossy(description), lossy(function), lossy(file), line);
}

unsafe extern "C" fn print_error(
    description: *const c_char,
    function: *const c_char,
    file: *const c_char,
    line: i32,
    _editor_notify: sys::GDExtensionBool,
) {
    print_with(MessageKind::Error, description, function, file, line);
}

unsafe extern "C" fn print_warning(
    description: *const c_char,
    function: *const c_char,
    file: *const c_char,
    line: i32,
    _editor_notify: sys::GDExtensionBool,
) {
    print_with(MessageKind::Warning, description, function, file, line);
}

unsafe extern "C" fn print_script_error(
    description: *const c_char,
    function: *const c_char,
    file: *const c_char,
    line: i32,
    _editor_notify: sys::GDExtensionBool,
) {
    print_with(MessageKind::ScriptError, description, function, file, line);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Version

unsafe extern "C" fn get_godot_version(r_version: *mut sys::GDExtensionGodotVersion) {
    VERSION.with_borrow(|(version, text)| {
        // The string stays valid until the version is changed, which only happens between loads.
        *r_version = sys::GDExtensionGodotVersion {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            string: text.as_ptr(),
        };
    });
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Function lookup

/// Resolves an interface function by name, like the engine's `get_proc_address`.
pub(crate) unsafe extern "C" fn get_proc_address(name: *const c_char) -> sys::GDExtensionInterfaceFunctionPtr {
    if name.is_null() {
        return None;
    }

    let name = CStr::from_ptr(name).to_str().unwrap_or_default();
    let function: *const () = match name {
        "get_godot_version" => get_godot_version as *const (),
        "print_error" => print_error as *const (),
        "print_warning" => print_warning as *const (),
        "print_script_error" => print_script_error as *const (),

        "variant_new_copy" => builtins::variant_new_copy as *const (),
        "variant_new_nil" => builtins::variant_new_nil as *const (),
        "variant_destroy" => builtins::variant_destroy as *const (),
        "variant_get_type" => builtins::variant_get_type as *const (),
        "variant_stringify" => builtins::variant_stringify as *const (),
        "variant_booleanize" => builtins::variant_booleanize as *const (),
        "variant_evaluate" => builtins::variant_evaluate as *const (),
        "get_variant_from_type_constructor" => builtins::get_variant_from_type_constructor as *const (),
        "get_variant_to_type_constructor" => builtins::get_variant_to_type_constructor as *const (),
        "variant_get_ptr_constructor" => builtins::variant_get_ptr_constructor as *const (),
        "variant_get_ptr_destructor" => builtins::variant_get_ptr_destructor as *const (),
        "variant_get_ptr_operator_evaluator" => builtins::variant_get_ptr_operator_evaluator as *const (),
        "variant_get_ptr_builtin_method" => builtins::variant_get_ptr_builtin_method as *const (),
        "variant_get_ptr_utility_function" => builtins::variant_get_ptr_utility_function as *const (),

        "string_new_with_utf8_chars_and_len" => builtins::string_new_with_utf8_chars_and_len as *const (),
        "string_to_utf8_chars" => builtins::string_to_utf8_chars as *const (),
        "string_name_new_with_utf8_chars_and_len" => builtins::string_new_with_utf8_chars_and_len as *const (),

        "array_operator_index" => builtins::array_operator_index as *const (),
        "array_set_typed" => builtins::array_set_typed as *const (),
        "dictionary_operator_index" => builtins::dictionary_operator_index as *const (),
        "packed_byte_array_operator_index" => builtins::packed_byte_array_operator_index as *const (),
        "xml_parser_open_buffer" => crate::classes::xml_parser_open_buffer as *const (),

        "classdb_construct_object" => classdb::classdb_construct_object as *const (),
        "classdb_get_method_bind" => classdb::classdb_get_method_bind as *const (),
        "classdb_get_class_tag" => classdb::classdb_get_class_tag as *const (),

        "object_method_bind_ptrcall" => classdb::object_method_bind_ptrcall as *const (),
        "object_method_bind_call" => classdb::object_method_bind_call as *const (),
        "object_destroy" => classdb::object_destroy as *const (),
        "global_get_singleton" => classdb::global_get_singleton as *const (),
        "object_get_instance_id" => classdb::object_get_instance_id as *const (),
        "object_get_instance_from_id" => classdb::object_get_instance_from_id as *const (),
        "object_get_class_name" => classdb::object_get_class_name as *const (),
        "object_cast_to" => classdb::object_cast_to as *const (),

        _ => return None,
    };

    // SAFETY: the extension transmutes the pointer back to the signature registered under `name`.
    Some(std::mem::transmute::<*const (), unsafe extern "C" fn()>(function))
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
