/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # Interface loading
//!
//! The extension entry point is passed a `get_proc_address` function pointer, which is used to load all other
//! GDExtension functions by name. Functions the running engine does not provide stay `None`; calling them through
//! [`interface_fn!`][crate::interface_fn] panics with the function's name.

use crate as sys;

use std::ffi::c_char;

/// Lowest engine version whose interface this library knows how to load.
pub const MIN_RUNTIME_VERSION: (u32, u32) = (4, 2);

macro_rules! declare_interface {
    ( $( $name:ident: $Fn:ty; )* ) => {
        /// All GDExtension functions used by this library, resolved once at startup.
        #[allow(non_snake_case)]
        #[derive(Copy, Clone)]
        pub struct GDExtensionInterface {
            $( pub $name: $Fn, )*
        }

        impl GDExtensionInterface {
            /// # Safety
            /// `get_proc_address` must be the function handed to the extension entry point.
            pub(crate) unsafe fn load(
                get_proc_address: unsafe extern "C" fn(*const c_char) -> sys::GDExtensionInterfaceFunctionPtr,
            ) -> Self {
                Self {
                    $(
                        $name: {
                            let raw = get_proc_address(sys::c_str(concat!(stringify!($name), "\0").as_bytes()));
                            // SAFETY: both are `Option<unsafe extern "C" fn(..)>` of identical size; the engine guarantees the
                            // signature behind each name.
                            std::mem::transmute::<sys::GDExtensionInterfaceFunctionPtr, $Fn>(raw)
                        },
                    )*
                }
            }

            /// Names of all functions that the engine did not provide.
            pub fn missing_functions(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $(
                    if self.$name.is_none() {
                        missing.push(stringify!($name));
                    }
                )*
                missing
            }
        }
    };
}

declare_interface! {
    get_godot_version: sys::GDExtensionInterfaceGetGodotVersion;
    print_error: sys::GDExtensionInterfacePrintError;
    print_warning: sys::GDExtensionInterfacePrintWarning;
    print_script_error: sys::GDExtensionInterfacePrintScriptError;

    variant_new_copy: sys::GDExtensionInterfaceVariantNewCopy;
    variant_new_nil: sys::GDExtensionInterfaceVariantNewNil;
    variant_destroy: sys::GDExtensionInterfaceVariantDestroy;
    variant_get_type: sys::GDExtensionInterfaceVariantGetType;
    variant_stringify: sys::GDExtensionInterfaceVariantStringify;
    variant_booleanize: sys::GDExtensionInterfaceVariantBooleanize;
    variant_evaluate: sys::GDExtensionInterfaceVariantEvaluate;
    get_variant_from_type_constructor: sys::GDExtensionInterfaceGetVariantFromTypeConstructor;
    get_variant_to_type_constructor: sys::GDExtensionInterfaceGetVariantToTypeConstructor;
    variant_get_ptr_constructor: sys::GDExtensionInterfaceVariantGetPtrConstructor;
    variant_get_ptr_destructor: sys::GDExtensionInterfaceVariantGetPtrDestructor;
    variant_get_ptr_operator_evaluator: sys::GDExtensionInterfaceVariantGetPtrOperatorEvaluator;
    variant_get_ptr_builtin_method: sys::GDExtensionInterfaceVariantGetPtrBuiltinMethod;
    variant_get_ptr_utility_function: sys::GDExtensionInterfaceVariantGetPtrUtilityFunction;

    string_new_with_utf8_chars_and_len: sys::GDExtensionInterfaceStringNewWithUtf8CharsAndLen;
    string_to_utf8_chars: sys::GDExtensionInterfaceStringToUtf8Chars;
    string_name_new_with_utf8_chars_and_len: sys::GDExtensionInterfaceStringNameNewWithUtf8CharsAndLen;

    array_operator_index: sys::GDExtensionInterfaceArrayOperatorIndex;
    array_set_typed: sys::GDExtensionInterfaceArraySetTyped;
    dictionary_operator_index: sys::GDExtensionInterfaceDictionaryOperatorIndex;
    packed_byte_array_operator_index: sys::GDExtensionInterfacePackedByteArrayOperatorIndex;
    xml_parser_open_buffer: sys::GDExtensionInterfaceXmlParserOpenBuffer;

    classdb_construct_object: sys::GDExtensionInterfaceClassdbConstructObject;
    classdb_get_method_bind: sys::GDExtensionInterfaceClassdbGetMethodBind;
    classdb_get_class_tag: sys::GDExtensionInterfaceClassdbGetClassTag;

    object_method_bind_ptrcall: sys::GDExtensionInterfaceObjectMethodBindPtrcall;
    object_method_bind_call: sys::GDExtensionInterfaceObjectMethodBindCall;
    object_destroy: sys::GDExtensionInterfaceObjectDestroy;
    global_get_singleton: sys::GDExtensionInterfaceGlobalGetSingleton;
    object_get_instance_id: sys::GDExtensionInterfaceObjectGetInstanceId;
    object_get_instance_from_id: sys::GDExtensionInterfaceObjectGetInstanceFromId;
    object_get_class_name: sys::GDExtensionInterfaceObjectGetClassName;
    object_cast_to: sys::GDExtensionInterfaceObjectCastTo;
}

/// Reads the engine version through `get_godot_version`.
///
/// # Safety
/// `get_proc_address` must be the function handed to the extension entry point.
#[deny(unsafe_op_in_unsafe_fn)]
pub(crate) unsafe fn runtime_version(
    get_proc_address: unsafe extern "C" fn(*const c_char) -> sys::GDExtensionInterfaceFunctionPtr,
) -> Result<sys::GDExtensionGodotVersion, sys::InitError> {
    // SAFETY: valid `get_proc_address` per precondition.
    let raw = unsafe { get_proc_address(sys::c_str(b"get_godot_version\0")) };

    // SAFETY: the engine registers `get_godot_version` with this signature.
    let get_godot_version = unsafe {
        std::mem::transmute::<sys::GDExtensionInterfaceFunctionPtr, sys::GDExtensionInterfaceGetGodotVersion>(raw)
    }
    .ok_or(sys::InitError::MissingFunction("get_godot_version"))?;

    let mut version = std::mem::MaybeUninit::<sys::GDExtensionGodotVersion>::zeroed();

    // SAFETY: `get_godot_version` fully writes the struct.
    unsafe {
        get_godot_version(version.as_mut_ptr());
        Ok(version.assume_init())
    }
}

/// Refuses to run against engines older than [`MIN_RUNTIME_VERSION`].
pub(crate) fn ensure_runtime_compatibility(version: &sys::GDExtensionGodotVersion) -> Result<(), sys::InitError> {
    let (min_major, min_minor) = MIN_RUNTIME_VERSION;

    if version.major != min_major || version.minor < min_minor {
        // SAFETY: the engine hands out a static, null-terminated version string (or null).
        let found = unsafe { sys::read_version_string(version) };
        return Err(sys::InitError::IncompatibleVersion { found });
    }

    Ok(())
}
