/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! C declarations of the GDExtension interface, as far as this library uses them.
//!
//! Names and layouts follow `gdextension_interface.h`. Enumerations are plain integer aliases with constants,
//! like the output of `bindgen` for C enums.

use std::ffi::{c_char, c_int, c_void};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Scalars and opaque pointers

pub type GDExtensionBool = u8;
pub type GDExtensionInt = i64;
pub type GDObjectInstanceID = u64;

pub type GDExtensionVariantPtr = *mut c_void;
pub type GDExtensionConstVariantPtr = *const c_void;
pub type GDExtensionUninitializedVariantPtr = *mut c_void;
pub type GDExtensionStringNamePtr = *mut c_void;
pub type GDExtensionConstStringNamePtr = *const c_void;
pub type GDExtensionUninitializedStringNamePtr = *mut c_void;
pub type GDExtensionStringPtr = *mut c_void;
pub type GDExtensionConstStringPtr = *const c_void;
pub type GDExtensionUninitializedStringPtr = *mut c_void;
pub type GDExtensionObjectPtr = *mut c_void;
pub type GDExtensionConstObjectPtr = *const c_void;
pub type GDExtensionTypePtr = *mut c_void;
pub type GDExtensionConstTypePtr = *const c_void;
pub type GDExtensionUninitializedTypePtr = *mut c_void;
pub type GDExtensionMethodBindPtr = *const c_void;
pub type GDExtensionClassLibraryPtr = *mut c_void;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Enumerations

pub type GDExtensionVariantType = u32;
pub const GDEXTENSION_VARIANT_TYPE_NIL: GDExtensionVariantType = 0;
pub const GDEXTENSION_VARIANT_TYPE_BOOL: GDExtensionVariantType = 1;
pub const GDEXTENSION_VARIANT_TYPE_INT: GDExtensionVariantType = 2;
pub const GDEXTENSION_VARIANT_TYPE_FLOAT: GDExtensionVariantType = 3;
pub const GDEXTENSION_VARIANT_TYPE_STRING: GDExtensionVariantType = 4;
pub const GDEXTENSION_VARIANT_TYPE_VECTOR2: GDExtensionVariantType = 5;
pub const GDEXTENSION_VARIANT_TYPE_VECTOR2I: GDExtensionVariantType = 6;
pub const GDEXTENSION_VARIANT_TYPE_RECT2: GDExtensionVariantType = 7;
pub const GDEXTENSION_VARIANT_TYPE_RECT2I: GDExtensionVariantType = 8;
pub const GDEXTENSION_VARIANT_TYPE_VECTOR3: GDExtensionVariantType = 9;
pub const GDEXTENSION_VARIANT_TYPE_VECTOR3I: GDExtensionVariantType = 10;
pub const GDEXTENSION_VARIANT_TYPE_TRANSFORM2D: GDExtensionVariantType = 11;
pub const GDEXTENSION_VARIANT_TYPE_VECTOR4: GDExtensionVariantType = 12;
pub const GDEXTENSION_VARIANT_TYPE_VECTOR4I: GDExtensionVariantType = 13;
pub const GDEXTENSION_VARIANT_TYPE_PLANE: GDExtensionVariantType = 14;
pub const GDEXTENSION_VARIANT_TYPE_QUATERNION: GDExtensionVariantType = 15;
pub const GDEXTENSION_VARIANT_TYPE_AABB: GDExtensionVariantType = 16;
pub const GDEXTENSION_VARIANT_TYPE_BASIS: GDExtensionVariantType = 17;
pub const GDEXTENSION_VARIANT_TYPE_TRANSFORM3D: GDExtensionVariantType = 18;
pub const GDEXTENSION_VARIANT_TYPE_PROJECTION: GDExtensionVariantType = 19;
pub const GDEXTENSION_VARIANT_TYPE_COLOR: GDExtensionVariantType = 20;
pub const GDEXTENSION_VARIANT_TYPE_STRING_NAME: GDExtensionVariantType = 21;
pub const GDEXTENSION_VARIANT_TYPE_NODE_PATH: GDExtensionVariantType = 22;
pub const GDEXTENSION_VARIANT_TYPE_RID: GDExtensionVariantType = 23;
pub const GDEXTENSION_VARIANT_TYPE_OBJECT: GDExtensionVariantType = 24;
pub const GDEXTENSION_VARIANT_TYPE_CALLABLE: GDExtensionVariantType = 25;
pub const GDEXTENSION_VARIANT_TYPE_SIGNAL: GDExtensionVariantType = 26;
pub const GDEXTENSION_VARIANT_TYPE_DICTIONARY: GDExtensionVariantType = 27;
pub const GDEXTENSION_VARIANT_TYPE_ARRAY: GDExtensionVariantType = 28;
pub const GDEXTENSION_VARIANT_TYPE_PACKED_BYTE_ARRAY: GDExtensionVariantType = 29;
pub const GDEXTENSION_VARIANT_TYPE_PACKED_INT32_ARRAY: GDExtensionVariantType = 30;
pub const GDEXTENSION_VARIANT_TYPE_PACKED_INT64_ARRAY: GDExtensionVariantType = 31;
pub const GDEXTENSION_VARIANT_TYPE_PACKED_FLOAT32_ARRAY: GDExtensionVariantType = 32;
pub const GDEXTENSION_VARIANT_TYPE_PACKED_FLOAT64_ARRAY: GDExtensionVariantType = 33;
pub const GDEXTENSION_VARIANT_TYPE_PACKED_STRING_ARRAY: GDExtensionVariantType = 34;
pub const GDEXTENSION_VARIANT_TYPE_PACKED_VECTOR2_ARRAY: GDExtensionVariantType = 35;
pub const GDEXTENSION_VARIANT_TYPE_PACKED_VECTOR3_ARRAY: GDExtensionVariantType = 36;
pub const GDEXTENSION_VARIANT_TYPE_PACKED_COLOR_ARRAY: GDExtensionVariantType = 37;
pub const GDEXTENSION_VARIANT_TYPE_PACKED_VECTOR4_ARRAY: GDExtensionVariantType = 38;
pub const GDEXTENSION_VARIANT_TYPE_VARIANT_MAX: GDExtensionVariantType = 39;

pub type GDExtensionVariantOperator = u32;
pub const GDEXTENSION_VARIANT_OP_EQUAL: GDExtensionVariantOperator = 0;
pub const GDEXTENSION_VARIANT_OP_NOT_EQUAL: GDExtensionVariantOperator = 1;
pub const GDEXTENSION_VARIANT_OP_LESS: GDExtensionVariantOperator = 2;
pub const GDEXTENSION_VARIANT_OP_LESS_EQUAL: GDExtensionVariantOperator = 3;
pub const GDEXTENSION_VARIANT_OP_GREATER: GDExtensionVariantOperator = 4;
pub const GDEXTENSION_VARIANT_OP_GREATER_EQUAL: GDExtensionVariantOperator = 5;
pub const GDEXTENSION_VARIANT_OP_ADD: GDExtensionVariantOperator = 6;
pub const GDEXTENSION_VARIANT_OP_SUBTRACT: GDExtensionVariantOperator = 7;
pub const GDEXTENSION_VARIANT_OP_MULTIPLY: GDExtensionVariantOperator = 8;
pub const GDEXTENSION_VARIANT_OP_DIVIDE: GDExtensionVariantOperator = 9;
pub const GDEXTENSION_VARIANT_OP_MAX: GDExtensionVariantOperator = 25;

pub type GDExtensionCallErrorType = u32;
pub const GDEXTENSION_CALL_OK: GDExtensionCallErrorType = 0;
pub const GDEXTENSION_CALL_ERROR_INVALID_METHOD: GDExtensionCallErrorType = 1;
pub const GDEXTENSION_CALL_ERROR_INVALID_ARGUMENT: GDExtensionCallErrorType = 2;
pub const GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS: GDExtensionCallErrorType = 3;
pub const GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS: GDExtensionCallErrorType = 4;
pub const GDEXTENSION_CALL_ERROR_INSTANCE_IS_NULL: GDExtensionCallErrorType = 5;
pub const GDEXTENSION_CALL_ERROR_METHOD_NOT_CONST: GDExtensionCallErrorType = 6;

pub type GDExtensionInitializationLevel = u32;
pub const GDEXTENSION_INITIALIZATION_CORE: GDExtensionInitializationLevel = 0;
pub const GDEXTENSION_INITIALIZATION_SERVERS: GDExtensionInitializationLevel = 1;
pub const GDEXTENSION_INITIALIZATION_SCENE: GDExtensionInitializationLevel = 2;
pub const GDEXTENSION_INITIALIZATION_EDITOR: GDExtensionInitializationLevel = 3;
pub const GDEXTENSION_MAX_INITIALIZATION_LEVEL: GDExtensionInitializationLevel = 4;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Structs

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct GDExtensionCallError {
    pub error: GDExtensionCallErrorType,
    pub argument: i32,
    pub expected: i32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct GDExtensionGodotVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub string: *const c_char,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct GDExtensionInitialization {
    pub minimum_initialization_level: GDExtensionInitializationLevel,
    pub userdata: *mut c_void,
    pub initialize: Option<
        unsafe extern "C" fn(userdata: *mut c_void, p_level: GDExtensionInitializationLevel),
    >,
    pub deinitialize: Option<
        unsafe extern "C" fn(userdata: *mut c_void, p_level: GDExtensionInitializationLevel),
    >,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Function pointers handed out by the engine

pub type GDExtensionInterfaceFunctionPtr = Option<unsafe extern "C" fn()>;

pub type GDExtensionInterfaceGetProcAddress =
    Option<unsafe extern "C" fn(p_function_name: *const c_char) -> GDExtensionInterfaceFunctionPtr>;

pub type GDExtensionInitializationFunction = Option<
    unsafe extern "C" fn(
        p_get_proc_address: GDExtensionInterfaceGetProcAddress,
        p_library: GDExtensionClassLibraryPtr,
        r_initialization: *mut GDExtensionInitialization,
    ) -> GDExtensionBool,
>;

pub type GDExtensionVariantFromTypeConstructorFunc =
    Option<unsafe extern "C" fn(GDExtensionUninitializedVariantPtr, GDExtensionTypePtr)>;
pub type GDExtensionTypeFromVariantConstructorFunc =
    Option<unsafe extern "C" fn(GDExtensionUninitializedTypePtr, GDExtensionVariantPtr)>;
pub type GDExtensionPtrConstructor = Option<
    unsafe extern "C" fn(p_base: GDExtensionUninitializedTypePtr, p_args: *const GDExtensionConstTypePtr),
>;
pub type GDExtensionPtrDestructor = Option<unsafe extern "C" fn(p_base: GDExtensionTypePtr)>;
pub type GDExtensionPtrOperatorEvaluator = Option<
    unsafe extern "C" fn(
        p_left: GDExtensionConstTypePtr,
        p_right: GDExtensionConstTypePtr,
        r_result: GDExtensionTypePtr,
    ),
>;
pub type GDExtensionPtrBuiltInMethod = Option<
    unsafe extern "C" fn(
        p_base: GDExtensionTypePtr,
        p_args: *const GDExtensionConstTypePtr,
        r_return: GDExtensionTypePtr,
        p_argument_count: c_int,
    ),
>;
pub type GDExtensionPtrUtilityFunction = Option<
    unsafe extern "C" fn(
        r_return: GDExtensionTypePtr,
        p_args: *const GDExtensionConstTypePtr,
        p_argument_count: c_int,
    ),
>;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface functions, resolved by name through `get_proc_address`

pub type GDExtensionInterfaceGetGodotVersion =
    Option<unsafe extern "C" fn(r_godot_version: *mut GDExtensionGodotVersion)>;

pub type GDExtensionInterfacePrintError = Option<
    unsafe extern "C" fn(
        p_description: *const c_char,
        p_function: *const c_char,
        p_file: *const c_char,
        p_line: i32,
        p_editor_notify: GDExtensionBool,
    ),
>;
pub type GDExtensionInterfacePrintWarning = GDExtensionInterfacePrintError;
pub type GDExtensionInterfacePrintScriptError = GDExtensionInterfacePrintError;

pub type GDExtensionInterfaceVariantNewCopy =
    Option<unsafe extern "C" fn(r_dest: GDExtensionUninitializedVariantPtr, p_src: GDExtensionConstVariantPtr)>;
pub type GDExtensionInterfaceVariantNewNil =
    Option<unsafe extern "C" fn(r_dest: GDExtensionUninitializedVariantPtr)>;
pub type GDExtensionInterfaceVariantDestroy = Option<unsafe extern "C" fn(p_self: GDExtensionVariantPtr)>;
pub type GDExtensionInterfaceVariantGetType =
    Option<unsafe extern "C" fn(p_self: GDExtensionConstVariantPtr) -> GDExtensionVariantType>;
pub type GDExtensionInterfaceVariantStringify =
    Option<unsafe extern "C" fn(p_self: GDExtensionConstVariantPtr, r_ret: GDExtensionStringPtr)>;
pub type GDExtensionInterfaceVariantBooleanize =
    Option<unsafe extern "C" fn(p_self: GDExtensionConstVariantPtr) -> GDExtensionBool>;
pub type GDExtensionInterfaceVariantEvaluate = Option<
    unsafe extern "C" fn(
        p_op: GDExtensionVariantOperator,
        p_a: GDExtensionConstVariantPtr,
        p_b: GDExtensionConstVariantPtr,
        r_return: GDExtensionUninitializedVariantPtr,
        r_valid: *mut GDExtensionBool,
    ),
>;
pub type GDExtensionInterfaceGetVariantFromTypeConstructor =
    Option<unsafe extern "C" fn(p_type: GDExtensionVariantType) -> GDExtensionVariantFromTypeConstructorFunc>;
pub type GDExtensionInterfaceGetVariantToTypeConstructor =
    Option<unsafe extern "C" fn(p_type: GDExtensionVariantType) -> GDExtensionTypeFromVariantConstructorFunc>;
pub type GDExtensionInterfaceVariantGetPtrConstructor = Option<
    unsafe extern "C" fn(p_type: GDExtensionVariantType, p_constructor: i32) -> GDExtensionPtrConstructor,
>;
pub type GDExtensionInterfaceVariantGetPtrDestructor =
    Option<unsafe extern "C" fn(p_type: GDExtensionVariantType) -> GDExtensionPtrDestructor>;
pub type GDExtensionInterfaceVariantGetPtrOperatorEvaluator = Option<
    unsafe extern "C" fn(
        p_operator: GDExtensionVariantOperator,
        p_type_a: GDExtensionVariantType,
        p_type_b: GDExtensionVariantType,
    ) -> GDExtensionPtrOperatorEvaluator,
>;
pub type GDExtensionInterfaceVariantGetPtrBuiltinMethod = Option<
    unsafe extern "C" fn(
        p_type: GDExtensionVariantType,
        p_method: GDExtensionConstStringNamePtr,
        p_hash: GDExtensionInt,
    ) -> GDExtensionPtrBuiltInMethod,
>;
pub type GDExtensionInterfaceVariantGetPtrUtilityFunction = Option<
    unsafe extern "C" fn(
        p_function: GDExtensionConstStringNamePtr,
        p_hash: GDExtensionInt,
    ) -> GDExtensionPtrUtilityFunction,
>;

pub type GDExtensionInterfaceStringNewWithUtf8CharsAndLen = Option<
    unsafe extern "C" fn(
        r_dest: GDExtensionUninitializedStringPtr,
        p_contents: *const c_char,
        p_size: GDExtensionInt,
    ),
>;
pub type GDExtensionInterfaceStringToUtf8Chars = Option<
    unsafe extern "C" fn(
        p_self: GDExtensionConstStringPtr,
        r_text: *mut c_char,
        p_max_write_length: GDExtensionInt,
    ) -> GDExtensionInt,
>;
pub type GDExtensionInterfaceStringNameNewWithUtf8CharsAndLen = Option<
    unsafe extern "C" fn(
        r_dest: GDExtensionUninitializedStringNamePtr,
        p_contents: *const c_char,
        p_size: GDExtensionInt,
    ),
>;

pub type GDExtensionInterfaceArrayOperatorIndex = Option<
    unsafe extern "C" fn(p_self: GDExtensionTypePtr, p_index: GDExtensionInt) -> GDExtensionVariantPtr,
>;
pub type GDExtensionInterfaceArraySetTyped = Option<
    unsafe extern "C" fn(
        p_self: GDExtensionTypePtr,
        p_type: GDExtensionVariantType,
        p_class_name: GDExtensionConstStringNamePtr,
        p_script: GDExtensionConstVariantPtr,
    ),
>;
pub type GDExtensionInterfaceDictionaryOperatorIndex = Option<
    unsafe extern "C" fn(p_self: GDExtensionTypePtr, p_key: GDExtensionConstVariantPtr) -> GDExtensionVariantPtr,
>;
pub type GDExtensionInterfacePackedByteArrayOperatorIndex =
    Option<unsafe extern "C" fn(p_self: GDExtensionTypePtr, p_index: GDExtensionInt) -> *mut u8>;
pub type GDExtensionInterfaceXmlParserOpenBuffer = Option<
    unsafe extern "C" fn(p_instance: GDExtensionObjectPtr, p_buffer: *const u8, p_size: usize) -> GDExtensionInt,
>;

pub type GDExtensionInterfaceClassdbConstructObject =
    Option<unsafe extern "C" fn(p_classname: GDExtensionConstStringNamePtr) -> GDExtensionObjectPtr>;
pub type GDExtensionInterfaceClassdbGetMethodBind = Option<
    unsafe extern "C" fn(
        p_classname: GDExtensionConstStringNamePtr,
        p_methodname: GDExtensionConstStringNamePtr,
        p_hash: GDExtensionInt,
    ) -> GDExtensionMethodBindPtr,
>;
pub type GDExtensionInterfaceClassdbGetClassTag =
    Option<unsafe extern "C" fn(p_classname: GDExtensionConstStringNamePtr) -> *mut c_void>;

pub type GDExtensionInterfaceObjectMethodBindPtrcall = Option<
    unsafe extern "C" fn(
        p_method_bind: GDExtensionMethodBindPtr,
        p_instance: GDExtensionObjectPtr,
        p_args: *const GDExtensionConstTypePtr,
        r_ret: GDExtensionTypePtr,
    ),
>;
pub type GDExtensionInterfaceObjectMethodBindCall = Option<
    unsafe extern "C" fn(
        p_method_bind: GDExtensionMethodBindPtr,
        p_instance: GDExtensionObjectPtr,
        p_args: *const GDExtensionConstVariantPtr,
        p_arg_count: GDExtensionInt,
        r_ret: GDExtensionUninitializedVariantPtr,
        r_error: *mut GDExtensionCallError,
    ),
>;
pub type GDExtensionInterfaceObjectDestroy = Option<unsafe extern "C" fn(p_o: GDExtensionObjectPtr)>;
pub type GDExtensionInterfaceGlobalGetSingleton =
    Option<unsafe extern "C" fn(p_name: GDExtensionConstStringNamePtr) -> GDExtensionObjectPtr>;
pub type GDExtensionInterfaceObjectGetInstanceId =
    Option<unsafe extern "C" fn(p_object: GDExtensionConstObjectPtr) -> GDObjectInstanceID>;
pub type GDExtensionInterfaceObjectGetInstanceFromId =
    Option<unsafe extern "C" fn(p_instance_id: GDObjectInstanceID) -> GDExtensionObjectPtr>;
pub type GDExtensionInterfaceObjectGetClassName = Option<
    unsafe extern "C" fn(
        p_object: GDExtensionConstObjectPtr,
        p_library: GDExtensionClassLibraryPtr,
        r_class_name: GDExtensionUninitializedStringNamePtr,
    ) -> GDExtensionBool,
>;
pub type GDExtensionInterfaceObjectCastTo = Option<
    unsafe extern "C" fn(p_object: GDExtensionConstObjectPtr, p_class_tag: *mut c_void) -> GDExtensionObjectPtr,
>;
