/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Variant functions, builtin constructors, conversions, operators and methods.

use std::cell::RefCell;
use std::ffi::{c_char, c_int, CStr};
use std::ptr;
use std::rc::Rc;

use gdbind_ffi as sys;
use sys::VariantType;

use crate::interface::{self, report_error, MessageKind};
use crate::objects::{self, ObjectRef};
use crate::value::{
    borrow, borrow_mut, destroy, emplace, evaluate, ArrayData, MockArray, MockDictionary, MockPackedBytes, MockString,
    MockVariant, Value,
};

/// `Error::ERR_INVALID_PARAMETER`.
const ERR_INVALID_PARAMETER: i64 = 31;

type ToVariantFn = unsafe extern "C" fn(sys::GDExtensionUninitializedVariantPtr, sys::GDExtensionTypePtr);
type FromVariantFn = unsafe extern "C" fn(sys::GDExtensionUninitializedTypePtr, sys::GDExtensionVariantPtr);
type ConstructorFn = unsafe extern "C" fn(sys::GDExtensionUninitializedTypePtr, *const sys::GDExtensionConstTypePtr);
type DestructorFn = unsafe extern "C" fn(sys::GDExtensionTypePtr);
type OperatorFn = unsafe extern "C" fn(sys::GDExtensionConstTypePtr, sys::GDExtensionConstTypePtr, sys::GDExtensionTypePtr);
type BuiltinFn = unsafe extern "C" fn(sys::GDExtensionTypePtr, *const sys::GDExtensionConstTypePtr, sys::GDExtensionTypePtr, c_int);

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Variant

pub(crate) unsafe extern "C" fn variant_new_copy(r_dest: sys::GDExtensionUninitializedVariantPtr, p_src: sys::GDExtensionConstVariantPtr) {
    let value = borrow::<MockVariant>(p_src).value().clone();
    emplace(r_dest, MockVariant::new(value));
}

pub(crate) unsafe extern "C" fn variant_new_nil(r_dest: sys::GDExtensionUninitializedVariantPtr) {
    emplace(r_dest, MockVariant::new(Value::Nil));
}

pub(crate) unsafe extern "C" fn variant_destroy(p_self: sys::GDExtensionVariantPtr) {
    destroy::<MockVariant>(p_self);
}

pub(crate) unsafe extern "C" fn variant_get_type(p_self: sys::GDExtensionConstVariantPtr) -> sys::GDExtensionVariantType {
    borrow::<MockVariant>(p_self).value().variant_type().sys()
}

/// Writes into an initialized string.
pub(crate) unsafe extern "C" fn variant_stringify(p_self: sys::GDExtensionConstVariantPtr, r_ret: sys::GDExtensionStringPtr) {
    let text = borrow::<MockVariant>(p_self).value().stringify();
    borrow_mut::<MockString>(r_ret).set(text);
}

pub(crate) unsafe extern "C" fn variant_booleanize(p_self: sys::GDExtensionConstVariantPtr) -> sys::GDExtensionBool {
    sys::bool_to_sys(borrow::<MockVariant>(p_self).value().booleanize())
}

pub(crate) unsafe extern "C" fn variant_evaluate(
    p_op: sys::GDExtensionVariantOperator,
    p_a: sys::GDExtensionConstVariantPtr,
    p_b: sys::GDExtensionConstVariantPtr,
    r_return: sys::GDExtensionUninitializedVariantPtr,
    r_valid: *mut sys::GDExtensionBool,
) {
    let result = evaluate(p_op, borrow::<MockVariant>(p_a).value(), borrow::<MockVariant>(p_b).value());

    *r_valid = sys::bool_to_sys(result.is_some());
    emplace(r_return, MockVariant::new(result.unwrap_or(Value::Nil)));
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversions between variants and typed storage

/// Conversions of types whose storage is the plain value.
macro_rules! plain_conversions {
    ( $( $to_variant:ident / $from_variant:ident: $Ty:ty => $Variant:ident, )* ) => {
        $(
            unsafe extern "C" fn $to_variant(r_dest: sys::GDExtensionUninitializedVariantPtr, p_src: sys::GDExtensionTypePtr) {
                let value = ptr::read(p_src as *const $Ty);
                emplace(r_dest, MockVariant::new(Value::$Variant(value)));
            }

            unsafe extern "C" fn $from_variant(r_dest: sys::GDExtensionUninitializedTypePtr, p_src: sys::GDExtensionVariantPtr) {
                let value: $Ty = match borrow::<MockVariant>(p_src).value() {
                    Value::$Variant(value) => *value,
                    other => {
                        report_error(format!(
                            "cannot convert variant of type {} to {}",
                            other.variant_type().name(),
                            VariantType::$Variant.name()
                        ));
                        Default::default()
                    }
                };
                emplace(r_dest, value);
            }
        )*
    };
}

plain_conversions! {
    bool_to_variant / bool_from_variant: bool => Bool,
    int_to_variant / int_from_variant: i64 => Int,
    float_to_variant / float_from_variant: f64 => Float,
    vector2_to_variant / vector2_from_variant: [f32; 2] => Vector2,
    vector2i_to_variant / vector2i_from_variant: [i32; 2] => Vector2i,
    vector3_to_variant / vector3_from_variant: [f32; 3] => Vector3,
    vector3i_to_variant / vector3i_from_variant: [i32; 3] => Vector3i,
    color_to_variant / color_from_variant: [f32; 4] => Color,
}

unsafe extern "C" fn string_to_variant(r_dest: sys::GDExtensionUninitializedVariantPtr, p_src: sys::GDExtensionTypePtr) {
    let text = borrow::<MockString>(p_src).as_str().to_string();
    emplace(r_dest, MockVariant::new(Value::String(text)));
}

unsafe extern "C" fn string_from_variant(r_dest: sys::GDExtensionUninitializedTypePtr, p_src: sys::GDExtensionVariantPtr) {
    let text = borrow::<MockVariant>(p_src).value().as_str().to_string();
    emplace(r_dest, MockString::new(text));
}

unsafe extern "C" fn string_name_to_variant(r_dest: sys::GDExtensionUninitializedVariantPtr, p_src: sys::GDExtensionTypePtr) {
    let text = borrow::<MockString>(p_src).as_str().to_string();
    emplace(r_dest, MockVariant::new(Value::StringName(text)));
}

/// Storage is a pointer to the object pointer. The variant takes its own reference.
unsafe extern "C" fn object_to_variant(r_dest: sys::GDExtensionUninitializedVariantPtr, p_src: sys::GDExtensionTypePtr) {
    let addr = *(p_src as *const sys::GDExtensionObjectPtr) as usize;
    let value = ObjectRef::acquire(addr).map_or(Value::Nil, Value::Object);
    emplace(r_dest, MockVariant::new(value));
}

/// Writes the object pointer, or null for dead objects and non-objects. Does not add a reference.
unsafe extern "C" fn object_from_variant(r_dest: sys::GDExtensionUninitializedTypePtr, p_src: sys::GDExtensionVariantPtr) {
    let addr = borrow::<MockVariant>(p_src).value().object_addr();
    let object_ptr = if objects::is_alive(addr) { addr as sys::GDExtensionObjectPtr } else { ptr::null_mut() };
    emplace(r_dest, object_ptr);
}

unsafe extern "C" fn dictionary_to_variant(r_dest: sys::GDExtensionUninitializedVariantPtr, p_src: sys::GDExtensionTypePtr) {
    let data = borrow::<MockDictionary>(p_src).data.clone();
    emplace(r_dest, MockVariant::new(Value::Dictionary(data)));
}

unsafe extern "C" fn dictionary_from_variant(r_dest: sys::GDExtensionUninitializedTypePtr, p_src: sys::GDExtensionVariantPtr) {
    let data = match borrow::<MockVariant>(p_src).value() {
        Value::Dictionary(data) => data.clone(),
        _ => Rc::new(RefCell::new(crate::value::DictionaryData { entries: Vec::new() })),
    };
    emplace(r_dest, MockDictionary { data });
}

unsafe extern "C" fn array_to_variant(r_dest: sys::GDExtensionUninitializedVariantPtr, p_src: sys::GDExtensionTypePtr) {
    let data = borrow::<MockArray>(p_src).data.clone();
    emplace(r_dest, MockVariant::new(Value::Array(data)));
}

unsafe extern "C" fn array_from_variant(r_dest: sys::GDExtensionUninitializedTypePtr, p_src: sys::GDExtensionVariantPtr) {
    let data = match borrow::<MockVariant>(p_src).value() {
        Value::Array(data) => data.clone(),
        _ => ArrayData::new_shared(Vec::new()),
    };
    emplace(r_dest, MockArray { data });
}

unsafe extern "C" fn packed_byte_array_to_variant(r_dest: sys::GDExtensionUninitializedVariantPtr, p_src: sys::GDExtensionTypePtr) {
    let data = borrow::<MockPackedBytes>(p_src).shared();
    emplace(r_dest, MockVariant::new(Value::PackedByteArray(data)));
}

unsafe extern "C" fn packed_byte_array_from_variant(
    r_dest: sys::GDExtensionUninitializedTypePtr,
    p_src: sys::GDExtensionVariantPtr,
) {
    let data = match borrow::<MockVariant>(p_src).value() {
        Value::PackedByteArray(data) => data.clone(),
        _ => Rc::new(RefCell::new(Vec::new())),
    };
    emplace(r_dest, MockPackedBytes::new(data));
}

pub(crate) unsafe extern "C" fn get_variant_from_type_constructor(
    p_type: sys::GDExtensionVariantType,
) -> sys::GDExtensionVariantFromTypeConstructorFunc {
    let converter: ToVariantFn = match VariantType::from_sys(p_type) {
        VariantType::Bool => bool_to_variant,
        VariantType::Int => int_to_variant,
        VariantType::Float => float_to_variant,
        VariantType::String => string_to_variant,
        VariantType::Vector2 => vector2_to_variant,
        VariantType::Vector2i => vector2i_to_variant,
        VariantType::Vector3 => vector3_to_variant,
        VariantType::Vector3i => vector3i_to_variant,
        VariantType::Color => color_to_variant,
        VariantType::StringName => string_name_to_variant,
        VariantType::Object => object_to_variant,
        VariantType::Dictionary => dictionary_to_variant,
        VariantType::Array => array_to_variant,
        VariantType::PackedByteArray => packed_byte_array_to_variant,
        _ => return None,
    };
    Some(converter)
}

pub(crate) unsafe extern "C" fn get_variant_to_type_constructor(
    p_type: sys::GDExtensionVariantType,
) -> sys::GDExtensionTypeFromVariantConstructorFunc {
    let converter: FromVariantFn = match VariantType::from_sys(p_type) {
        VariantType::Bool => bool_from_variant,
        VariantType::Int => int_from_variant,
        VariantType::Float => float_from_variant,
        VariantType::String | VariantType::StringName => string_from_variant,
        VariantType::Vector2 => vector2_from_variant,
        VariantType::Vector2i => vector2i_from_variant,
        VariantType::Vector3 => vector3_from_variant,
        VariantType::Vector3i => vector3i_from_variant,
        VariantType::Color => color_from_variant,
        VariantType::Object => object_from_variant,
        VariantType::Dictionary => dictionary_from_variant,
        VariantType::Array => array_from_variant,
        VariantType::PackedByteArray => packed_byte_array_from_variant,
        _ => return None,
    };
    Some(converter)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Constructors and destructors

unsafe extern "C" fn string_construct_default(r_dest: sys::GDExtensionUninitializedTypePtr, _args: *const sys::GDExtensionConstTypePtr) {
    emplace(r_dest, MockString::new(String::new()));
}

/// Copies a `String` or `StringName`, or converts between them; both share the storage layout.
unsafe extern "C" fn string_construct_from(r_dest: sys::GDExtensionUninitializedTypePtr, args: *const sys::GDExtensionConstTypePtr) {
    let text = borrow::<MockString>(*args).as_str().to_string();
    emplace(r_dest, MockString::new(text));
}

unsafe extern "C" fn array_construct_default(r_dest: sys::GDExtensionUninitializedTypePtr, _args: *const sys::GDExtensionConstTypePtr) {
    emplace(r_dest, MockArray { data: ArrayData::new_shared(Vec::new()) });
}

unsafe extern "C" fn array_construct_copy(r_dest: sys::GDExtensionUninitializedTypePtr, args: *const sys::GDExtensionConstTypePtr) {
    let data = borrow::<MockArray>(*args).data.clone();
    emplace(r_dest, MockArray { data });
}

unsafe extern "C" fn dictionary_construct_default(
    r_dest: sys::GDExtensionUninitializedTypePtr,
    _args: *const sys::GDExtensionConstTypePtr,
) {
    let data = Rc::new(RefCell::new(crate::value::DictionaryData { entries: Vec::new() }));
    emplace(r_dest, MockDictionary { data });
}

unsafe extern "C" fn dictionary_construct_copy(r_dest: sys::GDExtensionUninitializedTypePtr, args: *const sys::GDExtensionConstTypePtr) {
    let data = borrow::<MockDictionary>(*args).data.clone();
    emplace(r_dest, MockDictionary { data });
}

unsafe extern "C" fn packed_byte_array_construct_default(
    r_dest: sys::GDExtensionUninitializedTypePtr,
    _args: *const sys::GDExtensionConstTypePtr,
) {
    emplace(r_dest, MockPackedBytes::new(Rc::new(RefCell::new(Vec::new()))));
}

unsafe extern "C" fn packed_byte_array_construct_copy(
    r_dest: sys::GDExtensionUninitializedTypePtr,
    args: *const sys::GDExtensionConstTypePtr,
) {
    let data = borrow::<MockPackedBytes>(*args).shared();
    emplace(r_dest, MockPackedBytes::new(data));
}

pub(crate) unsafe extern "C" fn variant_get_ptr_constructor(
    p_type: sys::GDExtensionVariantType,
    p_constructor: i32,
) -> sys::GDExtensionPtrConstructor {
    let constructor: ConstructorFn = match (VariantType::from_sys(p_type), p_constructor) {
        (VariantType::String | VariantType::StringName, 0) => string_construct_default,
        (VariantType::String | VariantType::StringName, 1 | 2) => string_construct_from,
        (VariantType::Array, 0) => array_construct_default,
        (VariantType::Array, 1) => array_construct_copy,
        (VariantType::Dictionary, 0) => dictionary_construct_default,
        (VariantType::Dictionary, 1) => dictionary_construct_copy,
        (VariantType::PackedByteArray, 0) => packed_byte_array_construct_default,
        (VariantType::PackedByteArray, 1) => packed_byte_array_construct_copy,
        _ => return None,
    };
    Some(constructor)
}

unsafe extern "C" fn string_destroy(p_base: sys::GDExtensionTypePtr) {
    destroy::<MockString>(p_base);
}

unsafe extern "C" fn array_destroy(p_base: sys::GDExtensionTypePtr) {
    destroy::<MockArray>(p_base);
}

unsafe extern "C" fn dictionary_destroy(p_base: sys::GDExtensionTypePtr) {
    destroy::<MockDictionary>(p_base);
}

unsafe extern "C" fn packed_byte_array_destroy(p_base: sys::GDExtensionTypePtr) {
    destroy::<MockPackedBytes>(p_base);
}

pub(crate) unsafe extern "C" fn variant_get_ptr_destructor(p_type: sys::GDExtensionVariantType) -> sys::GDExtensionPtrDestructor {
    let destructor: DestructorFn = match VariantType::from_sys(p_type) {
        VariantType::String | VariantType::StringName => string_destroy,
        VariantType::Array => array_destroy,
        VariantType::Dictionary => dictionary_destroy,
        VariantType::PackedByteArray => packed_byte_array_destroy,
        _ => return None,
    };
    Some(destructor)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Typed operators

unsafe fn write_bool(r_result: sys::GDExtensionTypePtr, value: bool) {
    emplace(r_result, sys::bool_to_sys(value));
}

unsafe extern "C" fn string_equal(left: sys::GDExtensionConstTypePtr, right: sys::GDExtensionConstTypePtr, r_result: sys::GDExtensionTypePtr) {
    write_bool(r_result, borrow::<MockString>(left).as_str() == borrow::<MockString>(right).as_str());
}

unsafe extern "C" fn array_equal(left: sys::GDExtensionConstTypePtr, right: sys::GDExtensionConstTypePtr, r_result: sys::GDExtensionTypePtr) {
    let left = Value::Array(borrow::<MockArray>(left).data.clone());
    let right = Value::Array(borrow::<MockArray>(right).data.clone());
    write_bool(r_result, left.equals(&right));
}

unsafe extern "C" fn dictionary_equal(
    left: sys::GDExtensionConstTypePtr,
    right: sys::GDExtensionConstTypePtr,
    r_result: sys::GDExtensionTypePtr,
) {
    let left = Value::Dictionary(borrow::<MockDictionary>(left).data.clone());
    let right = Value::Dictionary(borrow::<MockDictionary>(right).data.clone());
    write_bool(r_result, left.equals(&right));
}

unsafe extern "C" fn packed_byte_array_equal(
    left: sys::GDExtensionConstTypePtr,
    right: sys::GDExtensionConstTypePtr,
    r_result: sys::GDExtensionTypePtr,
) {
    let left = borrow::<MockPackedBytes>(left).shared();
    let right = borrow::<MockPackedBytes>(right).shared();
    let equal = *left.borrow() == *right.borrow();
    write_bool(r_result, equal);
}

pub(crate) unsafe extern "C" fn variant_get_ptr_operator_evaluator(
    p_operator: sys::GDExtensionVariantOperator,
    p_type_a: sys::GDExtensionVariantType,
    p_type_b: sys::GDExtensionVariantType,
) -> sys::GDExtensionPtrOperatorEvaluator {
    if p_operator != sys::GDEXTENSION_VARIANT_OP_EQUAL || p_type_a != p_type_b {
        return None;
    }

    let evaluator: OperatorFn = match VariantType::from_sys(p_type_a) {
        VariantType::String | VariantType::StringName => string_equal,
        VariantType::Array => array_equal,
        VariantType::Dictionary => dictionary_equal,
        VariantType::PackedByteArray => packed_byte_array_equal,
        _ => return None,
    };
    Some(evaluator)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Strings

pub(crate) unsafe extern "C" fn string_new_with_utf8_chars_and_len(
    r_dest: sys::GDExtensionUninitializedStringPtr,
    p_contents: *const c_char,
    p_size: sys::GDExtensionInt,
) {
    let text = if p_contents.is_null() {
        String::new()
    } else if p_size < 0 {
        CStr::from_ptr(p_contents).to_string_lossy().into_owned()
    } else {
        let bytes = std::slice::from_raw_parts(p_contents as *const u8, p_size as usize);
        String::from_utf8_lossy(bytes).into_owned()
    };

    emplace(r_dest, MockString::new(text));
}

/// With a null buffer, only returns the length in bytes.
pub(crate) unsafe extern "C" fn string_to_utf8_chars(
    p_self: sys::GDExtensionConstStringPtr,
    r_text: *mut c_char,
    p_max_write_length: sys::GDExtensionInt,
) -> sys::GDExtensionInt {
    let bytes = borrow::<MockString>(p_self).as_str().as_bytes();

    if !r_text.is_null() {
        let count = bytes.len().min(p_max_write_length.max(0) as usize);
        ptr::copy_nonoverlapping(bytes.as_ptr(), r_text as *mut u8, count);
    }

    bytes.len() as sys::GDExtensionInt
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Container access

/// Pointer to the variant stored at `p_index`; null (with an error) if out of bounds.
pub(crate) unsafe extern "C" fn array_operator_index(
    p_self: sys::GDExtensionTypePtr,
    p_index: sys::GDExtensionInt,
) -> sys::GDExtensionVariantPtr {
    let data = &borrow::<MockArray>(p_self).data;
    let len = data.borrow().elements.len();

    match usize::try_from(p_index) {
        Ok(index) if index < len => {
            // Elements stay in place until the array is resized.
            let elements = &mut (*data.as_ptr()).elements;
            elements.as_mut_ptr().add(index).cast()
        }
        _ => {
            report_error(format!("Index p_index = {p_index} is out of bounds (size() = {len})."));
            ptr::null_mut()
        }
    }
}

pub(crate) unsafe extern "C" fn array_set_typed(
    p_self: sys::GDExtensionTypePtr,
    p_type: sys::GDExtensionVariantType,
    p_class_name: sys::GDExtensionConstStringNamePtr,
    _p_script: sys::GDExtensionConstVariantPtr,
) {
    let class_name = borrow::<MockString>(p_class_name).as_str().to_string();
    let mut data = borrow::<MockArray>(p_self).data.borrow_mut();

    if !data.elements.is_empty() || data.is_typed() {
        drop(data);
        report_error("Type can only be set once, on an empty array.");
        return;
    }

    data.element_type = VariantType::from_sys(p_type);
    data.class_name = class_name;
}

/// Pointer to the value stored for the key; inserts nil first if the key is absent.
pub(crate) unsafe extern "C" fn dictionary_operator_index(
    p_self: sys::GDExtensionTypePtr,
    p_key: sys::GDExtensionConstVariantPtr,
) -> sys::GDExtensionVariantPtr {
    let key = borrow::<MockVariant>(p_key).value().clone();
    let data = &borrow::<MockDictionary>(p_self).data;

    let index = {
        let mut dict = data.borrow_mut();
        match dict.find(&key) {
            Some(index) => index,
            None => {
                dict.entries.push((key, MockVariant::new(Value::Nil)));
                dict.entries.len() - 1
            }
        }
    };

    // Entries stay in place until the dictionary is modified.
    let entries = &mut (*data.as_ptr()).entries;
    ptr::addr_of_mut!((*entries.as_mut_ptr().add(index)).1).cast()
}

/// Pointer to the byte at `p_index`. Detaches a shared buffer first.
pub(crate) unsafe extern "C" fn packed_byte_array_operator_index(
    p_self: sys::GDExtensionTypePtr,
    p_index: sys::GDExtensionInt,
) -> *mut u8 {
    let bytes = borrow_mut::<MockPackedBytes>(p_self);
    let mut buffer = bytes.bytes_mut();
    let len = buffer.len();

    match usize::try_from(p_index) {
        Ok(index) if index < len => buffer.as_mut_ptr().add(index),
        _ => {
            drop(buffer);
            report_error(format!("Index p_index = {p_index} is out of bounds (size() = {len})."));
            ptr::null_mut()
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Builtin methods

/// Declares builtin methods as `fn name(base: Storage, args) -> ret { body }`; the body evaluates to the return value.
macro_rules! builtin_methods {
    ( $(
        fn $name:ident($base:ident: &$Storage:ty, $args:ident) $( -> $Ret:ty )? $body:block
    )* ) => {
        $(
            #[allow(unused_variables)]
            unsafe extern "C" fn $name(
                p_base: sys::GDExtensionTypePtr,
                $args: *const sys::GDExtensionConstTypePtr,
                r_return: sys::GDExtensionTypePtr,
                _p_argument_count: c_int,
            ) {
                let $base = borrow_mut::<$Storage>(p_base);
                let result $( : $Ret )? = $body;
                builtin_methods!(@write r_return, result $(, $Ret)?);
            }
        )*
    };
    (@write $ret:ident, $result:ident) => {
        let () = $result;
    };
    (@write $ret:ident, $result:ident, $Ret:ty) => {
        emplace::<$Ret>($ret, $result);
    };
}

/// Reads argument `index` as `T`.
unsafe fn arg<'a, T>(args: *const sys::GDExtensionConstTypePtr, index: usize) -> &'a T {
    borrow::<T>(*args.add(index))
}

builtin_methods! {
    fn string_length(string: &MockString, args) -> i64 {
        string.as_str().chars().count() as i64
    }

    fn string_is_empty(string: &MockString, args) -> u8 {
        sys::bool_to_sys(string.as_str().is_empty())
    }

    fn array_size(array: &MockArray, args) -> i64 {
        array.data.borrow().elements.len() as i64
    }

    fn array_is_empty(array: &MockArray, args) -> u8 {
        sys::bool_to_sys(array.data.borrow().elements.is_empty())
    }

    fn array_push_back(array: &MockArray, args) {
        let value = arg::<MockVariant>(args, 0).value().clone();
        let admitted = array.data.borrow().admit(value);
        match admitted {
            Ok(value) => array.data.borrow_mut().elements.push(MockVariant::new(value)),
            Err(message) => report_error(message),
        }
    }

    fn array_pop_back(array: &MockArray, args) -> MockVariant {
        let popped = array.data.borrow_mut().elements.pop();
        popped.unwrap_or_else(|| MockVariant::new(Value::Nil))
    }

    fn array_clear(array: &MockArray, args) {
        let removed = std::mem::take(&mut array.data.borrow_mut().elements);
        drop(removed);
    }

    fn array_resize(array: &MockArray, args) -> i64 {
        let new_len = *arg::<i64>(args, 0);
        match usize::try_from(new_len) {
            Ok(new_len) => {
                let removed = {
                    let mut data = array.data.borrow_mut();
                    let removed = if new_len < data.elements.len() { data.elements.split_off(new_len) } else { Vec::new() };

                    let filler = data.element_type;
                    while data.elements.len() < new_len {
                        data.elements.push(MockVariant::new(Value::default_of(filler)));
                    }
                    removed
                };
                drop(removed);
                0
            }
            Err(_) => {
                report_error(format!("Condition \"p_size < 0\" is true. Returning: ERR_INVALID_PARAMETER ({new_len})"));
                ERR_INVALID_PARAMETER
            }
        }
    }

    fn array_has(array: &MockArray, args) -> u8 {
        let needle = arg::<MockVariant>(args, 0).value();
        let found = array.data.borrow().elements.iter().any(|element| element.value().equals(needle));
        sys::bool_to_sys(found)
    }

    fn array_get_typed_builtin(array: &MockArray, args) -> i64 {
        i64::from(array.data.borrow().element_type.sys())
    }

    fn array_get_typed_class_name(array: &MockArray, args) -> MockString {
        MockString::new(array.data.borrow().class_name.clone())
    }

    fn dictionary_size(dict: &MockDictionary, args) -> i64 {
        dict.data.borrow().entries.len() as i64
    }

    fn dictionary_is_empty(dict: &MockDictionary, args) -> u8 {
        sys::bool_to_sys(dict.data.borrow().entries.is_empty())
    }

    fn dictionary_has(dict: &MockDictionary, args) -> u8 {
        let key = arg::<MockVariant>(args, 0).value();
        sys::bool_to_sys(dict.data.borrow().find(key).is_some())
    }

    fn dictionary_erase(dict: &MockDictionary, args) -> u8 {
        let key = arg::<MockVariant>(args, 0).value();
        let removed = {
            let mut data = dict.data.borrow_mut();
            data.find(key).map(|index| data.entries.remove(index))
        };
        sys::bool_to_sys(removed.is_some())
    }

    fn dictionary_clear(dict: &MockDictionary, args) {
        let removed = std::mem::take(&mut dict.data.borrow_mut().entries);
        drop(removed);
    }

    fn dictionary_keys(dict: &MockDictionary, args) -> MockArray {
        let keys = dict.data.borrow().entries.iter().map(|(key, _)| key.clone()).collect();
        MockArray { data: ArrayData::new_shared(keys) }
    }

    fn dictionary_values(dict: &MockDictionary, args) -> MockArray {
        let values = dict.data.borrow().entries.iter().map(|(_, value)| value.value().clone()).collect();
        MockArray { data: ArrayData::new_shared(values) }
    }

    fn packed_byte_array_size(bytes: &MockPackedBytes, args) -> i64 {
        bytes.shared().borrow().len() as i64
    }

    fn packed_byte_array_is_empty(bytes: &MockPackedBytes, args) -> u8 {
        sys::bool_to_sys(bytes.shared().borrow().is_empty())
    }

    fn packed_byte_array_push_back(bytes: &MockPackedBytes, args) -> u8 {
        let value = *arg::<i64>(args, 0);
        bytes.bytes_mut().push(value as u8);
        sys::bool_to_sys(true)
    }

    fn packed_byte_array_resize(bytes: &MockPackedBytes, args) -> i64 {
        let new_len = *arg::<i64>(args, 0);
        match usize::try_from(new_len) {
            Ok(new_len) => {
                bytes.bytes_mut().resize(new_len, 0);
                0
            }
            Err(_) => {
                report_error(format!("Size of PackedByteArray cannot be negative ({new_len})."));
                ERR_INVALID_PARAMETER
            }
        }
    }

    fn packed_byte_array_clear(bytes: &MockPackedBytes, args) {
        bytes.bytes_mut().clear();
    }
}

pub(crate) unsafe extern "C" fn variant_get_ptr_builtin_method(
    p_type: sys::GDExtensionVariantType,
    p_method: sys::GDExtensionConstStringNamePtr,
    _p_hash: sys::GDExtensionInt,
) -> sys::GDExtensionPtrBuiltInMethod {
    let method_name = borrow::<MockString>(p_method).as_str();

    let method: BuiltinFn = match (VariantType::from_sys(p_type), method_name) {
        (VariantType::String | VariantType::StringName, "length") => string_length,
        (VariantType::String | VariantType::StringName, "is_empty") => string_is_empty,

        (VariantType::Array, "size") => array_size,
        (VariantType::Array, "is_empty") => array_is_empty,
        (VariantType::Array, "push_back") => array_push_back,
        (VariantType::Array, "pop_back") => array_pop_back,
        (VariantType::Array, "clear") => array_clear,
        (VariantType::Array, "resize") => array_resize,
        (VariantType::Array, "has") => array_has,
        (VariantType::Array, "get_typed_builtin") => array_get_typed_builtin,
        (VariantType::Array, "get_typed_class_name") => array_get_typed_class_name,

        (VariantType::Dictionary, "size") => dictionary_size,
        (VariantType::Dictionary, "is_empty") => dictionary_is_empty,
        (VariantType::Dictionary, "has") => dictionary_has,
        (VariantType::Dictionary, "erase") => dictionary_erase,
        (VariantType::Dictionary, "clear") => dictionary_clear,
        (VariantType::Dictionary, "keys") => dictionary_keys,
        (VariantType::Dictionary, "values") => dictionary_values,

        (VariantType::PackedByteArray, "size") => packed_byte_array_size,
        (VariantType::PackedByteArray, "is_empty") => packed_byte_array_is_empty,
        (VariantType::PackedByteArray, "push_back") => packed_byte_array_push_back,
        (VariantType::PackedByteArray, "resize") => packed_byte_array_resize,
        (VariantType::PackedByteArray, "clear") => packed_byte_array_clear,

        _ => return None,
    };
    Some(method)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Utility functions

/// `print(...)`: concatenates the stringified arguments.
unsafe extern "C" fn utility_print(
    _r_return: sys::GDExtensionTypePtr,
    p_args: *const sys::GDExtensionConstTypePtr,
    p_argument_count: c_int,
) {
    let count = usize::try_from(p_argument_count).unwrap_or(0);
    let text: String = (0..count)
        .map(|i| arg::<MockVariant>(p_args, i).value().stringify())
        .collect();

    interface::emit(MessageKind::Print, text, String::new(), String::new(), 0);
}

pub(crate) unsafe extern "C" fn variant_get_ptr_utility_function(
    p_function: sys::GDExtensionConstStringNamePtr,
    _p_hash: sys::GDExtensionInt,
) -> sys::GDExtensionPtrUtilityFunction {
    match borrow::<MockString>(p_function).as_str() {
        "print" => Some(utility_print),
        _ => None,
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
