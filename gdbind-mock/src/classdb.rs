/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Class database: class descriptions, method binds and the two calling conventions.

use std::ffi::c_void;
use std::ptr;

use gdbind_ffi as sys;
use sys::VariantType;

use crate::classes::CLASSES;
use crate::interface::report_error;
use crate::objects::{self, ObjectRef};
use crate::value::{borrow, emplace, DictionaryData, MockDictionary, MockPackedBytes, MockString, MockVariant, Value};

/// Engine-side type of a parameter or return value; decides the ptrcall encoding.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Kind {
    /// Only as return type: `void`.
    Nil,
    Bool,
    Int,
    Float,
    String,
    StringName,
    Vector2,
    Vector3,
    Color,
    Object,
    Variant,
    Dictionary,
    PackedByteArray,
}

impl Kind {
    fn variant_type(self) -> VariantType {
        match self {
            Kind::Nil | Kind::Variant => VariantType::Nil,
            Kind::Bool => VariantType::Bool,
            Kind::Int => VariantType::Int,
            Kind::Float => VariantType::Float,
            Kind::String => VariantType::String,
            Kind::StringName => VariantType::StringName,
            Kind::Vector2 => VariantType::Vector2,
            Kind::Vector3 => VariantType::Vector3,
            Kind::Color => VariantType::Color,
            Kind::Object => VariantType::Object,
            Kind::Dictionary => VariantType::Dictionary,
            Kind::PackedByteArray => VariantType::PackedByteArray,
        }
    }

    /// Converts a dynamically typed argument the way the engine does for varcalls.
    fn coerce(self, value: Value) -> Option<Value> {
        let coerced = match (self, value) {
            (Kind::Variant, value) => value,

            (Kind::Bool, Value::Bool(b)) => Value::Bool(b),
            (Kind::Bool, Value::Int(i)) => Value::Bool(i != 0),
            (Kind::Bool, Value::Float(f)) => Value::Bool(f != 0.0),

            (Kind::Int, Value::Int(i)) => Value::Int(i),
            (Kind::Int, Value::Bool(b)) => Value::Int(i64::from(b)),
            (Kind::Int, Value::Float(f)) => Value::Int(f as i64),

            (Kind::Float, Value::Float(f)) => Value::Float(f),
            (Kind::Float, Value::Int(i)) => Value::Float(i as f64),
            (Kind::Float, Value::Bool(b)) => Value::Float(f64::from(u8::from(b))),

            (Kind::String, Value::String(s) | Value::StringName(s)) => Value::String(s),
            (Kind::StringName, Value::String(s) | Value::StringName(s)) => Value::StringName(s),

            (Kind::Object, value @ (Value::Object(_) | Value::Nil)) => value,

            (kind, value) if value.variant_type() == kind.variant_type() => value,
            _ => return None,
        };
        Some(coerced)
    }
}

/// Implementation of a method: receives the instance address and the arguments, already converted to the parameter kinds.
pub(crate) type Handler = fn(usize, &[Value]) -> Value;

pub(crate) struct MethodInfo {
    pub name: &'static str,
    /// Signature hash; a bind is only handed out for a matching hash.
    pub hash: i64,
    pub params: &'static [Kind],
    pub ret: Kind,
    pub handler: Handler,
    /// Accepts any number of arguments, which the handler checks itself.
    pub vararg: bool,
}

pub(crate) struct ClassInfo {
    pub name: &'static str,
    pub parent: Option<&'static str>,
    /// Can be created through `classdb_construct_object`.
    pub instantiable: bool,
    pub singleton: bool,
    pub methods: &'static [MethodInfo],
}

impl ClassInfo {
    pub fn parent(&self) -> Option<&'static ClassInfo> {
        self.parent.and_then(find_class)
    }

    /// This class, followed by its base classes up to `Object`.
    pub fn ancestors(&'static self) -> impl Iterator<Item = &'static ClassInfo> {
        std::iter::successors(Some(self), |class| class.parent())
    }

    pub fn inherits(&'static self, base: &str) -> bool {
        self.ancestors().any(|class| class.name == base)
    }

    pub fn is_ref_counted(&'static self) -> bool {
        self.inherits("RefCounted")
    }

    /// Looks up a method declared by this class or one of its bases.
    pub fn find_method(&'static self, name: &str) -> Option<&'static MethodInfo> {
        self.ancestors()
            .flat_map(|class| class.methods.iter())
            .find(|method| method.name == name)
    }
}

pub(crate) fn find_class(name: &str) -> Option<&'static ClassInfo> {
    CLASSES.iter().find(|class| class.name == name)
}

unsafe fn read_name<'a>(ptr: sys::GDExtensionConstStringNamePtr) -> &'a str {
    borrow::<MockString>(ptr).as_str()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Construction and lookup

pub(crate) unsafe extern "C" fn classdb_construct_object(p_classname: sys::GDExtensionConstStringNamePtr) -> sys::GDExtensionObjectPtr {
    let name = read_name(p_classname);

    match find_class(name) {
        Some(class) if class.instantiable && !class.singleton => objects::create(class) as sys::GDExtensionObjectPtr,
        Some(_) => {
            report_error(format!("Class '{name}' can't be instantiated."));
            ptr::null_mut()
        }
        None => {
            report_error(format!("Cannot get class '{name}'."));
            ptr::null_mut()
        }
    }
}

pub(crate) unsafe extern "C" fn classdb_get_method_bind(
    p_classname: sys::GDExtensionConstStringNamePtr,
    p_methodname: sys::GDExtensionConstStringNamePtr,
    p_hash: sys::GDExtensionInt,
) -> sys::GDExtensionMethodBindPtr {
    let class_name = read_name(p_classname);
    let method_name = read_name(p_methodname);

    match find_class(class_name).and_then(|class| class.find_method(method_name)) {
        Some(method) if method.hash == p_hash => (method as *const MethodInfo).cast(),
        Some(method) => {
            report_error(format!(
                "Method '{class_name}.{method_name}' has hash {}, requested {p_hash}.",
                method.hash
            ));
            ptr::null()
        }
        None => {
            report_error(format!("Method '{class_name}.{method_name}' not found."));
            ptr::null()
        }
    }
}

pub(crate) unsafe extern "C" fn classdb_get_class_tag(p_classname: sys::GDExtensionConstStringNamePtr) -> *mut c_void {
    find_class(read_name(p_classname)).map_or(ptr::null_mut(), |class| {
        sys::force_mut_ptr(class as *const ClassInfo).cast()
    })
}

pub(crate) unsafe extern "C" fn global_get_singleton(p_name: sys::GDExtensionConstStringNamePtr) -> sys::GDExtensionObjectPtr {
    let name = read_name(p_name);

    match find_class(name) {
        Some(class) if class.singleton => objects::singleton(class) as sys::GDExtensionObjectPtr,
        _ => {
            report_error(format!("Failed to retrieve non-existent singleton '{name}'."));
            ptr::null_mut()
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Object functions

pub(crate) unsafe extern "C" fn object_destroy(p_o: sys::GDExtensionObjectPtr) {
    let addr = p_o as usize;
    if !objects::is_alive(addr) {
        report_error("Attempted to destroy an object that was already freed.");
        return;
    }

    objects::destroy(addr);
}

pub(crate) unsafe extern "C" fn object_get_instance_id(p_object: sys::GDExtensionConstObjectPtr) -> sys::GDObjectInstanceID {
    objects::instance_id(p_object as usize)
}

pub(crate) unsafe extern "C" fn object_get_instance_from_id(p_instance_id: sys::GDObjectInstanceID) -> sys::GDExtensionObjectPtr {
    objects::address_of(p_instance_id) as sys::GDExtensionObjectPtr
}

/// Writes the class name into uninitialized storage; returns false (and writes nothing) for dead objects.
pub(crate) unsafe extern "C" fn object_get_class_name(
    p_object: sys::GDExtensionConstObjectPtr,
    _p_library: sys::GDExtensionClassLibraryPtr,
    r_class_name: sys::GDExtensionUninitializedStringNamePtr,
) -> sys::GDExtensionBool {
    match objects::class_of(p_object as usize) {
        Some(class) => {
            emplace(r_class_name, MockString::new(class.name));
            sys::SYS_TRUE
        }
        None => sys::SYS_FALSE,
    }
}

pub(crate) unsafe extern "C" fn object_cast_to(
    p_object: sys::GDExtensionConstObjectPtr,
    p_class_tag: *mut c_void,
) -> sys::GDExtensionObjectPtr {
    if p_class_tag.is_null() {
        return ptr::null_mut();
    }

    let target = borrow::<ClassInfo>(p_class_tag);
    if objects::inherits(p_object as usize, target.name) {
        sys::force_mut_ptr(p_object)
    } else {
        ptr::null_mut()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Ptrcall

unsafe fn read_arg(kind: Kind, arg: sys::GDExtensionConstTypePtr) -> Value {
    match kind {
        Kind::Nil => Value::Nil,
        Kind::Bool => Value::Bool(ptr::read(arg.cast::<u8>()) != 0),
        Kind::Int => Value::Int(ptr::read(arg.cast::<i64>())),
        Kind::Float => Value::Float(ptr::read(arg.cast::<f64>())),
        Kind::String => Value::String(borrow::<MockString>(arg).as_str().to_string()),
        Kind::StringName => Value::StringName(borrow::<MockString>(arg).as_str().to_string()),
        Kind::Vector2 => Value::Vector2(ptr::read(arg.cast::<[f32; 2]>())),
        Kind::Vector3 => Value::Vector3(ptr::read(arg.cast::<[f32; 3]>())),
        Kind::Color => Value::Color(ptr::read(arg.cast::<[f32; 4]>())),
        Kind::Object => {
            let addr = ptr::read(arg.cast::<sys::GDExtensionObjectPtr>()) as usize;
            ObjectRef::acquire(addr).map_or(Value::Nil, Value::Object)
        }
        Kind::Variant => borrow::<MockVariant>(arg).value().clone(),
        Kind::Dictionary => Value::Dictionary(borrow::<MockDictionary>(arg).data.clone()),
        Kind::PackedByteArray => Value::PackedByteArray(borrow::<MockPackedBytes>(arg).shared()),
    }
}

/// Constructs the return value into uninitialized storage.
unsafe fn write_return(kind: Kind, ret: sys::GDExtensionTypePtr, value: Value) {
    if ret.is_null() {
        return;
    }

    match kind {
        Kind::Nil => {}
        Kind::Bool => emplace(ret, sys::bool_to_sys(value.as_bool())),
        Kind::Int => emplace(ret, value.as_int()),
        Kind::Float => emplace(ret, value.as_float()),
        Kind::String | Kind::StringName => emplace(ret, MockString::new(value.as_str())),
        Kind::Vector2 => emplace(ret, value.as_vector2()),
        Kind::Vector3 => emplace(ret, value.as_vector3()),
        Kind::Color => emplace(ret, value.as_color()),
        Kind::Object => {
            // The caller receives the reference held by the value.
            let object_ptr = match value {
                Value::Object(obj) => obj.into_raw() as sys::GDExtensionObjectPtr,
                _ => ptr::null_mut(),
            };
            emplace(ret, object_ptr);
        }
        Kind::Variant => emplace(ret, MockVariant::new(value)),
        Kind::Dictionary => {
            let data = match value {
                Value::Dictionary(data) => data,
                _ => std::rc::Rc::new(std::cell::RefCell::new(DictionaryData { entries: Vec::new() })),
            };
            emplace(ret, MockDictionary { data });
        }
        Kind::PackedByteArray => {
            let data = match value {
                Value::PackedByteArray(data) => data,
                _ => Default::default(),
            };
            emplace(ret, MockPackedBytes::new(data));
        }
    }
}

pub(crate) unsafe extern "C" fn object_method_bind_ptrcall(
    p_method_bind: sys::GDExtensionMethodBindPtr,
    p_instance: sys::GDExtensionObjectPtr,
    p_args: *const sys::GDExtensionConstTypePtr,
    r_ret: sys::GDExtensionTypePtr,
) {
    let method = borrow::<MethodInfo>(p_method_bind);
    let addr = p_instance as usize;

    if !objects::is_alive(addr) {
        report_error(format!("Method '{}' called on a freed object.", method.name));
        write_return(method.ret, r_ret, Value::Nil);
        return;
    }

    let args: Vec<Value> = method
        .params
        .iter()
        .enumerate()
        .map(|(i, kind)| read_arg(*kind, *p_args.add(i)))
        .collect();

    let result = (method.handler)(addr, &args);

    // Arguments may hold the last reference to an object; release them before writing the result.
    drop(args);
    write_return(method.ret, r_ret, result);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Varcall

fn call_error(error: sys::GDExtensionCallErrorType, argument: i32, expected: i32) -> sys::GDExtensionCallError {
    sys::GDExtensionCallError {
        error,
        argument,
        expected,
    }
}

/// Checks and converts the arguments, then runs the method.
///
/// `offset` is the position of `args[0]` in the caller's argument list, used in error reports.
pub(crate) fn invoke(
    addr: usize,
    method: &'static MethodInfo,
    args: Vec<Value>,
    offset: usize,
) -> Result<Value, sys::GDExtensionCallError> {
    if method.vararg {
        return dispatch_call(addr, args, offset);
    }

    let expected = (method.params.len() + offset) as i32;
    if args.len() > method.params.len() {
        return Err(call_error(sys::GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS, 0, expected));
    }
    if args.len() < method.params.len() {
        return Err(call_error(sys::GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS, 0, expected));
    }

    let mut converted = Vec::with_capacity(args.len());
    for (i, (kind, value)) in method.params.iter().zip(args).enumerate() {
        match kind.coerce(value) {
            Some(value) => converted.push(value),
            None => {
                let expected_type = kind.variant_type().sys() as i32;
                return Err(call_error(sys::GDEXTENSION_CALL_ERROR_INVALID_ARGUMENT, (i + offset) as i32, expected_type));
            }
        }
    }

    Ok((method.handler)(addr, &converted))
}

/// `Object.call(method, ...)`: the first argument names the method to run with the remaining ones.
fn dispatch_call(addr: usize, mut args: Vec<Value>, offset: usize) -> Result<Value, sys::GDExtensionCallError> {
    if args.is_empty() {
        return Err(call_error(sys::GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS, 0, (offset + 1) as i32));
    }

    let method_name = match args.remove(0) {
        Value::String(name) | Value::StringName(name) => name,
        _ => {
            let expected = VariantType::StringName.sys() as i32;
            return Err(call_error(sys::GDEXTENSION_CALL_ERROR_INVALID_ARGUMENT, offset as i32, expected));
        }
    };

    let target = objects::class_of(addr).and_then(|class| class.find_method(&method_name));
    match target {
        Some(target) => invoke(addr, target, args, offset + 1),
        None => Err(call_error(sys::GDEXTENSION_CALL_ERROR_INVALID_METHOD, 0, 0)),
    }
}

pub(crate) unsafe extern "C" fn object_method_bind_call(
    p_method_bind: sys::GDExtensionMethodBindPtr,
    p_instance: sys::GDExtensionObjectPtr,
    p_args: *const sys::GDExtensionConstVariantPtr,
    p_arg_count: sys::GDExtensionInt,
    r_ret: sys::GDExtensionUninitializedVariantPtr,
    r_error: *mut sys::GDExtensionCallError,
) {
    let method = borrow::<MethodInfo>(p_method_bind);
    let addr = p_instance as usize;

    let result = if objects::is_alive(addr) {
        let count = usize::try_from(p_arg_count).unwrap_or(0);
        let args = (0..count)
            .map(|i| borrow::<MockVariant>(*p_args.add(i)).value().clone())
            .collect();

        invoke(addr, method, args, 0)
    } else {
        Err(call_error(sys::GDEXTENSION_CALL_ERROR_INSTANCE_IS_NULL, 0, 0))
    };

    match result {
        Ok(value) => {
            *r_error = call_error(sys::GDEXTENSION_CALL_OK, 0, 0);
            emplace(r_ret, MockVariant::new(value));
        }
        Err(err) => {
            *r_error = err;
            emplace(r_ret, MockVariant::new(Value::Nil));
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
