/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Dynamically typed values, and the layouts the mock keeps behind the opaque storage of builtin types.
//!
//! Every builtin that crosses the interface lives in memory owned by the extension, e.g. a `Variant` field of a Rust struct.
//! The mock places its own structs into that memory. They must have exactly the size of the corresponding
//! `sys::types::Opaque*`, and they are created with [`emplace`] and dropped with [`destroy`], never assigned.

use std::cell::{RefCell, RefMut};
use std::cmp::Ordering;
use std::ffi::c_void;
use std::ptr;
use std::rc::Rc;

use gdbind_ffi as sys;
use sys::VariantType;

use crate::objects::{self, ObjectRef};

pub(crate) type ArrayRef = Rc<RefCell<ArrayData>>;
pub(crate) type DictionaryRef = Rc<RefCell<DictionaryData>>;
pub(crate) type BytesRef = Rc<RefCell<Vec<u8>>>;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Value

/// Contents of a variant.
///
/// Arrays and dictionaries are shared between all values referring to them. Packed byte arrays are shared until one
/// of the holders writes to them.
#[derive(Clone)]
pub(crate) enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    StringName(String),
    Vector2([f32; 2]),
    Vector2i([i32; 2]),
    Vector3([f32; 3]),
    Vector3i([i32; 3]),
    Color([f32; 4]),
    Object(ObjectRef),
    Array(ArrayRef),
    Dictionary(DictionaryRef),
    PackedByteArray(BytesRef),
}

impl Value {
    pub fn variant_type(&self) -> VariantType {
        match self {
            Value::Nil => VariantType::Nil,
            Value::Bool(_) => VariantType::Bool,
            Value::Int(_) => VariantType::Int,
            Value::Float(_) => VariantType::Float,
            Value::String(_) => VariantType::String,
            Value::StringName(_) => VariantType::StringName,
            Value::Vector2(_) => VariantType::Vector2,
            Value::Vector2i(_) => VariantType::Vector2i,
            Value::Vector3(_) => VariantType::Vector3,
            Value::Vector3i(_) => VariantType::Vector3i,
            Value::Color(_) => VariantType::Color,
            Value::Object(_) => VariantType::Object,
            Value::Array(_) => VariantType::Array,
            Value::Dictionary(_) => VariantType::Dictionary,
            Value::PackedByteArray(_) => VariantType::PackedByteArray,
        }
    }

    /// Default value of a type, as produced by a typed array when it grows. Unsupported types give nil.
    pub fn default_of(variant_type: VariantType) -> Value {
        match variant_type {
            VariantType::Bool => Value::Bool(false),
            VariantType::Int => Value::Int(0),
            VariantType::Float => Value::Float(0.0),
            VariantType::String => Value::String(String::new()),
            VariantType::StringName => Value::StringName(String::new()),
            VariantType::Vector2 => Value::Vector2([0.0; 2]),
            VariantType::Vector2i => Value::Vector2i([0; 2]),
            VariantType::Vector3 => Value::Vector3([0.0; 3]),
            VariantType::Vector3i => Value::Vector3i([0; 3]),
            VariantType::Color => Value::Color([0.0, 0.0, 0.0, 1.0]),
            VariantType::Array => Value::new_array(Vec::new()),
            VariantType::Dictionary => Value::new_dictionary(Vec::new()),
            VariantType::PackedByteArray => Value::PackedByteArray(Rc::new(RefCell::new(Vec::new()))),
            _ => Value::Nil,
        }
    }

    pub fn new_array(elements: Vec<Value>) -> Value {
        Value::Array(ArrayData::new_shared(elements))
    }

    pub fn new_dictionary(entries: Vec<(Value, Value)>) -> Value {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key, MockVariant::new(value)))
            .collect();

        Value::Dictionary(Rc::new(RefCell::new(DictionaryData { entries })))
    }

    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            _ => false,
        }
    }

    pub fn as_int(&self) -> i64 {
        match self {
            Value::Bool(b) => i64::from(*b),
            Value::Int(i) => *i,
            Value::Float(f) => *f as i64,
            _ => 0,
        }
    }

    pub fn as_float(&self) -> f64 {
        match self {
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
            _ => 0.0,
        }
    }

    /// Text of a `String` or `StringName`; empty for anything else.
    pub fn as_str(&self) -> &str {
        match self {
            Value::String(s) | Value::StringName(s) => s,
            _ => "",
        }
    }

    pub fn as_vector2(&self) -> [f32; 2] {
        match self {
            Value::Vector2(v) => *v,
            _ => [0.0; 2],
        }
    }

    pub fn as_vector3(&self) -> [f32; 3] {
        match self {
            Value::Vector3(v) => *v,
            _ => [0.0; 3],
        }
    }

    pub fn as_color(&self) -> [f32; 4] {
        match self {
            Value::Color(c) => *c,
            _ => [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Address of a referenced object, or 0.
    pub fn object_addr(&self) -> usize {
        match self {
            Value::Object(obj) => obj.addr(),
            _ => 0,
        }
    }

    /// Value equality as seen by scripts: `1 == 1.0` and `"a" == &"a"`. Containers compare element-wise.
    pub fn equals(&self, other: &Value) -> bool {
        use Value::*;

        match (self, other) {
            (Nil, Nil) => true,
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Int(_) | Float(_), Int(_) | Float(_)) => self.as_float() == other.as_float(),
            (String(a) | StringName(a), String(b) | StringName(b)) => a == b,
            (Vector2(a), Vector2(b)) => a == b,
            (Vector2i(a), Vector2i(b)) => a == b,
            (Vector3(a), Vector3(b)) => a == b,
            (Vector3i(a), Vector3i(b)) => a == b,
            (Color(a), Color(b)) => a == b,
            (Object(a), Object(b)) => a.addr() == b.addr(),
            (Array(a), Array(b)) => {
                if Rc::ptr_eq(a, b) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                a.elements.len() == b.elements.len()
                    && a.elements
                        .iter()
                        .zip(b.elements.iter())
                        .all(|(x, y)| x.value().equals(y.value()))
            }
            (Dictionary(a), Dictionary(b)) => {
                if Rc::ptr_eq(a, b) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                a.entries.len() == b.entries.len()
                    && a.entries.iter().all(|(key, value)| {
                        b.find(key)
                            .is_some_and(|index| b.entries[index].1.value().equals(value.value()))
                    })
            }
            (PackedByteArray(a), PackedByteArray(b)) => *a.borrow() == *b.borrow(),
            _ => false,
        }
    }

    /// Dictionary key identity: like [`equals`](Self::equals), but never across types.
    pub fn is_same_key(&self, other: &Value) -> bool {
        self.variant_type() == other.variant_type() && self.equals(other)
    }

    pub fn booleanize(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) | Value::StringName(s) => !s.is_empty(),
            Value::Vector2(v) => v.iter().any(|c| *c != 0.0),
            Value::Vector2i(v) => v.iter().any(|c| *c != 0),
            Value::Vector3(v) => v.iter().any(|c| *c != 0.0),
            Value::Vector3i(v) => v.iter().any(|c| *c != 0),
            Value::Color(c) => *c != [0.0, 0.0, 0.0, 1.0],
            Value::Object(obj) => objects::is_alive(obj.addr()),
            Value::Array(a) => !a.borrow().elements.is_empty(),
            Value::Dictionary(d) => !d.borrow().entries.is_empty(),
            Value::PackedByteArray(b) => !b.borrow().is_empty(),
        }
    }

    /// Text produced by `str()` in scripts.
    pub fn stringify(&self) -> String {
        match self {
            Value::Nil => "<null>".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => format_real(*f),
            Value::String(s) | Value::StringName(s) => s.clone(),
            Value::Vector2(v) => format_tuple(v.iter().map(|c| format_real(f64::from(*c)))),
            Value::Vector2i(v) => format_tuple(v.iter().map(i32::to_string)),
            Value::Vector3(v) => format_tuple(v.iter().map(|c| format_real(f64::from(*c)))),
            Value::Vector3i(v) => format_tuple(v.iter().map(i32::to_string)),
            Value::Color(c) => format_tuple(c.iter().map(|c| format_real(f64::from(*c)))),
            Value::Object(obj) => objects::describe(obj.addr()),
            Value::Array(a) => {
                let elements: Vec<String> = a.borrow().elements.iter().map(|e| e.value().repr()).collect();
                format!("[{}]", elements.join(", "))
            }
            Value::Dictionary(d) => {
                let entries: Vec<String> = d
                    .borrow()
                    .entries
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key.repr(), value.value().repr()))
                    .collect();
                format!("{{ {} }}", entries.join(", "))
            }
            Value::PackedByteArray(b) => {
                let bytes: Vec<String> = b.borrow().iter().map(u8::to_string).collect();
                format!("[{}]", bytes.join(", "))
            }
        }
    }

    /// Like [`stringify`](Self::stringify), but strings are quoted; used inside containers.
    fn repr(&self) -> String {
        match self {
            Value::String(s) => format!("\"{s}\""),
            Value::StringName(s) => format!("&\"{s}\""),
            other => other.stringify(),
        }
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            other => write!(f, "{:?}({})", other.variant_type(), other.repr()),
        }
    }
}

fn format_real(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        text.to_string()
    } else {
        value.to_string()
    }
}

fn format_tuple(components: impl Iterator<Item = String>) -> String {
    let components: Vec<String> = components.collect();
    format!("({})", components.join(", "))
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Operators

/// Applies a variant operator. Returns `None` if the operator is not defined for the operand types.
pub(crate) fn evaluate(op: sys::GDExtensionVariantOperator, a: &Value, b: &Value) -> Option<Value> {
    match op {
        sys::GDEXTENSION_VARIANT_OP_EQUAL => Some(Value::Bool(a.equals(b))),
        sys::GDEXTENSION_VARIANT_OP_NOT_EQUAL => Some(Value::Bool(!a.equals(b))),
        sys::GDEXTENSION_VARIANT_OP_LESS => compare(a, b).map(|ord| Value::Bool(ord.is_lt())),
        sys::GDEXTENSION_VARIANT_OP_LESS_EQUAL => compare(a, b).map(|ord| Value::Bool(ord.is_le())),
        sys::GDEXTENSION_VARIANT_OP_GREATER => compare(a, b).map(|ord| Value::Bool(ord.is_gt())),
        sys::GDEXTENSION_VARIANT_OP_GREATER_EQUAL => compare(a, b).map(|ord| Value::Bool(ord.is_ge())),
        sys::GDEXTENSION_VARIANT_OP_ADD
        | sys::GDEXTENSION_VARIANT_OP_SUBTRACT
        | sys::GDEXTENSION_VARIANT_OP_MULTIPLY
        | sys::GDEXTENSION_VARIANT_OP_DIVIDE => arithmetic(op, a, b),
        _ => None,
    }
}

fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    use Value::*;

    match (a, b) {
        (Bool(x), Bool(y)) => Some(x.cmp(y)),
        (Int(x), Int(y)) => Some(x.cmp(y)),
        (Int(_) | Float(_), Int(_) | Float(_)) => a.as_float().partial_cmp(&b.as_float()),
        (String(x) | StringName(x), String(y) | StringName(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

fn arithmetic(op: sys::GDExtensionVariantOperator, a: &Value, b: &Value) -> Option<Value> {
    use Value::*;

    let result = match (a, b) {
        (Int(x), Int(y)) => Int(match op {
            sys::GDEXTENSION_VARIANT_OP_ADD => x.wrapping_add(*y),
            sys::GDEXTENSION_VARIANT_OP_SUBTRACT => x.wrapping_sub(*y),
            sys::GDEXTENSION_VARIANT_OP_MULTIPLY => x.wrapping_mul(*y),
            _ => x.checked_div(*y)?,
        }),
        (Int(_) | Float(_), Int(_) | Float(_)) => Float(apply_real(op, a.as_float(), b.as_float())),
        (String(x), String(y)) if op == sys::GDEXTENSION_VARIANT_OP_ADD => String(format!("{x}{y}")),
        (Vector2(x), Vector2(y)) => Vector2(zip_real(op, *x, *y)),
        (Vector3(x), Vector3(y)) => Vector3(zip_real(op, *x, *y)),
        (Color(x), Color(y)) => Color(zip_real(op, *x, *y)),
        (Vector2(x), Int(_) | Float(_)) if is_scaling(op) => Vector2(zip_real(op, *x, [b.as_float() as f32; 2])),
        (Vector3(x), Int(_) | Float(_)) if is_scaling(op) => Vector3(zip_real(op, *x, [b.as_float() as f32; 3])),
        (Vector2i(x), Vector2i(y)) => Vector2i(zip_int(op, *x, *y)?),
        (Vector3i(x), Vector3i(y)) => Vector3i(zip_int(op, *x, *y)?),
        (Array(x), Array(y)) if op == sys::GDEXTENSION_VARIANT_OP_ADD => {
            let elements = x
                .borrow()
                .elements
                .iter()
                .chain(y.borrow().elements.iter())
                .map(|e| e.value().clone())
                .collect();
            Value::new_array(elements)
        }
        _ => return None,
    };

    Some(result)
}

fn is_scaling(op: sys::GDExtensionVariantOperator) -> bool {
    op == sys::GDEXTENSION_VARIANT_OP_MULTIPLY || op == sys::GDEXTENSION_VARIANT_OP_DIVIDE
}

fn apply_real(op: sys::GDExtensionVariantOperator, x: f64, y: f64) -> f64 {
    match op {
        sys::GDEXTENSION_VARIANT_OP_ADD => x + y,
        sys::GDEXTENSION_VARIANT_OP_SUBTRACT => x - y,
        sys::GDEXTENSION_VARIANT_OP_MULTIPLY => x * y,
        _ => x / y,
    }
}

fn zip_real<const N: usize>(op: sys::GDExtensionVariantOperator, x: [f32; N], y: [f32; N]) -> [f32; N] {
    std::array::from_fn(|i| apply_real(op, f64::from(x[i]), f64::from(y[i])) as f32)
}

fn zip_int<const N: usize>(op: sys::GDExtensionVariantOperator, x: [i32; N], y: [i32; N]) -> Option<[i32; N]> {
    let mut out = [0; N];
    for i in 0..N {
        out[i] = match op {
            sys::GDEXTENSION_VARIANT_OP_ADD => x[i].wrapping_add(y[i]),
            sys::GDEXTENSION_VARIANT_OP_SUBTRACT => x[i].wrapping_sub(y[i]),
            sys::GDEXTENSION_VARIANT_OP_MULTIPLY => x[i].wrapping_mul(y[i]),
            _ => x[i].checked_div(y[i])?,
        };
    }
    Some(out)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Containers

pub(crate) struct ArrayData {
    pub elements: Vec<MockVariant>,
    /// `Nil` for untyped arrays.
    pub element_type: VariantType,
    /// For arrays of objects: the class every element must inherit from.
    pub class_name: String,
}

impl ArrayData {
    pub fn new_shared(elements: Vec<Value>) -> ArrayRef {
        Rc::new(RefCell::new(Self {
            elements: elements.into_iter().map(MockVariant::new).collect(),
            element_type: VariantType::Nil,
            class_name: String::new(),
        }))
    }

    pub fn is_typed(&self) -> bool {
        self.element_type != VariantType::Nil
    }

    /// Converts `value` for storage in this array, or explains why it does not fit the element type.
    pub fn admit(&self, value: Value) -> Result<Value, String> {
        if !self.is_typed() || value.variant_type() == self.element_type {
            if let Value::Object(obj) = &value {
                if !self.class_name.is_empty() && !objects::inherits(obj.addr(), &self.class_name) {
                    return Err(format!(
                        "Attempted to insert an object of type '{}' into a TypedArray of type '{}'.",
                        objects::class_name(obj.addr()),
                        self.class_name
                    ));
                }
            }
            return Ok(value);
        }

        match (self.element_type, &value) {
            (VariantType::Float, Value::Int(i)) => Ok(Value::Float(*i as f64)),
            (VariantType::Object, Value::Nil) => Ok(value),
            _ => Err(format!(
                "Attempted to insert a variant of type '{}' into a TypedArray of type '{}'.",
                value.variant_type().name(),
                self.element_type.name()
            )),
        }
    }
}

/// Entries in insertion order.
pub(crate) struct DictionaryData {
    pub entries: Vec<(Value, MockVariant)>,
}

impl DictionaryData {
    pub fn find(&self, key: &Value) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.is_same_key(key))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Storage layouts

/// Lives in the 24 bytes of a `Variant`.
#[repr(C)]
pub(crate) struct MockVariant {
    value: Box<Value>,
    _reserved: [usize; 2],
}

sys::static_assert_eq_size!(MockVariant, sys::types::OpaqueVariant);

impl MockVariant {
    pub fn new(value: Value) -> Self {
        Self {
            value: Box::new(value),
            _reserved: [0; 2],
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replaces the value; the old one is dropped.
    pub fn set(&mut self, value: Value) {
        *self.value = value;
    }

    pub fn into_value(self) -> Value {
        *self.value
    }
}

/// Lives in the storage of a `String` or a `StringName`.
#[repr(C)]
pub(crate) struct MockString {
    text: Box<String>,
}

sys::static_assert_eq_size!(MockString, sys::types::OpaqueString);
sys::static_assert_eq_size!(MockString, sys::types::OpaqueStringName);

impl MockString {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Box::new(text.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: String) {
        *self.text = text;
    }
}

#[repr(C)]
pub(crate) struct MockArray {
    pub data: ArrayRef,
}

sys::static_assert_eq_size!(MockArray, sys::types::OpaqueArray);

#[repr(C)]
pub(crate) struct MockDictionary {
    pub data: DictionaryRef,
}

sys::static_assert_eq_size!(MockDictionary, sys::types::OpaqueDictionary);

/// Copy-on-write byte buffer.
#[repr(C)]
pub(crate) struct MockPackedBytes {
    data: BytesRef,
    _reserved: usize,
}

sys::static_assert_eq_size!(MockPackedBytes, sys::types::OpaquePackedByteArray);

impl MockPackedBytes {
    pub fn new(data: BytesRef) -> Self {
        Self { data, _reserved: 0 }
    }

    pub fn shared(&self) -> BytesRef {
        self.data.clone()
    }

    /// Mutable access; detaches from other holders first.
    pub fn bytes_mut(&mut self) -> RefMut<'_, Vec<u8>> {
        if Rc::strong_count(&self.data) > 1 {
            let copy = self.data.borrow().clone();
            self.data = Rc::new(RefCell::new(copy));
        }
        self.data.borrow_mut()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Raw access

/// # Safety
/// `ptr` must point to a live, properly aligned `T`, which is not mutated while the reference is used.
pub(crate) unsafe fn borrow<'a, T>(ptr: *const c_void) -> &'a T {
    &*ptr.cast::<T>()
}

/// # Safety
/// `ptr` must point to a live, properly aligned `T`, which is not otherwise accessed while the reference is used.
pub(crate) unsafe fn borrow_mut<'a, T>(ptr: *mut c_void) -> &'a mut T {
    &mut *ptr.cast::<T>()
}

/// Moves `value` into uninitialized storage.
///
/// # Safety
/// `ptr` must be valid for writes of `T` and properly aligned.
pub(crate) unsafe fn emplace<T>(ptr: *mut c_void, value: T) {
    ptr::write(ptr.cast::<T>(), value);
}

/// Drops the `T` at `ptr`, leaving the storage uninitialized.
///
/// # Safety
/// `ptr` must point to a live `T` that is not used afterwards.
pub(crate) unsafe fn destroy<T>(ptr: *mut c_void) {
    ptr::drop_in_place(ptr.cast::<T>());
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
