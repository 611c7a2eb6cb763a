/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::marker::PhantomData;

use crate::builtin::{call_builtin, StringName, Variant, VariantType};
use crate::global::Error;
use crate::meta::error::{ConvertError, ErrorKind};
use crate::meta::{ArrayElement, FromGodot, GodotConvert, GodotFfiVariant, GodotType, ParamTuple, ToGodot};
use crate::sys::{self, ffi_methods, GodotFfi};

/// The engine's `Array` type, optionally typed.
///
/// `Array<T>` for an element type other than [`Variant`] is a *typed array*: the engine tags it with `T`'s type and
/// rejects elements of other types. [`VariantArray`] is the untyped array.
///
/// Arrays are reference-counted; [`Clone`] shares the storage. Element access converts between `Variant` and `T`.
#[repr(C)]
pub struct Array<T: ArrayElement> {
    opaque: sys::types::OpaqueArray,
    _phantom: PhantomData<T>,
}

/// Untyped engine array, whose elements can be of any type.
pub type VariantArray = Array<Variant>;

impl<T: ArrayElement> Array<T> {
    /// Constructs an empty array, typed with `T` unless `T` is [`Variant`].
    pub fn new() -> Self {
        let ctor = sys::builtin_lifecycle_api().array_construct_default;

        // SAFETY: the default constructor takes no arguments and initializes the storage.
        let mut array = unsafe {
            Self::new_with_uninit(|self_ptr| {
                ctor(self_ptr, std::ptr::null());
            })
        };

        array.init_inner_type();
        array
    }

    /// Returns the number of elements in the array. Equivalent of `size()` in the engine.
    pub fn len(&self) -> usize {
        let len: i64 = self.call_const("size", ());
        len as usize
    }

    /// Returns `true` if the array contains no elements.
    pub fn is_empty(&self) -> bool {
        self.call_const("is_empty", ())
    }

    /// Returns the element at `index`, or `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<T> {
        let variant = self.variant_at(index)?;
        Some(T::from_variant(variant))
    }

    /// ⚠️ Returns the element at `index`.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn at(&self, index: usize) -> T {
        self.get(index)
            .unwrap_or_else(|| panic!("Array index {index} is out of bounds: length is {}", self.len()))
    }

    /// ⚠️ Sets the value at `index`.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: T) {
        let len = self.len();
        assert!(index < len, "Array index {index} is out of bounds: length is {len}");

        // SAFETY: the index is in bounds, so the engine returns a pointer to a live element.
        unsafe {
            let element_ptr = self.element_ptr(index);
            *Variant::borrow_var_sys_mut(element_ptr) = value.to_variant();
        }
    }

    /// Appends an element to the end of the array.
    pub fn push(&mut self, value: T) {
        self.call_mut::<()>("push_back", (value.to_variant(),));
    }

    /// Removes and returns the last element, or `None` if the array is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let variant: Variant = self.call_mut("pop_back", ());
        Some(T::from_variant(&variant))
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.call_mut::<()>("clear", ());
    }

    /// Resizes the array to contain `new_size` elements. New elements are default-initialized for typed arrays and nil
    /// for untyped ones.
    ///
    /// Returns the engine's status code, [`Error::OK`] on success.
    pub fn resize(&mut self, new_size: usize) -> Error {
        self.call_mut("resize", (new_size as i64,))
    }

    /// Returns `true` if the array contains the given value.
    pub fn contains(&self, value: &T) -> bool {
        self.call_const("has", (value.to_variant(),))
    }

    /// Returns an iterator over the elements, converted to `T`.
    ///
    /// Modifications of the array through other handles during iteration are visible to the iterator.
    pub fn iter_shared(&self) -> ArrayIter<'_, T> {
        ArrayIter {
            array: self,
            next_idx: 0,
        }
    }

    /// Variant type the engine tags this array with; `Nil` for untyped arrays.
    pub fn element_type(&self) -> VariantType {
        let ty: i64 = self.call_const("get_typed_builtin", ());
        VariantType::from_sys(ty as sys::GDExtensionVariantType)
    }

    /// Class the engine tags this array with; empty unless the elements are objects.
    pub fn element_class_name(&self) -> StringName {
        self.call_const("get_typed_class_name", ())
    }

    fn variant_at(&self, index: usize) -> Option<&Variant> {
        if index >= self.len() {
            return None;
        }

        // SAFETY: the index is in bounds; the element lives as long as `self` is not mutated.
        unsafe { Some(Variant::borrow_var_sys(self.element_ptr(index))) }
    }

    /// # Safety
    /// `index` must be in bounds.
    unsafe fn element_ptr(&self, index: usize) -> sys::GDExtensionVariantPtr {
        let index_fn = sys::interface_fn!(array_operator_index);
        index_fn(sys::force_mut_ptr(self.sys()), index as sys::GDExtensionInt)
    }

    fn init_inner_type(&mut self) {
        let element_type = <T as GodotType>::variant_type();
        if element_type == VariantType::Nil {
            return;
        }

        let class_name = match T::class_name() {
            Some(class_name) => class_name.to_string_name(),
            None => StringName::new(),
        };
        let script = Variant::nil();

        // SAFETY: the array is empty and untyped; all arguments are valid for the duration of the call.
        unsafe {
            sys::interface_fn!(array_set_typed)(
                self.sys_mut(),
                element_type.sys(),
                class_name.string_sys(),
                script.var_sys(),
            );
        }
    }

    fn call_const<R: FromGodot>(&self, method_name: &'static str, args: impl ParamTuple) -> R {
        // SAFETY: all methods called through here belong to `Array` and have the given signature.
        unsafe { call_builtin(VariantType::Array, method_name, sys::force_mut_ptr(self.sys()), args) }
    }

    fn call_mut<R: FromGodot>(&mut self, method_name: &'static str, args: impl ParamTuple) -> R {
        // SAFETY: all methods called through here belong to `Array` and have the given signature.
        unsafe { call_builtin(VariantType::Array, method_name, self.sys_mut(), args) }
    }

    fn from_opaque(opaque: sys::types::OpaqueArray) -> Self {
        Self {
            opaque,
            _phantom: PhantomData,
        }
    }
}

// SAFETY: `Array<T>` has the layout of the engine's array storage; `T` is a marker.
unsafe impl<T: ArrayElement> GodotFfi for Array<T> {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Array
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; }
}

impl<T: ArrayElement> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ArrayElement> Clone for Array<T> {
    /// Shares the storage with `self`.
    fn clone(&self) -> Self {
        let ctor = sys::builtin_lifecycle_api().array_construct_copy;
        let args = [self.sys()];

        // SAFETY: the copy constructor takes one array argument.
        unsafe {
            Self::new_with_uninit(|self_ptr| {
                ctor(self_ptr, args.as_ptr());
            })
        }
    }
}

impl<T: ArrayElement> Drop for Array<T> {
    fn drop(&mut self) {
        let dtor = sys::builtin_lifecycle_api().array_destroy;

        // SAFETY: the storage is a valid array that is not used afterwards.
        unsafe { dtor(self.sys_mut()) }
    }
}

impl<T: ArrayElement> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        let op = sys::builtin_lifecycle_api().array_operator_equal;
        let mut result = false;

        // SAFETY: both operands are valid arrays; the evaluator writes a bool.
        unsafe {
            op(self.sys(), other.sys(), std::ptr::addr_of_mut!(result) as sys::GDExtensionTypePtr);
        }

        result
    }
}

impl<T: ArrayElement> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_variant().stringify())
    }
}

impl<T: ArrayElement> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: ArrayElement> Extend<T> for Array<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: ArrayElement + Clone> From<&[T]> for Array<T> {
    fn from(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversions

impl<T: ArrayElement> GodotFfiVariant for Array<T> {
    fn ffi_to_variant(&self) -> Variant {
        let converter = sys::builtin_lifecycle_api().array_to_variant;

        // SAFETY: the converter initializes the variant from a valid array.
        unsafe {
            Variant::new_with_var_uninit(|variant_ptr| {
                converter(variant_ptr, sys::force_mut_ptr(self.sys()));
            })
        }
    }

    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        let actual = variant.get_type();
        if actual != VariantType::Array {
            return Err(ConvertError::with_kind_value(
                ErrorKind::BadType {
                    expected: VariantType::Array,
                    actual,
                },
                variant.clone(),
            ));
        }

        let converter = sys::builtin_lifecycle_api().array_from_variant;

        // SAFETY: the variant holds an array.
        let array = unsafe {
            Self::new_with_uninit(|self_ptr| {
                converter(self_ptr, sys::force_mut_ptr(variant.var_sys()));
            })
        };

        let expected = <T as GodotType>::variant_type();
        let actual = array.element_type();
        if actual != expected {
            return Err(ConvertError::with_kind_value(
                ErrorKind::BadElementType { expected, actual },
                variant.clone(),
            ));
        }

        if let Some(expected) = <T as GodotType>::class_name() {
            let actual = String::from(&array.element_class_name());
            if actual != expected.as_str() {
                return Err(ConvertError::with_kind_value(
                    ErrorKind::BadElementClass { expected, actual },
                    variant.clone(),
                ));
            }
        }

        Ok(array)
    }
}

impl<T: ArrayElement> GodotConvert for Array<T> {
    type Via = Self;
}

impl<T: ArrayElement> ToGodot for Array<T> {
    fn to_godot(&self) -> Self::Via {
        self.clone()
    }
}

impl<T: ArrayElement> FromGodot for Array<T> {
    fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
        Ok(via)
    }
}

impl<T: ArrayElement> GodotType for Array<T> {
    type Ffi = Self;

    fn to_ffi(&self) -> Self::Ffi {
        self.clone()
    }

    fn into_ffi(self) -> Self::Ffi {
        self
    }

    fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
        Ok(ffi)
    }

    fn godot_type_name() -> String {
        if <T as GodotType>::variant_type() == VariantType::Nil {
            "Array".to_string()
        } else {
            format!("Array[{}]", T::godot_type_name())
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Iterator over the elements of an [`Array`], see [`Array::iter_shared()`].
pub struct ArrayIter<'a, T: ArrayElement> {
    array: &'a Array<T>,
    next_idx: usize,
}

impl<T: ArrayElement> Iterator for ArrayIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.array.get(self.next_idx)?;
        self.next_idx += 1;
        Some(element)
    }
}

/// Creates an [`Array`] from the given elements.
///
/// ```no_run
/// # use gdbind_core::array;
/// # use gdbind_core::builtin::Array;
/// let arr: Array<i64> = array![3, 1, 4];
/// ```
#[macro_export]
macro_rules! array {
    ($($elements:expr),* $(,)?) => {
        {
            let mut array = $crate::builtin::Array::default();
            $(
                array.push($elements);
            )*
            array
        }
    };
}
