/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Constructors, destructors, variant conversions and comparison operators of builtin types.

use crate as sys;

pub type PtrConstructor = unsafe extern "C" fn(sys::GDExtensionUninitializedTypePtr, *const sys::GDExtensionConstTypePtr);
pub type PtrDestructor = unsafe extern "C" fn(sys::GDExtensionTypePtr);
pub type VariantFromTypeFn = unsafe extern "C" fn(sys::GDExtensionUninitializedVariantPtr, sys::GDExtensionTypePtr);
pub type VariantToTypeFn = unsafe extern "C" fn(sys::GDExtensionUninitializedTypePtr, sys::GDExtensionVariantPtr);
pub type PtrOperatorEvaluator =
    unsafe extern "C" fn(sys::GDExtensionConstTypePtr, sys::GDExtensionConstTypePtr, sys::GDExtensionTypePtr);

macro_rules! builtin_lifecycle_table {
    (
        conversions { $( $to_variant:ident / $from_variant:ident: $CONV_TY:ident, )* }
        constructors { $( $ctor:ident: $CTOR_TY:ident [$index:literal], )* }
        destructors { $( $dtor:ident: $DTOR_TY:ident, )* }
        operators { $( $op:ident: $OP:ident ($LEFT:ident, $RIGHT:ident), )* }
    ) => {
        /// Function pointers for the lifecycle of builtin types, loaded once at startup.
        pub struct BuiltinLifecycleTable {
            $(
                pub $to_variant: VariantFromTypeFn,
                pub $from_variant: VariantToTypeFn,
            )*
            $( pub $ctor: PtrConstructor, )*
            $( pub $dtor: PtrDestructor, )*
            $( pub $op: PtrOperatorEvaluator, )*
        }

        impl BuiltinLifecycleTable {
            /// # Safety
            /// `interface` must have been loaded from a live engine.
            pub(crate) unsafe fn load(interface: &sys::GDExtensionInterface) -> Result<Self, sys::InitError> {
                let get_from_type = interface
                    .get_variant_from_type_constructor
                    .ok_or(sys::InitError::MissingFunction("get_variant_from_type_constructor"))?;
                let get_to_type = interface
                    .get_variant_to_type_constructor
                    .ok_or(sys::InitError::MissingFunction("get_variant_to_type_constructor"))?;
                let get_constructor = interface
                    .variant_get_ptr_constructor
                    .ok_or(sys::InitError::MissingFunction("variant_get_ptr_constructor"))?;
                let get_destructor = interface
                    .variant_get_ptr_destructor
                    .ok_or(sys::InitError::MissingFunction("variant_get_ptr_destructor"))?;
                let get_operator = interface
                    .variant_get_ptr_operator_evaluator
                    .ok_or(sys::InitError::MissingFunction("variant_get_ptr_operator_evaluator"))?;

                Ok(Self {
                    $(
                        $to_variant: get_from_type(sys::$CONV_TY)
                            .ok_or(sys::InitError::MissingBuiltin(stringify!($to_variant)))?,
                        $from_variant: get_to_type(sys::$CONV_TY)
                            .ok_or(sys::InitError::MissingBuiltin(stringify!($from_variant)))?,
                    )*
                    $(
                        $ctor: get_constructor(sys::$CTOR_TY, $index)
                            .ok_or(sys::InitError::MissingBuiltin(stringify!($ctor)))?,
                    )*
                    $(
                        $dtor: get_destructor(sys::$DTOR_TY)
                            .ok_or(sys::InitError::MissingBuiltin(stringify!($dtor)))?,
                    )*
                    $(
                        $op: get_operator(sys::$OP, sys::$LEFT, sys::$RIGHT)
                            .ok_or(sys::InitError::MissingBuiltin(stringify!($op)))?,
                    )*
                })
            }
        }
    };
}

builtin_lifecycle_table! {
    conversions {
        bool_to_variant / bool_from_variant: GDEXTENSION_VARIANT_TYPE_BOOL,
        int_to_variant / int_from_variant: GDEXTENSION_VARIANT_TYPE_INT,
        float_to_variant / float_from_variant: GDEXTENSION_VARIANT_TYPE_FLOAT,
        string_to_variant / string_from_variant: GDEXTENSION_VARIANT_TYPE_STRING,
        vector2_to_variant / vector2_from_variant: GDEXTENSION_VARIANT_TYPE_VECTOR2,
        vector2i_to_variant / vector2i_from_variant: GDEXTENSION_VARIANT_TYPE_VECTOR2I,
        vector3_to_variant / vector3_from_variant: GDEXTENSION_VARIANT_TYPE_VECTOR3,
        vector3i_to_variant / vector3i_from_variant: GDEXTENSION_VARIANT_TYPE_VECTOR3I,
        color_to_variant / color_from_variant: GDEXTENSION_VARIANT_TYPE_COLOR,
        string_name_to_variant / string_name_from_variant: GDEXTENSION_VARIANT_TYPE_STRING_NAME,
        object_to_variant / object_from_variant: GDEXTENSION_VARIANT_TYPE_OBJECT,
        dictionary_to_variant / dictionary_from_variant: GDEXTENSION_VARIANT_TYPE_DICTIONARY,
        array_to_variant / array_from_variant: GDEXTENSION_VARIANT_TYPE_ARRAY,
        packed_byte_array_to_variant / packed_byte_array_from_variant: GDEXTENSION_VARIANT_TYPE_PACKED_BYTE_ARRAY,
    }
    constructors {
        string_construct_default: GDEXTENSION_VARIANT_TYPE_STRING[0],
        string_construct_copy: GDEXTENSION_VARIANT_TYPE_STRING[1],
        string_from_string_name: GDEXTENSION_VARIANT_TYPE_STRING[2],
        string_name_construct_default: GDEXTENSION_VARIANT_TYPE_STRING_NAME[0],
        string_name_construct_copy: GDEXTENSION_VARIANT_TYPE_STRING_NAME[1],
        string_name_from_string: GDEXTENSION_VARIANT_TYPE_STRING_NAME[2],
        array_construct_default: GDEXTENSION_VARIANT_TYPE_ARRAY[0],
        array_construct_copy: GDEXTENSION_VARIANT_TYPE_ARRAY[1],
        dictionary_construct_default: GDEXTENSION_VARIANT_TYPE_DICTIONARY[0],
        dictionary_construct_copy: GDEXTENSION_VARIANT_TYPE_DICTIONARY[1],
        packed_byte_array_construct_default: GDEXTENSION_VARIANT_TYPE_PACKED_BYTE_ARRAY[0],
        packed_byte_array_construct_copy: GDEXTENSION_VARIANT_TYPE_PACKED_BYTE_ARRAY[1],
    }
    destructors {
        string_destroy: GDEXTENSION_VARIANT_TYPE_STRING,
        string_name_destroy: GDEXTENSION_VARIANT_TYPE_STRING_NAME,
        array_destroy: GDEXTENSION_VARIANT_TYPE_ARRAY,
        dictionary_destroy: GDEXTENSION_VARIANT_TYPE_DICTIONARY,
        packed_byte_array_destroy: GDEXTENSION_VARIANT_TYPE_PACKED_BYTE_ARRAY,
    }
    operators {
        string_operator_equal: GDEXTENSION_VARIANT_OP_EQUAL(GDEXTENSION_VARIANT_TYPE_STRING, GDEXTENSION_VARIANT_TYPE_STRING),
        string_name_operator_equal: GDEXTENSION_VARIANT_OP_EQUAL(GDEXTENSION_VARIANT_TYPE_STRING_NAME, GDEXTENSION_VARIANT_TYPE_STRING_NAME),
        array_operator_equal: GDEXTENSION_VARIANT_OP_EQUAL(GDEXTENSION_VARIANT_TYPE_ARRAY, GDEXTENSION_VARIANT_TYPE_ARRAY),
        dictionary_operator_equal: GDEXTENSION_VARIANT_OP_EQUAL(GDEXTENSION_VARIANT_TYPE_DICTIONARY, GDEXTENSION_VARIANT_TYPE_DICTIONARY),
        packed_byte_array_operator_equal: GDEXTENSION_VARIANT_OP_EQUAL(GDEXTENSION_VARIANT_TYPE_PACKED_BYTE_ARRAY, GDEXTENSION_VARIANT_TYPE_PACKED_BYTE_ARRAY),
    }
}
