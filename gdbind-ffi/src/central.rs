/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Engine-wide enumerations and the sizes of opaque builtin types.

use crate as sys;

/// Opaque storage of builtin types, sized for 64-bit builds with single-precision `real_t`.
pub mod types {
    use crate::Opaque;

    pub type OpaqueVariant = Opaque<24>;
    pub type OpaqueString = Opaque<8>;
    pub type OpaqueStringName = Opaque<8>;
    pub type OpaqueArray = Opaque<8>;
    pub type OpaqueDictionary = Opaque<8>;
    pub type OpaquePackedByteArray = Opaque<16>;
}

macro_rules! engine_variant_types {
    ( $( $Variant:ident = $SYS:ident, )* ) => {
        /// Type tag stored in every `Variant`.
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
        #[repr(u32)]
        pub enum VariantType {
            #[default]
            $( $Variant = sys::$SYS, )*
        }

        impl VariantType {
            /// All types, ordered by ordinal.
            pub const ALL: &'static [VariantType] = &[ $( VariantType::$Variant, )* ];

            #[doc(hidden)]
            pub fn from_sys(raw: sys::GDExtensionVariantType) -> Self {
                match raw {
                    $( sys::$SYS => Self::$Variant, )*
                    _ => {
                        eprintln!("WARNING: unknown variant type {raw}, treating as Nil");
                        Self::Nil
                    }
                }
            }

            #[doc(hidden)]
            pub fn sys(self) -> sys::GDExtensionVariantType {
                self as sys::GDExtensionVariantType
            }

            /// Name as printed by the engine's `type_string()`.
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$Variant => stringify!($Variant), )*
                }
            }
        }
    };
}

// First entry is the default.
engine_variant_types! {
    Nil = GDEXTENSION_VARIANT_TYPE_NIL,
    Bool = GDEXTENSION_VARIANT_TYPE_BOOL,
    Int = GDEXTENSION_VARIANT_TYPE_INT,
    Float = GDEXTENSION_VARIANT_TYPE_FLOAT,
    String = GDEXTENSION_VARIANT_TYPE_STRING,
    Vector2 = GDEXTENSION_VARIANT_TYPE_VECTOR2,
    Vector2i = GDEXTENSION_VARIANT_TYPE_VECTOR2I,
    Rect2 = GDEXTENSION_VARIANT_TYPE_RECT2,
    Rect2i = GDEXTENSION_VARIANT_TYPE_RECT2I,
    Vector3 = GDEXTENSION_VARIANT_TYPE_VECTOR3,
    Vector3i = GDEXTENSION_VARIANT_TYPE_VECTOR3I,
    Transform2D = GDEXTENSION_VARIANT_TYPE_TRANSFORM2D,
    Vector4 = GDEXTENSION_VARIANT_TYPE_VECTOR4,
    Vector4i = GDEXTENSION_VARIANT_TYPE_VECTOR4I,
    Plane = GDEXTENSION_VARIANT_TYPE_PLANE,
    Quaternion = GDEXTENSION_VARIANT_TYPE_QUATERNION,
    Aabb = GDEXTENSION_VARIANT_TYPE_AABB,
    Basis = GDEXTENSION_VARIANT_TYPE_BASIS,
    Transform3D = GDEXTENSION_VARIANT_TYPE_TRANSFORM3D,
    Projection = GDEXTENSION_VARIANT_TYPE_PROJECTION,
    Color = GDEXTENSION_VARIANT_TYPE_COLOR,
    StringName = GDEXTENSION_VARIANT_TYPE_STRING_NAME,
    NodePath = GDEXTENSION_VARIANT_TYPE_NODE_PATH,
    Rid = GDEXTENSION_VARIANT_TYPE_RID,
    Object = GDEXTENSION_VARIANT_TYPE_OBJECT,
    Callable = GDEXTENSION_VARIANT_TYPE_CALLABLE,
    Signal = GDEXTENSION_VARIANT_TYPE_SIGNAL,
    Dictionary = GDEXTENSION_VARIANT_TYPE_DICTIONARY,
    Array = GDEXTENSION_VARIANT_TYPE_ARRAY,
    PackedByteArray = GDEXTENSION_VARIANT_TYPE_PACKED_BYTE_ARRAY,
    PackedInt32Array = GDEXTENSION_VARIANT_TYPE_PACKED_INT32_ARRAY,
    PackedInt64Array = GDEXTENSION_VARIANT_TYPE_PACKED_INT64_ARRAY,
    PackedFloat32Array = GDEXTENSION_VARIANT_TYPE_PACKED_FLOAT32_ARRAY,
    PackedFloat64Array = GDEXTENSION_VARIANT_TYPE_PACKED_FLOAT64_ARRAY,
    PackedStringArray = GDEXTENSION_VARIANT_TYPE_PACKED_STRING_ARRAY,
    PackedVector2Array = GDEXTENSION_VARIANT_TYPE_PACKED_VECTOR2_ARRAY,
    PackedVector3Array = GDEXTENSION_VARIANT_TYPE_PACKED_VECTOR3_ARRAY,
    PackedColorArray = GDEXTENSION_VARIANT_TYPE_PACKED_COLOR_ARRAY,
    PackedVector4Array = GDEXTENSION_VARIANT_TYPE_PACKED_VECTOR4_ARRAY,
}

/// Operators understood by `variant_evaluate` and the typed operator evaluators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u32)]
pub enum VariantOperator {
    Equal = sys::GDEXTENSION_VARIANT_OP_EQUAL,
    NotEqual = sys::GDEXTENSION_VARIANT_OP_NOT_EQUAL,
    Less = sys::GDEXTENSION_VARIANT_OP_LESS,
    LessEqual = sys::GDEXTENSION_VARIANT_OP_LESS_EQUAL,
    Greater = sys::GDEXTENSION_VARIANT_OP_GREATER,
    GreaterEqual = sys::GDEXTENSION_VARIANT_OP_GREATER_EQUAL,
    Add = sys::GDEXTENSION_VARIANT_OP_ADD,
    Subtract = sys::GDEXTENSION_VARIANT_OP_SUBTRACT,
    Multiply = sys::GDEXTENSION_VARIANT_OP_MULTIPLY,
    Divide = sys::GDEXTENSION_VARIANT_OP_DIVIDE,
}

impl VariantOperator {
    #[doc(hidden)]
    pub fn sys(self) -> sys::GDExtensionVariantOperator {
        self as sys::GDExtensionVariantOperator
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
