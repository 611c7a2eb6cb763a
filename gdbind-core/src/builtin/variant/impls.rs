/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::*;
use crate::meta::error::{ConvertError, ErrorKind};
use crate::meta::{ArrayElement, GodotFfiVariant, GodotType};
use crate::sys::{self, GodotFfi};

/// Implements `GodotFfiVariant`, `GodotType` and the conversion traits for a builtin whose storage is the engine's.
///
/// `$to_variant`/`$from_variant` name the converters in the builtin lifecycle table.
macro_rules! impl_ffi_variant {
    ($T:ty, $to_variant:ident, $from_variant:ident; $godot_type_name:ident) => {
        impl GodotFfiVariant for $T {
            fn ffi_to_variant(&self) -> Variant {
                let converter = sys::builtin_lifecycle_api().$to_variant;

                // SAFETY: the converter initializes the variant from a valid value.
                unsafe {
                    Variant::new_with_var_uninit(|variant_ptr| {
                        converter(variant_ptr, sys::force_mut_ptr(self.sys()));
                    })
                }
            }

            fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
                // A strict match is required; the engine's converters reinterpret the variant's payload.
                let actual = variant.get_type();
                if actual != <Self as GodotFfi>::variant_type() {
                    return Err(ConvertError::with_kind_value(
                        ErrorKind::BadType {
                            expected: <Self as GodotFfi>::variant_type(),
                            actual,
                        },
                        variant.clone(),
                    ));
                }

                let converter = sys::builtin_lifecycle_api().$from_variant;

                // SAFETY: the variant holds exactly this type, so the converter initializes the destination.
                let result = unsafe {
                    Self::new_with_uninit(|self_ptr| {
                        converter(self_ptr, sys::force_mut_ptr(variant.var_sys()));
                    })
                };

                Ok(result)
            }
        }

        impl GodotType for $T {
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
                stringify!($godot_type_name).into()
            }
        }

        impl ArrayElement for $T {}

        $crate::impl_godot_as_self!($T);
    };
}

impl_ffi_variant!(bool, bool_to_variant, bool_from_variant; bool);
impl_ffi_variant!(i64, int_to_variant, int_from_variant; int);
impl_ffi_variant!(f64, float_to_variant, float_from_variant; float);
impl_ffi_variant!(GString, string_to_variant, string_from_variant; String);
impl_ffi_variant!(StringName, string_name_to_variant, string_name_from_variant; StringName);
impl_ffi_variant!(Vector2, vector2_to_variant, vector2_from_variant; Vector2);
impl_ffi_variant!(Vector2i, vector2i_to_variant, vector2i_from_variant; Vector2i);
impl_ffi_variant!(Vector3, vector3_to_variant, vector3_from_variant; Vector3);
impl_ffi_variant!(Vector3i, vector3i_to_variant, vector3i_from_variant; Vector3i);
impl_ffi_variant!(Color, color_to_variant, color_from_variant; Color);
impl_ffi_variant!(Dictionary, dictionary_to_variant, dictionary_from_variant; Dictionary);
impl_ffi_variant!(PackedByteArray, packed_byte_array_to_variant, packed_byte_array_from_variant; PackedByteArray);

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Variant itself

impl GodotFfiVariant for Variant {
    fn ffi_to_variant(&self) -> Variant {
        self.clone()
    }

    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        Ok(variant.clone())
    }
}

impl GodotType for Variant {
    type Ffi = Variant;

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
        "Variant".to_string()
    }
}

impl ArrayElement for Variant {}

crate::impl_godot_as_self!(Variant);

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Unit, for methods without return value

impl GodotFfiVariant for () {
    fn ffi_to_variant(&self) -> Variant {
        Variant::nil()
    }

    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        if variant.is_nil() {
            return Ok(());
        }

        Err(ConvertError::with_kind_value(
            ErrorKind::BadType {
                expected: VariantType::Nil,
                actual: variant.get_type(),
            },
            variant.clone(),
        ))
    }
}

impl GodotType for () {
    type Ffi = ();

    fn to_ffi(&self) -> Self::Ffi {}

    fn into_ffi(self) -> Self::Ffi {}

    fn try_from_ffi(_ffi: Self::Ffi) -> Result<Self, ConvertError> {
        Ok(())
    }

    fn godot_type_name() -> String {
        "void".to_string()
    }
}

crate::impl_godot_as_self!(());
