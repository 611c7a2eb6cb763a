/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::GString;
use crate::meta::error::{ConvertError, ErrorKind};
use crate::meta::{ClassName, FromGodot, GodotConvert, GodotType, ToGodot};
use crate::sys::GodotNullableFfi;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Option<T>

impl<T> GodotConvert for Option<T>
where
    T: GodotType,
    T::Ffi: GodotNullableFfi,
{
    type Via = Self;
}

impl<T> GodotType for Option<T>
where
    T: GodotType,
    T::Ffi: GodotNullableFfi,
{
    type Ffi = T::Ffi;

    fn to_ffi(&self) -> Self::Ffi {
        GodotNullableFfi::flatten_option(self.as_ref().map(|t| t.to_ffi()))
    }

    fn into_ffi(self) -> Self::Ffi {
        GodotNullableFfi::flatten_option(self.map(|t| t.into_ffi()))
    }

    fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
        if ffi.is_null() {
            return Ok(None);
        }

        T::try_from_ffi(ffi).map(Some)
    }

    fn class_name() -> Option<ClassName> {
        T::class_name()
    }

    fn godot_type_name() -> String {
        T::godot_type_name()
    }
}

impl<T> ToGodot for Option<T>
where
    T: GodotType,
    T::Ffi: GodotNullableFfi,
{
    fn to_godot(&self) -> Self::Via {
        self.as_ref().map(ToGodot::to_godot)
    }
}

impl<T> FromGodot for Option<T>
where
    T: GodotType,
    T::Ffi: GodotNullableFfi,
{
    fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
        Ok(via)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// References

impl<T: ToGodot> GodotConvert for &T {
    type Via = T::Via;
}

impl<T: ToGodot> ToGodot for &T {
    fn to_godot(&self) -> Self::Via {
        (**self).to_godot()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Integers and floats narrower than the engine's 64 bits

macro_rules! impl_godot_via_i64 {
    ($T:ty) => {
        impl GodotConvert for $T {
            type Via = i64;
        }

        impl ToGodot for $T {
            fn to_godot(&self) -> Self::Via {
                i64::from(*self)
            }
        }

        impl FromGodot for $T {
            fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
                <$T>::try_from(via).map_err(|_| {
                    ConvertError::with_kind(ErrorKind::IntOutOfRange {
                        target: stringify!($T),
                        value: via,
                    })
                })
            }
        }
    };
}

impl_godot_via_i64!(i8);
impl_godot_via_i64!(u8);
impl_godot_via_i64!(i16);
impl_godot_via_i64!(u16);
impl_godot_via_i64!(i32);
impl_godot_via_i64!(u32);

impl GodotConvert for f32 {
    type Via = f64;
}

impl ToGodot for f32 {
    fn to_godot(&self) -> Self::Via {
        f64::from(*self)
    }
}

impl FromGodot for f32 {
    fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
        Ok(via as f32)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Rust strings

impl GodotConvert for String {
    type Via = GString;
}

impl ToGodot for String {
    fn to_godot(&self) -> Self::Via {
        GString::from(self.as_str())
    }
}

impl FromGodot for String {
    fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
        Ok(via.to_string())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
