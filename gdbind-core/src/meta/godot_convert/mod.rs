/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod impls;

use crate::builtin::Variant;
use crate::meta::error::ConvertError;
use crate::meta::traits::GodotFfiVariant;
use crate::meta::GodotType;

/// Indicates that a type can be passed to/from the engine, either directly or through an intermediate "via" type.
///
/// The `Via` type is the engine-side representation, e.g. all integers travel as `i64` and Rust `String` as `GString`.
pub trait GodotConvert {
    /// The type through which `Self` is represented in the engine.
    type Via: GodotType;
}

/// Defines the canonical conversion to the engine for a type.
///
/// It is assumed that this conversion cannot fail. For fallible conversions, implement `ToGodot` for a different type.
pub trait ToGodot: Sized + GodotConvert {
    /// Converts this type to the engine representation.
    fn to_godot(&self) -> Self::Via;

    /// Converts this type to a [Variant].
    fn to_variant(&self) -> Variant {
        self.to_godot().into_ffi().ffi_to_variant()
    }
}

/// Defines the canonical conversion from the engine for a type.
///
/// The conversion may fail, e.g. an `i64` that does not fit into `u8`.
pub trait FromGodot: Sized + GodotConvert {
    /// Converts the engine representation to this type, returning `Err` on failure.
    fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError>;

    /// ⚠️ Converts the engine representation to this type.
    ///
    /// # Panics
    /// If the conversion fails.
    fn from_godot(via: Self::Via) -> Self {
        Self::try_from_godot(via).unwrap_or_else(|err| panic!("FromGodot::from_godot() failed: {err}"))
    }

    /// Performs the conversion from a [`Variant`], returning `Err` on failure.
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        let ffi = <<Self::Via as GodotType>::Ffi as GodotFfiVariant>::ffi_from_variant(variant)?;
        let via = <Self::Via as GodotType>::try_from_ffi(ffi)?;

        Self::try_from_godot(via)
    }

    /// ⚠️ Performs the conversion from a [`Variant`].
    ///
    /// # Panics
    /// If the conversion fails.
    fn from_variant(variant: &Variant) -> Self {
        Self::try_from_variant(variant).unwrap_or_else(|err| panic!("FromGodot::from_variant() failed: {err}"))
    }
}

/// Implements the conversion traits for a type that is its own `Via` type.
#[macro_export]
#[doc(hidden)]
macro_rules! impl_godot_as_self {
    ($T:ty) => {
        impl $crate::meta::GodotConvert for $T {
            type Via = $T;
        }

        impl $crate::meta::ToGodot for $T {
            #[inline]
            fn to_godot(&self) -> Self::Via {
                self.clone()
            }
        }

        impl $crate::meta::FromGodot for $T {
            #[inline]
            fn try_from_godot(via: Self::Via) -> Result<Self, $crate::meta::error::ConvertError> {
                Ok(via)
            }
        }
    };
}
