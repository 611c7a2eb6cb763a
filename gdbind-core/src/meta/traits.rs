/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Variant;
use crate::meta::error::ConvertError;
use crate::meta::{ClassName, FromGodot, GodotConvert, ToGodot};
use crate::sys::{self, GodotFfi};

/// Conversion of FFI types to and from [`Variant`].
#[doc(hidden)]
pub trait GodotFfiVariant: Sized + GodotFfi {
    fn ffi_to_variant(&self) -> Variant;
    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError>;
}

/// Type that is directly representable in the engine.
///
/// Every type that crosses the boundary either implements this trait, or names an implementor as its
/// [`GodotConvert::Via`] type.
pub trait GodotType: GodotConvert<Via = Self> + ToGodot + FromGodot + Sized + 'static {
    /// Storage placed in call frames and return slots.
    #[doc(hidden)]
    type Ffi: GodotFfiVariant + 'static;

    #[doc(hidden)]
    fn to_ffi(&self) -> Self::Ffi;

    #[doc(hidden)]
    fn into_ffi(self) -> Self::Ffi;

    #[doc(hidden)]
    fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError>;

    #[doc(hidden)]
    fn from_ffi(ffi: Self::Ffi) -> Self {
        Self::try_from_ffi(ffi).unwrap_or_else(|err| panic!("conversion from FFI storage failed: {err}"))
    }

    fn variant_type() -> sys::VariantType {
        <Self::Ffi as GodotFfi>::variant_type()
    }

    /// Engine class of object types; `None` for everything else.
    fn class_name() -> Option<ClassName> {
        None
    }

    /// Name of the type as the engine spells it, used in diagnostics.
    fn godot_type_name() -> String;
}

/// Marker for types that can be elements of an [`Array`](crate::builtin::Array).
///
/// Typed arrays are tagged in the engine with the element's [`GodotType::variant_type()`] and class name.
pub trait ArrayElement: GodotType {}
