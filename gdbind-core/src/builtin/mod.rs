/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Built-in types like [`Vector2`], [`GString`], [`Array`] or [`Variant`].
//!
//! Value types ([`Vector2`], [`Color`], ...) are plain Rust structs with the engine's memory layout. Types with
//! engine-side storage ([`GString`], [`Array`], [`Variant`], ...) hold an opaque buffer and are created, copied and
//! destroyed through the engine.

mod collections;
mod color;
mod string;
mod variant;
mod vectors;

pub use collections::*;
pub use color::*;
pub use string::*;
pub use variant::*;
pub use vectors::*;

pub use crate::sys::{VariantOperator, VariantType};

use crate::meta::{CallContext, FromGodot, ParamTuple, Signature};
use crate::sys;

/// Calls the builtin method `method_name` of `variant_type` on the value behind `base`.
///
/// # Safety
/// `base` must point to a valid value of `variant_type`, and `Params`/`R` must match the method's native signature.
pub(crate) unsafe fn call_builtin<Params: ParamTuple, R: FromGodot>(
    variant_type: VariantType,
    method_name: &'static str,
    base: sys::GDExtensionTypePtr,
    args: Params,
) -> R {
    let method = sys::builtin_method(variant_type, method_name);
    let call_ctx = CallContext::outbound(variant_type.name(), method_name);

    Signature::<Params, R>::out_builtin_ptrcall(method, base, call_ctx, args)
}

macro_rules! builtin_method_keys {
    ( $( $Type:ident :: $method:ident = $hash:literal, )* ) => {
        /// Builtin methods resolved at the `Core` level.
        pub(crate) const BUILTIN_METHOD_KEYS: &[sys::BuiltinMethodKey] = &[
            $(
                sys::BuiltinMethodKey {
                    variant_type: VariantType::$Type,
                    method_name: stringify!($method),
                    hash: $hash,
                },
            )*
        ];
    };
}

builtin_method_keys! {
    String::length = 3173160232,
    String::is_empty = 3918633141,

    StringName::length = 3173160232,
    StringName::is_empty = 3918633141,

    Array::size = 3173160232,
    Array::is_empty = 3918633141,
    Array::push_back = 3316032543,
    Array::pop_back = 1321915136,
    Array::clear = 3218959716,
    Array::resize = 848867239,
    Array::has = 3680194679,
    Array::get_typed_builtin = 3173160232,
    Array::get_typed_class_name = 1825232092,

    Dictionary::size = 3173160232,
    Dictionary::is_empty = 3918633141,
    Dictionary::has = 3680194679,
    Dictionary::erase = 1776646889,
    Dictionary::clear = 3218959716,
    Dictionary::keys = 4144163970,
    Dictionary::values = 4144163970,

    PackedByteArray::size = 3173160232,
    PackedByteArray::is_empty = 3918633141,
    PackedByteArray::push_back = 694024632,
    PackedByteArray::resize = 848867239,
    PackedByteArray::clear = 3218959716,
}
