/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Meta-information about engine types, their conversions and the calling convention.
//!
//! # Conversions between types
//!
//! Values cross the boundary through [`ToGodot`] and [`FromGodot`]. Each convertible type names a [`GodotConvert::Via`]
//! type that the engine understands directly; e.g. `u8` travels as `i64` and `String` as [`GString`][crate::builtin::GString].
//!
//! # Calling convention
//!
//! Outbound calls are built with a [`CallFrame`]: arguments are appended in native order, then the frame is consumed by
//! one of its dispatch methods, which reserves the return slot, calls into the engine and reads the result.
//! [`Signature`] drives frames from typed parameter tuples.

mod call_frame;
mod class_name;
mod godot_convert;
mod signature;
mod traits;

pub mod error;

pub use call_frame::CallFrame;
pub use class_name::ClassName;
pub use godot_convert::{FromGodot, GodotConvert, ToGodot};
pub use signature::{CallContext, ParamTuple, Signature};
pub use traits::{ArrayElement, GodotType};

#[doc(hidden)]
pub use traits::GodotFfiVariant;
