/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use super::builtin::{
    Array, Color, Dictionary, GString, PackedByteArray, StringName, Variant, VariantArray, VariantOperator,
    VariantType, Vector2, Vector2i, Vector3, Vector3i,
};
// Re-export macros.
pub use gdbind_core::{array, dict};
pub use super::classes::{
    CanvasItem, CircleShape2D, ConeTwistJoint3D, Engine, Font, Joint3D, Light2D, Node, Node2D, Node3D, Object,
    PointLight2D, RayCast3D, RectangleShape2D, RefCounted, Resource, Shader, Shape2D, TextLine, VisualShader, XMLParser,
};
pub use super::global::{godot_error, godot_print, godot_script_error, godot_warn, Error, HorizontalAlignment};
pub use super::init::{gdextension, ExtensionLibrary, InitLevel};
pub use super::meta::error::{CallError, ConvertError};
pub use super::meta::{FromGodot, GodotConvert, ToGodot};
pub use super::obj::{Gd, GodotClass, Inherits, InstanceId};

// Make trait methods available.
#[rustfmt::skip] // One per line.
mod trait_reexports {
    pub use crate::obj::EngineEnum as _;
    pub use crate::obj::NewAlloc as _;
    pub use crate::obj::NewGd as _;
    pub use crate::obj::Singleton as _; // singleton()
}

pub use trait_reexports::*;
