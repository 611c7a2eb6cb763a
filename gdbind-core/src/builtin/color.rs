/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::sys::{self, ffi_methods, GodotFfi};

/// Color built-in type, in floating-point RGBA format.
///
/// Channel values are typically in the range of 0 to 1, but this is not a requirement, and values outside this range are
/// explicitly allowed for e.g. High Dynamic Range (HDR).
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color {
    /// The color's red component.
    pub r: f32,
    /// The color's green component.
    pub g: f32,
    /// The color's blue component.
    pub b: f32,
    /// The color's alpha component. A value of 0 means that the color is fully transparent.
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT_BLACK: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.0);
    pub const TRANSPARENT_WHITE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.0);
    pub const BLACK: Color = Color::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::from_rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::from_rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::from_rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::from_rgb(1.0, 1.0, 0.0);

    /// Constructs a new `Color` with the given components.
    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Constructs a new `Color` with the given color components, and the alpha channel set to 1.
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Constructs a new `Color` with the given components as bytes. 0 is mapped to 0.0, 255 is mapped to 1.0.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgba(from_u8(r), from_u8(g), from_u8(b), from_u8(a))
    }

    /// Returns a copy of this color with the given alpha value.
    pub const fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    /// Linear interpolation between `self` and `to`, on all four channels.
    pub fn lerp(self, to: Color, weight: f64) -> Self {
        let weight = weight as f32;
        Self::from_glam(self.to_glam().lerp(to.to_glam(), weight))
    }

    /// Inverts the RGB channels; alpha stays as is.
    pub fn inverted(self) -> Self {
        Self::from_rgba(1.0 - self.r, 1.0 - self.g, 1.0 - self.b, self.a)
    }

    /// Channel values as bytes, rounded to the nearest value.
    pub fn to_rgba8(self) -> [u8; 4] {
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    /// Returns the luminance of the color in the `[0.0, 1.0]` range.
    pub fn luminance(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    fn from_glam(v: glam::Vec4) -> Self {
        Self::from_rgba(v.x, v.y, v.z, v.w)
    }

    fn to_glam(self) -> glam::Vec4 {
        glam::Vec4::new(self.r, self.g, self.b, self.a)
    }
}

impl Default for Color {
    /// Opaque black, as in the engine.
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    /// Formats the color as `(r, g, b, a)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl std::ops::Mul<f32> for Color {
    type Output = Color;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::from_glam(self.to_glam() * rhs)
    }
}

// SAFETY: `Color` is `repr(C)` with four `f32` channels, which is the engine's layout.
unsafe impl GodotFfi for Color {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Color
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; }
}

fn from_u8(byte: u8) -> f32 {
    byte as f32 / 255.0
}

fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
