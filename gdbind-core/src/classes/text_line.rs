/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::{GString, Variant, Vector2};
use crate::classes::Font;
use crate::global::HorizontalAlignment;
use crate::obj::Gd;

crate::engine_class! {
    /// Holds a single line of text, shaped by the text server.
    pub struct TextLine: RefCounted: Object {
        level: Servers,
        memory: MemRefCounted,
        construct: gd,
    }
}

crate::engine_methods! {
    impl TextLine {
        fn clear(&mut self) = 3218959716;

        /// Appends `text` with the given font; returns `false` if shaping failed.
        fn add_string(&mut self, text: GString, font: &Gd<Font>, font_size: i32, language: GString, meta: Variant) -> bool = 621426851;

        /// Width for text alignment and clipping; `-1` means unlimited.
        fn set_width(&mut self, width: f32) = 373806689;
        fn get_width(&self) -> f32 = 1740695150;
        fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment) = 2312603777;
        fn get_horizontal_alignment(&self) -> HorizontalAlignment = 341400642;

        /// Bounding box of the shaped text.
        fn get_size(&self) -> Vector2 = 3341600327;
        fn get_line_width(&self) -> f32 = 1740695150;
    }
}
