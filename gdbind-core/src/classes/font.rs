/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

crate::engine_class! {
    /// Base class of fonts and font variations.
    pub struct Font: Resource: RefCounted: Object {
        level: Scene,
        memory: MemRefCounted,
        construct: gd,
    }
}

crate::engine_methods! {
    impl Font {
        /// Total line height (ascent plus descent) in pixels.
        fn get_height(&self, font_size: i32) -> f32 = 378113874;
        fn get_ascent(&self, font_size: i32) -> f32 = 378113874;
        fn get_descent(&self, font_size: i32) -> f32 = 378113874;
    }
}
