/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Color;

crate::engine_class! {
    /// Abstract base class of everything in 2D space.
    pub struct CanvasItem: Node: Object {
        level: Scene,
        memory: MemManual,
        construct: none,
    }
}

crate::engine_methods! {
    impl CanvasItem {
        fn set_visible(&mut self, visible: bool) = 2586408642;
        fn is_visible(&self) -> bool = 36873697;
        fn show(&mut self) = 3218959716;
        fn hide(&mut self) = 3218959716;
        fn set_modulate(&mut self, modulate: Color) = 2920490490;
        fn get_modulate(&self) -> Color = 3444240500;
    }
}
