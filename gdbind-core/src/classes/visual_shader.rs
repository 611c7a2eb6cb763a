/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::GString;
use crate::classes::shader;

crate::engine_class! {
    /// A shader built from a graph of nodes instead of code.
    pub struct VisualShader: Shader: Resource: RefCounted: Object {
        level: Scene,
        memory: MemRefCounted,
        construct: gd,
    }
}

crate::engine_methods! {
    impl VisualShader {
        fn set_mode(&mut self, mode: shader::Mode) = 3978014962;

        /// Adds a varying that can pass data between the shader stages.
        fn add_varying(&mut self, name: GString, mode: VaryingMode, type_: VaryingType) = 2084110726;
        fn remove_varying(&mut self, name: GString) = 83702148;
        fn has_varying(&self, name: GString) -> bool = 3927539163;
    }
}

crate::engine_enum! {
    pub enum VaryingMode {
        /// Varying is passed from `Vertex` function to `Fragment` and `Light` functions.
        VERTEX_TO_FRAG_LIGHT = 0,
        /// Varying is passed from `Fragment` function to `Light` function.
        FRAG_TO_LIGHT = 1,
        /// Represents the size of the [`VaryingMode`] enum.
        MAX = 2,
    }
}

crate::engine_enum! {
    pub enum VaryingType {
        FLOAT = 0,
        INT = 1,
        UINT = 2,
        VECTOR_2D = 3,
        VECTOR_3D = 4,
        VECTOR_4D = 5,
        BOOLEAN = 6,
        TRANSFORM = 7,
        /// Represents the size of the [`VaryingType`] enum.
        MAX = 8,
    }
}
