/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::GString;

crate::engine_class! {
    /// A shader implemented in the engine's shading language.
    pub struct Shader: Resource: RefCounted: Object {
        level: Scene,
        memory: MemRefCounted,
        construct: gd,
    }
}

crate::engine_methods! {
    impl Shader {
        fn set_code(&mut self, code: GString) = 83702148;
        fn get_code(&self) -> GString = 201670096;

        /// Shader type, as declared by the `shader_type` statement of the code.
        fn get_mode(&self) -> Mode = 3392948163;
    }
}

crate::engine_enum! {
    pub enum Mode {
        /// Mode used to draw all 3D objects.
        SPATIAL = 0,
        /// Mode used to draw all 2D objects.
        CANVAS_ITEM = 1,
        /// Mode used to calculate particle information on a per-particle basis.
        PARTICLES = 2,
        /// Mode used for drawing skies.
        SKY = 3,
        /// Mode used for setting the color and density of volumetric fog effect.
        FOG = 4,
    }
}
