/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::GString;

crate::engine_class! {
    /// Base class of serializable data such as shapes, fonts and shaders.
    pub struct Resource: RefCounted: Object {
        level: Core,
        memory: MemRefCounted,
        construct: gd,
    }
}

crate::engine_methods! {
    impl Resource {
        fn set_name(&mut self, name: GString) = 83702148;
        fn get_name(&self) -> GString = 201670096;
        fn set_local_to_scene(&mut self, enable: bool) = 2586408642;
        fn is_local_to_scene(&self) -> bool = 36873697;
    }
}
