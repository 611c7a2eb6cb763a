/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

crate::engine_class! {
    /// Base class of all reference-counted classes. Instances are destroyed when the last reference is released.
    pub struct RefCounted: Object {
        level: Core,
        memory: MemRefCounted,
        construct: gd,
    }
}

crate::engine_methods! {
    impl RefCounted {
        /// Initializes the counter of a fresh instance; returns `false` if the instance is being destroyed.
        fn init_ref(&mut self) -> bool = 2240911060;

        /// Increments the counter; returns `false` if the instance is being destroyed.
        fn reference(&mut self) -> bool = 2240911060;

        /// Decrements the counter; returns `true` if this was the last reference.
        fn unreference(&mut self) -> bool = 2240911060;

        fn get_reference_count(&self) -> i32 = 3905245786;
    }
}
