/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::StringName;
use crate::obj::Gd;

crate::engine_class! {
    /// Base class of all scene objects. Nodes form a tree; each node owns its children.
    pub struct Node: Object {
        level: Scene,
        memory: MemManual,
        construct: alloc,
    }
}

crate::engine_methods! {
    impl Node {
        fn set_name(&mut self, name: StringName) = 3304788590;
        fn get_name(&self) -> StringName = 2002593661;

        /// Adds `node` as the last child. The parent takes ownership; freeing the parent frees the child.
        fn add_child(&mut self, node: &Gd<Node>, force_readable_name: bool, internal: InternalMode) = 3863233950;
        fn remove_child(&mut self, node: &Gd<Node>) = 1078189570;
        fn get_child_count(&self, include_internal: bool) -> i32 = 894402480;
        fn get_child(&self, idx: i32, include_internal: bool) -> Option<Gd<Node>> = 541253412;
        fn get_parent(&self) -> Option<Gd<Node>> = 3160264692;

        /// Schedules the node for deletion at the end of the current frame.
        fn queue_free(&mut self) = 3218959716;
    }
}

crate::engine_enum! {
    /// Where an internal child is placed among its siblings.
    pub enum InternalMode {
        DISABLED = 0,
        FRONT = 1,
        BACK = 2,
    }
}
