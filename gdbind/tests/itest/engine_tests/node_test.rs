/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::StringName;
use gdbind::classes::node::InternalMode;
use gdbind::classes::{Node, Node2D, Node3D};
use gdbind::obj::{Gd, NewAlloc};

use crate::framework::{expect_engine_error, process_frame};

fn named(name: &str) -> Gd<Node> {
    let mut node = Node::new_alloc();
    node.set_name(StringName::from(name));
    node
}

fn add(parent: &mut Gd<Node>, child: &Gd<Node>) {
    parent.add_child(child, true, InternalMode::DISABLED);
}

fn is_alive(node: &Gd<Node>) -> bool {
    gdbind_mock::is_instance_alive(node.instance_id_unchecked().to_u64())
}

fn node_name_defaults_to_empty() {
    let mut node = Node::new_alloc();
    assert!(node.get_name().is_empty());

    node.set_name(StringName::from("Root"));
    assert_eq!(node.get_name(), StringName::from("Root"));

    node.free();
}

fn node_rejects_empty_name() {
    let mut node = named("Keep");

    let (_, errors) = expect_engine_error("empty name", || node.set_name(StringName::new()));
    assert_eq!(errors, ["Condition \"name.is_empty()\" is true."]);
    assert_eq!(node.get_name(), StringName::from("Keep"));

    node.free();
}

fn node_add_child_readable_names() {
    let mut parent = named("Parent");
    let first = Node::new_alloc();
    let second = Node::new_alloc();
    let player = named("Player");
    let other_player = named("Player");
    let sprite: Gd<Node> = Node2D::new_alloc().upcast();

    for child in [&first, &second, &player, &other_player, &sprite] {
        add(&mut parent, child);
    }

    assert_eq!(first.get_name(), StringName::from("Node"));
    assert_eq!(second.get_name(), StringName::from("Node2"));
    assert_eq!(player.get_name(), StringName::from("Player"));
    assert_eq!(other_player.get_name(), StringName::from("Player2"));
    assert_eq!(sprite.get_name(), StringName::from("Node2D"));

    parent.free();
}

fn node_add_child_generated_names() {
    let mut parent = named("Parent");
    let anonymous = Node::new_alloc();
    let unique = named("Unique");

    parent.add_child(&anonymous, false, InternalMode::DISABLED);
    parent.add_child(&unique, false, InternalMode::DISABLED);

    assert!(anonymous.get_name().to_string().starts_with("@Node@"));
    assert_eq!(unique.get_name(), StringName::from("Unique"));

    parent.free();
}

fn node_rename_avoids_sibling_names() {
    let mut parent = named("Parent");
    let a = named("A");
    let mut b = named("B");
    add(&mut parent, &a);
    add(&mut parent, &b);

    b.set_name(StringName::from("A"));
    assert_eq!(b.get_name(), StringName::from("A2"));

    parent.free();
}

fn node_tree_queries() {
    let mut parent = named("Parent");
    let a = named("A");
    let b = named("B");
    add(&mut parent, &a);
    add(&mut parent, &b);

    assert_eq!(parent.get_child_count(false), 2);
    assert_eq!(parent.get_child(0, false), Some(a.clone()));
    assert_eq!(parent.get_child(1, false), Some(b.clone()));
    assert_eq!(parent.get_child(-1, false), Some(b.clone()));
    assert_eq!(a.get_parent(), Some(parent.clone()));
    assert_eq!(parent.get_parent(), None);

    parent.free();
}

fn node_internal_children() {
    let mut parent = named("Parent");
    let regular = named("Regular");
    let front = named("Front");
    let back = named("Back");

    parent.add_child(&back, true, InternalMode::BACK);
    parent.add_child(&regular, true, InternalMode::DISABLED);
    parent.add_child(&front, true, InternalMode::FRONT);

    assert_eq!(parent.get_child_count(false), 1);
    assert_eq!(parent.get_child_count(true), 3);
    assert_eq!(parent.get_child(0, false), Some(regular.clone()));

    let all: Vec<_> = (0..3).filter_map(|i| parent.get_child(i, true)).collect();
    assert_eq!(all, [front, regular, back]);

    parent.free();
}

fn node_remove_child() {
    let mut parent = named("Parent");
    let child = named("Child");
    add(&mut parent, &child);

    parent.remove_child(&child);
    assert_eq!(parent.get_child_count(false), 0);
    assert_eq!(child.get_parent(), None);

    parent.free();
    assert!(is_alive(&child));
    child.free();
}

fn node_tree_errors() {
    let mut parent = named("Parent");
    let mut child = named("Child");
    let mut stranger = named("Stranger");
    add(&mut parent, &child);

    let (_, errors) = expect_engine_error("add to itself", || add(&mut stranger.clone(), &stranger));
    assert_eq!(errors, ["Can't add child 'Stranger' to itself."]);

    let (_, errors) = expect_engine_error("second parent", || add(&mut stranger, &child));
    assert_eq!(errors, ["Can't add child 'Child' to 'Stranger', already has a parent 'Parent'."]);

    let (_, errors) = expect_engine_error("cycle", || add(&mut child, &parent));
    assert!(errors[0].contains("cyclic dependency"), "{errors:?}");

    let (_, errors) = expect_engine_error("remove non-child", || stranger.remove_child(&child));
    assert_eq!(errors, ["Cannot remove child node 'Child' as it is not a child of this node."]);

    let (found, errors) = expect_engine_error("child out of range", || parent.get_child(5, false));
    assert_eq!(found, None);
    assert_eq!(errors, ["Index p_index = 5 is out of bounds (1 - 0 = 1)."]);

    assert_eq!(child.get_parent(), Some(parent.clone()));
    parent.free();
    stranger.free();
}

fn node_free_frees_subtree() {
    let mut root = named("Root");
    let mut branch = named("Branch");
    let leaf: Gd<Node> = Node3D::new_alloc().upcast();

    add(&mut root, &branch);
    add(&mut branch, &leaf);

    root.free();
    assert!(!is_alive(&branch));
    assert!(!is_alive(&leaf));
}

fn node_queue_free_at_frame_end() {
    let mut parent = named("Parent");
    let child = named("Child");
    add(&mut parent, &child);

    parent.queue_free();
    parent.queue_free();
    assert!(is_alive(&parent));
    assert!(is_alive(&child));

    assert_eq!(process_frame(), 1);
    assert!(!is_alive(&parent));
    assert!(!is_alive(&child));
    assert_eq!(process_frame(), 0);
}

itests![
    node_name_defaults_to_empty,
    node_rejects_empty_name,
    node_add_child_readable_names,
    node_add_child_generated_names,
    node_rename_avoids_sibling_names,
    node_tree_queries,
    node_internal_children,
    node_remove_child,
    node_tree_errors,
    node_free_frees_subtree,
    node_queue_free_at_frame_end,
];
