/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::{GString, StringName, Variant, VariantType};
use gdbind::classes::{ConeTwistJoint3D, Light2D, Node, Node2D, Node3D, Object, PointLight2D, RefCounted};
use gdbind::meta::error::ErrorKind;
use gdbind::obj::{Gd, GodotClass, InstanceId, NewAlloc, NewGd};

use crate::framework::expect_panic;

fn object_construct_and_free() {
    let before = gdbind_mock::instance_count("Node");

    let node = Node::new_alloc();
    let id = node.instance_id();
    assert!(node.is_instance_valid());
    assert!(gdbind_mock::is_instance_alive(id.to_u64()));
    assert_eq!(gdbind_mock::instance_count("Node"), before + 1);

    node.free();
    assert!(!gdbind_mock::is_instance_alive(id.to_u64()));
    assert_eq!(gdbind_mock::instance_count("Node"), before);
}

fn object_handles_to_freed_object() {
    let node = Node2D::new_alloc();
    let id = node.instance_id();
    let dangling = node.clone();

    node.free();
    assert!(!dangling.is_instance_valid());
    assert_eq!(dangling.instance_id_unchecked(), id);

    expect_panic("instance_id() of freed object", || {
        let _ = dangling.instance_id();
    });
    expect_panic("method call on freed object", || {
        let _ = dangling.get_position();
    });
    expect_panic("free() twice", move || dangling.free());
}

fn object_free_ref_counted_behind_object_panics() {
    let object: Gd<Object> = RefCounted::new_gd().upcast();
    let id = object.instance_id();

    // The closure drops the handle while unwinding, which releases the last reference.
    expect_panic("free() on RefCounted", move || object.free());
    assert!(!gdbind_mock::is_instance_alive(id.to_u64()));
}

fn object_instance_id_lookup() {
    let node = Node3D::new_alloc();
    let id = node.instance_id();

    let found = Gd::<Node3D>::from_instance_id(id);
    assert_eq!(found, node);

    let as_node = Gd::<Node>::try_from_instance_id(id).expect("Node3D is a Node");
    assert_eq!(as_node.instance_id(), id);

    let err = Gd::<Node2D>::try_from_instance_id(id).expect_err("Node3D is not a Node2D");
    assert!(matches!(err.kind(), ErrorKind::WrongClass { .. }));

    node.free();

    let err = Gd::<Node3D>::try_from_instance_id(id).expect_err("object is dead");
    assert!(matches!(err.kind(), ErrorKind::DeadObject));
    expect_panic("from_instance_id() of dead object", || {
        let _ = Gd::<Node3D>::from_instance_id(id);
    });
}

fn object_instance_id_conversions() {
    let node = Node::new_alloc();
    let id = node.instance_id();

    assert!(!id.is_ref_counted());
    assert_eq!(InstanceId::from_i64(id.to_i64()), id);
    assert_eq!(node.get_instance_id(), id.to_i64());
    assert_eq!(InstanceId::try_from_i64(0), None);

    let resource = RefCounted::new_gd();
    assert!(resource.instance_id().is_ref_counted());
    assert!(resource.instance_id().to_i64() < 0);

    node.free();
}

fn object_display_and_debug() {
    let node = Node::new_alloc();
    let id = node.instance_id();

    assert_eq!(node.to_string(), format!("<Node#{id}>"));
    assert_eq!(format!("{node:?}"), format!("Gd {{ id: {}, class: Node }}", id.to_i64()));

    let dangling = node.clone();
    node.free();
    assert_eq!(dangling.to_string(), "<Freed Object>");
}

fn object_upcast_keeps_identity() {
    let light = PointLight2D::new_alloc();
    let id = light.instance_id();

    let node: Gd<Node> = light.clone().upcast();
    assert_eq!(node.instance_id(), id);
    assert_eq!(node.dynamic_class_name(), "PointLight2D");

    let object = node.upcast::<Object>();
    assert_eq!(object.instance_id(), id);

    light.free();
}

fn object_upcast_ref_and_mut() {
    let mut light = Light2D::new_alloc();

    light.upcast_mut::<Node>().set_name(StringName::from("Lamp"));
    assert_eq!(light.upcast_ref::<Node>().get_name(), StringName::from("Lamp"));

    // Methods of all ancestors are reachable through deref, too.
    assert_eq!(light.get_name(), StringName::from("Lamp"));
    assert!(light.is_visible());

    light.free();
}

fn object_downcast() {
    let light = PointLight2D::new_alloc();
    let object: Gd<Object> = light.clone().upcast();

    let object = match object.try_cast::<Node3D>() {
        Ok(_) => panic!("PointLight2D must not cast to Node3D"),
        Err(object) => object,
    };

    let as_light = object.cast::<Light2D>();
    assert_eq!(as_light.instance_id(), light.instance_id());

    let node: Gd<Node> = as_light.upcast();
    expect_panic("cast to unrelated class", move || {
        let _ = node.cast::<Node3D>();
    });

    light.free();
}

fn object_static_inheritance() {
    assert!(PointLight2D::inherits::<Node>());
    assert!(PointLight2D::inherits::<PointLight2D>());
    assert!(ConeTwistJoint3D::inherits::<Node3D>());
    assert!(!Node::inherits::<Node2D>());
    assert!(!Node2D::inherits::<Node3D>());
    assert_eq!(ConeTwistJoint3D::class_name().to_string(), "ConeTwistJoint3D");
}

fn object_runtime_class_queries() {
    let node = Node2D::new_alloc();

    assert_eq!(node.get_class(), GString::from("Node2D"));
    assert!(node.is_class(GString::from("CanvasItem")));
    assert!(node.is_class(GString::from("Object")));
    assert!(!node.is_class(GString::from("Node3D")));

    assert!(node.has_method(StringName::from("get_position")));
    assert!(node.has_method(StringName::from("get_name")));
    assert!(!node.has_method(StringName::from("get_energy")));

    node.free();
}

fn object_base_object_alloc() {
    let object = Object::new_alloc();
    assert_eq!(object.get_class(), GString::from("Object"));
    assert!(!object.instance_id().is_ref_counted());
    object.free();
}

fn object_to_variant() {
    let node = Node3D::new_alloc();
    let id = node.instance_id();

    let variant = Variant::from(node.clone());
    assert_eq!(variant.get_type(), VariantType::Object);
    assert_eq!(variant.stringify(), GString::from(format!("<Node3D#{id}>")));

    let back = variant.to::<Gd<Node>>();
    assert_eq!(back.instance_id(), id);

    let err = variant.try_to::<Gd<Node2D>>().expect_err("Node3D is not a Node2D");
    assert!(matches!(err.kind(), ErrorKind::WrongClass { .. }));

    let nil = Variant::nil();
    assert_eq!(nil.to::<Option<Gd<Node>>>(), None);
    assert!(nil.try_to::<Gd<Node>>().is_err());

    node.free();
}

itests![
    object_construct_and_free,
    object_handles_to_freed_object,
    object_free_ref_counted_behind_object_panics,
    object_instance_id_lookup,
    object_instance_id_conversions,
    object_display_and_debug,
    object_upcast_keeps_identity,
    object_upcast_ref_and_mut,
    object_downcast,
    object_static_inheritance,
    object_runtime_class_queries,
    object_base_object_alloc,
    object_to_variant,
];
