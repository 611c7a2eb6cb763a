/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::classes::{Light2D, Node, Node3D, Object, PointLight2D, RayCast3D, XMLParser};
use gdbind::obj::{Gd, NewAlloc, NewGd};
use gdbind::registry::class::{
    class_factory, register_class_factory, registered_class_names, unregister_class_factory, wrap_as,
    wrap_polymorphic, ClassFactory, ErasedGd,
};

fn same_factory(a: ClassFactory, b: ClassFactory) -> bool {
    a as usize == b as usize
}

fn wrap_as_node(object: Gd<Object>) -> Box<dyn ErasedGd> {
    wrap_as::<Node>(object)
}

fn wrap_as_light(object: Gd<Object>) -> Box<dyn ErasedGd> {
    wrap_as::<Light2D>(object)
}

fn registry_contains_engine_classes() {
    let names = registered_class_names();

    for class in ["Object", "Node", "Node2D", "PointLight2D", "ConeTwistJoint3D", "TextLine", "XMLParser"] {
        assert!(names.iter().any(|name| name == class), "missing factory for {class}");
    }
    assert!(names.windows(2).all(|pair| pair[0] <= pair[1]), "names are sorted");
}

fn registry_later_registration_wins() {
    let name = "ItestOverwritten";
    assert!(class_factory(name).is_none());

    assert!(register_class_factory(name, wrap_as_node).is_none());
    let previous = register_class_factory(name, wrap_as_light).expect("replaced factory");
    assert!(same_factory(previous, wrap_as_node));
    assert!(same_factory(class_factory(name).expect("registered"), wrap_as_light));

    let removed = unregister_class_factory(name).expect("removed factory");
    assert!(same_factory(removed, wrap_as_light));
    assert!(class_factory(name).is_none());
    assert!(unregister_class_factory(name).is_none());
}

fn wrap_polymorphic_uses_runtime_class() {
    let light = PointLight2D::new_alloc();
    let id = light.instance_id();

    let wrapped = wrap_polymorphic(light.clone().upcast());
    assert_eq!(wrapped.class_name().as_str(), "PointLight2D");
    assert_eq!(wrapped.instance_id(), id);
    assert_eq!(wrapped.downcast_ref::<PointLight2D>(), Some(&light));
    assert!(wrapped.downcast_ref::<Light2D>().is_none());

    let light = wrapped.downcast::<PointLight2D>().expect("wrapped as PointLight2D");
    light.free();
}

fn wrap_polymorphic_ref_counted() {
    let parser = XMLParser::new_gd();
    let wrapped = wrap_polymorphic(parser.clone().upcast());

    assert_eq!(wrapped.to_object(), parser.clone().upcast::<Object>());
    assert!(wrapped.downcast_ref::<XMLParser>().is_some());
    assert_eq!(gdbind_mock::reference_count(parser.instance_id().to_u64()), 2);

    drop(wrapped);
    assert_eq!(gdbind_mock::reference_count(parser.instance_id().to_u64()), 1);
}

fn wrap_polymorphic_falls_back_to_object() {
    let ray = RayCast3D::new_alloc();
    let original = unregister_class_factory("RayCast3D").expect("engine factory");

    let wrapped = wrap_polymorphic(ray.clone().upcast());
    assert_eq!(wrapped.class_name().as_str(), "Object");
    assert!(wrapped.downcast_ref::<Object>().is_some());
    assert!(wrapped.downcast_ref::<RayCast3D>().is_none());

    register_class_factory("RayCast3D", original);
    let wrapped = wrap_polymorphic(ray.clone().upcast());
    assert!(wrapped.downcast_ref::<RayCast3D>().is_some());

    ray.free();
}

fn wrap_polymorphic_with_base_factory() {
    let node = Node3D::new_alloc();
    let original = register_class_factory("Node3D", wrap_as_node).expect("engine factory");

    let wrapped = wrap_polymorphic(node.clone().upcast());
    assert_eq!(wrapped.class_name().as_str(), "Node");
    assert!(wrapped.downcast_ref::<Node>().is_some());
    assert!(wrapped.downcast_ref::<Node3D>().is_none());

    register_class_factory("Node3D", original);
    node.free();
}

fn wrap_as_mismatched_class() {
    let node = Node::new_alloc();

    // Node is not a Light2D, so the factory falls back to Object.
    let wrapped = wrap_as_light(node.clone().upcast());
    assert!(wrapped.downcast_ref::<Light2D>().is_none());
    let object = wrapped.downcast::<Object>().expect("wrapped as Object");
    assert_eq!(object.instance_id(), node.instance_id());

    node.free();
}

itests![
    registry_contains_engine_classes,
    registry_later_registration_wins,
    wrap_polymorphic_uses_runtime_class,
    wrap_polymorphic_ref_counted,
    wrap_polymorphic_falls_back_to_object,
    wrap_polymorphic_with_base_factory,
    wrap_as_mismatched_class,
];
