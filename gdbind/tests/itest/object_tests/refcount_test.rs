/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::{Array, Variant};
use gdbind::classes::{CircleShape2D, Object, RefCounted, Resource, Shape2D};
use gdbind::obj::{Gd, NewGd};

fn engine_refcount(gd: &Gd<impl gdbind::obj::GodotClass>) -> i64 {
    gdbind_mock::reference_count(gd.instance_id().to_u64())
}

fn refcount_new_holds_one_reference() {
    let object = RefCounted::new_gd();

    assert_eq!(object.get_reference_count(), 1);
    assert_eq!(engine_refcount(&object), 1);
    assert!(object.instance_id().is_ref_counted());
}

fn refcount_clone_and_drop() {
    let first = RefCounted::new_gd();
    let id = first.instance_id();

    let second = first.clone();
    assert_eq!(first.get_reference_count(), 2);

    drop(first);
    assert_eq!(second.get_reference_count(), 1);
    assert!(gdbind_mock::is_instance_alive(id.to_u64()));

    drop(second);
    assert!(!gdbind_mock::is_instance_alive(id.to_u64()));
}

fn refcount_variant_holds_reference() {
    let object = Resource::new_gd();

    let variant = Variant::from(&object);
    assert_eq!(object.get_reference_count(), 2);

    let copy = variant.clone();
    assert_eq!(object.get_reference_count(), 3);

    drop(variant);
    drop(copy);
    assert_eq!(object.get_reference_count(), 1);
}

fn refcount_variant_keeps_object_alive() {
    let variant = {
        let object = RefCounted::new_gd();
        Variant::from(object)
    };

    let object = variant.to::<Gd<RefCounted>>();
    let id = object.instance_id();
    assert_eq!(object.get_reference_count(), 2);

    drop(variant);
    drop(object);
    assert!(!gdbind_mock::is_instance_alive(id.to_u64()));
}

fn refcount_array_holds_reference() {
    let object = RefCounted::new_gd();
    let mut array = Array::<Gd<RefCounted>>::new();

    array.push(object.clone());
    assert_eq!(object.get_reference_count(), 2);

    let element = array.at(0);
    assert_eq!(element, object);
    assert_eq!(object.get_reference_count(), 3);
    drop(element);

    array.clear();
    assert_eq!(object.get_reference_count(), 1);
}

fn refcount_upcast_keeps_reference() {
    let shape = CircleShape2D::new_gd();
    let id = shape.instance_id();
    assert_eq!(shape.get_reference_count(), 1);

    let as_shape: Gd<Shape2D> = shape.upcast();
    assert_eq!(as_shape.get_reference_count(), 1);

    let as_object: Gd<Object> = as_shape.upcast();
    assert!(gdbind_mock::is_instance_alive(id.to_u64()));
    assert_eq!(gdbind_mock::reference_count(id.to_u64()), 1);

    let back = as_object.cast::<CircleShape2D>();
    assert_eq!(back.get_radius(), 10.0);

    drop(back);
    assert!(!gdbind_mock::is_instance_alive(id.to_u64()));
}

fn refcount_dynamic_object_released() {
    let object: Gd<Object> = Resource::new_gd().upcast();
    let id = object.instance_id();
    let other = object.clone();

    assert_eq!(gdbind_mock::reference_count(id.to_u64()), 2);
    drop(object);
    drop(other);
    assert!(!gdbind_mock::is_instance_alive(id.to_u64()));
}

itests![
    refcount_new_holds_one_reference,
    refcount_clone_and_drop,
    refcount_variant_holds_reference,
    refcount_variant_keeps_object_alive,
    refcount_array_holds_reference,
    refcount_upcast_keeps_reference,
    refcount_dynamic_object_released,
];
