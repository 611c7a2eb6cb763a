/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::{Array, GString, StringName, Variant, VariantArray, VariantType, Vector2i};
use gdbind::classes::{Light2D, Node};
use gdbind::global::Error;
use gdbind::meta::error::ErrorKind;
use gdbind::meta::ToGodot;
use gdbind::obj::{Gd, NewAlloc};
use gdbind::prelude::array;

use crate::framework::expect_panic;

fn array_new_is_typed() {
    let ints = Array::<i64>::new();
    assert!(ints.is_empty());
    assert_eq!(ints.element_type(), VariantType::Int);

    assert_eq!(Array::<GString>::new().element_type(), VariantType::String);
    assert_eq!(Array::<Vector2i>::new().element_type(), VariantType::Vector2i);
    assert_eq!(VariantArray::new().element_type(), VariantType::Nil);
}

fn array_push_get_pop() {
    let mut array: Array<i64> = array![3, 1, 4];
    assert_eq!(array.len(), 3);
    assert_eq!(array.get(0), Some(3));
    assert_eq!(array.at(2), 4);
    assert_eq!(array.get(3), None);

    array.push(1);
    assert_eq!(array.len(), 4);
    assert_eq!(array.pop(), Some(1));
    assert_eq!(array.pop(), Some(4));
    assert_eq!(array.len(), 2);

    array.clear();
    assert!(array.is_empty());
    assert_eq!(array.pop(), None);
}

fn array_set() {
    let mut array: Array<i64> = array![1, 2, 3];
    array.set(1, 20);
    assert_eq!(array.iter_shared().collect::<Vec<_>>(), [1, 20, 3]);

    expect_panic("set() out of bounds", || array.set(3, 0));
    expect_panic("at() out of bounds", || {
        let _ = array.at(10);
    });
}

fn array_contains() {
    let array: Array<GString> = ["alpha", "beta"].into_iter().map(GString::from).collect();

    assert!(array.contains(&GString::from("beta")));
    assert!(!array.contains(&GString::from("gamma")));
}

fn array_resize_fills_defaults() {
    let mut ints: Array<i64> = array![7];
    assert_eq!(ints.resize(3), Error::OK);
    assert_eq!(ints.iter_shared().collect::<Vec<_>>(), [7, 0, 0]);

    assert_eq!(ints.resize(1), Error::OK);
    assert_eq!(ints.len(), 1);

    let mut variants = VariantArray::new();
    assert_eq!(variants.resize(2), Error::OK);
    assert!(variants.iter_shared().all(|v| v.is_nil()));
}

fn array_clone_shares_storage() {
    let mut original: Array<i64> = array![1];
    let shared = original.clone();

    original.push(2);
    assert_eq!(shared.len(), 2);
    assert_eq!(shared, original);
}

fn array_equality() {
    let a: Array<i64> = array![1, 2];
    let b: Array<i64> = Array::from(&[1, 2][..]);
    let c: Array<i64> = array![2, 1];

    assert_eq!(a, b);
    assert_ne!(a, c);
}

fn array_variant_elements() {
    let mut array = VariantArray::new();
    array.push(Variant::from(1));
    array.push(Variant::from("two"));
    array.push(Variant::nil());

    assert_eq!(array.len(), 3);
    assert_eq!(array.at(1).to::<String>(), "two");
    assert!(array.at(2).is_nil());
    assert_eq!(format!("{array:?}"), "[1, \"two\", <null>]");
}

fn array_iter_sees_later_pushes() {
    let mut array: Array<i64> = array![1, 2];
    let mut handle = array.clone();

    let mut seen = Vec::new();
    for (i, value) in array.iter_shared().enumerate() {
        if i == 0 {
            handle.push(3);
        }
        seen.push(value);
    }

    assert_eq!(seen, [1, 2, 3]);
    array.clear();
}

fn array_variant_conversion() {
    let array: Array<i64> = array![5, 6];
    let variant = array.to_variant();
    assert_eq!(variant.get_type(), VariantType::Array);
    assert_eq!(variant.stringify(), GString::from("[5, 6]"));

    let back = variant.to::<Array<i64>>();
    assert_eq!(back, array);

    let err = variant.try_to::<Array<GString>>().expect_err("element types differ");
    assert!(matches!(
        err.kind(),
        ErrorKind::BadElementType {
            expected: VariantType::String,
            actual: VariantType::Int
        }
    ));

    let err = variant.try_to::<VariantArray>().expect_err("typed array is not untyped");
    assert!(matches!(err.kind(), ErrorKind::BadElementType { .. }));

    let err = Variant::from(5).try_to::<Array<i64>>().expect_err("Int is not an Array");
    assert!(matches!(err.kind(), ErrorKind::BadType { .. }));
}

fn array_object_class_conversion() {
    let node = Node::new_alloc();
    let mut nodes: Array<Gd<Node>> = Array::new();
    nodes.push(node.clone());
    assert_eq!(nodes.element_type(), VariantType::Object);
    assert_eq!(nodes.element_class_name(), StringName::from("Node"));

    let variant = nodes.to_variant();
    let back = variant.try_to::<Array<Gd<Node>>>().expect("same element class");
    assert_eq!(back.len(), 1);

    let err = variant
        .try_to::<Array<Gd<Light2D>>>()
        .expect_err("Node array is not a Light2D array");
    match err.kind() {
        ErrorKind::BadElementClass { expected, actual } => {
            assert_eq!(expected.to_string(), "Light2D");
            assert_eq!(actual, "Node");
        }
        other => panic!("unexpected error kind: {other:?}"),
    }

    drop(back);
    drop(nodes);
    node.free();
}

itests![
    array_new_is_typed,
    array_push_get_pop,
    array_set,
    array_contains,
    array_resize_fills_defaults,
    array_clone_shares_storage,
    array_equality,
    array_variant_elements,
    array_iter_sees_later_pushes,
    array_variant_conversion,
    array_object_class_conversion,
];
