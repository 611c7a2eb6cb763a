/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::{GString, Variant, VariantType};
use gdbind::classes::{Light2D, Node};
use gdbind::obj::NewAlloc;

use crate::framework::expect_panic;

fn dynamic_call_setter_and_getter() {
    let mut light = Light2D::new_alloc();

    let result = light.call("set_energy", &[Variant::from(2.5)]);
    assert!(result.is_nil());

    let energy = light.call("get_energy", &[]);
    assert_eq!(energy.get_type(), VariantType::Float);
    assert_eq!(energy.to::<f64>(), 2.5);
    assert_eq!(light.get_energy(), 2.5);

    light.free();
}

fn dynamic_call_converts_int_to_float() {
    let mut light = Light2D::new_alloc();

    light.call("set_energy", &[Variant::from(3)]);
    assert_eq!(light.get_energy(), 3.0);

    light.free();
}

fn dynamic_call_inherited_method() {
    let mut light = Light2D::new_alloc();

    light.call("set_name", &[Variant::from("Sun")]);
    let name = light.call("get_name", &[]);
    assert_eq!(name.get_type(), VariantType::StringName);
    assert_eq!(name.stringify(), GString::from("Sun"));

    let class = light.call("get_class", &[]);
    assert_eq!(class.to::<String>(), "Light2D");

    light.free();
}

fn dynamic_call_unknown_method() {
    let mut node = Node::new_alloc();

    let err = node.try_call("fly", &[]).expect_err("Node cannot fly");
    assert_eq!(err.class_name(), "Object");
    assert_eq!(err.method_name(), "fly");
    assert_eq!(err.reason(), "method not found");
    assert_eq!(err.to_string(), "function call failed: Object::fly()\n    Reason: method not found");

    node.free();
}

fn dynamic_call_wrong_argument_type() {
    let mut light = Light2D::new_alloc();

    let err = light
        .try_call("set_energy", &[Variant::from("bright")])
        .expect_err("String is not a Float");
    assert_eq!(err.reason(), "parameter #2 -- cannot convert from String to Float");
    assert_eq!(light.get_energy(), 1.0);

    light.free();
}

fn dynamic_call_wrong_argument_count() {
    let mut light = Light2D::new_alloc();

    let err = light.try_call("set_energy", &[]).expect_err("missing argument");
    assert_eq!(err.reason(), "function has 2 parameters, but received 1 argument");

    let err = light
        .try_call("get_energy", &[Variant::from(1.0), Variant::from(2.0)])
        .expect_err("extra arguments");
    assert_eq!(err.reason(), "function has 1 parameter, but received 3 arguments");

    light.free();
}

fn dynamic_call_panics_on_error() {
    let mut node = Node::new_alloc();

    expect_panic("call() of unknown method", || {
        node.call("fly", &[]);
    });

    node.free();
}

itests![
    dynamic_call_setter_and_getter,
    dynamic_call_converts_int_to_float,
    dynamic_call_inherited_method,
    dynamic_call_unknown_method,
    dynamic_call_wrong_argument_type,
    dynamic_call_wrong_argument_count,
    dynamic_call_panics_on_error,
];
