/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::{Color, GString, StringName, Vector2, Vector3i};
use serde_json::json;

fn serde_gstring() {
    let text = GString::from("Grüße");

    let json = serde_json::to_string(&text).expect("serialize");
    assert_eq!(json, "\"Grüße\"");

    let back: GString = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, text);
}

fn serde_string_name() {
    let name = StringName::from("position");

    let value = serde_json::to_value(&name).expect("serialize");
    assert_eq!(value, json!("position"));

    let back: StringName = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, name);
}

fn serde_vectors_and_color() {
    let vector = Vector2::new(1.5, -2.0);
    assert_eq!(serde_json::to_value(vector).expect("serialize"), json!({ "x": 1.5, "y": -2.0 }));

    let vector: Vector3i = serde_json::from_value(json!({ "x": 1, "y": 2, "z": 3 })).expect("deserialize");
    assert_eq!(vector, Vector3i::new(1, 2, 3));

    let color: Color = serde_json::from_str(r#"{ "r": 1.0, "g": 0.5, "b": 0.0, "a": 1.0 }"#).expect("deserialize");
    assert_eq!(color, Color::from_rgba(1.0, 0.5, 0.0, 1.0));
}

fn serde_rejects_wrong_shape() {
    assert!(serde_json::from_str::<GString>("42").is_err());
    assert!(serde_json::from_value::<Vector2>(json!([1.0, 2.0, 3.0])).is_err());
}

itests![
    serde_gstring,
    serde_string_name,
    serde_vectors_and_color,
    serde_rejects_wrong_shape,
];
