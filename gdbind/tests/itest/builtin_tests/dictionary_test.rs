/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::{Dictionary, GString, Variant, VariantType, Vector2};
use gdbind::meta::ToGodot;
use gdbind::prelude::dict;

fn dictionary_new_and_set() {
    let mut dictionary = Dictionary::new();
    assert!(dictionary.is_empty());

    dictionary.set("name", "Light2D");
    dictionary.set("energy", 1.5);
    dictionary.set(3, Vector2::new(1.0, 2.0));

    assert_eq!(dictionary.len(), 3);
    assert_eq!(dictionary.get("name").map(|v| v.to::<String>()), Some("Light2D".to_string()));
    assert_eq!(dictionary.get("energy").map(|v| v.to::<f64>()), Some(1.5));
    assert_eq!(dictionary.get(3).map(|v| v.to::<Vector2>()), Some(Vector2::new(1.0, 2.0)));
    assert_eq!(dictionary.get("missing"), None);
    assert_eq!(dictionary.len(), 3);
}

fn dictionary_macro() {
    let dictionary = dict! {
        "name": "Light2D",
        "energy": 1.5,
        "enabled": true,
    };

    assert_eq!(dictionary.len(), 3);
    assert!(dictionary.contains_key("enabled"));
    assert!(!dictionary.contains_key("color"));
    assert_eq!(format!("{dictionary:?}"), "{ \"name\": \"Light2D\", \"energy\": 1.5, \"enabled\": true }");
}

fn dictionary_insert_returns_previous() {
    let mut dictionary = dict! { "key": 1 };

    assert_eq!(dictionary.insert("key", 2), Some(Variant::from(1)));
    assert_eq!(dictionary.insert("other", 3), None);
    assert_eq!(dictionary.get_or_nil("key"), Variant::from(2));
    assert!(dictionary.get_or_nil("absent").is_nil());
}

fn dictionary_remove_and_clear() {
    let mut dictionary = dict! { "a": 1, "b": 2 };

    assert_eq!(dictionary.remove("a"), Some(Variant::from(1)));
    assert_eq!(dictionary.remove("a"), None);
    assert_eq!(dictionary.len(), 1);

    dictionary.clear();
    assert!(dictionary.is_empty());
}

fn dictionary_keys_and_values_in_order() {
    let dictionary = dict! { "z": 1, "a": 2, "m": 3 };

    let keys: Vec<String> = dictionary.keys_array().iter_shared().map(|k| k.to::<String>()).collect();
    assert_eq!(keys, ["z", "a", "m"]);

    let values: Vec<i64> = dictionary.values_array().iter_shared().map(|v| v.to::<i64>()).collect();
    assert_eq!(values, [1, 2, 3]);
}

fn dictionary_iter_shared() {
    let mut dictionary = dict! { "x": 10, "y": 20 };

    let mut sum = 0;
    for (key, value) in dictionary.clone().iter_shared() {
        if key.to::<String>() == "x" {
            dictionary.remove("y");
        }
        sum += value.to::<i64>();
    }

    assert_eq!(sum, 10);
}

fn dictionary_from_iterator() {
    let dictionary: Dictionary = (1..=3).map(|i| (i, i * i)).collect();

    assert_eq!(dictionary.len(), 3);
    assert_eq!(dictionary.get(3).map(|v| v.to::<i64>()), Some(9));
}

fn dictionary_clone_shares_storage() {
    let mut original = dict! { "a": 1 };
    let shared = original.clone();

    original.set("b", 2);
    assert_eq!(shared.len(), 2);
    assert_eq!(shared, original);
}

fn dictionary_equality() {
    let a = dict! { "a": 1, "b": "two" };
    let b = dict! { "a": 1, "b": "two" };
    let c = dict! { "a": 1 };

    assert_eq!(a, b);
    assert_ne!(a, c);
}

fn dictionary_variant_conversion() {
    let inner = dict! { "depth": 2 };
    let outer = dict! { "inner": inner.clone(), "name": GString::from("outer") };

    let variant = outer.to_variant();
    assert_eq!(variant.get_type(), VariantType::Dictionary);

    let back = variant.to::<Dictionary>();
    let nested = back.get("inner").map(|v| v.to::<Dictionary>()).expect("nested dictionary");
    assert_eq!(nested, inner);
    assert!(variant.try_to::<i64>().is_err());
}

itests![
    dictionary_new_and_set,
    dictionary_macro,
    dictionary_insert_returns_previous,
    dictionary_remove_and_clear,
    dictionary_keys_and_values_in_order,
    dictionary_iter_shared,
    dictionary_from_iterator,
    dictionary_clone_shares_storage,
    dictionary_equality,
    dictionary_variant_conversion,
];
