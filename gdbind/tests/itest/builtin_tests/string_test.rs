/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashSet;

use gdbind::builtin::{GString, StringName, Variant, VariantType};

fn string_construct_and_compare() {
    let empty = GString::new();
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert_eq!(empty, GString::default());

    let text = GString::from("hello");
    assert!(!text.is_empty());
    assert_eq!(text, GString::from(String::from("hello")));
    assert_ne!(text, GString::from("Hello"));
    assert_eq!(text.to_string(), "hello");
    assert_eq!(format!("{text:?}"), "\"hello\"");
}

fn string_len_counts_chars() {
    assert_eq!(GString::from("abc").len(), 3);
    assert_eq!(GString::from("héllo").len(), 5);
    assert_eq!(GString::from("日本語").len(), 3);
}

fn string_unicode_round_trip() {
    let original = "Grüße, 世界! 🦀";
    let gstring = GString::from(original);
    assert_eq!(String::from(&gstring), original);
    assert_eq!(String::from(gstring), original);
}

fn string_clone_is_equal() {
    let a = GString::from("copy me");
    let b = a.clone();
    drop(a);

    assert_eq!(b.to_string(), "copy me");
}

fn string_parse() {
    let parsed: GString = "parsed".parse().expect("parsing a GString never fails");
    assert_eq!(parsed, GString::from("parsed"));
}

fn string_name_construct_and_compare() {
    let name = StringName::from("position");
    assert_eq!(name.len(), 8);
    assert!(!name.is_empty());
    assert!(StringName::new().is_empty());

    assert_eq!(name, StringName::from("position"));
    assert_eq!(name, StringName::from(&GString::from("position")));
    assert_ne!(name, StringName::from("rotation"));
    assert_eq!(name.to_string(), "position");
    assert_eq!(String::from(&name), "position");
    assert_eq!(format!("{name:?}"), "&\"position\"");
}

fn string_name_hash() {
    let names: HashSet<StringName> = ["a", "b", "a", "c", "b"].into_iter().map(StringName::from).collect();

    assert_eq!(names.len(), 3);
    assert!(names.contains(&StringName::from("c")));
}

fn string_and_string_name_convert() {
    let name = StringName::from("node_name");
    let string = GString::from(&name);
    assert_eq!(string, GString::from("node_name"));

    let back = StringName::from(&string);
    assert_eq!(back, name);
}

fn string_variant_types() {
    let string = Variant::from(GString::from("a"));
    let name = Variant::from(StringName::from("a"));

    assert_eq!(string.get_type(), VariantType::String);
    assert_eq!(name.get_type(), VariantType::StringName);
    assert_eq!(string, name);

    assert!(name.try_to::<GString>().is_err());
    assert_eq!(name.to::<StringName>(), StringName::from("a"));
    assert_eq!(name.stringify(), GString::from("a"));
}

itests![
    string_construct_and_compare,
    string_len_counts_chars,
    string_unicode_round_trip,
    string_clone_is_equal,
    string_parse,
    string_name_construct_and_compare,
    string_name_hash,
    string_and_string_name_convert,
    string_variant_types,
];
