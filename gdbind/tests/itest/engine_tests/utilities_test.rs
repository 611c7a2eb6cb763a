/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::{GString, Variant, Vector2};
use gdbind::global::{godot_error, godot_print, godot_script_error, godot_warn, print};
use gdbind_mock::{Message, MessageKind};

use crate::framework::capture_messages;

fn only_message(messages: Vec<Message>) -> Message {
    assert_eq!(messages.len(), 1, "expected exactly one message: {messages:?}");
    messages.into_iter().next().expect("one message")
}

fn utility_print_concatenates() {
    let (_, messages) = capture_messages(|| {
        print(&[Variant::from("frame "), Variant::from(7), Variant::from(true)]);
    });

    let message = only_message(messages);
    assert_eq!(message.kind, MessageKind::Print);
    assert_eq!(message.text, "frame 7true");
}

fn utility_print_stringifies_values() {
    let (_, messages) = capture_messages(|| {
        print(&[Variant::from(Vector2::new(1.0, 2.5)), Variant::from(" "), Variant::nil()]);
    });

    assert_eq!(only_message(messages).text, "(1, 2.5) <null>");
}

fn godot_print_formats() {
    let name = GString::from("world");
    let (_, messages) = capture_messages(|| godot_print!("hello {}, {} times", name, 3));

    let message = only_message(messages);
    assert_eq!(message.kind, MessageKind::Print);
    assert_eq!(message.text, "hello world, 3 times");
}

fn godot_warn_records_location() {
    let (_, messages) = capture_messages(|| godot_warn!("careful: {}", 42));
    let line = line!() as i32;

    let message = only_message(messages);
    assert_eq!(message.kind, MessageKind::Warning);
    assert_eq!(message.text, "careful: 42");
    assert!(message.file.ends_with("utilities_test.rs"), "file: {}", message.file);
    assert_eq!(message.line, line - 1);
    assert!(message.function.contains("godot_warn_records_location"), "function: {}", message.function);
}

fn godot_error_and_script_error() {
    let (_, messages) = capture_messages(|| {
        godot_error!("broken {}", "pipe");
        godot_script_error!("bad script");
    });

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].kind, MessageKind::Error);
    assert_eq!(messages[0].text, "broken pipe");
    assert_eq!(messages[1].kind, MessageKind::ScriptError);
    assert_eq!(messages[1].text, "bad script");
    assert!(messages.iter().all(|m| m.file.ends_with("utilities_test.rs") && m.line > 0));
}

itests![
    utility_print_concatenates,
    utility_print_stringifies_values,
    godot_print_formats,
    godot_warn_records_location,
    godot_error_and_script_error,
];
