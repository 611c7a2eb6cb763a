/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::{GString, PackedByteArray, Variant, VariantType};
use gdbind::meta::ToGodot;

use crate::framework::expect_panic;

fn packed_byte_array_construct() {
    let empty = PackedByteArray::new();
    assert!(empty.is_empty());
    assert_eq!(empty.as_slice(), &[] as &[u8]);

    let bytes = PackedByteArray::from(&[1, 2, 3]);
    assert_eq!(bytes.len(), 3);
    assert_eq!(bytes.as_slice(), &[1, 2, 3]);
    assert_eq!(bytes, PackedByteArray::from(vec![1, 2, 3]));
    assert_eq!(bytes, (1..=3).collect::<PackedByteArray>());
}

fn packed_byte_array_access() {
    let mut bytes = PackedByteArray::from(&[10, 20]);

    assert_eq!(bytes.get(1), Some(20));
    assert_eq!(bytes.get(2), None);

    bytes.set(0, 11);
    bytes.push(30);
    assert_eq!(bytes.to_vec(), vec![11, 20, 30]);

    expect_panic("set() out of bounds", || bytes.set(3, 0));
}

fn packed_byte_array_resize_and_clear() {
    let mut bytes = PackedByteArray::from(&[7]);

    bytes.resize(4);
    assert_eq!(bytes.as_slice(), &[7, 0, 0, 0]);

    bytes.resize(2);
    assert_eq!(bytes.as_slice(), &[7, 0]);

    bytes.clear();
    assert!(bytes.is_empty());
}

fn packed_byte_array_mutable_slice() {
    let mut bytes = PackedByteArray::from(&[1, 2, 3, 4]);

    bytes.as_mut_slice().reverse();
    for byte in bytes.as_mut_slice() {
        *byte *= 2;
    }

    assert_eq!(bytes.as_slice(), &[8, 6, 4, 2]);
}

fn packed_byte_array_copy_on_write() {
    let original = PackedByteArray::from(&[1, 2, 3]);
    let mut copy = original.clone();

    copy.set(0, 100);
    copy.push(4);

    assert_eq!(original.as_slice(), &[1, 2, 3]);
    assert_eq!(copy.as_slice(), &[100, 2, 3, 4]);
}

fn packed_byte_array_variant() {
    let bytes = PackedByteArray::from(&[0, 127, 255]);
    let variant = bytes.to_variant();

    assert_eq!(variant.get_type(), VariantType::PackedByteArray);
    assert_eq!(variant.stringify(), GString::from("[0, 127, 255]"));
    assert_eq!(variant.to::<PackedByteArray>(), bytes);
    assert!(Variant::from("bytes").try_to::<PackedByteArray>().is_err());
}

itests![
    packed_byte_array_construct,
    packed_byte_array_access,
    packed_byte_array_resize_and_clear,
    packed_byte_array_mutable_slice,
    packed_byte_array_copy_on_write,
    packed_byte_array_variant,
];
