/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::Variant;
use gdbind::classes::cone_twist_joint_3d::Param;
use gdbind::classes::node::InternalMode;
use gdbind::classes::xml_parser::NodeType;
use gdbind::global::{Error, HorizontalAlignment};
use gdbind::meta::error::ErrorKind;
use gdbind::meta::{FromGodot, ToGodot};
use gdbind::obj::EngineEnum;

use crate::framework::expect_panic;

fn engine_enum_ordinals() {
    assert_eq!(Error::OK.ord(), 0);
    assert_eq!(Error::ERR_FILE_NOT_FOUND.ord(), 7);
    assert_eq!(Error::try_from_ord(30), Some(Error::ERR_INVALID_DATA));
    assert_eq!(Error::try_from_ord(-1), None);

    assert_eq!(HorizontalAlignment::from_ord(3), HorizontalAlignment::FILL);
    assert_eq!(NodeType::try_from_ord(6), Some(NodeType::UNKNOWN));
    assert_eq!(InternalMode::FRONT.ord(), 1);
}

fn engine_enum_names() {
    assert_eq!(Error::ERR_FILE_EOF.as_str(), "ERR_FILE_EOF");
    assert_eq!(Param::TWIST_SPAN.as_str(), "TWIST_SPAN");
    assert_eq!(format!("{:?}", HorizontalAlignment::RIGHT), "RIGHT");
    assert_eq!(format!("{:?}", NodeType::ELEMENT_END), "ELEMENT_END");
}

fn engine_enum_values() {
    let alignments = HorizontalAlignment::values();
    assert_eq!(alignments, [
        HorizontalAlignment::LEFT,
        HorizontalAlignment::CENTER,
        HorizontalAlignment::RIGHT,
        HorizontalAlignment::FILL,
    ]);

    // Includes MAX.
    assert_eq!(Param::values().len(), 6);
    assert!(Error::values().iter().all(|e| Error::from_ord(e.ord()) == *e));
}

fn engine_enum_from_ord_panics() {
    expect_panic("unknown ordinal", || {
        let _ = HorizontalAlignment::from_ord(4);
    });
}

fn engine_enum_godot_conversion() {
    assert_eq!(HorizontalAlignment::CENTER.to_godot(), 1);
    assert_eq!(Error::from_godot(18), Error::ERR_FILE_EOF);

    let err = Param::try_from_godot(i64::from(i32::MAX) + 1).expect_err("ordinal does not fit i32");
    assert!(matches!(err.kind(), ErrorKind::UnknownEnumerator { enum_name: "Param", .. }));
}

fn engine_enum_variant_conversion() {
    let variant = Variant::from(HorizontalAlignment::RIGHT);
    assert_eq!(variant.to::<i64>(), 2);
    assert_eq!(variant.to::<HorizontalAlignment>(), HorizontalAlignment::RIGHT);

    let err = Variant::from(99).try_to::<HorizontalAlignment>().expect_err("unknown ordinal");
    assert!(matches!(err.kind(), ErrorKind::UnknownEnumerator { ord: 99, .. }));
    assert_eq!(err.to_string(), "`HorizontalAlignment` has no enumerator with ordinal 99");

    let err = Variant::from("LEFT").try_to::<HorizontalAlignment>().expect_err("wrong type");
    assert!(matches!(err.kind(), ErrorKind::BadType { .. }));
}

itests![
    engine_enum_ordinals,
    engine_enum_names,
    engine_enum_values,
    engine_enum_from_ord_panics,
    engine_enum_godot_conversion,
    engine_enum_variant_conversion,
];
