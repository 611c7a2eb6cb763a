/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Randomized conversions through the engine's variant storage.

use gdbind::builtin::{Color, GString, Variant, Vector2, Vector3i};
use gdbind::meta::error::ErrorKind;
use gdbind::meta::{FromGodot, ToGodot};
use proptest::prelude::*;
use proptest::test_runner::{Config, TestRunner};

fn runner() -> TestRunner {
    // Runs on the engine's thread; no persistence files.
    TestRunner::new(Config {
        cases: 64,
        failure_persistence: None,
        ..Config::default()
    })
}

fn check<S: Strategy>(strategy: S, test: impl Fn(S::Value) -> Result<(), TestCaseError>) {
    if let Err(err) = runner().run(&strategy, test) {
        panic!("{err}");
    }
}

fn through_variant<T: ToGodot + FromGodot>(value: &T) -> T {
    value.to_variant().to::<T>()
}

fn convert_ints() {
    check(any::<i64>(), |value| {
        prop_assert_eq!(through_variant(&value), value);
        Ok(())
    });

    check(any::<i16>(), |value| {
        prop_assert_eq!(through_variant(&value), value);
        Ok(())
    });
}

fn convert_floats() {
    check(-1.0e9..1.0e9f64, |value| {
        prop_assert_eq!(through_variant(&value), value);
        Ok(())
    });

    check(-1.0e6..1.0e6f32, |value| {
        prop_assert_eq!(through_variant(&value), value);
        Ok(())
    });
}

fn convert_narrowing_detects_overflow() {
    check(any::<i64>(), |value| {
        let result = Variant::from(value).try_to::<i32>();

        match i32::try_from(value) {
            Ok(expected) => prop_assert_eq!(result.ok(), Some(expected)),
            Err(_) => {
                let err = result.expect_err("out of range");
                let is_out_of_range = matches!(err.kind(), ErrorKind::IntOutOfRange { target: "i32", .. });
                prop_assert!(is_out_of_range);
            }
        }
        Ok(())
    });
}

fn convert_strings() {
    check("[a-zA-Z0-9 äöüß]{0,24}", |text| {
        let gstring = GString::from(text.as_str());
        prop_assert_eq!(gstring.len(), text.chars().count());
        prop_assert_eq!(through_variant(&text), text.clone());
        prop_assert_eq!(gstring.to_variant().stringify().to_string(), text);
        Ok(())
    });
}

fn convert_vectors() {
    check((-1000.0..1000.0f32, -1000.0..1000.0f32), |(x, y)| {
        let vector = Vector2::new(x, y);
        prop_assert_eq!(through_variant(&vector), vector);
        Ok(())
    });

    check((any::<i32>(), any::<i32>(), any::<i32>()), |(x, y, z)| {
        let vector = Vector3i::new(x, y, z);
        prop_assert_eq!(through_variant(&vector), vector);
        Ok(())
    });
}

fn convert_colors() {
    check(any::<[u8; 4]>(), |[r, g, b, a]| {
        let color = Color::from_rgba8(r, g, b, a);
        prop_assert_eq!(through_variant(&color), color);
        prop_assert_eq!(color.to_rgba8(), [r, g, b, a]);
        Ok(())
    });
}

itests![
    convert_ints,
    convert_floats,
    convert_narrowing_detects_overflow,
    convert_strings,
    convert_vectors,
    convert_colors,
];
