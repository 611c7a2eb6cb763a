/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::{Color, GString, StringName, Variant, VariantOperator, VariantType, Vector2, Vector2i, Vector3};
use gdbind::meta::error::ErrorKind;
use gdbind::meta::ToGodot;

use crate::framework::expect_panic;

fn variant_nil() {
    let nil = Variant::nil();

    assert!(nil.is_nil());
    assert_eq!(nil.get_type(), VariantType::Nil);
    assert_eq!(nil, Variant::default());
    assert_eq!(nil.stringify(), GString::from("<null>"));
    assert!(!nil.booleanize());
}

fn variant_types() {
    assert_eq!(Variant::from(true).get_type(), VariantType::Bool);
    assert_eq!(Variant::from(7).get_type(), VariantType::Int);
    assert_eq!(Variant::from(7u8).get_type(), VariantType::Int);
    assert_eq!(Variant::from(0.5f32).get_type(), VariantType::Float);
    assert_eq!(Variant::from("text").get_type(), VariantType::String);
    assert_eq!(Variant::from(StringName::from("name")).get_type(), VariantType::StringName);
    assert_eq!(Variant::from(Vector2::new(1.0, 2.0)).get_type(), VariantType::Vector2);
    assert_eq!(Variant::from(Vector2i::new(1, 2)).get_type(), VariantType::Vector2i);
    assert_eq!(Variant::from(Vector3::ZERO).get_type(), VariantType::Vector3);
    assert_eq!(Variant::from(Color::RED).get_type(), VariantType::Color);
}

fn variant_conversions() {
    assert!(Variant::from(true).to::<bool>());
    assert_eq!(Variant::from(-12).to::<i64>(), -12);
    assert_eq!(Variant::from(-12).to::<i32>(), -12);
    assert_eq!(Variant::from(2.5).to::<f32>(), 2.5);
    assert_eq!(Variant::from("abc").to::<String>(), "abc");
    assert_eq!(Variant::from(Vector2::new(1.5, -2.0)).to::<Vector2>(), Vector2::new(1.5, -2.0));
    assert_eq!(Color::BLUE.to_variant().to::<Color>(), Color::BLUE);
}

fn variant_conversion_is_strict() {
    let err = Variant::from(1.5).try_to::<i64>().expect_err("Float is not Int");
    assert!(matches!(
        err.kind(),
        ErrorKind::BadType {
            expected: VariantType::Int,
            actual: VariantType::Float
        }
    ));
    assert_eq!(err.value(), Some(&Variant::from(1.5)));

    assert!(Variant::from(1).try_to::<f64>().is_err());
    assert!(Variant::from("1").try_to::<i64>().is_err());
    assert!(Variant::nil().try_to::<bool>().is_err());

    expect_panic("to() with wrong type", || {
        let _ = Variant::from(true).to::<GString>();
    });
}

fn variant_narrow_int_out_of_range() {
    let err = Variant::from(300).try_to::<u8>().expect_err("300 does not fit into u8");
    assert!(matches!(err.kind(), ErrorKind::IntOutOfRange { target: "u8", value: 300 }));

    let err = Variant::from(i64::MAX).try_to::<i32>().expect_err("i64::MAX does not fit into i32");
    assert!(matches!(err.kind(), ErrorKind::IntOutOfRange { target: "i32", .. }));

    assert_eq!(Variant::from(255).try_to::<u8>().ok(), Some(255));
}

fn variant_stringify() {
    let text = |variant: Variant| variant.stringify().to_string();

    assert_eq!(text(Variant::from(true)), "true");
    assert_eq!(text(Variant::from(42)), "42");
    assert_eq!(text(Variant::from(2.0)), "2");
    assert_eq!(text(Variant::from(0.25)), "0.25");
    assert_eq!(text(Variant::from("plain")), "plain");
    assert_eq!(text(Variant::from(Vector2::new(1.5, 2.0))), "(1.5, 2)");
    assert_eq!(text(Variant::from(Vector2i::new(-1, 3))), "(-1, 3)");

    assert_eq!(Variant::from(7).to_string(), "7");
    assert_eq!(format!("{:?}", Variant::from("x")), "Variant(String: \"x\")");
    assert_eq!(format!("{:?}", Variant::from(3)), "Variant(Int: 3)");
    assert_eq!(format!("{:?}", Variant::nil()), "Variant(Nil)");
}

fn variant_booleanize() {
    assert!(Variant::from(1).booleanize());
    assert!(!Variant::from(0).booleanize());
    assert!(!Variant::from(0.0).booleanize());
    assert!(!Variant::from("").booleanize());
    assert!(Variant::from("no").booleanize());
    assert!(!Variant::from(Vector2::ZERO).booleanize());
    assert!(Variant::from(Vector2::UP).booleanize());
}

fn variant_equality() {
    assert_eq!(Variant::from(3), Variant::from(3));
    assert_eq!(Variant::from(3), Variant::from(3.0));
    assert_eq!(Variant::from("name"), Variant::from(StringName::from("name")));

    assert_ne!(Variant::from(3), Variant::from(4));
    assert_ne!(Variant::from(true), Variant::from(1));
    assert_ne!(Variant::from("3"), Variant::from(3));
    assert_ne!(Variant::nil(), Variant::from(0));
}

fn variant_evaluate_arithmetic() {
    let eval = |a: Variant, op, b: Variant| a.evaluate(&b, op);

    assert_eq!(eval(Variant::from(2), VariantOperator::Add, Variant::from(3)), Some(Variant::from(5)));
    assert_eq!(eval(Variant::from(7), VariantOperator::Divide, Variant::from(2)), Some(Variant::from(3)));
    assert_eq!(eval(Variant::from(1), VariantOperator::Subtract, Variant::from(0.5)), Some(Variant::from(0.5)));
    assert_eq!(
        eval(Variant::from("ab"), VariantOperator::Add, Variant::from("cd")),
        Some(Variant::from("abcd"))
    );
    assert_eq!(
        eval(Variant::from(Vector2::new(1.0, 2.0)), VariantOperator::Multiply, Variant::from(2)),
        Some(Variant::from(Vector2::new(2.0, 4.0)))
    );

    let product = eval(Variant::from(3), VariantOperator::Multiply, Variant::from(4)).expect("valid operation");
    assert_eq!(product.get_type(), VariantType::Int);
}

fn variant_evaluate_invalid() {
    assert_eq!(Variant::from(1).evaluate(&Variant::from(0), VariantOperator::Divide), None);
    assert_eq!(Variant::from(true).evaluate(&Variant::from(1), VariantOperator::Add), None);
    assert_eq!(Variant::from("a").evaluate(&Variant::from(1), VariantOperator::Multiply), None);
    assert_eq!(Variant::nil().evaluate(&Variant::from(1), VariantOperator::Less), None);
}

fn variant_evaluate_comparison() {
    let compare = |a: Variant, op, b: Variant| a.evaluate(&b, op).map(|result| result.to::<bool>());

    assert_eq!(compare(Variant::from(1), VariantOperator::Less, Variant::from(1.5)), Some(true));
    assert_eq!(compare(Variant::from(2), VariantOperator::GreaterEqual, Variant::from(2)), Some(true));
    assert_eq!(compare(Variant::from("b"), VariantOperator::Greater, Variant::from("a")), Some(true));
    assert_eq!(compare(Variant::from(5), VariantOperator::NotEqual, Variant::from(5)), Some(false));
    assert_eq!(compare(Variant::from(5), VariantOperator::LessEqual, Variant::from("5")), None);
}

fn variant_clone_is_independent() {
    let original = Variant::from("shared");
    let copy = original.clone();
    drop(original);

    assert_eq!(copy.to::<String>(), "shared");
}

itests![
    variant_nil,
    variant_types,
    variant_conversions,
    variant_conversion_is_strict,
    variant_narrow_int_out_of_range,
    variant_stringify,
    variant_booleanize,
    variant_equality,
    variant_evaluate_arithmetic,
    variant_evaluate_invalid,
    variant_evaluate_comparison,
    variant_clone_is_independent,
];
