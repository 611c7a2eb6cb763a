/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::{GString, Variant, Vector2};
use gdbind::classes::{CircleShape2D, Font, Object, RectangleShape2D, Resource, Shape2D, TextLine};
use gdbind::global::HorizontalAlignment;
use gdbind::obj::{Gd, NewGd};

use crate::framework::expect_engine_error;

fn resource_properties() {
    let mut resource = Resource::new_gd();
    assert_eq!(resource.get_name(), GString::new());
    assert!(!resource.is_local_to_scene());

    resource.set_name("level_1".into());
    resource.set_local_to_scene(true);
    assert_eq!(resource.get_name(), GString::from("level_1"));
    assert!(resource.is_local_to_scene());
}

fn shape_defaults() {
    let circle = CircleShape2D::new_gd();
    let rect = RectangleShape2D::new_gd();

    assert_eq!(circle.get_radius(), 10.0);
    assert_eq!(rect.get_size(), Vector2::new(20.0, 20.0));
    assert_eq!(circle.get_custom_solver_bias(), 0.0);
}

fn shape_properties() {
    let mut circle = CircleShape2D::new_gd();
    circle.set_radius(2.5);
    circle.set_custom_solver_bias(0.75);

    let shape: Gd<Shape2D> = circle.clone().upcast();
    assert_eq!(shape.get_custom_solver_bias(), 0.75);
    assert_eq!(circle.get_radius(), 2.5);

    let mut rect = RectangleShape2D::new_gd();
    rect.set_size(Vector2::new(4.0, 8.0));
    assert_eq!(rect.get_size(), Vector2::new(4.0, 8.0));

    // Resource properties are inherited.
    rect.set_name("hitbox".into());
    assert_eq!(rect.upcast::<Resource>().get_name(), GString::from("hitbox"));
}

fn font_metrics() {
    let font = Font::new_gd();

    assert_eq!(font.get_height(16), 16.0);
    assert_eq!(font.get_ascent(16), 12.8);
    assert_eq!(font.get_descent(16), 3.2);
    assert_eq!(font.get_ascent(20) + font.get_descent(20), font.get_height(20));
}

fn text_line_measures_strings() {
    let font = Font::new_gd();
    let mut line = TextLine::new_gd();
    assert_eq!(line.get_size(), Vector2::ZERO);

    assert!(line.add_string("abcd".into(), &font, 16, GString::new(), Variant::nil()));
    assert_eq!(line.get_size(), Vector2::new(32.0, 16.0));
    assert_eq!(line.get_line_width(), 32.0);

    // Widths add up, height is the largest font size.
    assert!(line.add_string("xy".into(), &font, 24, "en".into(), Variant::from(7)));
    assert_eq!(line.get_size(), Vector2::new(56.0, 24.0));

    line.clear();
    assert_eq!(line.get_size(), Vector2::ZERO);
}

fn text_line_counts_characters() {
    let font = Font::new_gd();
    let mut line = TextLine::new_gd();

    line.add_string("äöü".into(), &font, 10, GString::new(), Variant::nil());
    assert_eq!(line.get_line_width(), 15.0);
}

fn text_line_layout_properties() {
    let mut line = TextLine::new_gd();
    assert_eq!(line.get_width(), -1.0);
    assert_eq!(line.get_horizontal_alignment(), HorizontalAlignment::LEFT);

    line.set_width(120.0);
    line.set_horizontal_alignment(HorizontalAlignment::CENTER);
    assert_eq!(line.get_width(), 120.0);
    assert_eq!(line.get_horizontal_alignment(), HorizontalAlignment::CENTER);
}

fn text_line_rejects_missing_font() {
    let mut line = TextLine::new_gd();

    // The typed signature requires a font; a dynamic call can still pass nil.
    let args = [Variant::from("x"), Variant::nil(), Variant::from(8), Variant::from(""), Variant::nil()];
    let (added, errors) = expect_engine_error("missing font", || {
        line.upcast_mut::<Object>().call("add_string", &args)
    });
    assert_eq!(added, Variant::from(false));
    assert_eq!(errors, ["Parameter \"p_font\" is null."]);
    assert_eq!(line.get_line_width(), 0.0);
}

itests![
    resource_properties,
    shape_defaults,
    shape_properties,
    font_metrics,
    text_line_measures_strings,
    text_line_counts_characters,
    text_line_layout_properties,
    text_line_rejects_missing_font,
];
