/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::{Color, Vector2};
use gdbind::classes::{CanvasItem, Light2D, Node2D, PointLight2D};
use gdbind::obj::{Gd, NewAlloc};

fn canvas_item_visibility() {
    let mut item: Gd<CanvasItem> = Node2D::new_alloc().upcast();
    assert!(item.is_visible());

    item.hide();
    assert!(!item.is_visible());
    item.show();
    assert!(item.is_visible());
    item.set_visible(false);
    assert!(!item.is_visible());

    item.free();
}

fn canvas_item_modulate() {
    let mut node = Node2D::new_alloc();
    assert_eq!(node.get_modulate(), Color::WHITE);

    let tint = Color::from_rgba(0.5, 0.25, 1.0, 0.75);
    node.set_modulate(tint);
    assert_eq!(node.get_modulate(), tint);

    node.free();
}

fn node_2d_transform() {
    let mut node = Node2D::new_alloc();
    assert_eq!(node.get_position(), Vector2::ZERO);
    assert_eq!(node.get_rotation(), 0.0);

    node.set_position(Vector2::new(3.0, -4.0));
    node.translate(Vector2::new(1.5, 1.0));
    assert_eq!(node.get_position(), Vector2::new(4.5, -3.0));

    node.set_rotation(1.25);
    assert_eq!(node.get_rotation(), 1.25);

    node.free();
}

fn light_2d_properties() {
    let mut light: Gd<Light2D> = PointLight2D::new_alloc().upcast();
    assert!(light.is_enabled());
    assert_eq!(light.get_energy(), 1.0);
    assert_eq!(light.get_color(), Color::WHITE);

    light.set_enabled(false);
    light.set_energy(2.0);
    light.set_color(Color::RED);

    assert!(!light.is_enabled());
    assert_eq!(light.get_energy(), 2.0);
    assert_eq!(light.get_color(), Color::RED);

    // Inherited from Node2D.
    light.set_position(Vector2::new(8.0, 8.0));
    assert_eq!(light.get_position(), Vector2::new(8.0, 8.0));

    light.free();
}

fn point_light_2d_texture_scale() {
    let mut light = PointLight2D::new_alloc();
    assert_eq!(light.get_texture_scale(), 1.0);

    light.set_texture_scale(2.5);
    light.set_energy(0.5);
    assert_eq!(light.get_texture_scale(), 2.5);
    assert_eq!(light.get_energy(), 0.5);

    let as_light = light.clone().upcast::<Light2D>();
    assert_eq!(as_light.get_energy(), 0.5);

    light.free();
}

itests![
    canvas_item_visibility,
    canvas_item_modulate,
    node_2d_transform,
    light_2d_properties,
    point_light_2d_texture_scale,
];
