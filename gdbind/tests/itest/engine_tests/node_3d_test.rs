/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::f32::consts::{FRAC_PI_4, PI};

use gdbind::builtin::Vector3;
use gdbind::classes::cone_twist_joint_3d::Param;
use gdbind::classes::{ConeTwistJoint3D, Joint3D, Node3D, RayCast3D};
use gdbind::obj::{Gd, NewAlloc};

use crate::framework::{expect_engine_error, process_frame};

fn node_3d_properties() {
    let mut node = Node3D::new_alloc();
    assert_eq!(node.get_position(), Vector3::ZERO);
    assert!(node.is_visible());

    node.set_position(Vector3::new(1.0, 2.0, 3.0));
    node.set_visible(false);
    assert_eq!(node.get_position(), Vector3::new(1.0, 2.0, 3.0));
    assert!(!node.is_visible());

    node.free();
}

fn joint_3d_defaults() {
    let mut joint: Gd<Joint3D> = ConeTwistJoint3D::new_alloc().upcast();
    assert!(joint.get_exclude_nodes_from_collision());
    assert_eq!(joint.get_solver_priority(), 1);

    joint.set_exclude_nodes_from_collision(false);
    joint.set_solver_priority(4);
    assert!(!joint.get_exclude_nodes_from_collision());
    assert_eq!(joint.get_solver_priority(), 4);

    joint.free();
}

fn cone_twist_joint_params() {
    let mut joint = ConeTwistJoint3D::new_alloc();
    assert_eq!(joint.get_param(Param::SWING_SPAN), FRAC_PI_4);
    assert_eq!(joint.get_param(Param::TWIST_SPAN), PI);
    assert_eq!(joint.get_param(Param::BIAS), 0.3);
    assert_eq!(joint.get_param(Param::SOFTNESS), 0.8);
    assert_eq!(joint.get_param(Param::RELAXATION), 1.0);

    joint.set_param(Param::SOFTNESS, 0.5);
    assert_eq!(joint.get_param(Param::SOFTNESS), 0.5);
    assert_eq!(joint.get_param(Param::BIAS), 0.3);

    joint.free();
}

fn cone_twist_joint_param_out_of_range() {
    let mut joint = ConeTwistJoint3D::new_alloc();

    let (value, errors) = expect_engine_error("get MAX", || joint.get_param(Param::MAX));
    assert_eq!(value, 0.0);
    assert_eq!(errors, ["Index p_param = 5 is out of bounds (PARAM_MAX = 5)."]);

    expect_engine_error("set MAX", || joint.set_param(Param::MAX, 1.0));

    joint.free();
}

fn ray_cast_defaults() {
    let ray = RayCast3D::new_alloc();
    assert!(ray.is_enabled());
    assert_eq!(ray.get_target_position(), Vector3::new(0.0, -1.0, 0.0));
    assert!(!ray.is_colliding());
    assert_eq!(ray.get_collision_point(), Vector3::ZERO);

    ray.free();
}

fn ray_cast_updates_on_physics_frame() {
    let mut ray = RayCast3D::new_alloc();
    ray.set_position(Vector3::new(1.0, 2.0, 0.0));
    ray.set_target_position(Vector3::new(0.0, -4.0, 2.0));
    assert!(!ray.is_colliding());

    process_frame();
    assert!(ray.is_colliding());
    assert_eq!(ray.get_collision_point(), Vector3::new(1.0, 0.0, 1.0));
    assert_eq!(ray.get_collision_normal(), Vector3::new(0.0, 1.0, 0.0));

    // Too short to reach the ground.
    ray.set_target_position(Vector3::new(0.0, -1.0, 0.0));
    process_frame();
    assert!(!ray.is_colliding());

    ray.free();
}

fn ray_cast_disabled_is_not_updated() {
    let mut ray = RayCast3D::new_alloc();
    ray.set_enabled(false);
    ray.set_position(Vector3::new(0.0, 1.0, 0.0));
    ray.set_target_position(Vector3::new(0.0, -2.0, 0.0));

    process_frame();
    assert!(!ray.is_colliding());

    ray.force_raycast_update();
    assert!(ray.is_colliding());
    assert_eq!(ray.get_collision_point(), Vector3::ZERO);

    ray.free();
}

fn ray_cast_from_below() {
    let mut ray = RayCast3D::new_alloc();
    ray.set_position(Vector3::new(0.0, -3.0, 0.0));
    ray.set_target_position(Vector3::new(0.0, 6.0, 0.0));

    ray.force_raycast_update();
    assert!(ray.is_colliding());
    assert_eq!(ray.get_collision_normal(), Vector3::new(0.0, -1.0, 0.0));

    ray.free();
}

itests![
    node_3d_properties,
    joint_3d_defaults,
    cone_twist_joint_params,
    cone_twist_joint_param_out_of_range,
    ray_cast_defaults,
    ray_cast_updates_on_physics_frame,
    ray_cast_disabled_is_not_updated,
    ray_cast_from_below,
];
