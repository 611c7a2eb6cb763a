/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Engine classes, one module per class.
//!
//! Each module declares the class handle, its ptrcall methods and the enums scoped to the class, e.g.
//! [`cone_twist_joint_3d::Param`]. Objects are always held through [`Gd<T>`](crate::obj::Gd):
//!
//! ```no_run
//! use gdbind_core::classes::Light2D;
//! use gdbind_core::obj::NewAlloc;
//!
//! let mut light = Light2D::new_alloc();
//! light.set_energy(2.0);
//! assert_eq!(light.get_energy(), 2.0);
//! light.free();
//! ```

mod class_macros;

pub mod canvas_item;
pub mod circle_shape_2d;
pub mod cone_twist_joint_3d;
pub mod engine;
pub mod font;
pub mod joint_3d;
pub mod light_2d;
pub mod node;
pub mod node_2d;
pub mod node_3d;
pub mod object;
pub mod point_light_2d;
pub mod ray_cast_3d;
pub mod rectangle_shape_2d;
pub mod ref_counted;
pub mod resource;
pub mod shader;
pub mod shape_2d;
pub mod text_line;
pub mod visual_shader;
pub mod xml_parser;

pub use canvas_item::CanvasItem;
pub use circle_shape_2d::CircleShape2D;
pub use cone_twist_joint_3d::ConeTwistJoint3D;
pub use engine::Engine;
pub use font::Font;
pub use joint_3d::Joint3D;
pub use light_2d::Light2D;
pub use node::Node;
pub use node_2d::Node2D;
pub use node_3d::Node3D;
pub use object::Object;
pub use point_light_2d::PointLight2D;
pub use ray_cast_3d::RayCast3D;
pub use rectangle_shape_2d::RectangleShape2D;
pub use ref_counted::RefCounted;
pub use resource::Resource;
pub use shader::Shader;
pub use shape_2d::Shape2D;
pub use text_line::TextLine;
pub use visual_shader::VisualShader;
pub use xml_parser::XMLParser;

use crate::meta::ClassName;
use crate::obj::{GodotClass, Gd};
use crate::registry::class::{wrap_as, ClassFactory};
use crate::sys::{self, interface_fn, ClassMethodKey, InitLevel};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Class table

/// Static information about one engine class.
#[derive(Copy, Clone)]
pub(crate) struct ClassDescriptor {
    pub class_name: ClassName,
    pub init_level: InitLevel,
    pub method_keys: &'static [ClassMethodKey],
    pub factory: ClassFactory,
}

macro_rules! class_descriptors {
    ( $( $Class:ident ),* $(,)? ) => {
        /// All engine classes known to this library.
        pub(crate) const ENGINE_CLASSES: &[ClassDescriptor] = &[
            $(
                ClassDescriptor {
                    class_name: ClassName::new_static(stringify!($Class)),
                    init_level: <$Class as GodotClass>::INIT_LEVEL,
                    method_keys: $Class::METHOD_KEYS,
                    factory: wrap_as::<$Class>,
                },
            )*
        ];
    };
}

class_descriptors! {
    Object,
    RefCounted,
    Resource,
    XMLParser,
    Engine,
    TextLine,
    Node,
    CanvasItem,
    Node2D,
    Light2D,
    PointLight2D,
    Node3D,
    Joint3D,
    ConeTwistJoint3D,
    RayCast3D,
    Font,
    Shape2D,
    CircleShape2D,
    RectangleShape2D,
    Shader,
    VisualShader,
}

/// Keys of all class methods that become available at `level`.
pub(crate) fn method_keys_for_level(level: InitLevel) -> Vec<ClassMethodKey> {
    let mut keys: Vec<ClassMethodKey> = ENGINE_CLASSES
        .iter()
        .filter(|class| class.init_level == level)
        .flat_map(|class| class.method_keys.iter().copied())
        .collect();

    if level == Object::INIT_LEVEL {
        keys.extend_from_slice(Object::VARCALL_KEYS);
    }

    keys
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Construction

/// Instantiates an engine class through the class database.
///
/// # Panics
/// If the engine cannot instantiate the class (abstract, or its init level is not active yet).
pub(crate) fn construct_engine_object<T: GodotClass>() -> Gd<T> {
    let class_name = T::class_name();

    // SAFETY: the class name is a valid, cached `StringName`.
    let object_ptr = unsafe { interface_fn!(classdb_construct_object)(class_name.string_sys()) };
    assert!(
        !object_ptr.is_null(),
        "failed to construct engine class `{class_name}`; is its init level active?"
    );

    sys::out!("construct_engine_object: new <{class_name}>");

    // SAFETY: freshly constructed instance of `T`.
    unsafe { Gd::from_obj_sys(object_ptr) }
}

/// Fetches the engine singleton named like `T`.
///
/// # Panics
/// If the engine has no such singleton.
pub(crate) fn singleton_unchecked<T: GodotClass>() -> Gd<T> {
    let class_name = T::class_name();

    // SAFETY: the class name is a valid, cached `StringName`.
    let object_ptr = unsafe { interface_fn!(global_get_singleton)(class_name.string_sys()) };
    assert!(!object_ptr.is_null(), "engine singleton `{class_name}` is not available");

    // SAFETY: singletons live as long as the engine.
    unsafe { Gd::from_obj_sys(object_ptr) }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
