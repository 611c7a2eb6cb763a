/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Engine classes known to the mock, with the behavior of their methods.
//!
//! Only what the binding exercises is modeled. State lives in the object table: plain properties, the scene tree, the
//! XML reader of a parser and the varyings of a visual shader.

use std::f64::consts::{FRAC_PI_4, PI};

use gdbind_ffi as sys;

use crate::classdb::{ClassInfo, Kind, MethodInfo};
use crate::interface::{self, report_error};
use crate::objects::{self, ChildEntry, ObjectRef, Varying};
use crate::value::Value;

const OK: i64 = 0;
const ERR_FILE_NOT_FOUND: i64 = 7;
const ERR_FILE_CANT_OPEN: i64 = 12;
const ERR_INVALID_DATA: i64 = 30;
const ERR_INVALID_PARAMETER: i64 = 31;

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

macro_rules! method {
    ($name:literal( $( $Param:ident ),* ) -> $Ret:ident = $hash:literal, $handler:expr) => {
        MethodInfo {
            name: $name,
            hash: $hash,
            params: &[ $( Kind::$Param ),* ],
            ret: Kind::$Ret,
            handler: $handler,
            vararg: false,
        }
    };
}

/// Getter of a plain property, with the value it has before the first set.
macro_rules! getter {
    ($name:literal -> $Ret:ident = $hash:literal, $key:literal, $default:expr) => {
        method!($name() -> $Ret = $hash, |addr, _| prop_or(addr, $key, $default))
    };
}

macro_rules! setter {
    ($name:literal($Param:ident) = $hash:literal, $key:literal) => {
        method!($name($Param) -> Nil = $hash, |addr, args| store(addr, $key, args[0].clone()))
    };
}

fn prop_or(addr: usize, key: &'static str, default: Value) -> Value {
    objects::prop(addr, key).unwrap_or(default)
}

fn store(addr: usize, key: &'static str, value: Value) -> Value {
    objects::set_prop(addr, key, value);
    Value::Nil
}

fn object_value(addr: usize) -> Value {
    ObjectRef::acquire(addr).map_or(Value::Nil, Value::Object)
}

const fn class(
    name: &'static str,
    parent: Option<&'static str>,
    instantiable: bool,
    methods: &'static [MethodInfo],
) -> ClassInfo {
    ClassInfo {
        name,
        parent,
        instantiable,
        singleton: false,
        methods,
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Class table

pub(crate) static CLASSES: &[ClassInfo] = &[
    class("Object", None, true, OBJECT),
    class("RefCounted", Some("Object"), true, REF_COUNTED),
    class("Resource", Some("RefCounted"), true, RESOURCE),
    class("XMLParser", Some("RefCounted"), true, XML_PARSER),
    class("TextLine", Some("RefCounted"), true, TEXT_LINE),
    ClassInfo {
        name: "Engine",
        parent: Some("Object"),
        instantiable: false,
        singleton: true,
        methods: ENGINE,
    },
    class("Node", Some("Object"), true, NODE),
    class("CanvasItem", Some("Node"), false, CANVAS_ITEM),
    class("Node2D", Some("CanvasItem"), true, NODE_2D),
    class("Light2D", Some("Node2D"), true, LIGHT_2D),
    class("PointLight2D", Some("Light2D"), true, POINT_LIGHT_2D),
    class("Node3D", Some("Node"), true, NODE_3D),
    class("Joint3D", Some("Node3D"), false, JOINT_3D),
    class("ConeTwistJoint3D", Some("Joint3D"), true, CONE_TWIST_JOINT_3D),
    class("RayCast3D", Some("Node3D"), true, RAY_CAST_3D),
    class("Font", Some("Resource"), true, FONT),
    class("Shape2D", Some("Resource"), false, SHAPE_2D),
    class("CircleShape2D", Some("Shape2D"), true, CIRCLE_SHAPE_2D),
    class("RectangleShape2D", Some("Shape2D"), true, RECTANGLE_SHAPE_2D),
    class("Shader", Some("Resource"), true, SHADER),
    class("VisualShader", Some("Shader"), true, VISUAL_SHADER),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Object, RefCounted, Resource

const OBJECT: &[MethodInfo] = &[
    method!("get_class"() -> String = 201670096, |addr, _| Value::String(objects::class_name(addr).to_string())),
    method!("is_class"(String) -> Bool = 3927539163, |addr, args| Value::Bool(objects::inherits(addr, args[0].as_str()))),
    method!("get_instance_id"() -> Int = 3905245786, |addr, _| Value::Int(objects::instance_id(addr) as i64)),
    method!("has_method"(StringName) -> Bool = 2619796661, |addr, args| {
        let found = objects::class_of(addr).is_some_and(|class| class.find_method(args[0].as_str()).is_some());
        Value::Bool(found)
    }),
    MethodInfo {
        name: "call",
        hash: 3400424181,
        params: &[],
        ret: Kind::Variant,
        // Dispatched by the varcall itself.
        handler: |_, _| Value::Nil,
        vararg: true,
    },
];

const REF_COUNTED: &[MethodInfo] = &[
    method!("init_ref"() -> Bool = 2240911060, |addr, _| Value::Bool(objects::init_ref(addr))),
    method!("reference"() -> Bool = 2240911060, |addr, _| Value::Bool(objects::reference(addr))),
    method!("unreference"() -> Bool = 2240911060, |addr, _| Value::Bool(objects::unreference(addr))),
    method!("get_reference_count"() -> Int = 3905245786, |addr, _| Value::Int(objects::reference_count(addr))),
];

const RESOURCE: &[MethodInfo] = &[
    setter!("set_name"(String) = 83702148, "name"),
    getter!("get_name" -> String = 201670096, "name", Value::String(String::new())),
    setter!("set_local_to_scene"(Bool) = 2586408642, "local_to_scene"),
    getter!("is_local_to_scene" -> Bool = 36873697, "local_to_scene", Value::Bool(false)),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Node

const NODE: &[MethodInfo] = &[
    method!("set_name"(StringName) -> Nil = 3304788590, |addr, args| {
        rename_node(addr, args[0].as_str());
        Value::Nil
    }),
    method!("get_name"() -> StringName = 2002593661, |addr, _| Value::StringName(objects::node_name(addr))),
    method!("add_child"(Object, Bool, Int) -> Nil = 3863233950, |addr, args| {
        add_child(addr, args[0].object_addr(), args[1].as_bool(), args[2].as_int());
        Value::Nil
    }),
    method!("remove_child"(Object) -> Nil = 1078189570, |addr, args| {
        remove_child(addr, args[0].object_addr());
        Value::Nil
    }),
    method!("get_child_count"(Bool) -> Int = 894402480, |addr, args| {
        Value::Int(objects::ordered_children(addr, args[0].as_bool()).len() as i64)
    }),
    method!("get_child"(Int, Bool) -> Object = 541253412, |addr, args| get_child(addr, args[0].as_int(), args[1].as_bool())),
    method!("get_parent"() -> Object = 3160264692, |addr, _| match objects::parent_of(addr) {
        0 => Value::Nil,
        parent => object_value(parent),
    }),
    method!("queue_free"() -> Nil = 3218959716, |addr, _| {
        objects::queue_free(addr);
        Value::Nil
    }),
];

fn set_node_name(addr: usize, name: String) {
    objects::with_object(addr, |obj| {
        if let Some(node) = &mut obj.node {
            node.name = name;
        }
    });
}

fn sibling_has_name(parent: usize, except: usize, name: &str) -> bool {
    objects::ordered_children(parent, true)
        .into_iter()
        .any(|sibling| sibling != except && objects::node_name(sibling) == name)
}

/// Name for `child` under `parent`, based on `wanted` (or the class name if empty), not taken by any sibling.
fn unique_child_name(parent: usize, child: usize, wanted: &str, readable: bool) -> String {
    let class = objects::class_name(child);

    if wanted.is_empty() && !readable {
        return format!("@{class}@{}", objects::next_serial());
    }

    let base = if wanted.is_empty() { class } else { wanted };
    if !sibling_has_name(parent, child, base) {
        return base.to_string();
    }

    if !readable {
        return format!("@{base}@{}", objects::next_serial());
    }

    (2..)
        .map(|n| format!("{base}{n}"))
        .find(|candidate| !sibling_has_name(parent, child, candidate))
        .unwrap_or_default()
}

fn rename_node(addr: usize, wanted: &str) {
    if wanted.is_empty() {
        report_error("Condition \"name.is_empty()\" is true.");
        return;
    }

    let name = match objects::parent_of(addr) {
        0 => wanted.to_string(),
        parent => unique_child_name(parent, addr, wanted, true),
    };
    set_node_name(addr, name);
}

fn add_child(parent: usize, child: usize, force_readable_name: bool, internal: i64) {
    if child == 0 || !objects::inherits(child, "Node") {
        report_error("Parameter \"p_child\" is null.");
        return;
    }

    let child_name = objects::node_name(child);
    let parent_name = objects::node_name(parent);

    if child == parent {
        report_error(format!("Can't add child '{child_name}' to itself."));
        return;
    }

    let existing_parent = objects::parent_of(child);
    if existing_parent != 0 {
        report_error(format!(
            "Can't add child '{child_name}' to '{parent_name}', already has a parent '{}'.",
            objects::node_name(existing_parent)
        ));
        return;
    }

    if objects::is_ancestor_or_self(child, parent) {
        report_error(format!(
            "Can't add child '{child_name}' to '{parent_name}' as it would result in a cyclic dependency since \
             '{child_name}' is already a parent of '{parent_name}'."
        ));
        return;
    }

    let name = unique_child_name(parent, child, &child_name, force_readable_name);

    objects::with_object(child, |obj| {
        if let Some(node) = &mut obj.node {
            node.name = name;
            node.parent = parent;
        }
    });
    objects::with_object(parent, |obj| {
        if let Some(node) = &mut obj.node {
            node.children.push(ChildEntry {
                addr: child,
                internal: internal.clamp(0, 2),
            });
        }
    });
}

fn remove_child(parent: usize, child: usize) {
    if child == 0 {
        report_error("Parameter \"p_child\" is null.");
        return;
    }

    if objects::parent_of(child) != parent {
        report_error(format!(
            "Cannot remove child node '{}' as it is not a child of this node.",
            objects::node_name(child)
        ));
        return;
    }

    objects::with_object(parent, |obj| {
        if let Some(node) = &mut obj.node {
            node.children.retain(|entry| entry.addr != child);
        }
    });
    objects::with_object(child, |obj| {
        if let Some(node) = &mut obj.node {
            node.parent = 0;
        }
    });
}

fn get_child(addr: usize, index: i64, include_internal: bool) -> Value {
    let children = objects::ordered_children(addr, include_internal);
    let len = children.len() as i64;
    let resolved = if index < 0 { index + len } else { index };

    match usize::try_from(resolved).ok().and_then(|i| children.get(i)) {
        Some(child) => object_value(*child),
        None => {
            report_error(format!("Index p_index = {index} is out of bounds ({len} - 0 = {len})."));
            Value::Nil
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// 2D nodes

const CANVAS_ITEM: &[MethodInfo] = &[
    setter!("set_visible"(Bool) = 2586408642, "visible"),
    getter!("is_visible" -> Bool = 36873697, "visible", Value::Bool(true)),
    method!("show"() -> Nil = 3218959716, |addr, _| store(addr, "visible", Value::Bool(true))),
    method!("hide"() -> Nil = 3218959716, |addr, _| store(addr, "visible", Value::Bool(false))),
    setter!("set_modulate"(Color) = 2920490490, "modulate"),
    getter!("get_modulate" -> Color = 3444240500, "modulate", Value::Color(WHITE)),
];

const NODE_2D: &[MethodInfo] = &[
    setter!("set_position"(Vector2) = 743155724, "position"),
    getter!("get_position" -> Vector2 = 3341600327, "position", Value::Vector2([0.0; 2])),
    setter!("set_rotation"(Float) = 373806689, "rotation"),
    getter!("get_rotation" -> Float = 1740695150, "rotation", Value::Float(0.0)),
    method!("translate"(Vector2) -> Nil = 743155724, |addr, args| {
        let [x, y] = prop_or(addr, "position", Value::Vector2([0.0; 2])).as_vector2();
        let [dx, dy] = args[0].as_vector2();
        store(addr, "position", Value::Vector2([x + dx, y + dy]))
    }),
];

const LIGHT_2D: &[MethodInfo] = &[
    setter!("set_enabled"(Bool) = 2586408642, "enabled"),
    getter!("is_enabled" -> Bool = 36873697, "enabled", Value::Bool(true)),
    setter!("set_energy"(Float) = 373806689, "energy"),
    getter!("get_energy" -> Float = 1740695150, "energy", Value::Float(1.0)),
    setter!("set_color"(Color) = 2920490490, "color"),
    getter!("get_color" -> Color = 3444240500, "color", Value::Color(WHITE)),
];

const POINT_LIGHT_2D: &[MethodInfo] = &[
    setter!("set_texture_scale"(Float) = 373806689, "texture_scale"),
    getter!("get_texture_scale" -> Float = 1740695150, "texture_scale", Value::Float(1.0)),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// 3D nodes

const NODE_3D: &[MethodInfo] = &[
    setter!("set_position"(Vector3) = 3460891852, "position"),
    getter!("get_position" -> Vector3 = 3360562783, "position", Value::Vector3([0.0; 3])),
    setter!("set_visible"(Bool) = 2586408642, "visible"),
    getter!("is_visible" -> Bool = 36873697, "visible", Value::Bool(true)),
];

const JOINT_3D: &[MethodInfo] = &[
    setter!("set_exclude_nodes_from_collision"(Bool) = 2586408642, "exclude_nodes_from_collision"),
    getter!("get_exclude_nodes_from_collision" -> Bool = 36873697, "exclude_nodes_from_collision", Value::Bool(true)),
    setter!("set_solver_priority"(Int) = 1286410249, "solver_priority"),
    getter!("get_solver_priority" -> Int = 3905245786, "solver_priority", Value::Int(1)),
];

/// Property key and default of each `ConeTwistJoint3D.Param`, by ordinal.
const CONE_TWIST_PARAMS: [(&str, f64); 5] = [
    ("swing_span", FRAC_PI_4),
    ("twist_span", PI),
    ("bias", 0.3),
    ("softness", 0.8),
    ("relaxation", 1.0),
];

fn cone_twist_param(param: i64) -> Option<(&'static str, f64)> {
    let found = usize::try_from(param).ok().and_then(|i| CONE_TWIST_PARAMS.get(i)).copied();
    if found.is_none() {
        report_error(format!("Index p_param = {param} is out of bounds (PARAM_MAX = {}).", CONE_TWIST_PARAMS.len()));
    }
    found
}

const CONE_TWIST_JOINT_3D: &[MethodInfo] = &[
    method!("set_param"(Int, Float) -> Nil = 1062470226, |addr, args| match cone_twist_param(args[0].as_int()) {
        Some((key, _)) => store(addr, key, Value::Float(args[1].as_float())),
        None => Value::Nil,
    }),
    method!("get_param"(Int) -> Float = 2928790850, |addr, args| match cone_twist_param(args[0].as_int()) {
        Some((key, default)) => prop_or(addr, key, Value::Float(default)),
        None => Value::Float(0.0),
    }),
];

const RAY_CAST_3D: &[MethodInfo] = &[
    setter!("set_enabled"(Bool) = 2586408642, "enabled"),
    getter!("is_enabled" -> Bool = 36873697, "enabled", Value::Bool(true)),
    setter!("set_target_position"(Vector3) = 3460891852, "target_position"),
    getter!("get_target_position" -> Vector3 = 3360562783, "target_position", Value::Vector3([0.0, -1.0, 0.0])),
    method!("force_raycast_update"() -> Nil = 3218959716, |addr, _| {
        update_raycast(addr);
        Value::Nil
    }),
    getter!("is_colliding" -> Bool = 36873697, "colliding", Value::Bool(false)),
    getter!("get_collision_point" -> Vector3 = 3360562783, "collision_point", Value::Vector3([0.0; 3])),
    getter!("get_collision_normal" -> Vector3 = 3360562783, "collision_normal", Value::Vector3([0.0; 3])),
];

/// Casts the ray against the ground plane `y = 0`, the only collider in the mock world.
fn update_raycast(addr: usize) {
    let from = prop_or(addr, "position", Value::Vector3([0.0; 3])).as_vector3();
    let target = prop_or(addr, "target_position", Value::Vector3([0.0, -1.0, 0.0])).as_vector3();
    let to = [from[0] + target[0], from[1] + target[1], from[2] + target[2]];

    let crosses = (from[1] > 0.0 && to[1] <= 0.0) || (from[1] < 0.0 && to[1] >= 0.0);
    if !crosses {
        store(addr, "colliding", Value::Bool(false));
        store(addr, "collision_point", Value::Vector3([0.0; 3]));
        store(addr, "collision_normal", Value::Vector3([0.0; 3]));
        return;
    }

    let t = from[1] / (from[1] - to[1]);
    let point = [from[0] + target[0] * t, 0.0, from[2] + target[2] * t];
    let normal = [0.0, from[1].signum(), 0.0];

    store(addr, "colliding", Value::Bool(true));
    store(addr, "collision_point", Value::Vector3(point));
    store(addr, "collision_normal", Value::Vector3(normal));
}

/// Physics step: refreshes all enabled raycasts.
pub(crate) fn physics_frame() {
    for addr in objects::instances_of("RayCast3D") {
        if prop_or(addr, "enabled", Value::Bool(true)).as_bool() {
            update_raycast(addr);
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// XMLParser

fn with_xml<R>(addr: usize, f: impl FnOnce(&mut crate::xml::XmlReader) -> R) -> Option<R> {
    objects::with_object(addr, |obj| f(obj.xml()))
}

fn xml_string(addr: usize, f: impl FnOnce(&mut crate::xml::XmlReader) -> String) -> Value {
    Value::String(with_xml(addr, f).unwrap_or_default())
}

fn attribute(addr: usize, index: i64, name_or_value: fn(&crate::xml::XmlReader, usize) -> Option<String>) -> Value {
    let (found, count) = with_xml(addr, |xml| {
        let found = usize::try_from(index).ok().and_then(|i| name_or_value(xml, i));
        (found, xml.attribute_count())
    })
    .unwrap_or((None, 0));

    match found {
        Some(text) => Value::String(text),
        None => {
            report_error(format!("Index p_idx = {index} is out of bounds (attributes.size() = {count})."));
            Value::String(String::new())
        }
    }
}

fn open_file(addr: usize, path: &str) -> i64 {
    match std::fs::read(path) {
        Ok(bytes) => open_bytes(addr, bytes),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => ERR_FILE_NOT_FOUND,
        Err(_) => ERR_FILE_CANT_OPEN,
    }
}

fn open_bytes(addr: usize, bytes: Vec<u8>) -> i64 {
    if bytes.is_empty() {
        report_error("Condition \"p_buffer.size() == 0\" is true. Returning: ERR_INVALID_DATA");
        return ERR_INVALID_DATA;
    }

    with_xml(addr, |xml| xml.open(bytes)).map_or(ERR_INVALID_PARAMETER, |()| OK)
}

const XML_PARSER: &[MethodInfo] = &[
    method!("read"() -> Int = 166280745, |addr, _| Value::Int(with_xml(addr, |xml| xml.read()).unwrap_or(ERR_INVALID_PARAMETER))),
    method!("get_node_type"() -> Int = 2984359541, |addr, _| Value::Int(with_xml(addr, |xml| xml.node_type()).unwrap_or(0))),
    method!("get_node_name"() -> String = 201670096, |addr, _| xml_string(addr, |xml| xml.node_name().to_string())),
    method!("get_node_data"() -> String = 201670096, |addr, _| xml_string(addr, |xml| xml.node_data().to_string())),
    method!("get_node_offset"() -> Int = 3905245786, |addr, _| Value::Int(with_xml(addr, |xml| xml.node_offset()).unwrap_or(0))),
    method!("get_attribute_count"() -> Int = 3905245786, |addr, _| {
        Value::Int(with_xml(addr, |xml| xml.attribute_count()).unwrap_or(0) as i64)
    }),
    method!("get_attribute_name"(Int) -> String = 844755477, |addr, args| {
        attribute(addr, args[0].as_int(), |xml, i| xml.attribute_name(i).map(str::to_string))
    }),
    method!("get_attribute_value"(Int) -> String = 844755477, |addr, args| {
        attribute(addr, args[0].as_int(), |xml, i| xml.attribute_value(i).map(str::to_string))
    }),
    method!("has_attribute"(String) -> Bool = 3927539163, |addr, args| {
        Value::Bool(with_xml(addr, |xml| xml.has_attribute(args[0].as_str())).unwrap_or(false))
    }),
    method!("get_named_attribute_value_safe"(String) -> String = 3135753539, |addr, args| {
        xml_string(addr, |xml| xml.named_attribute_value(args[0].as_str()).unwrap_or_default().to_string())
    }),
    method!("is_empty"() -> Bool = 36873697, |addr, _| Value::Bool(with_xml(addr, |xml| xml.is_empty()).unwrap_or(false))),
    method!("get_current_line"() -> Int = 3905245786, |addr, _| Value::Int(with_xml(addr, |xml| xml.current_line()).unwrap_or(0))),
    method!("skip_section"() -> Nil = 3218959716, |addr, _| {
        with_xml(addr, |xml| xml.skip_section());
        Value::Nil
    }),
    method!("open"(String) -> Int = 166001499, |addr, args| Value::Int(open_file(addr, args[0].as_str()))),
    method!("open_buffer"(PackedByteArray) -> Int = 680677267, |addr, args| {
        let bytes = match &args[0] {
            Value::PackedByteArray(data) => data.borrow().clone(),
            _ => Vec::new(),
        };
        Value::Int(open_bytes(addr, bytes))
    }),
];

/// `xml_parser_open_buffer`: opens a buffer that stays owned by the caller.
pub(crate) unsafe extern "C" fn xml_parser_open_buffer(
    p_instance: sys::GDExtensionObjectPtr,
    p_buffer: *const u8,
    p_size: usize,
) -> sys::GDExtensionInt {
    let addr = p_instance as usize;
    if !objects::inherits(addr, "XMLParser") {
        report_error("Parameter \"p_instance\" is not an XMLParser.");
        return ERR_INVALID_PARAMETER;
    }

    let bytes = if p_buffer.is_null() || p_size == 0 {
        Vec::new()
    } else {
        std::slice::from_raw_parts(p_buffer, p_size).to_vec()
    };

    open_bytes(addr, bytes)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Text

const TEXT_LINE: &[MethodInfo] = &[
    method!("clear"() -> Nil = 3218959716, |addr, _| {
        store(addr, "line_width", Value::Float(0.0));
        store(addr, "line_height", Value::Float(0.0))
    }),
    method!("add_string"(String, Object, Int, String, Variant) -> Bool = 621426851, |addr, args| {
        let font = args[1].object_addr();
        if !objects::inherits(font, "Font") {
            report_error("Parameter \"p_font\" is null.");
            return Value::Bool(false);
        }

        let size = args[2].as_int() as f64;
        let advance = args[0].as_str().chars().count() as f64 * size * 0.5;

        let width = prop_or(addr, "line_width", Value::Float(0.0)).as_float();
        let height = prop_or(addr, "line_height", Value::Float(0.0)).as_float();
        store(addr, "line_width", Value::Float(width + advance));
        store(addr, "line_height", Value::Float(height.max(size)));
        Value::Bool(true)
    }),
    setter!("set_width"(Float) = 373806689, "width"),
    getter!("get_width" -> Float = 1740695150, "width", Value::Float(-1.0)),
    setter!("set_horizontal_alignment"(Int) = 2312603777, "horizontal_alignment"),
    getter!("get_horizontal_alignment" -> Int = 341400642, "horizontal_alignment", Value::Int(0)),
    method!("get_size"() -> Vector2 = 3341600327, |addr, _| {
        let width = prop_or(addr, "line_width", Value::Float(0.0)).as_float();
        let height = prop_or(addr, "line_height", Value::Float(0.0)).as_float();
        Value::Vector2([width as f32, height as f32])
    }),
    getter!("get_line_width" -> Float = 1740695150, "line_width", Value::Float(0.0)),
];

/// Metrics of the mock font: ascent and descent split the height 4:1.
const FONT: &[MethodInfo] = &[
    method!("get_height"(Int) -> Float = 378113874, |_, args| Value::Float(args[0].as_int() as f64)),
    method!("get_ascent"(Int) -> Float = 378113874, |_, args| Value::Float(args[0].as_int() as f64 * 0.8)),
    method!("get_descent"(Int) -> Float = 378113874, |_, args| Value::Float(args[0].as_int() as f64 * 0.2)),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Shapes

const SHAPE_2D: &[MethodInfo] = &[
    setter!("set_custom_solver_bias"(Float) = 373806689, "custom_solver_bias"),
    getter!("get_custom_solver_bias" -> Float = 1740695150, "custom_solver_bias", Value::Float(0.0)),
];

const CIRCLE_SHAPE_2D: &[MethodInfo] = &[
    setter!("set_radius"(Float) = 373806689, "radius"),
    getter!("get_radius" -> Float = 1740695150, "radius", Value::Float(10.0)),
];

const RECTANGLE_SHAPE_2D: &[MethodInfo] = &[
    setter!("set_size"(Vector2) = 743155724, "size"),
    getter!("get_size" -> Vector2 = 3341600327, "size", Value::Vector2([20.0, 20.0])),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Shaders

/// Ordinal of `Shader.Mode` declared by `shader_type <mode>;`, spatial if absent.
fn parse_shader_mode(code: &str) -> i64 {
    let declared = code
        .split_once("shader_type")
        .and_then(|(_, rest)| rest.split(';').next())
        .map(str::trim);

    match declared {
        Some("canvas_item") => 1,
        Some("particles") => 2,
        Some("sky") => 3,
        Some("fog") => 4,
        _ => 0,
    }
}

const SHADER: &[MethodInfo] = &[
    setter!("set_code"(String) = 83702148, "code"),
    getter!("get_code" -> String = 201670096, "code", Value::String(String::new())),
    method!("get_mode"() -> Int = 3392948163, |addr, _| match objects::prop(addr, "mode") {
        Some(mode) => mode,
        None => Value::Int(parse_shader_mode(prop_or(addr, "code", Value::Nil).as_str())),
    }),
];

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn has_varying(addr: usize, name: &str) -> bool {
    objects::with_object(addr, |obj| obj.varyings.iter().any(|varying| varying.name == name)).unwrap_or(false)
}

const VISUAL_SHADER: &[MethodInfo] = &[
    setter!("set_mode"(Int) = 3978014962, "mode"),
    method!("add_varying"(String, Int, Int) -> Nil = 2084110726, |addr, args| {
        let name = args[0].as_str();
        if !is_valid_identifier(name) {
            report_error(format!("Invalid varying name '{name}'."));
        } else if has_varying(addr, name) {
            report_error(format!("Varying '{name}' already exists."));
        } else {
            let varying = Varying {
                name: name.to_string(),
                mode: args[1].as_int(),
                type_: args[2].as_int(),
            };
            objects::with_object(addr, |obj| obj.varyings.push(varying));
        }
        Value::Nil
    }),
    method!("remove_varying"(String) -> Nil = 83702148, |addr, args| {
        let name = args[0].as_str();
        if has_varying(addr, name) {
            objects::with_object(addr, |obj| obj.varyings.retain(|varying| varying.name != name));
        } else {
            report_error(format!("Varying '{name}' does not exist."));
        }
        Value::Nil
    }),
    method!("has_varying"(String) -> Bool = 3927539163, |addr, args| Value::Bool(has_varying(addr, args[0].as_str()))),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Engine

fn version_info() -> Value {
    let version = interface::version();
    let text = if version.patch == 0 {
        format!("{}.{}-stable (mock)", version.major, version.minor)
    } else {
        format!("{}.{}.{}-stable (mock)", version.major, version.minor, version.patch)
    };

    let entry = |key: &str, value: Value| (Value::String(key.to_string()), value);
    Value::new_dictionary(vec![
        entry("major", Value::Int(i64::from(version.major))),
        entry("minor", Value::Int(i64::from(version.minor))),
        entry("patch", Value::Int(i64::from(version.patch))),
        entry("hex", Value::Int(version.hex())),
        entry("status", Value::String("stable".to_string())),
        entry("build", Value::String("mock".to_string())),
        entry("string", Value::String(text)),
    ])
}

const ENGINE: &[MethodInfo] = &[
    method!("get_frames_drawn"() -> Int = 2455072627, |_, _| Value::Int(objects::frames_drawn())),
    setter!("set_time_scale"(Float) = 373806689, "time_scale"),
    getter!("get_time_scale" -> Float = 191475506, "time_scale", Value::Float(1.0)),
    setter!("set_physics_ticks_per_second"(Int) = 1286410249, "physics_ticks_per_second"),
    getter!("get_physics_ticks_per_second" -> Int = 3905245786, "physics_ticks_per_second", Value::Int(60)),
    getter!("is_editor_hint" -> Bool = 36873697, "editor_hint", Value::Bool(false)),
    method!("get_version_info"() -> Dictionary = 3102165223, |_, _| version_info()),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
