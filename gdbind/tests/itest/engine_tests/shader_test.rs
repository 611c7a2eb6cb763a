/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::builtin::GString;
use gdbind::classes::shader::Mode;
use gdbind::classes::visual_shader::{VaryingMode, VaryingType};
use gdbind::classes::{Shader, VisualShader};
use gdbind::obj::{EngineEnum, Gd, NewGd};

use crate::framework::expect_engine_error;

fn shader_with(code: &str) -> Gd<Shader> {
    let mut shader = Shader::new_gd();
    shader.set_code(code.into());
    shader
}

fn shader_code_roundtrip() {
    let code = "shader_type spatial;\nvoid fragment() { ALBEDO = vec3(1.0); }";
    let shader = shader_with(code);

    assert_eq!(shader.get_code(), GString::from(code));
}

fn shader_mode_from_code() {
    assert_eq!(Shader::new_gd().get_mode(), Mode::SPATIAL);
    assert_eq!(shader_with("shader_type canvas_item;").get_mode(), Mode::CANVAS_ITEM);
    assert_eq!(shader_with("shader_type particles;\n").get_mode(), Mode::PARTICLES);
    assert_eq!(shader_with("// sky\nshader_type  sky ;").get_mode(), Mode::SKY);
    assert_eq!(shader_with("shader_type fog;").get_mode(), Mode::FOG);
    assert_eq!(shader_with("shader_type unknown;").get_mode(), Mode::SPATIAL);
}

fn shader_mode_enum() {
    assert_eq!(Mode::values().len(), 5);
    assert_eq!(Mode::CANVAS_ITEM.ord(), 1);
    assert_eq!(Mode::try_from_ord(3), Some(Mode::SKY));
    assert_eq!(Mode::try_from_ord(5), None);
}

fn visual_shader_mode() {
    let mut shader = VisualShader::new_gd();
    shader.set_mode(Mode::PARTICLES);

    assert_eq!(shader.get_mode(), Mode::PARTICLES);
    assert_eq!(shader.clone().upcast::<Shader>().get_mode(), Mode::PARTICLES);
}

fn visual_shader_varyings() {
    let mut shader = VisualShader::new_gd();
    assert!(!shader.has_varying("tint".into()));

    shader.add_varying("tint".into(), VaryingMode::VERTEX_TO_FRAG_LIGHT, VaryingType::VECTOR_3D);
    shader.add_varying("_depth".into(), VaryingMode::FRAG_TO_LIGHT, VaryingType::FLOAT);
    assert!(shader.has_varying("tint".into()));
    assert!(shader.has_varying("_depth".into()));

    shader.remove_varying("tint".into());
    assert!(!shader.has_varying("tint".into()));
    assert!(shader.has_varying("_depth".into()));
}

fn visual_shader_varying_errors() {
    let mut shader = VisualShader::new_gd();
    shader.add_varying("uv2".into(), VaryingMode::VERTEX_TO_FRAG_LIGHT, VaryingType::VECTOR_2D);

    let (_, errors) = expect_engine_error("invalid name", || {
        shader.add_varying("1st".into(), VaryingMode::VERTEX_TO_FRAG_LIGHT, VaryingType::INT)
    });
    assert_eq!(errors, ["Invalid varying name '1st'."]);

    let (_, errors) = expect_engine_error("duplicate", || {
        shader.add_varying("uv2".into(), VaryingMode::FRAG_TO_LIGHT, VaryingType::FLOAT)
    });
    assert_eq!(errors, ["Varying 'uv2' already exists."]);

    let (_, errors) = expect_engine_error("missing", || shader.remove_varying("nope".into()));
    assert_eq!(errors, ["Varying 'nope' does not exist."]);

    assert!(!shader.has_varying("1st".into()));
    assert!(shader.has_varying("uv2".into()));
}

itests![
    shader_code_roundtrip,
    shader_mode_from_code,
    shader_mode_enum,
    visual_shader_mode,
    visual_shader_varyings,
    visual_shader_varying_errors,
];
