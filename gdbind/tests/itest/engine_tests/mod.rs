/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::framework::TestCase;

mod engine_enum_test;
mod node_2d_test;
mod node_3d_test;
mod node_test;
mod resource_test;
mod shader_test;
mod utilities_test;
mod xml_parser_test;

pub(crate) const TESTS: &[&[TestCase]] = &[
    node_test::TESTS,
    node_2d_test::TESTS,
    node_3d_test::TESTS,
    resource_test::TESTS,
    shader_test::TESTS,
    xml_parser_test::TESTS,
    utilities_test::TESTS,
    engine_enum_test::TESTS,
];
