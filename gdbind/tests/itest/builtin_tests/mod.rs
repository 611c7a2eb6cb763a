/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::framework::TestCase;

mod array_test;
mod convert_test;
mod dictionary_test;
mod packed_byte_array_test;
#[cfg(feature = "serde")]
mod serde_test;
mod string_test;
mod variant_test;

#[cfg(feature = "serde")]
const SERDE_TESTS: &[TestCase] = serde_test::TESTS;
#[cfg(not(feature = "serde"))]
const SERDE_TESTS: &[TestCase] = &[];

pub(crate) const TESTS: &[&[TestCase]] = &[
    variant_test::TESTS,
    string_test::TESTS,
    array_test::TESTS,
    dictionary_test::TESTS,
    packed_byte_array_test::TESTS,
    convert_test::TESTS,
    SERDE_TESTS,
];
