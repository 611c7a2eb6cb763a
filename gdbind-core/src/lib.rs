/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # Internal crate of [**gdbind**](https://docs.rs/gdbind)
//!
//! Do not depend on this crate directly, instead use the `gdbind` crate.
//! No SemVer or other guarantees are provided.

pub mod builtin;
pub mod classes;
pub mod global;
pub mod init;
pub mod meta;
pub mod obj;
pub mod registry;

#[doc(hidden)]
pub mod private;

pub use gdbind_ffi as sys;

// Internal tracing, enabled with the `trace` feature.
#[doc(hidden)]
pub use gdbind_ffi::out;
