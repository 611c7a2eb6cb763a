/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Types and traits related to objects.
//!
//! The most important symbol in this module is [`Gd`], which is the smart pointer used to hold engine objects.

mod gd;
mod instance_id;
mod raw_gd;
mod traits;

pub mod bounds;

pub use bounds::private::Bounds;
pub use gd::Gd;
pub use instance_id::InstanceId;
pub use traits::{EngineClass, EngineEnum, GodotClass, Inherits, NewAlloc, NewGd, NoBase, Singleton};

#[doc(hidden)]
pub use raw_gd::RawGd;
