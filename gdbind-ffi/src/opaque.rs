/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Stores an opaque engine value of `N` bytes, with very restricted operations.
///
/// Only the engine reads and writes the bytes. Rust code moves the storage around, and hands out pointers to it.
///
/// Due to `align(8)` on 64-bit targets, this type may be bigger than `N` bytes, which is fine since the engine only
/// touches the first `N`.
#[cfg_attr(target_pointer_width = "32", repr(C, align(4)))]
#[cfg_attr(target_pointer_width = "64", repr(C, align(8)))]
#[derive(Copy, Clone)]
pub struct Opaque<const N: usize> {
    storage: [u8; N],
    marker: std::marker::PhantomData<*const u8>, // disable Send/Sync
}

impl<const N: usize> Opaque<N> {
    /// All-zero storage. Not a valid engine value by itself; only used as placeholder or for nil-like states.
    pub const fn zeroed() -> Self {
        Self {
            storage: [0; N],
            marker: std::marker::PhantomData,
        }
    }

    pub fn is_zeroed(&self) -> bool {
        self.storage.iter().all(|&b| b == 0)
    }
}

impl<const N: usize> std::fmt::Debug for Opaque<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Opaque<{N}>(")?;
        for byte in self.storage.iter() {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}
