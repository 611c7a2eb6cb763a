/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Process-wide mutable state with lazy initialization.
///
/// Usable in `static` items thanks to the `const` constructors. The value is created on first [`lock()`](Self::lock), and
/// every access goes through the mutex, so concurrent initialization from several threads is impossible.
///
/// A panic while the lock is held does not make the global unusable; the next `lock()` continues with the stored value.
pub struct Global<T> {
    value: Mutex<Option<T>>,
    init_fn: fn() -> T,
}

impl<T> Global<T> {
    /// Creates the global with a lazy initialization function.
    pub const fn new(init_fn: fn() -> T) -> Self {
        Self {
            value: Mutex::new(None),
            init_fn,
        }
    }

    /// Creates the global with `T::default()` as initialization function.
    pub const fn default() -> Self
    where
        T: Default,
    {
        Self::new(T::default)
    }

    /// Locks the global, initializing it if this is the first access.
    pub fn lock(&self) -> GlobalGuard<'_, T> {
        let mut guard = self.value.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.is_none() {
            *guard = Some((self.init_fn)());
        }

        GlobalGuard { guard }
    }

    /// Whether [`lock()`](Self::lock) has been called at least once.
    pub fn is_initialized(&self) -> bool {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

/// Guard that gives access to the value of a [`Global<T>`].
pub struct GlobalGuard<'a, T> {
    guard: MutexGuard<'a, Option<T>>,
}

impl<T> Deref for GlobalGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.guard.as_ref() {
            Some(value) => value,
            None => unreachable!("Global<T> accessed before initialization"),
        }
    }
}

impl<T> DerefMut for GlobalGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        match self.guard.as_mut() {
            Some(value) => value,
            None => unreachable!("Global<T> accessed before initialization"),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
