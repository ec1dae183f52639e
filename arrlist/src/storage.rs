// arrlist - arrlist
// Module: Slot Storage
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Owned, explicitly sized backing region for [`crate::ArrayList`].
//!
//! `Slots` knows nothing about the logical length; callers pass it in. The
//! list maintains the invariant that slots `[0, len)` are occupied and slots
//! `[len, capacity)` are empty.

use alloc::{boxed::Box, vec::Vec};

/// Fixed-size region of optionally occupied slots.
#[derive(Debug)]
pub(crate) struct Slots<T> {
    slots: Box<[Option<T>]>,
}

impl<T> Slots<T> {
    /// `capacity` empty slots.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { slots: (0..capacity).map(|_| None).collect() }
    }

    /// Exactly `items.len()` occupied slots, in order.
    pub(crate) fn from_vec(items: Vec<T>) -> Self {
        Self { slots: items.into_iter().map(Some).collect() }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Stores `value` at `index`, returning the previous occupant.
    ///
    /// `index` must be below `capacity()`; the caller validates it.
    #[inline]
    pub(crate) fn put(&mut self, index: usize, value: T) -> Option<T> {
        self.slots.get_mut(index).and_then(|slot| slot.replace(value))
    }

    /// Empties the slot at `index`.
    #[inline]
    pub(crate) fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Replaces the region with one of `new_capacity` slots, moving the first
    /// `len` occupants across in order.
    pub(crate) fn grow_to(&mut self, new_capacity: usize, len: usize) {
        debug_assert!(new_capacity >= len);
        let mut grown = Self::with_capacity(new_capacity);
        for (dst, src) in grown.slots.iter_mut().zip(self.slots.iter_mut().take(len)) {
            *dst = src.take();
        }
        *self = grown;
    }

    /// Moves the occupants of `[from, len)` one slot right, leaving `from`
    /// empty. Requires `len < capacity()`.
    pub(crate) fn shift_right(&mut self, from: usize, len: usize) {
        if let Some(window) = self.slots.get_mut(from..=len) {
            // Slot `len` is empty, so rotating moves it to the front.
            window.rotate_right(1);
        }
    }

    /// Moves the occupants of `(from, len)` one slot left. Slot `from` must
    /// already be empty; it ends up at `len - 1`.
    pub(crate) fn shift_left(&mut self, from: usize, len: usize) {
        if let Some(window) = self.slots.get_mut(from..len) {
            window.rotate_left(1);
        }
    }

    #[inline]
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    /// Occupants of `[0, len)` in order.
    pub(crate) fn iter(&self, len: usize) -> impl Iterator<Item = &T> {
        self.slots.iter().take(len).filter_map(Option::as_ref)
    }
}
